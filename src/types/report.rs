// src/types/report.rs

use serde::{Deserialize, Serialize};

/// Outcome of scoring one CV against one JD. Hit/missing lists are sorted
/// and duplicate-free so two identical inputs produce byte-identical JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub score: u32,
    pub required_hit: Vec<String>,
    pub required_missing: Vec<String>,
    pub keywords_hit: Vec<String>,
    pub red_flags_missing: Vec<String>,
}
