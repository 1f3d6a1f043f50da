// src/matching/signals.rs
//! Signal-term recovery from project bullet text.
//!
//! Skills lists are often incomplete; narrative bullets ("cut p99 latency",
//! "built an event-driven pipeline") still carry competency signals. Only
//! phrases in the fixed vocabulary below are detectable.

use super::canon::normalize_term;
use crate::types::CvRecord;
use std::collections::HashSet;

static BULLET_PHRASES: &[&str] = &[
    "event-driven",
    "queue",
    "throughput",
    "latency",
    "data structures",
    "algorithms",
    "software design",
    "networking",
    "tcp/ip",
    "dns",
    "operating systems",
    "linux",
    "unix",
    "hdfs",
    "hive",
    "mapreduce",
    "hadoop",
    "machine learning",
    "classification",
    "feature scaling",
];

/// Scan every project bullet for known phrases (case-insensitive substring
/// match) and return their normalized forms.
pub fn extract_signal_terms(cv: &CvRecord) -> HashSet<String> {
    let mut found = HashSet::new();
    for project in &cv.projects {
        for bullet in &project.bullets {
            let lowered = bullet.to_lowercase();
            for phrase in BULLET_PHRASES {
                if lowered.contains(phrase) {
                    found.insert(normalize_term(phrase));
                }
            }
        }
    }
    found
}
