// src/matching/mod.rs
//! Synonym-aware term matching between JD and CV records.

pub mod canon;
pub mod scorer;
pub mod signals;
pub mod synonyms;
pub mod weights;

pub use canon::normalize_term;
pub use scorer::score_match;
pub use weights::{MatchWeights, DEFAULT_WEIGHTS};
