// src/matching/synonyms.rs
//! Bidirectional synonym expansion.
//!
//! JD and CV authors rarely use the same wording ("concurrency" vs
//! "multi-threaded"), so every term set is widened through a fixed
//! base -> aliases table before comparison. Expansion is exactly one round
//! of two ordered passes, not a transitive closure; the table is an ordered
//! slice because the passes mutate the working set while iterating it.

use super::canon::normalize_term;
use std::collections::HashSet;

/// Canonical base term -> alternate phrasings treated as equivalent.
static SYNONYMS: &[(&str, &[&str])] = &[
    (
        "multithreading",
        &[
            "multi-threaded",
            "multi threaded",
            "multithreaded",
            "threading",
            "concurrency",
            "multi-threaded programming",
        ],
    ),
    (
        "linux/unix",
        &[
            "linux",
            "unix",
            "posix",
            "linux environments",
            "linux/unix environments",
        ],
    ),
    (
        "data structures",
        &[
            "data structures and algorithms",
            "data structures & algorithms",
            "dsa",
        ],
    ),
    ("algorithms", &["algorithm", "algo"]),
    (
        "real-time systems",
        &["real time systems", "real-time", "real time"],
    ),
    (
        "ultra-low-latency",
        &["ultra low latency", "low latency", "minimal latency", "low-latency"],
    ),
    ("high-throughput", &["high throughput", "throughput"]),
    (
        "massive scale",
        &["large scale", "extreme scale", "big data", "hdfs", "mapreduce"],
    ),
    (
        "performance tuning",
        &["profiling", "benchmarking", "optimization", "optimisation"],
    ),
    (
        "market data",
        &["real-time market data", "tick data", "market feed"],
    ),
];

/// If a base term is present, add all of its aliases.
pub fn expand_aliases_if_base_present(terms: &HashSet<String>) -> HashSet<String> {
    let mut expanded = terms.clone();
    for (base, aliases) in SYNONYMS {
        if expanded.contains(&normalize_term(base)) {
            for alias in *aliases {
                expanded.insert(normalize_term(alias));
            }
        }
    }
    expanded
}

/// If any alias is present, add the base term.
pub fn add_base_if_alias_present(terms: &HashSet<String>) -> HashSet<String> {
    let mut expanded = terms.clone();
    for (base, aliases) in SYNONYMS {
        if aliases.iter().any(|alias| expanded.contains(&normalize_term(alias))) {
            expanded.insert(normalize_term(base));
        }
    }
    expanded
}

/// The full expansion sequence applied to every term set before comparison:
/// base -> aliases first, then alias -> base. Keep these as two discrete
/// passes in this order; collapsing them changes behavior for chained groups.
pub fn expand_term_set(terms: &HashSet<String>) -> HashSet<String> {
    add_base_if_alias_present(&expand_aliases_if_base_present(terms))
}
