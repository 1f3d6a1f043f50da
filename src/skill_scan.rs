// src/skill_scan.rs
//! Lightweight skill extraction from raw CV text.
//!
//! Upstream extraction tends to miss short punctuated tokens like "C++".
//! This pass runs cheap pattern checks over the full text and returns
//! display-form skill names ready to merge into a skills list.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static WORD_SKILLS: &[(&str, &str)] = &[
    (r"\bpython\b", "Python"),
    (r"\bjava\b", "Java"),
    (r"\brust\b", "Rust"),
    (r"\bhadoop\b", "Hadoop"),
    (r"\bhive\b", "Hive"),
    (r"\bmapreduce\b", "MapReduce"),
];

static WORD_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    WORD_SKILLS
        .iter()
        .map(|(pattern, name)| (Regex::new(pattern).expect("valid skill pattern"), *name))
        .collect()
});

static LINUX_UNIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\blinux\b|\bunix\b").expect("valid skill pattern"));

/// Extract likely skill tokens from raw CV text. Returns a sorted,
/// duplicate-free list.
pub fn extract_skills_from_text(cv_text: &str) -> Vec<String> {
    let lowered = cv_text.to_lowercase();
    let mut skills = BTreeSet::new();

    // "c++" has no word boundary after the plus signs, substring check is
    // the reliable test.
    if lowered.contains("c++") {
        skills.insert("C++".to_string());
    }

    for (pattern, name) in WORD_PATTERNS.iter() {
        if pattern.is_match(&lowered) {
            skills.insert((*name).to_string());
        }
    }

    if LINUX_UNIX.is_match(&lowered) {
        skills.insert("Linux/Unix".to_string());
    }

    skills.into_iter().collect()
}
