// src/matching/canon.rs
//! Term normalization and the canonical-form table.
//!
//! Both sides of a comparison go through the same funnel: lowercase, strip
//! punctuation (keeping `+`, `-`, `/` so tokens like "c++" and "linux/unix"
//! survive), collapse whitespace, then collapse known spelling variants to a
//! single canonical surface form.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Surface variant -> canonical form. Every value is itself a fixed point of
/// the table, so a second lookup never moves a term again.
static CANON_PAIRS: &[(&str, &str)] = &[
    // algorithms variants
    ("algo", "algorithms"),
    ("algorithm", "algorithms"),
    ("algorithms", "algorithms"),
    // real-time variants
    ("real time", "real-time"),
    ("real-time", "real-time"),
    ("real time systems", "real-time systems"),
    ("real-time systems", "real-time systems"),
    // multithreading variants
    ("multithreaded", "multithreading"),
    ("multi-threaded", "multithreading"),
    ("multi threaded", "multithreading"),
    ("multithreaded programming", "multithreading"),
    ("multi-threaded programming", "multithreading"),
    ("multi threaded programming", "multithreading"),
    ("multithreading", "multithreading"),
    ("threading", "multithreading"),
    ("concurrency", "multithreading"),
    // linux variants
    ("linux/unix environments", "linux/unix"),
    ("linux unix environments", "linux/unix"),
    ("linux environments", "linux/unix"),
    ("linux/unix", "linux/unix"),
    ("unix", "linux/unix"),
    ("posix", "linux/unix"),
    ("linux", "linux/unix"),
    ("linux unix", "linux/unix"),
    // latency variants
    ("ultra low latency", "ultra-low-latency"),
    ("ultra-low-latency", "ultra-low-latency"),
    ("low latency", "low-latency"),
    ("minimal latency", "low-latency"),
    ("low-latency", "low-latency"),
    // throughput variants
    ("high throughput", "high-throughput"),
    ("high-throughput", "high-throughput"),
    // scale variants
    ("large scale", "massive scale"),
    ("extreme scale", "massive scale"),
    ("massive scale", "massive scale"),
    ("big data", "massive scale"),
];

static CANON: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CANON_PAIRS.iter().copied().collect());

/// Normalize a raw term to its canonical comparable form.
///
/// Idempotent: normalizing an already-normalized term yields the same term.
pub fn normalize_term(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '-' | '/' | ' ') {
            cleaned.push(c);
        }
    }
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    match CANON.get(collapsed.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => collapsed,
    }
}
