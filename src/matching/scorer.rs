// src/matching/scorer.rs
//! Weighted set-matching between a JD record and a CV record.

use super::canon::normalize_term;
use super::signals::extract_signal_terms;
use super::synonyms::expand_term_set;
use super::weights::MatchWeights;
use crate::types::{CvRecord, JdRecord, MatchReport};
use std::collections::{BTreeSet, HashSet};

/// Normalize a list of raw strings into a term set. Entries that normalize
/// to nothing (blank or punctuation-only) are dropped.
fn term_set<'a, I>(items: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    items
        .into_iter()
        .map(|raw| normalize_term(raw))
        .filter(|term| !term.is_empty())
        .collect()
}

/// Hit ratio for one JD category. An empty category is untestable and
/// contributes 0 rather than penalizing or inflating the score.
fn ratio(hit: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hit as f64 / total as f64
    }
}

fn sorted_unique<'a, I>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    terms
        .into_iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Score how well a CV aligns with a JD.
///
/// All five term sets (four JD categories plus the unified CV set) go
/// through the same normalize-then-expand funnel, so an alias on either
/// side is enough for a match via the shared base. Deterministic: identical
/// inputs always produce an identical report.
pub fn score_match(jd: &JdRecord, cv: &CvRecord, weights: &MatchWeights) -> MatchReport {
    let required = expand_term_set(&term_set(&jd.required_skills));
    let preferred = expand_term_set(&term_set(&jd.preferred_skills));
    let keywords = expand_term_set(&term_set(&jd.key_keywords));
    let red_flags = expand_term_set(&term_set(&jd.red_flags));

    // CV terms: explicit skills + coursework + project technologies +
    // signal terms recovered from bullet text.
    let mut cv_all = term_set(&cv.skills);
    cv_all.extend(term_set(&cv.coursework));
    cv_all.extend(term_set(cv.projects.iter().flat_map(|p| &p.technologies)));
    cv_all.extend(extract_signal_terms(cv));
    let cv_all = expand_term_set(&cv_all);

    let required_hit: HashSet<&String> = required.intersection(&cv_all).collect();
    let preferred_hit: HashSet<&String> = preferred.intersection(&cv_all).collect();
    let keywords_hit: HashSet<&String> = keywords.intersection(&cv_all).collect();
    // Presence of a red-flag term in the CV counts as a positive hit: the
    // candidate addresses the flagged topic rather than leaving it open.
    let red_flags_hit: HashSet<&String> = red_flags.intersection(&cv_all).collect();

    let required_missing: HashSet<&String> = required.difference(&cv_all).collect();
    let red_flags_missing: HashSet<&String> = red_flags.difference(&cv_all).collect();

    let mut score = 0.0;
    score += weights.required * ratio(required_hit.len(), required.len());
    score += weights.preferred * ratio(preferred_hit.len(), preferred.len());
    score += weights.keywords * ratio(keywords_hit.len(), keywords.len());
    score += weights.red_flags * ratio(red_flags_hit.len(), red_flags.len());

    MatchReport {
        score: score.min(100.0).round() as u32,
        required_hit: sorted_unique(required_hit.into_iter()),
        required_missing: sorted_unique(required_missing.into_iter()),
        keywords_hit: sorted_unique(keywords_hit.into_iter()),
        red_flags_missing: sorted_unique(red_flags_missing.into_iter()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CvProject;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn jd(required: &[&str], preferred: &[&str], keywords: &[&str], red_flags: &[&str]) -> JdRecord {
        JdRecord {
            required_skills: strings(required),
            preferred_skills: strings(preferred),
            key_keywords: strings(keywords),
            red_flags: strings(red_flags),
            ..Default::default()
        }
    }

    fn cv_with_skills(skills: &[&str]) -> CvRecord {
        CvRecord {
            skills: strings(skills),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_categories_empty_scores_zero() {
        let report = score_match(&JdRecord::default(), &CvRecord::default(), &MatchWeights::default());
        assert_eq!(report.score, 0);
        assert!(report.required_hit.is_empty());
        assert!(report.required_missing.is_empty());
        assert!(report.keywords_hit.is_empty());
        assert!(report.red_flags_missing.is_empty());
    }

    #[test]
    fn test_full_match_uses_the_whole_scale() {
        let jd = jd(&["Rust"], &["Go"], &["API"], &["relocation"]);
        let cv = cv_with_skills(&["rust", "go", "api", "relocation"]);
        let report = score_match(&jd, &cv, &MatchWeights::default());
        assert_eq!(report.score, 100);
        assert!(report.required_missing.is_empty());
        assert!(report.red_flags_missing.is_empty());
    }

    #[test]
    fn test_empty_required_category_is_neutral() {
        let jd = jd(&[], &["Python"], &[], &[]);
        let cv = cv_with_skills(&["python"]);
        let report = score_match(&jd, &cv, &MatchWeights::default());
        assert_eq!(report.score, 15);
    }

    #[test]
    fn test_bullet_signal_recovers_partial_requirement() {
        let jd = jd(&["C++", "Multithreading"], &[], &[], &[]);
        let cv = CvRecord {
            skills: strings(&["c++"]),
            projects: vec![CvProject {
                technologies: vec![],
                bullets: strings(&["Built a multi-threaded queue in C++"]),
                ..Default::default()
            }],
            ..Default::default()
        };
        let report = score_match(&jd, &cv, &MatchWeights::default());
        // "queue" is in the bullet vocabulary but maps to no multithreading
        // base, so only the explicit c++ skill hits.
        assert_eq!(report.required_hit, strings(&["c++"]));
        assert_eq!(report.required_missing, strings(&["multithreading"]));
        assert_eq!(report.score, 30);
    }

    #[test]
    fn test_alias_on_cv_side_hits_required_base() {
        let jd = jd(&["Performance Tuning"], &[], &[], &[]);
        let cv = cv_with_skills(&["profiling"]);
        let report = score_match(&jd, &cv, &MatchWeights::default());
        // JD expansion widens the category to base + 4 aliases; the CV side
        // carries the alias and gains the base, so 2 of 5 terms hit.
        assert_eq!(
            report.required_hit,
            strings(&["performance tuning", "profiling"])
        );
        assert_eq!(
            report.required_missing,
            strings(&["benchmarking", "optimisation", "optimization"])
        );
        assert_eq!(report.score, 24);
    }

    #[test]
    fn test_coursework_and_technologies_count_as_cv_terms() {
        let jd = jd(&["Operating Systems", "Hive"], &[], &[], &[]);
        let cv = CvRecord {
            coursework: strings(&["Operating Systems"]),
            projects: vec![CvProject {
                technologies: strings(&["hive"]),
                ..Default::default()
            }],
            ..Default::default()
        };
        let report = score_match(&jd, &cv, &MatchWeights::default());
        assert_eq!(report.score, 60);
        assert!(report.required_missing.is_empty());
    }

    #[test]
    fn test_absent_red_flag_contributes_nothing() {
        let jd = jd(&[], &[], &[], &["trading"]);
        let cv = cv_with_skills(&["rust"]);
        let report = score_match(&jd, &cv, &MatchWeights::default());
        assert_eq!(report.score, 0);
        assert_eq!(report.red_flags_missing, strings(&["trading"]));
    }

    #[test]
    fn test_present_red_flag_scores_as_positive_hit() {
        let jd = jd(&[], &[], &[], &["trading"]);
        let cv = cv_with_skills(&["trading"]);
        let report = score_match(&jd, &cv, &MatchWeights::default());
        assert_eq!(report.score, 10);
        assert!(report.red_flags_missing.is_empty());
    }

    #[test]
    fn test_keyword_hits_are_reported_but_misses_are_not() {
        let jd = jd(&[], &[], &["Python", "Kafka"], &[]);
        let cv = cv_with_skills(&["python"]);
        let report = score_match(&jd, &cv, &MatchWeights::default());
        assert_eq!(report.keywords_hit, strings(&["python"]));
        // 15 * 1/2, rounded.
        assert_eq!(report.score, 8);
    }

    #[test]
    fn test_blank_and_junk_entries_are_ignored() {
        let jd = jd(&["Rust", "   ", "!!!"], &[], &[], &[]);
        let cv = cv_with_skills(&["rust", ""]);
        let report = score_match(&jd, &cv, &MatchWeights::default());
        assert_eq!(report.score, 60);
        assert_eq!(report.required_hit, strings(&["rust"]));
    }

    #[test]
    fn test_identical_inputs_yield_identical_reports() {
        let jd = jd(
            &["C++", "Linux", "Algorithms"],
            &["Kafka"],
            &["low latency"],
            &["trading"],
        );
        let cv = CvRecord {
            skills: strings(&["c++", "posix"]),
            coursework: strings(&["algorithm design"]),
            projects: vec![CvProject {
                technologies: strings(&["kafka"]),
                bullets: strings(&["Tuned throughput and latency on Linux"]),
                ..Default::default()
            }],
            ..Default::default()
        };
        let first = score_match(&jd, &cv, &MatchWeights::default());
        let second = score_match(&jd, &cv, &MatchWeights::default());
        assert_eq!(first, second);
        assert!(first.score <= 100);
    }

    #[test]
    fn test_custom_weights_rescale_the_policy() {
        let jd = jd(&["Rust"], &[], &[], &[]);
        let cv = cv_with_skills(&["rust"]);
        let weights = MatchWeights {
            required: 40.0,
            preferred: 0.0,
            keywords: 0.0,
            red_flags: 0.0,
        };
        let report = score_match(&jd, &cv, &weights);
        assert_eq!(report.score, 40);
    }
}
