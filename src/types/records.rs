// src/types/records.rs
//! Structured JD/CV records as produced by the upstream extraction step

use serde::{Deserialize, Deserializer, Serialize};

/// Employer-side record. Every field is optional in the incoming JSON;
/// missing or null fields deserialize to empty values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdRecord {
    #[serde(default)]
    pub role_title: String,
    #[serde(default = "default_seniority")]
    pub seniority_level: String,
    #[serde(default, deserialize_with = "string_items")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "string_items")]
    pub preferred_skills: Vec<String>,
    #[serde(default, deserialize_with = "string_items")]
    pub key_keywords: Vec<String>,
    #[serde(default, deserialize_with = "string_items")]
    pub responsibilities: Vec<String>,
    #[serde(default, deserialize_with = "string_items")]
    pub red_flags: Vec<String>,
}

/// Candidate-side record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CvRecord {
    #[serde(default)]
    pub candidate_name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "string_items")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "string_items")]
    pub coursework: Vec<String>,
    #[serde(default, deserialize_with = "project_items")]
    pub projects: Vec<CvProject>,
    #[serde(default, deserialize_with = "value_items")]
    pub experience: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "string_items")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CvProject {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "string_items")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "string_items")]
    pub bullets: Vec<String>,
}

fn default_seniority() -> String {
    "unspecified".to_string()
}

impl Default for JdRecord {
    fn default() -> Self {
        Self {
            role_title: String::new(),
            seniority_level: default_seniority(),
            required_skills: Vec::new(),
            preferred_skills: Vec::new(),
            key_keywords: Vec::new(),
            responsibilities: Vec::new(),
            red_flags: Vec::new(),
        }
    }
}

/// Accept a list that may contain non-string junk (numbers, nulls, nested
/// objects) and keep only the strings. A null in place of the whole list is
/// treated as empty.
fn string_items<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|v| match v {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

/// Keep experience entries as-is (their shape varies by extractor version),
/// but tolerate a null in place of the list.
fn value_items<'de, D>(deserializer: D) -> Result<Vec<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Same tolerance for project entries: anything that is not an object is
/// skipped rather than failing the whole record.
fn project_items<'de, D>(deserializer: D) -> Result<Vec<CvProject>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter(|v| v.is_object())
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jd_defaults_for_missing_keys() {
        let jd: JdRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(jd.role_title, "");
        assert_eq!(jd.seniority_level, "unspecified");
        assert!(jd.required_skills.is_empty());
        assert!(jd.red_flags.is_empty());
    }

    #[test]
    fn test_non_string_entries_are_dropped() {
        let jd: JdRecord = serde_json::from_str(
            r#"{"required_skills": ["C++", 42, null, {"x": 1}, "Python"]}"#,
        )
        .unwrap();
        assert_eq!(jd.required_skills, vec!["C++", "Python"]);
    }

    #[test]
    fn test_null_list_is_empty() {
        let cv: CvRecord = serde_json::from_str(r#"{"skills": null}"#).unwrap();
        assert!(cv.skills.is_empty());
    }

    #[test]
    fn test_non_object_projects_are_skipped() {
        let cv: CvRecord = serde_json::from_str(
            r#"{"projects": [{"technologies": ["Rust"], "bullets": []}, "junk", 7]}"#,
        )
        .unwrap();
        assert_eq!(cv.projects.len(), 1);
        assert_eq!(cv.projects[0].technologies, vec!["Rust"]);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let cv: CvRecord =
            serde_json::from_str(r#"{"skills": ["Go"], "unexpected": {"a": 1}}"#).unwrap();
        assert_eq!(cv.skills, vec!["Go"]);
    }
}
