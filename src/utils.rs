// src/utils.rs
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Normalize candidate name for file system usage
pub fn normalize_candidate_name(name: &str) -> String {
    let normalized: String = name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if normalized.trim_matches('_').is_empty() {
        "candidate".to_string()
    } else {
        normalized
    }
}

/// Build the default report file path inside a directory
pub fn report_file_path(base: &PathBuf, candidate_name: &str) -> PathBuf {
    base.join(format!(
        "{}_match_{}.json",
        normalize_candidate_name(candidate_name),
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Ensure directory exists
pub async fn ensure_directory(path: &PathBuf) -> Result<()> {
    if !path.exists() {
        tokio::fs::create_dir_all(path)
            .await
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Read file content as string with proper error context
pub async fn read_file_content(path: &PathBuf) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Write file content with proper error context
pub async fn write_file_content(path: &PathBuf, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_directory(&parent.to_path_buf()).await?;
    }

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
