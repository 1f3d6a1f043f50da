// src/config.rs
use crate::matching::MatchWeights;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Parse a YAML weights override. Fields left out keep their defaults, so a
/// file can adjust a single category.
pub fn parse_weights(content: &str) -> Result<MatchWeights> {
    let weights: MatchWeights =
        serde_yaml::from_str(content).context("Failed to parse weights file")?;
    weights.validate()?;
    Ok(weights)
}

/// Load the scoring policy. No path means the built-in default weights.
pub fn load_weights(path: Option<&Path>) -> Result<MatchWeights> {
    match path {
        Some(path) => {
            info!("Loading scoring weights from: {}", path.display());
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read weights file: {}", path.display()))?;
            parse_weights(&content)
        }
        None => Ok(MatchWeights::default()),
    }
}
