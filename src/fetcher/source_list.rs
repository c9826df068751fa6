use crate::constants::SOURCE_COMMENT_PREFIX;
use crate::errors::{AppError, AppResult};
use crate::models::Source;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parses a plain-text source list: one URL per line.
///
/// Blank lines and lines starting with `#` are ignored and surrounding whitespace is
/// trimmed. Duplicate URLs are dropped, keeping the first occurrence.
///
/// # Errors
///
/// Returns an error naming the offending line if any URL is invalid.
pub fn parse_source_list(text: &str) -> AppResult<Vec<Source>> {
    let mut sources = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(SOURCE_COMMENT_PREFIX) {
            continue;
        }
        let source = Source::parse(line).map_err(|e| {
            AppError::InvalidInput(format!("Line {}: {e}", index + 1))
        })?;
        sources.push(source);
    }

    Ok(dedup_sources(sources))
}

/// Reads a source list file. See [`parse_source_list`] for the format.
pub fn read_sources_file(path: &Path) -> AppResult<Vec<Source>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::IoError(format!(
            "Failed to read sources file {}: {e}",
            path.display()
        ))
    })?;
    parse_source_list(&contents).map_err(|e| {
        AppError::InvalidInput(format!("{}: {e}", path.display()))
    })
}

/// Removes repeated sources, preserving the order of first occurrence.
pub fn dedup_sources(sources: Vec<Source>) -> Vec<Source> {
    let mut seen = HashSet::with_capacity(sources.len());
    sources
        .into_iter()
        .filter(|source| {
            let fresh = seen.insert(source.clone());
            if !fresh {
                debug!(url = %source, "Skipping duplicate source");
            }
            fresh
        })
        .collect()
}
