use crate::constants::*;
use crate::errors::{AppError, AppResult};
use crate::fetcher::{dedup_sources, read_sources_file};
use crate::models::{OutputFormat, Source, SortOrder};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved configuration with all values filled in.
///
/// This struct represents the pipeline defaults and can be deserialized by the TOML
/// loader. Apart from the optional sources file, all fields have concrete values.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    // Sources
    /// Source URLs listed inline
    pub sources: Vec<String>,
    /// Plain-text file with one source URL per line (`#` starts a comment)
    pub sources_file: Option<PathBuf>,

    // Fetching
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Number of sources fetched at the same time. 1 fetches strictly one after another.
    pub concurrent_fetches: usize,

    // Output
    /// Path of the result artifact
    pub output: PathBuf,
    /// Ordering of the emitted identifiers
    pub sort: SortOrder,
    /// Layout of the result artifact
    pub format: OutputFormat,
    /// Variable name used by the `env` output format
    pub env_var: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            sources_file: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            concurrent_fetches: DEFAULT_CONCURRENT_FETCHES,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            sort: SortOrder::default(),
            format: OutputFormat::default(),
            env_var: DEFAULT_ENV_VAR.to_string(),
        }
    }
}

impl ResolvedConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// Missing keys fall back to defaults. Unknown keys are rejected so typos are not
    /// silently ignored. Relative `sources_file` and `output` paths are resolved against
    /// the directory containing the config file, so the same file behaves identically
    /// from any working directory.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the TOML is malformed, unknown keys are present, or
    /// any value fails [`ResolvedConfig::validate`]. Returns `IoError` if the file cannot be read.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let mut config: ResolvedConfig = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;

        if let Some(base) = path.parent() {
            if let Some(file) = config.sources_file.as_mut() {
                if file.is_relative() {
                    *file = base.join(&*file);
                }
            }
            if config.output.is_relative() {
                config.output = base.join(&config.output);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> AppResult<()> {
        if self.timeout_ms == 0 {
            return Err(AppError::InvalidInput(
                "Timeout must be greater than 0".into(),
            ));
        }
        if self.concurrent_fetches == 0 {
            return Err(AppError::InvalidInput(
                "Concurrent fetches must be greater than 0".into(),
            ));
        }
        if self.format == OutputFormat::Env && !is_valid_env_var(&self.env_var) {
            return Err(AppError::InvalidInput(format!(
                "'{}' is not a valid environment variable name",
                self.env_var
            )));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Merges the inline sources and the sources file into one validated list.
    ///
    /// Inline sources come first. Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns an error if any URL is invalid, the sources file cannot be read, or the
    /// resulting list is empty.
    pub fn resolve_sources(&self) -> AppResult<Vec<Source>> {
        let mut sources = self
            .sources
            .iter()
            .map(|s| Source::parse(s))
            .collect::<AppResult<Vec<_>>>()?;
        if let Some(file) = &self.sources_file {
            sources.extend(read_sources_file(file)?);
        }

        let sources = dedup_sources(sources);
        if sources.is_empty() {
            return Err(AppError::InvalidInput(
                "No sources configured (use --source, --sources or a config file)".into(),
            ));
        }
        Ok(sources)
    }
}

fn is_valid_env_var(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
