use crate::constants::*;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// A remote resource expected to contain ASN tokens in free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Source {
    url: Url,
}

impl Source {
    /// Parses and validates a source URL. Only `http` and `https` are accepted.
    pub fn parse(input: &str) -> AppResult<Self> {
        let url = Url::parse(input.trim())?;
        match url.scheme() {
            "http" | "https" => Ok(Self { url }),
            other => Err(AppError::InvalidInput(format!(
                "Unsupported URL scheme '{other}' in source {input}"
            ))),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// An ASN identifier: the digit string that followed an `AS` token.
///
/// Identifiers are kept textually so there is no upper bound on their value.
/// Equality is textual, so `AS7` and `AS007` yield distinct identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AsnId(String);

impl AsnId {
    /// Builds an identifier from a non-empty string of ASCII digits.
    pub fn new(digits: &str) -> Option<Self> {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(digits.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares by numeric value, falling back to text for equal values
    /// written with different leading zeros.
    pub fn numeric_cmp(&self, other: &Self) -> Ordering {
        let a = self.significant_digits();
        let b = other.significant_digits();
        a.len()
            .cmp(&b.len())
            .then_with(|| a.cmp(b))
            .then_with(|| self.0.cmp(&other.0))
    }

    fn significant_digits(&self) -> &str {
        let trimmed = self.0.trim_start_matches('0');
        if trimmed.is_empty() {
            "0"
        } else {
            trimmed
        }
    }
}

impl fmt::Display for AsnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordering applied to the merged identifiers before they are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum SortOrder {
    /// Ascending numeric value (`2` before `10`).
    #[default]
    Numeric,
    /// Byte-wise text order (`10` before `2`), matching `sort` on the raw list.
    Lexicographic,
}

impl SortOrder {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Lexicographic => "lexicographic",
        }
    }
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lower = value.trim().to_lowercase();

        if NUMERIC_SORT_ALIASES.contains(&lower.as_str()) {
            Ok(Self::Numeric)
        } else if LEXICOGRAPHIC_SORT_ALIASES.contains(&lower.as_str()) {
            Ok(Self::Lexicographic)
        } else {
            Err(AppError::InvalidInput(format!(
                "Unknown sort order '{value}' (expected 'numeric' or 'lexicographic')"
            )))
        }
    }
}

impl TryFrom<String> for SortOrder {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Layout of the result artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputFormat {
    /// The bare comma-separated list.
    #[default]
    List,
    /// A single `NAME=list` line for dotenv-style configuration.
    Env,
}

impl OutputFormat {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Env => "env",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lower = value.trim().to_lowercase();

        if LIST_FORMAT_ALIASES.contains(&lower.as_str()) {
            Ok(Self::List)
        } else if ENV_FORMAT_ALIASES.contains(&lower.as_str()) {
            Ok(Self::Env)
        } else {
            Err(AppError::InvalidInput(format!(
                "Unknown output format '{value}' (expected 'list' or 'env')"
            )))
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
