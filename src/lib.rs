//! asn-merge library
//!
//! This crate provides the core functionality for the `asn-merge` binary, which collects
//! Autonomous System Numbers from remote text sources and writes them as one
//! comma-separated list.
//!
//! ## Overview
//!
//! The library is organized into modules matching the stages of the pipeline:
//!
//! - [`fetcher`] - Validates source URLs and retrieves their text payloads
//! - [`extractor`] - Finds `AS<digits>` tokens and merges them into a deduplicated set
//! - [`emitter`] - Renders the sorted identifiers and writes the result artifact
//! - [`pipeline`] - Runs fetch, extraction and emission, tolerating per-source failures
//! - [`cli`] - Command-line interface
//! - [`config`] - Configuration defaults and the TOML loader
//! - [`models`] - Sources, ASN identifiers, sort orders and output formats
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use asn_merge::{config::ResolvedConfig, errors::AppResult, fetcher::HttpFetcher, pipeline};
//!
//! # async fn example() -> AppResult<()> {
//! let config = ResolvedConfig {
//!     sources: vec!["https://example.com/asn-blocklist.txt".into()],
//!     ..ResolvedConfig::default()
//! };
//! let sources = config.resolve_sources()?;
//! let fetcher = HttpFetcher::new(config.timeout())?;
//!
//! let summary = pipeline::run(&fetcher, &sources, &config).await?;
//! println!("{} unique ASNs written to {}", summary.unique_asns, summary.output.display());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod emitter;
pub mod errors;
pub mod extractor;
pub mod fetcher;
pub mod models;
pub mod pipeline;
pub mod utils;
