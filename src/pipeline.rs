//! The fetch → extract → merge → emit run.
//!
//! A run starts RUNNING and ends in one of two states:
//!
//! - **SUCCESS**: at least one identifier was collected. The artifact is written and
//!   [`RunSummary`] is returned, even when some sources failed.
//! - **FAILED**: the merged set is empty after every source was attempted. The
//!   artifact is not touched and [`AppError::NoDataCollected`] is returned. A failed
//!   artifact write is also fatal.

use crate::config::ResolvedConfig;
use crate::emitter::{render, write_artifact};
use crate::errors::{AppError, AppResult};
use crate::extractor::AsnSet;
use crate::fetcher::{fetch_in_order, SourceFetcher};
use crate::models::Source;
use crate::utils::format_duration;
use futures::StreamExt;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info, warn};

/// A source that could not be fetched during a run.
#[derive(Debug)]
pub struct SourceFailure {
    pub source: Source,
    pub error: AppError,
}

/// What was collected from the sources, before anything is emitted.
#[derive(Debug, Default)]
pub struct CollectReport {
    pub asns: AsnSet,
    pub succeeded: usize,
    pub failures: Vec<SourceFailure>,
}

impl CollectReport {
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failures.len()
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub unique_asns: usize,
    pub sources_ok: usize,
    pub sources_failed: usize,
    pub output: PathBuf,
}

/// Fetches every source and merges their ASN identifiers.
///
/// Per-source failures are logged and recorded but never abort collection. Payloads
/// are dropped as soon as their identifiers have been extracted.
pub async fn collect<F: SourceFetcher>(
    fetcher: &F,
    sources: &[Source],
    concurrency: usize,
) -> CollectReport {
    let mut report = CollectReport::default();
    let mut results = Box::pin(fetch_in_order(fetcher, sources, concurrency));

    while let Some((source, result)) = results.next().await {
        match result {
            Ok(payload) => {
                let added = report.asns.extend_from_payload(&payload);
                report.succeeded += 1;
                info!(
                    url = %source,
                    bytes = payload.len(),
                    new_asns = added,
                    total_asns = report.asns.len(),
                    "Source processed"
                );
            }
            Err(e) => {
                if e.is_source_failure() {
                    warn!(url = %source, error = %e, "Source unavailable, skipping");
                } else {
                    error!(url = %source, error = %e, "Unexpected error for source, skipping");
                }
                report.failures.push(SourceFailure {
                    source: source.clone(),
                    error: e,
                });
            }
        }
    }

    report
}

/// Runs the whole pipeline against `sources` and writes the artifact described by `config`.
///
/// # Errors
///
/// - [`AppError::InvalidInput`] if `config` fails [`ResolvedConfig::validate`]; nothing
///   is fetched or written.
/// - [`AppError::NoDataCollected`] if no identifier was found in any source; the
///   output file is left untouched.
/// - [`AppError::OutputWriteFailure`] if the artifact cannot be written.
pub async fn run<F: SourceFetcher>(
    fetcher: &F,
    sources: &[Source],
    config: &ResolvedConfig,
) -> AppResult<RunSummary> {
    config.validate()?;

    let started = Instant::now();
    info!(
        sources = sources.len(),
        concurrency = config.concurrent_fetches,
        "Starting ASN collection"
    );

    let report = collect(fetcher, sources, config.concurrent_fetches).await;

    if report.asns.is_empty() {
        error!(
            attempted = report.attempted(),
            failed = report.failures.len(),
            "No ASN identifiers collected, output not written"
        );
        return Err(AppError::NoDataCollected {
            attempted: report.attempted(),
            failed: report.failures.len(),
        });
    }

    let ordered = report.asns.sorted(config.sort);
    let content = render(&ordered, config.format, &config.env_var);
    write_artifact(&config.output, &content).await?;

    let summary = RunSummary {
        unique_asns: ordered.len(),
        sources_ok: report.succeeded,
        sources_failed: report.failures.len(),
        output: config.output.clone(),
    };

    info!(
        unique_asns = summary.unique_asns,
        sources_ok = summary.sources_ok,
        sources_failed = summary.sources_failed,
        sort = config.sort.display_name(),
        format = config.format.display_name(),
        output = %summary.output.display(),
        elapsed = %format_duration(started.elapsed()),
        "ASN list written"
    );

    Ok(summary)
}
