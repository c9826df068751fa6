use crate::config::ResolvedConfig;
use crate::constants::DEFAULT_OUTPUT_FILE;
use crate::errors::{AppError, AppResult};
use crate::fetcher::HttpFetcher;
use crate::models::{OutputFormat, SortOrder};
use crate::pipeline::{self, RunSummary};
use crate::utils::parse_duration;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Builds the command-line definition.
///
/// - `run`: sources and options given as flags
/// - `toml`: everything read from a TOML configuration file
pub fn build_command() -> Command<'static> {
    Command::new("asn-merge")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("run")
                .about("Fetch sources, merge their ASN identifiers and write the list")
                .after_help("Identifiers are sorted numerically by default. Use --sort lexicographic\nfor output byte-compatible with a plain text sort (\"10\" before \"2\").\nExample:\n  asn-merge run -s sources.txt -o combined_asn_list.txt")
                .arg(
                    Arg::new("source")
                        .short('u')
                        .long("source")
                        .help("Source URL (repeatable)")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("sources")
                        .short('s')
                        .long("sources")
                        .help("File with one source URL per line ('#' starts a comment)")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Path of the merged list")
                        .default_value(DEFAULT_OUTPUT_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("timeout")
                        .short('t')
                        .long("timeout")
                        .help("Per-source request timeout (e.g. 500ms, 30s, 2m)")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("concurrency")
                        .short('c')
                        .long("concurrency")
                        .help("Sources fetched at the same time (1 = one after another)")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .help("Ordering of identifiers: 'numeric' or 'lexicographic'")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help("Output layout: 'list' (a,b,c) or 'env' (NAME=a,b,c)")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("env_var")
                        .long("env-var")
                        .help("Variable name used by the env format")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("toml")
                .about("Run using a TOML configuration file")
                .after_help("Relative 'sources_file' and 'output' paths are resolved against the\ndirectory containing the config file.")
                .arg(
                    Arg::new("config")
                        .help("Path to the TOML config file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

/// Parses command-line arguments and runs the pipeline.
///
/// # Returns
///
/// Returns `Ok(())` once the merged list has been written, or after printing help when
/// no subcommand is given. Returns an error if:
/// - Flags or the config file are invalid
/// - No source yielded any ASN identifier
/// - The output file cannot be written
///
pub async fn cli() -> AppResult<()> {
    let cmd = build_command();
    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    match matches.subcommand() {
        Some(("run", sub)) => {
            let config = config_from_run_args(sub)?;
            run_workflow(&config).await?;
        }
        Some(("toml", sub)) => {
            let config_path = sub
                .get_one::<PathBuf>("config")
                .expect("config is required");

            let config = ResolvedConfig::from_toml_file(config_path)?;
            run_workflow(&config).await?;
        }
        _ => {
            cmd_for_help
                .print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        }
    }

    Ok(())
}

/// Builds the configuration for the `run` subcommand, starting from defaults.
pub fn config_from_run_args(sub: &ArgMatches) -> AppResult<ResolvedConfig> {
    let mut config = ResolvedConfig::default();

    if let Some(urls) = sub.get_many::<String>("source") {
        config.sources = urls.cloned().collect();
    }
    config.sources_file = sub.get_one::<PathBuf>("sources").cloned();
    if let Some(output) = sub.get_one::<PathBuf>("output") {
        config.output = output.clone();
    }
    if let Some(timeout) = sub.get_one::<String>("timeout") {
        let millis = parse_duration(timeout)?.as_millis();
        config.timeout_ms = u64::try_from(millis).unwrap_or(u64::MAX);
    }
    if let Some(&concurrency) = sub.get_one::<usize>("concurrency") {
        config.concurrent_fetches = concurrency;
    }
    if let Some(sort) = sub.get_one::<String>("sort") {
        config.sort = sort.parse::<SortOrder>()?;
    }
    if let Some(format) = sub.get_one::<String>("format") {
        config.format = format.parse::<OutputFormat>()?;
    }
    if let Some(env_var) = sub.get_one::<String>("env_var") {
        config.env_var = env_var.clone();
    }

    config.validate()?;
    Ok(config)
}

async fn run_workflow(config: &ResolvedConfig) -> AppResult<RunSummary> {
    let sources = config.resolve_sources()?;
    let fetcher = HttpFetcher::new(config.timeout())?;

    info!(
        sources = sources.len(),
        timeout_ms = config.timeout_ms,
        output = %config.output.display(),
        "Resolved configuration"
    );

    pipeline::run(&fetcher, &sources, config).await
}
