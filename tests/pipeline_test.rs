//! End-to-end tests: local HTTP sources through to the written artifact

#[path = "common/mod.rs"]
mod common;

use asn_merge::config::ResolvedConfig;
use asn_merge::errors::AppError;
use asn_merge::fetcher::HttpFetcher;
use asn_merge::models::{OutputFormat, SortOrder, Source};
use asn_merge::pipeline;
use common::*;
use std::fs;
use tempfile::TempDir;

fn sources(base: &str, names: &[&str]) -> Vec<Source> {
    names
        .iter()
        .map(|name| Source::parse(&format!("{base}/{name}")).unwrap())
        .collect()
}

fn config_in(dir: &TempDir) -> ResolvedConfig {
    ResolvedConfig {
        output: dir.path().join("combined_asn_list.txt"),
        timeout_ms: 5_000,
        ..ResolvedConfig::default()
    }
}

#[tokio::test]
async fn test_scenario_two_sources() {
    let base = serve(vec![
        route("/one.txt", 200, "AS100 foo AS200"),
        route("/two.txt", 200, "ASxyz AS100 AS7"),
    ])
    .await;
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let fetcher = HttpFetcher::new(config.timeout()).unwrap();

    let summary = pipeline::run(&fetcher, &sources(&base, &["one.txt", "two.txt"]), &config)
        .await
        .unwrap();

    assert_eq!(summary.unique_asns, 3);
    assert_eq!(fs::read_to_string(&config.output).unwrap(), "7,100,200");
}

#[tokio::test]
async fn test_partial_failure_still_writes_artifact() {
    let base = serve(vec![
        route("/list.txt", 200, SAMPLE_BLOCKLIST),
        route("/prose.txt", 200, SAMPLE_PROSE),
        route("/down.txt", 500, "AS1"),
    ])
    .await;
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let fetcher = HttpFetcher::new(config.timeout()).unwrap();
    let mut all = sources(&base, &["list.txt", "down.txt", "prose.txt", "missing.txt"]);
    all.push(Source::parse(&unreachable_url().await).unwrap());

    let summary = pipeline::run(&fetcher, &all, &config).await.unwrap();

    assert_eq!(summary.sources_ok, 2);
    assert_eq!(summary.sources_failed, 3);
    assert_eq!(summary.unique_asns, 4);
    assert_eq!(
        fs::read_to_string(&config.output).unwrap(),
        "7,13335,64496,64511"
    );
}

#[tokio::test]
async fn test_total_failure_creates_no_artifact() {
    let base = serve(vec![
        route("/down.txt", 503, ""),
        route("/empty.txt", 200, "no tokens here"),
    ])
    .await;
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let fetcher = HttpFetcher::new(config.timeout()).unwrap();

    let err = pipeline::run(&fetcher, &sources(&base, &["down.txt", "empty.txt"]), &config)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::NoDataCollected {
            attempted: 2,
            failed: 1
        }
    ));
    assert!(!config.output.exists());
}

#[tokio::test]
async fn test_sequential_and_concurrent_runs_match() {
    let base = serve(vec![
        route("/a.txt", 200, "AS10 AS2 AS300"),
        route("/b.txt", 200, "AS2\nAS4000\nAS1"),
        route("/c.txt", 200, "AS99 AS10"),
    ])
    .await;
    let dir = TempDir::new().unwrap();
    let list = sources(&base, &["a.txt", "b.txt", "c.txt"]);
    let sequential = ResolvedConfig {
        concurrent_fetches: 1,
        output: dir.path().join("sequential.txt"),
        ..config_in(&dir)
    };
    let concurrent = ResolvedConfig {
        concurrent_fetches: 8,
        output: dir.path().join("concurrent.txt"),
        ..config_in(&dir)
    };
    let fetcher = HttpFetcher::new(sequential.timeout()).unwrap();

    pipeline::run(&fetcher, &list, &sequential).await.unwrap();
    pipeline::run(&fetcher, &list, &concurrent).await.unwrap();

    let a = fs::read(&sequential.output).unwrap();
    let b = fs::read(&concurrent.output).unwrap();
    assert_eq!(a, b);
    assert_eq!(String::from_utf8(a).unwrap(), "1,2,10,99,300,4000");
}

#[tokio::test]
async fn test_lexicographic_env_output() {
    let base = serve(vec![route("/a.txt", 200, "AS10 AS2 AS300")]).await;
    let dir = TempDir::new().unwrap();
    let config = ResolvedConfig {
        sort: SortOrder::Lexicographic,
        format: OutputFormat::Env,
        ..config_in(&dir)
    };
    let fetcher = HttpFetcher::new(config.timeout()).unwrap();

    pipeline::run(&fetcher, &sources(&base, &["a.txt"]), &config)
        .await
        .unwrap();

    assert_eq!(
        fs::read_to_string(&config.output).unwrap(),
        "BLOCKED_ASN=10,2,300\n"
    );
}
