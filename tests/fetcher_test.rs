//! Integration tests for the HTTP fetcher

#[path = "common/mod.rs"]
mod common;

use asn_merge::errors::AppError;
use asn_merge::fetcher::{fetch_in_order, HttpFetcher, SourceFetcher};
use asn_merge::models::Source;
use common::*;
use futures::StreamExt;
use std::time::Duration;

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_returns_body_on_success() {
    let base = serve(vec![route("/asn.txt", 200, SAMPLE_BLOCKLIST)]).await;
    let source = Source::parse(&format!("{base}/asn.txt")).unwrap();

    let body = fetcher().fetch(&source).await.unwrap();

    assert_eq!(body, SAMPLE_BLOCKLIST);
}

#[tokio::test]
async fn test_fetch_non_success_status_is_error() {
    let base = serve(vec![route("/broken.txt", 503, "AS1 AS2")]).await;
    let source = Source::parse(&format!("{base}/broken.txt")).unwrap();

    let err = fetcher().fetch(&source).await.unwrap_err();

    match err {
        AppError::HttpStatus { url, status } => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/broken.txt"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_fetch_missing_path_is_404() {
    let base = serve(vec![]).await;
    let source = Source::parse(&format!("{base}/nope.txt")).unwrap();

    let err = fetcher().fetch(&source).await.unwrap_err();

    assert!(matches!(err, AppError::HttpStatus { status: 404, .. }));
    assert!(err.is_source_failure());
}

#[tokio::test]
async fn test_fetch_connection_refused_is_network_error() {
    let source = Source::parse(&unreachable_url().await).unwrap();

    let err = fetcher().fetch(&source).await.unwrap_err();

    assert!(matches!(err, AppError::NetworkError(_)));
    assert!(err.to_string().contains(source.as_str()));
}

#[tokio::test]
async fn test_fetch_in_order_preserves_source_order() {
    let base = serve(vec![
        route("/a.txt", 200, "AS1"),
        route("/b.txt", 500, ""),
        route("/c.txt", 200, "AS3"),
    ])
    .await;
    let sources: Vec<Source> = ["a", "b", "c"]
        .iter()
        .map(|name| Source::parse(&format!("{base}/{name}.txt")).unwrap())
        .collect();
    let fetcher = fetcher();

    let results: Vec<_> = fetch_in_order(&fetcher, &sources, 3).collect().await;

    assert_eq!(results.len(), 3);
    for ((source, _), expected) in results.iter().zip(&sources) {
        assert_eq!(*source, expected);
    }
    assert_eq!(results[0].1.as_deref().unwrap(), "AS1");
    assert!(results[1].1.is_err());
    assert_eq!(results[2].1.as_deref().unwrap(), "AS3");
}
