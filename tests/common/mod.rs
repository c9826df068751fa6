//! Common test utilities for integration tests

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

/// A canned HTTP response served by [`serve`].
#[allow(dead_code)]
pub struct Route {
    pub path: &'static str,
    pub status: u16,
    pub body: String,
}

#[allow(dead_code)]
pub fn route(path: &'static str, status: u16, body: &str) -> Route {
    Route {
        path,
        status,
        body: body.to_string(),
    }
}

/// Starts an HTTP server on an ephemeral local port and returns its base URL.
///
/// Each route answers `GET` with its canned status and body; unknown paths get the
/// router's 404 fallback. The server task lives as long as the test runtime.
#[allow(dead_code)]
pub async fn serve(routes: Vec<Route>) -> String {
    let app = routes.into_iter().fold(Router::new(), |router, r| {
        let status = StatusCode::from_u16(r.status).expect("valid HTTP status");
        let body = r.body;
        router.route(r.path, get(move || async move { (status, body) }))
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// Returns a URL on a local port with nothing listening.
#[allow(dead_code)]
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/asn.txt")
}

/// Sample payload shaped like a published ASN blocklist
#[allow(dead_code)]
pub const SAMPLE_BLOCKLIST: &str = r#"; ASN drop list
; Last-Modified: 2024-01-01
AS64496 ; XX | Example Hosting
AS64511 ; YY | Example Transit
AS64496 ; XX | Example Hosting (dup)
"#;

/// Sample free-form payload with tokens embedded in prose
#[allow(dead_code)]
pub const SAMPLE_PROSE: &str = "Traffic from AS13335,AS64511 and (AS7) was throttled; as999 is lowercase.";
