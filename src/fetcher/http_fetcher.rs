use crate::constants::USER_AGENT;
use crate::errors::{AppError, AppResult};
use crate::models::Source;
use std::future::Future;
use std::time::Duration;

/// Retrieves the raw text payload of a source.
///
/// The pipeline is generic over this trait so it can run against any transport.
pub trait SourceFetcher {
    /// Performs a single attempt to fetch `source`. Implementations must not retry.
    fn fetch(&self, source: &Source) -> impl Future<Output = AppResult<String>> + Send;
}

/// Fetches sources over HTTP(S) with one GET request each.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds a fetcher whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError` if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl SourceFetcher for HttpFetcher {
    async fn fetch(&self, source: &Source) -> AppResult<String> {
        // Send errors are connection/TLS/timeout failures
        let response = self
            .client
            .get(source.url().clone())
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to fetch {source}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus {
                url: source.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to read body of {source}: {e}")))
    }
}
