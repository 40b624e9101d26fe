use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use crate::models::{ScorePayload, ScoreRequest, UserId};

/// Failure to complete a scoring request
///
/// HTTP status failures and lower-level network failures collapse into one
/// kind on purpose: the operator sees the same connectivity notice either way
/// and retries by reselecting.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server answered status {0}")]
    Status(reqwest::StatusCode),
}

/// Transport seam between the console and the recommendation endpoint
///
/// One call per retrieval cycle. Implementations do not retry and are never
/// cancelled over the wire; supersession is handled entirely on the caller's
/// side by discarding stale results.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoringTransport: Send + Sync {
    async fn fetch_recommendations(&self, user: &UserId) -> Result<ScorePayload, TransportError>;
}

/// HTTP transport posting to the recommendation endpoint
#[derive(Clone)]
pub struct HttpScoringTransport {
    http_client: HttpClient,
    endpoint: String,
}

impl HttpScoringTransport {
    /// Creates the transport with a hard per-request timeout
    ///
    /// A request that outlives the timeout surfaces as a `TransportError`,
    /// never as an indefinitely loading panel.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl ScoringTransport for HttpScoringTransport {
    async fn fetch_recommendations(&self, user: &UserId) -> Result<ScorePayload, TransportError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&ScoreRequest {
                user_id: user.clone(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TransportError::Status(response.status()));
        }

        let payload: ScorePayload = response.json().await?;
        Ok(payload)
    }
}
