use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{EngineRanking, EngineRequest, RankedItem, UserId},
};

/// Scoring engine abstraction
///
/// The engine is a black box: it holds the trained model and answers ranked
/// `{item_id, score}` pairs for a user, best first. Algorithm, training and
/// item storage all live on the other side of this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoringEngine: Send + Sync {
    async fn rank(&self, user: &UserId, num_results: usize) -> AppResult<Vec<RankedItem>>;
}

/// HTTP client for a remote scoring engine
///
/// Speaks the engine's runtime API: one POST per ranking request, carrying
/// the campaign identifier alongside the user.
#[derive(Clone)]
pub struct HttpScoringEngine {
    http_client: HttpClient,
    api_url: String,
    campaign_arn: String,
}

impl HttpScoringEngine {
    pub fn new(
        api_url: impl Into<String>,
        campaign_arn: impl Into<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            api_url: api_url.into(),
            campaign_arn: campaign_arn.into(),
        })
    }
}

#[async_trait]
impl ScoringEngine for HttpScoringEngine {
    async fn rank(&self, user: &UserId, num_results: usize) -> AppResult<Vec<RankedItem>> {
        let url = format!("{}/recommendations", self.api_url);
        let response = self
            .http_client
            .post(&url)
            .json(&EngineRequest {
                campaign_arn: self.campaign_arn.clone(),
                user_id: user.to_string(),
                num_results,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ScoringEngine(format!(
                "engine returned status {}: {}",
                status, body
            )));
        }

        let ranking: EngineRanking = response.json().await?;

        tracing::info!(
            user = %user,
            results = ranking.item_list.len(),
            "Ranking fetched"
        );

        Ok(ranking.item_list)
    }
}
