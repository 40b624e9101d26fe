use std::sync::Arc;

use crate::{
    dataset::{Dataset, ServiceCatalog},
    models::{Recommendation, ScorePayload, UserId},
    services::scoring::ScoringEngine,
};

/// Builds the response envelope for one retrieval cycle
///
/// History comes from the dataset in row order; the ranking comes from the
/// engine and is passed through in engine order, with item ids resolved to
/// service names through the catalog. An engine failure collapses the whole
/// cycle into the error envelope — the endpoint still answers, the payload
/// just carries no panels.
pub async fn get_recommendations(
    dataset: &Dataset,
    catalog: &ServiceCatalog,
    engine: Arc<dyn ScoringEngine>,
    user: &UserId,
    num_results: usize,
) -> ScorePayload {
    let history = dataset.history_for(user);

    match engine.rank(user, num_results).await {
        Ok(items) => {
            let recommendations: Vec<Recommendation> = items
                .into_iter()
                .map(|item| Recommendation {
                    service: catalog.display_name(&item.item_id),
                    score: item.score,
                })
                .collect();

            tracing::info!(
                user = %user,
                history = history.len(),
                recommendations = recommendations.len(),
                "Recommendation cycle completed"
            );

            ScorePayload::success(history, recommendations)
        }
        Err(error) => {
            tracing::error!(user = %user, error = %error, "Scoring engine call failed");
            ScorePayload::error(error.to_string())
        }
    }
}
