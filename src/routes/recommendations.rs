use std::sync::Arc;

use axum::{extract::State, Json};

use crate::models::{ScorePayload, ScoreRequest};
use crate::services::recommendations;

use super::state::AppState;

/// Handler for the recommendation endpoint
///
/// Application failures ride a successful transport: the envelope's `status`
/// field tells the client what happened, the HTTP status stays 200. Only a
/// connection-level problem ever surfaces as a transport error to the caller.
pub async fn get_recommendations(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Json<ScorePayload> {
    let payload = recommendations::get_recommendations(
        &state.dataset,
        &state.catalog,
        Arc::clone(&state.engine),
        &request.user_id,
        state.num_results,
    )
    .await;

    Json(payload)
}
