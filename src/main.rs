use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use service_advisor::config::Config;
use service_advisor::dataset::Dataset;
use service_advisor::routes::{create_router, AppState};
use service_advisor::services::HttpScoringEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let dataset = Dataset::load(&config.dataset_path)?;
    tracing::info!(
        path = %config.dataset_path,
        interactions = dataset.len(),
        users = dataset.users().len(),
        "Dataset loaded"
    );

    let engine = HttpScoringEngine::new(
        &config.scoring_api_url,
        &config.scoring_campaign,
        Duration::from_secs(config.scoring_timeout_secs),
    )?;

    let state = AppState::new(dataset, Arc::new(engine), config.num_results);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
