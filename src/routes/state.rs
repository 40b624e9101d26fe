use std::sync::Arc;

use crate::dataset::{Dataset, ServiceCatalog};
use crate::services::ScoringEngine;

/// Shared application state
///
/// The dataset and catalog are immutable after startup; the engine client is
/// shared behind its trait so tests can script it.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub catalog: Arc<ServiceCatalog>,
    pub engine: Arc<dyn ScoringEngine>,
    pub num_results: usize,
}

impl AppState {
    pub fn new(dataset: Dataset, engine: Arc<dyn ScoringEngine>, num_results: usize) -> Self {
        let catalog = ServiceCatalog::from_interactions(dataset.interactions());
        Self {
            dataset: Arc::new(dataset),
            catalog: Arc::new(catalog),
            engine,
            num_results,
        }
    }
}
