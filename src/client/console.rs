use std::sync::Arc;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::models::{ScorePayload, UserId};

use super::controller::{RetrievalCycle, SelectionController};
use super::renderer::PanelRenderer;
use super::transport::{ScoringTransport, TransportError};

/// Completion of one retrieval cycle's fetch
#[derive(Debug)]
pub struct FetchOutcome {
    pub cycle: RetrievalCycle,
    pub result: Result<ScorePayload, TransportError>,
}

/// Event-driven wiring of controller, renderer, and transport
///
/// One logical thread of control: `select` spawns the fetch and returns
/// immediately; each completion arrives as a `FetchOutcome` on the console's
/// own channel and is applied one at a time, so panel writes never
/// interleave. Rapid reselection leaves multiple fetches in flight, but
/// `apply` only lets the currently selected cycle's outcome through —
/// last selected wins, no matter the arrival order.
pub struct RecommendationConsole {
    controller: SelectionController,
    renderer: PanelRenderer,
    transport: Arc<dyn ScoringTransport>,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl RecommendationConsole {
    pub fn new(transport: Arc<dyn ScoringTransport>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            controller: SelectionController::new(),
            renderer: PanelRenderer::new(),
            transport,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Handles a selector change
    ///
    /// A real identifier issues exactly one request and returns the new
    /// cycle's id; the sentinel issues nothing and returns `None`.
    pub fn select(&mut self, selection: Option<UserId>) -> Option<Uuid> {
        let cycle = self.controller.on_user_selected(selection)?;
        let cycle_id = cycle.id;

        let transport = Arc::clone(&self.transport);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = transport.fetch_recommendations(&cycle.user).await;
            // A closed channel means the console is gone; the result has
            // nowhere to render anyway.
            let _ = tx.send(FetchOutcome { cycle, result });
        });

        Some(cycle_id)
    }

    /// Waits for the next fetch completion
    pub async fn next_outcome(&mut self) -> Option<FetchOutcome> {
        self.outcome_rx.recv().await
    }

    /// Applies a completed fetch
    ///
    /// Stale outcomes are discarded wholesale, even when they arrive after a
    /// newer cycle has already rendered. Live outcomes update the panels:
    /// payloads go through the renderer's status check, transport failures
    /// surface the connectivity notice.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        if !self.controller.is_current(outcome.cycle.id) {
            tracing::debug!(user = %outcome.cycle.user, "discarding stale retrieval cycle");
            return;
        }

        match outcome.result {
            Ok(payload) => self.renderer.apply_payload(outcome.cycle.id, &payload),
            Err(error) => {
                tracing::warn!(
                    user = %outcome.cycle.user,
                    error = %error,
                    "scoring request failed"
                );
                self.renderer.show_connectivity_error();
            }
        }
    }

    /// Selects, then drains outcomes until the new cycle resolves
    ///
    /// Convenience driver for callers without their own event loop. Earlier
    /// cycles' stragglers drained along the way are discarded by `apply`.
    pub async fn select_and_apply(&mut self, selection: Option<UserId>) {
        let Some(cycle_id) = self.select(selection) else {
            return;
        };

        while let Some(outcome) = self.next_outcome().await {
            let done = outcome.cycle.id == cycle_id;
            self.apply(outcome);
            if done {
                break;
            }
        }
    }

    pub fn renderer(&self) -> &PanelRenderer {
        &self.renderer
    }

    pub fn selected_user(&self) -> Option<&UserId> {
        self.controller.selected_user()
    }
}
