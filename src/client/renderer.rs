use std::fmt::Display;

use uuid::Uuid;

use crate::models::ScorePayload;

/// Panel lifecycle
///
/// There is no distinct loading state: panels keep showing their previous
/// content until the current cycle's payload replaces it wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Nothing rendered yet; the placeholder is showing
    #[default]
    Idle,
    /// Panels hold the payload rendered for this cycle
    Rendered(Uuid),
}

/// Non-fatal notice surfaced to the operator
///
/// Either kind leaves the panels exactly as the last successful cycle
/// rendered them; reselecting is the retry path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The scoring service answered, but with a failure status
    Application,
    /// The request never completed
    Connectivity,
}

/// One rendered history row
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub service: String,
    pub interaction_type: String,
    pub rating: f64,
}

impl Display for HistoryRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {} / {}", self.service, self.interaction_type, self.rating)
    }
}

/// One rendered recommendation row
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRow {
    /// 1-based position in the server's ranking
    pub rank: usize,
    pub service: String,
    /// Confidence as a percentage, already rounded to one decimal; doubles as
    /// the filled width of the row's bar
    pub percent: f64,
}

impl RecommendationRow {
    /// Percentage text with exactly one decimal digit ("73.0", never "73")
    pub fn percent_label(&self) -> String {
        format!("{:.1}", self.percent)
    }

    /// The caption shown under the bar
    pub fn score_label(&self) -> String {
        format!("Score: {:.1}%", self.percent)
    }

    /// Filled width of the proportional bar, in percent of the track
    pub fn bar_width(&self) -> f64 {
        self.percent
    }
}

/// Maps a confidence score in [0, 1] to its display percentage,
/// rounded to one decimal place
pub fn score_percent(score: f64) -> f64 {
    (score * 1000.0).round() / 10.0
}

/// Deterministic renderer for the history and recommendations panels
///
/// Owns nothing but the two panel models and a notice slot. Every render
/// fully replaces prior content; errors never touch it. The staleness check
/// lives with the caller, which owns the current-cycle reference.
#[derive(Debug, Default)]
pub struct PanelRenderer {
    state: PanelState,
    history: Vec<HistoryRow>,
    recommendations: Vec<RecommendationRow>,
    notice: Option<Notice>,
}

impl PanelRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes a received payload for the given cycle
    ///
    /// A non-"success" status is an application-level failure: a notice is
    /// surfaced and the panels stay untouched. A success payload replaces
    /// both panels in payload order.
    pub fn apply_payload(&mut self, cycle_id: Uuid, payload: &ScorePayload) {
        if !payload.is_success() {
            self.show_application_error();
            return;
        }
        self.render(cycle_id, payload);
    }

    fn render(&mut self, cycle_id: Uuid, payload: &ScorePayload) {
        self.history = payload
            .history
            .iter()
            .map(|entry| HistoryRow {
                service: entry.service.clone(),
                interaction_type: entry.interaction_type.clone(),
                rating: entry.rating,
            })
            .collect();

        self.recommendations = payload
            .recommendations
            .iter()
            .enumerate()
            .map(|(idx, rec)| RecommendationRow {
                rank: idx + 1,
                service: rec.service.clone(),
                percent: score_percent(rec.score),
            })
            .collect();

        self.state = PanelState::Rendered(cycle_id);
        self.notice = None;
    }

    /// Surfaces the generic application failure notice
    pub fn show_application_error(&mut self) {
        self.notice = Some(Notice::Application);
    }

    /// Surfaces the generic connectivity failure notice
    pub fn show_connectivity_error(&mut self) {
        self.notice = Some(Notice::Connectivity);
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn history(&self) -> &[HistoryRow] {
        &self.history
    }

    pub fn recommendations(&self) -> &[RecommendationRow] {
        &self.recommendations
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }
}
