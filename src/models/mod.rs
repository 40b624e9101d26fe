use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque identifier for a known user
///
/// Supplied by the server-rendered selector list and carried verbatim through
/// every request. The empty string is never a valid identifier; "no selection"
/// is `Option::None` at the API seam.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One past interaction of a user with a service
///
/// Wire keys are the display labels shown verbatim in the history panel, so
/// the dynamic string-keyed payload is pinned to a fixed record here at the
/// serde boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "AWS Service")]
    pub service: String,
    #[serde(rename = "Interaction Type")]
    pub interaction_type: String,
    #[serde(rename = "Rating")]
    pub rating: f64,
}

/// One scored recommendation, pre-ranked by the scoring service
///
/// `score` is the engine's confidence in [0, 1]. List order is the ranking;
/// the client never re-sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub service: String,
    pub score: f64,
}

/// Request body of the recommendation endpoint: the selected identifier,
/// nothing else
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub user_id: UserId,
}

/// The only `status` value that carries renderable data
pub const STATUS_SUCCESS: &str = "success";

/// Response envelope of the recommendation endpoint
///
/// Any `status` other than `"success"` is an application-level failure and
/// the remaining fields are not meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorePayload {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl ScorePayload {
    /// Builds the success envelope
    pub fn success(history: Vec<HistoryEntry>, recommendations: Vec<Recommendation>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: None,
            history,
            recommendations,
        }
    }

    /// Builds the failure envelope the recommendation endpoint answers with
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
            history: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

// ============================================================================
// Scoring Engine API Types
// ============================================================================

/// Request body sent to the scoring engine's ranking endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineRequest {
    pub campaign_arn: String,
    pub user_id: String,
    pub num_results: usize,
}

/// One ranked item as the engine returns it
///
/// Items are keyed by service id, not service name; the catalog resolves the
/// name before anything reaches a panel. A missing score collapses to 0.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedItem {
    pub item_id: String,
    #[serde(default)]
    pub score: f64,
}

/// Raw ranking response from the scoring engine
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineRanking {
    pub item_list: Vec<RankedItem>,
}
