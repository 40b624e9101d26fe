//! The recommendation retrieval-and-render protocol
//!
//! Selecting a user starts one retrieval cycle: a single request to the
//! recommendation endpoint, whose response deterministically fills the
//! history and recommendations panels. Reselecting before the response
//! arrives supersedes the pending cycle; the stale result is discarded on
//! arrival, never cancelled over the wire. Failures of either kind surface a
//! notice and leave the panels exactly as the last successful cycle rendered
//! them.

pub mod console;
pub mod controller;
pub mod renderer;
pub mod transport;

pub use console::{FetchOutcome, RecommendationConsole};
pub use controller::{RetrievalCycle, SelectionController};
pub use renderer::{HistoryRow, Notice, PanelRenderer, PanelState, RecommendationRow};
pub use transport::{HttpScoringTransport, ScoringTransport, TransportError};
