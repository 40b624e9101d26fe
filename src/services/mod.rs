pub mod recommendations;
pub mod scoring;

pub use scoring::{HttpScoringEngine, ScoringEngine};
