//! service-advisor: a service-recommendation console
//!
//! An operator picks a user and sees that user's interaction history next to
//! a ranked list of recommended services with confidence scores. The ranking
//! comes from an external scoring engine; this crate owns everything around
//! it — the retrieval-and-render protocol (`client`), the dataset and
//! service catalog (`dataset`), the engine boundary (`services`), and the
//! HTTP surface (`routes`).

pub mod client;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
