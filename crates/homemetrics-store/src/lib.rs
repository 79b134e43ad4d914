//! HomeMetrics Store: the in-memory resource graph and its repository
//! implementations.
//!
//! This crate provides:
//! - The shared state owner ([`ResourceGraph`], [`GraphStats`])
//! - Repository implementations for the `homemetrics-core` traits
//!   ([`repository::GraphRepositories`] and the per-entity handles)
//! - Error types ([`StoreError`])
//!
//! Nothing is persisted. Dropping the last graph handle discards the
//! data.

mod error;
mod graph;
pub mod repository;

pub use error::StoreError;
pub use graph::{GraphStats, ResourceGraph};
pub use repository::GraphRepositories;
