//! HomeMetrics Core: domain models, error taxonomy and repository
//! traits shared by every other crate.

pub mod error;
pub mod id;
pub mod models;
pub mod repository;

pub use error::{HomeError, HomeResult};
pub use id::parse_id;
