//! Domain models for HomeMetrics.
//!
//! These are the core types shared across all crates.

pub mod correlation;
pub mod metric;
pub mod reading;
pub mod role;
pub mod room;
pub mod user;
