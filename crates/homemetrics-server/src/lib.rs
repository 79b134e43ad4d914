//! HomeMetrics Server: configuration and component wiring.

pub mod app;
pub mod config;

pub use app::App;
pub use config::{ConfigError, ServerConfig};
