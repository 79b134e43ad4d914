//! HomeMetrics Auth: bearer token issuance/validation, role checks,
//! registration/login, and the request gate that fronts every
//! protected store operation.

pub mod config;
pub mod error;
pub mod gate;
pub mod permission;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use gate::RequestGate;
pub use service::AuthService;
pub use token::Claims;
