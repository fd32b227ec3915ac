//! Application layer - Use cases and orchestration
//!
//! Contains the break planner pipeline (normalize, score, select, explain),
//! the forecast port it is fed through and the service that ties them together.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
