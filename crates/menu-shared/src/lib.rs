//! # Menu Shared
//!
//! Configuration, telemetry, and application-level errors.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::AppConfig;
pub use error::AppError;
