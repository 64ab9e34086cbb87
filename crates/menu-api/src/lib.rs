//! # Menu API
//!
//! HTTP handlers, response envelope, and the domain-error-to-status
//! boundary.

pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use response::ApiResponse;
pub use routes::router;
pub use state::AppState;
