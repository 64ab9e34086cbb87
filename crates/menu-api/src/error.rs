//! Boundary translation from domain errors to HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use menu_core::error::DomainError;

use crate::response::ApiResponse;

/// The single place a [`DomainError`] is turned into an HTTP status code and
/// envelope. Handlers bubble domain errors up with `?`.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::ItemNotFound(_) => StatusCode::NOT_FOUND,
            DomainError::InvalidPrice(_) => StatusCode::BAD_REQUEST,
            DomainError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Request failed: {}", self.0);
        } else {
            warn!("Request rejected: {}", self.0);
        }

        let body = ApiResponse::<()>::failure(status.as_u16(), self.0.to_string());
        (status, Json(body)).into_response()
    }
}
