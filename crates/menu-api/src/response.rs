//! API response wrapper

use serde::Serialize;

/// Uniform response envelope. `status` echoes the HTTP status code and
/// `data` is `null` on failure and for operations with no payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: &str, data: T) -> Self {
        Self {
            status: 200,
            message: message.to_string(),
            data: Some(data),
        }
    }

    pub fn ok_empty(message: &str) -> Self {
        Self {
            status: 200,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn failure(status: u16, message: String) -> Self {
        Self {
            status,
            message,
            data: None,
        }
    }
}
