//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Menu item not found with id {0}")]
    ItemNotFound(i32),

    #[error("Invalid price: {0}")]
    InvalidPrice(f32),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
