//! # Menu Core
//!
//! Domain entities, services, and repository traits for the menu API.

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

pub use domain::MenuItem;
pub use error::DomainError;
