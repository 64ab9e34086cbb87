//! # Menu Infrastructure
//!
//! PostgreSQL adapter for the menu item repository port.

pub mod database;

pub use database::{create_pool, PgMenuItemRepository, MIGRATOR};
