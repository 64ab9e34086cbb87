//! Domain entities for the menu API.

pub mod menu_item;

pub use menu_item::MenuItem;
