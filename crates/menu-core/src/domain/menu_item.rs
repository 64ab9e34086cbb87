//! Menu item domain entity

use serde::{Deserialize, Serialize};

/// A single entry on the restaurant menu.
///
/// `id` is assigned by the datastore on creation and stays `None` until then.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: Option<i32>,

    pub name: String,
    pub other_name: Option<String>,
    pub description: Option<String>,

    pub price: f32,

    pub image_url: Option<String>,
    pub ingredients: Option<String>,
    pub category: Option<String>,

    #[serde(default)]
    pub hot: bool,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: f32) -> Self {
        Self {
            id: None,
            name: name.into(),
            other_name: None,
            description: None,
            price,
            image_url: None,
            ingredients: None,
            category: None,
            hot: false,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
