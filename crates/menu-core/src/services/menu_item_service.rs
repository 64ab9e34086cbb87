//! Menu item service with validation and not-found translation

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::MenuItem;
use crate::error::DomainError;
use crate::repositories::MenuItemRepository;

/// Orchestrates menu item CRUD and search against the repository port.
pub struct MenuItemService<R: MenuItemRepository> {
    repo: Arc<R>,
}

impl<R: MenuItemRepository> MenuItemService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Persist a new menu item. Rejects negative prices before touching the
    /// repository.
    pub async fn add_menu_item(&self, item: MenuItem) -> Result<MenuItem, DomainError> {
        if item.price < 0.0 {
            warn!(name = %item.name, price = item.price, "Rejected menu item with negative price");
            return Err(DomainError::InvalidPrice(item.price));
        }

        let saved = self.repo.save(&item).await?;
        info!(id = ?saved.id, name = %saved.name, "Menu item added");
        Ok(saved)
    }

    pub async fn list_all_menu_items(&self) -> Result<Vec<MenuItem>, DomainError> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<MenuItem, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ItemNotFound(id))
    }

    pub async fn delete_menu_item(&self, id: i32) -> Result<(), DomainError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::ItemNotFound(id));
        }
        self.repo.delete_by_id(id).await?;
        info!(id, "Menu item deleted");
        Ok(())
    }

    /// Replace the stored item under `id` with the supplied one.
    pub async fn update_menu_item(
        &self,
        id: i32,
        mut item: MenuItem,
    ) -> Result<MenuItem, DomainError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::ItemNotFound(id));
        }

        // The path id wins over whatever id the body carried; a mismatched
        // body id must not move or duplicate a record.
        item.id = Some(id);

        let saved = self.repo.save(&item).await?;
        info!(id, name = %saved.name, "Menu item updated");
        Ok(saved)
    }

    /// Bulk-save a batch of items, preserving input order. The whole batch
    /// is price-checked up front so a single bad element persists nothing.
    pub async fn add_menu_items(&self, items: Vec<MenuItem>) -> Result<Vec<MenuItem>, DomainError> {
        if let Some(bad) = items.iter().find(|item| item.price < 0.0) {
            warn!(name = %bad.name, price = bad.price, "Rejected bulk batch with negative price");
            return Err(DomainError::InvalidPrice(bad.price));
        }

        let saved = self.repo.save_all(&items).await?;
        info!(count = saved.len(), "Menu items bulk-added");
        Ok(saved)
    }

    /// Keyword search across `name` and `ingredients`, optionally narrowed
    /// to a single category.
    pub async fn search_menu_items(
        &self,
        keyword: &str,
        category: Option<&str>,
    ) -> Result<Vec<MenuItem>, DomainError> {
        match category {
            Some(category) => {
                self.repo
                    .search_by_category_and_keyword(category, keyword)
                    .await
            }
            None => self.repo.search_by_keyword(keyword).await,
        }
    }

    pub async fn search_by_temperature(&self, hot: bool) -> Result<Vec<MenuItem>, DomainError> {
        self.repo.find_by_hot(hot).await
    }
}
