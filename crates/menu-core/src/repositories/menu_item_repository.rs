//! Menu item repository trait (port)

use async_trait::async_trait;

use crate::domain::MenuItem;
use crate::error::DomainError;

/// Persistence gateway for menu items.
///
/// `save` inserts when the item has no id and replaces by id otherwise.
/// `delete_by_id` reports [`DomainError::ItemNotFound`] when the id does not
/// exist, so a delete racing with another writer still resolves cleanly.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<MenuItem>, DomainError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<MenuItem>, DomainError>;
    async fn save(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;
    async fn save_all(&self, items: &[MenuItem]) -> Result<Vec<MenuItem>, DomainError>;
    async fn delete_by_id(&self, id: i32) -> Result<(), DomainError>;
    async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<MenuItem>, DomainError>;
    async fn search_by_category_and_keyword(
        &self,
        category: &str,
        keyword: &str,
    ) -> Result<Vec<MenuItem>, DomainError>;
    async fn find_by_hot(&self, hot: bool) -> Result<Vec<MenuItem>, DomainError>;
}
