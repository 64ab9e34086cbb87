use std::sync::Arc;

use menu_core::repositories::MenuItemRepository;
use menu_core::services::MenuItemService;

pub struct AppState<R: MenuItemRepository> {
    pub service: Arc<MenuItemService<R>>,
}

impl<R: MenuItemRepository> AppState<R> {
    pub fn new(service: MenuItemService<R>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl<R: MenuItemRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}
