//! Router construction

use axum::{
    routing::{get, post},
    Router,
};

use menu_core::repositories::MenuItemRepository;

use crate::handlers::{health, menu};
use crate::state::AppState;

pub fn router<R: MenuItemRepository + 'static>(state: AppState<R>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/menu/all", get(menu::list_all_menu_items::<R>))
        .route("/api/menu/search", get(menu::search_menu_items::<R>))
        .route(
            "/api/menu/temperature/{hot}",
            get(menu::search_by_temperature::<R>),
        )
        .route("/api/menu/bulk", post(menu::add_menu_items::<R>))
        .route("/api/menu", post(menu::add_menu_item::<R>))
        .route(
            "/api/menu/{id}",
            get(menu::get_by_id::<R>)
                .put(menu::update_menu_item::<R>)
                .delete(menu::delete_menu_item::<R>),
        )
        .with_state(state)
}
