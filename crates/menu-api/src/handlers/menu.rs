//! Menu item HTTP handlers
//!
//! Each handler performs exactly one service call and wraps the outcome in
//! the response envelope; domain failures bubble to [`ApiError`].

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use menu_core::domain::MenuItem;
use menu_core::repositories::MenuItemRepository;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Search query parameters; an absent `category` switches to keyword-only
/// search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub keyword: String,
    pub category: Option<String>,
}

/// List all menu items - GET /api/menu/all
pub async fn list_all_menu_items<R: MenuItemRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<ApiResponse<Vec<MenuItem>>>, ApiError> {
    let items = state.service.list_all_menu_items().await?;
    Ok(Json(ApiResponse::ok("Success", items)))
}

/// Get a menu item by id - GET /api/menu/{id}
pub async fn get_by_id<R: MenuItemRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    let item = state.service.get_by_id(id).await?;
    Ok(Json(ApiResponse::ok("Success", item)))
}

/// Add a menu item - POST /api/menu
pub async fn add_menu_item<R: MenuItemRepository>(
    State(state): State<AppState<R>>,
    Json(payload): Json<MenuItem>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    let added = state.service.add_menu_item(payload).await?;
    Ok(Json(ApiResponse::ok("Menu item added successfully", added)))
}

/// Update a menu item - PUT /api/menu/{id}
pub async fn update_menu_item<R: MenuItemRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i32>,
    Json(payload): Json<MenuItem>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    let updated = state.service.update_menu_item(id, payload).await?;
    Ok(Json(ApiResponse::ok(
        "Menu item updated successfully",
        updated,
    )))
}

/// Delete a menu item - DELETE /api/menu/{id}
pub async fn delete_menu_item<R: MenuItemRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.service.delete_menu_item(id).await?;
    Ok(Json(ApiResponse::ok_empty("Menu item deleted successfully")))
}

/// Search menu items - GET /api/menu/search?keyword=&category=
pub async fn search_menu_items<R: MenuItemRepository>(
    State(state): State<AppState<R>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<MenuItem>>>, ApiError> {
    let items = state
        .service
        .search_menu_items(&params.keyword, params.category.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok("Success", items)))
}

/// Filter menu items by temperature - GET /api/menu/temperature/{hot}
pub async fn search_by_temperature<R: MenuItemRepository>(
    State(state): State<AppState<R>>,
    Path(hot): Path<bool>,
) -> Result<Json<ApiResponse<Vec<MenuItem>>>, ApiError> {
    let items = state.service.search_by_temperature(hot).await?;
    Ok(Json(ApiResponse::ok("Success", items)))
}

/// Add multiple menu items - POST /api/menu/bulk
pub async fn add_menu_items<R: MenuItemRepository>(
    State(state): State<AppState<R>>,
    Json(payload): Json<Vec<MenuItem>>,
) -> Result<Json<ApiResponse<Vec<MenuItem>>>, ApiError> {
    let added = state.service.add_menu_items(payload).await?;
    Ok(Json(ApiResponse::ok("Menu items added successfully", added)))
}
