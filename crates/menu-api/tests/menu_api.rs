//! HTTP-level tests against the full router, backed by an in-memory
//! repository.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use menu_api::{router, AppState};
use menu_core::domain::MenuItem;
use menu_core::error::DomainError;
use menu_core::repositories::MenuItemRepository;
use menu_core::services::MenuItemService;

#[derive(Default)]
struct InMemoryMenuItemRepository {
    inner: Mutex<Store>,
}

#[derive(Default)]
struct Store {
    items: BTreeMap<i32, MenuItem>,
    next_id: i32,
}

fn contains_keyword(item: &MenuItem, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    item.name.to_lowercase().contains(&keyword)
        || item
            .ingredients
            .as_deref()
            .is_some_and(|i| i.to_lowercase().contains(&keyword))
}

#[async_trait]
impl MenuItemRepository for InMemoryMenuItemRepository {
    async fn find_all(&self) -> Result<Vec<MenuItem>, DomainError> {
        Ok(self.inner.lock().unwrap().items.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<MenuItem>, DomainError> {
        Ok(self.inner.lock().unwrap().items.get(&id).cloned())
    }

    async fn save(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let mut store = self.inner.lock().unwrap();
        let mut item = item.clone();
        let id = match item.id {
            Some(id) => id,
            None => {
                store.next_id += 1;
                store.next_id
            }
        };
        item.id = Some(id);
        store.items.insert(id, item.clone());
        Ok(item)
    }

    async fn save_all(&self, items: &[MenuItem]) -> Result<Vec<MenuItem>, DomainError> {
        let mut saved = Vec::with_capacity(items.len());
        for item in items {
            saved.push(self.save(item).await?);
        }
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DomainError> {
        self.inner
            .lock()
            .unwrap()
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::ItemNotFound(id))
    }

    async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<MenuItem>, DomainError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .items
            .values()
            .filter(|item| contains_keyword(item, keyword))
            .cloned()
            .collect())
    }

    async fn search_by_category_and_keyword(
        &self,
        category: &str,
        keyword: &str,
    ) -> Result<Vec<MenuItem>, DomainError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .items
            .values()
            .filter(|item| {
                item.category
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(category))
                    && contains_keyword(item, keyword)
            })
            .cloned()
            .collect())
    }

    async fn find_by_hot(&self, hot: bool) -> Result<Vec<MenuItem>, DomainError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .items
            .values()
            .filter(|item| item.hot == hot)
            .cloned()
            .collect())
    }
}

fn test_router() -> Router {
    let repo = Arc::new(InMemoryMenuItemRepository::default());
    router(AppState::new(MenuItemService::new(repo)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn create_get_delete_lifecycle() {
    let app = test_router();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/menu",
        Some(json!({"name": "Latte", "price": 3.5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 200);
    assert_eq!(body["message"], "Menu item added successfully");
    let id = body["data"]["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(body["data"]["price"], 3.5);

    let uri = format!("/api/menu/{}", id);
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Latte");
    assert_eq!(body["data"]["id"], id);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Menu item deleted successfully");
    assert_eq!(body["data"], Value::Null);

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn create_with_negative_price_is_rejected_and_nothing_persists() {
    let app = test_router();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/menu",
        Some(json!({"name": "Bad", "price": -1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["data"], Value::Null);

    let (status, body) = send(&app, Method::GET, "/api/menu/all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn update_replaces_record_and_keeps_the_path_id() {
    let app = test_router();

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/menu",
        Some(json!({"name": "Old", "price": 2.0})),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();

    // Body carries a mismatched id; the path id must win.
    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/menu/{}", id),
        Some(json!({"id": 999, "name": "New", "price": 4.5, "hot": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["name"], "New");
    assert_eq!(body["data"]["hot"], true);

    let (_, body) = send(&app, Method::GET, "/api/menu/all", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn update_of_missing_id_returns_not_found() {
    let app = test_router();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/menu/123",
        Some(json!({"name": "Ghost", "price": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn delete_of_missing_id_returns_not_found() {
    let app = test_router();

    let (status, body) = send(&app, Method::DELETE, "/api/menu/123", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn bulk_create_preserves_order_and_assigns_ids() {
    let app = test_router();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/menu/bulk",
        Some(json!([
            {"name": "A", "price": 1.0},
            {"name": "B", "price": 2.0}
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "A");
    assert_eq!(data[1]["name"], "B");
    assert!(data[0]["id"].as_i64().unwrap() > 0);
    assert!(data[1]["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn bulk_create_of_empty_list_returns_empty_list() {
    let app = test_router();

    let (status, body) = send(&app, Method::POST, "/api/menu/bulk", Some(json!([]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn search_matches_name_and_ingredients_case_insensitively() {
    let app = test_router();
    send(
        &app,
        Method::POST,
        "/api/menu/bulk",
        Some(json!([
            {"name": "Chocolate Cake", "price": 5.0, "category": "dessert",
             "ingredients": "chocolate, flour, sugar"},
            {"name": "Latte", "price": 3.5, "category": "drinks",
             "ingredients": "milk, espresso, CHOCOLATE shavings"},
            {"name": "Green Tea", "price": 2.0, "category": "drinks"}
        ])),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/api/menu/search?keyword=CHOC", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/menu/search?keyword=choc&category=Dessert",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Chocolate Cake");
}

#[tokio::test]
async fn temperature_filter_splits_hot_and_cold_items() {
    let app = test_router();
    send(
        &app,
        Method::POST,
        "/api/menu/bulk",
        Some(json!([
            {"name": "Espresso", "price": 2.0, "hot": true},
            {"name": "Iced Tea", "price": 2.5}
        ])),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/api/menu/temperature/true", None).await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Espresso");

    let (_, body) = send(&app, Method::GET, "/api/menu/temperature/false", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn health_check_responds_ok() {
    let app = test_router();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 200);
}
