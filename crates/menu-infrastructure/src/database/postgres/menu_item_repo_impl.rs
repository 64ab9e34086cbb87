//! PostgreSQL menu item repository

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use menu_core::domain::MenuItem;
use menu_core::error::DomainError;
use menu_core::repositories::MenuItemRepository;

pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: i32,
    pub name: String,
    pub other_name: Option<String>,
    pub description: Option<String>,
    pub price: f32,
    pub image_url: Option<String>,
    pub ingredients: Option<String>,
    pub category: Option<String>,
    pub hot: bool,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: Some(row.id),
            name: row.name,
            other_name: row.other_name,
            description: row.description,
            price: row.price,
            image_url: row.image_url,
            ingredients: row.ingredients,
            category: row.category,
            hot: row.hot,
        }
    }
}

const COLUMNS: &str = "id, name, other_name, description, price, image_url, ingredients, category, hot";

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

/// Insert when the item carries no id, replace-by-id otherwise. Shared
/// between `save` and the `save_all` transaction.
async fn save_on<'c, E>(executor: E, item: &MenuItem) -> Result<MenuItemRow, DomainError>
where
    E: sqlx::PgExecutor<'c>,
{
    match item.id {
        None => sqlx::query_as(
            r#"
            INSERT INTO menu_items (name, other_name, description, price, image_url, ingredients, category, hot)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, other_name, description, price, image_url, ingredients, category, hot
            "#,
        )
        .bind(&item.name)
        .bind(&item.other_name)
        .bind(&item.description)
        .bind(item.price)
        .bind(&item.image_url)
        .bind(&item.ingredients)
        .bind(&item.category)
        .bind(item.hot)
        .fetch_one(executor)
        .await
        .map_err(|e| db_error("inserting menu item", e)),
        Some(id) => sqlx::query_as(
            r#"
            UPDATE menu_items
            SET name = $2,
                other_name = $3,
                description = $4,
                price = $5,
                image_url = $6,
                ingredients = $7,
                category = $8,
                hot = $9
            WHERE id = $1
            RETURNING id, name, other_name, description, price, image_url, ingredients, category, hot
            "#,
        )
        .bind(id)
        .bind(&item.name)
        .bind(&item.other_name)
        .bind(&item.description)
        .bind(item.price)
        .bind(&item.image_url)
        .bind(&item.ingredients)
        .bind(&item.category)
        .bind(item.hot)
        .fetch_optional(executor)
        .await
        .map_err(|e| db_error("updating menu item", e))?
        .ok_or(DomainError::ItemNotFound(id)),
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn find_all(&self) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<MenuItemRow> =
            sqlx::query_as(&format!("SELECT {} FROM menu_items", COLUMNS))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| db_error("listing menu items", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<MenuItem>, DomainError> {
        let row: Option<MenuItemRow> =
            sqlx::query_as(&format!("SELECT {} FROM menu_items WHERE id = $1", COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finding menu item by id", e))?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let row = save_on(&self.pool, item).await?;
        info!(id = row.id, "Menu item saved");
        Ok(row.into())
    }

    async fn save_all(&self, items: &[MenuItem]) -> Result<Vec<MenuItem>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("starting bulk save", e))?;

        let mut saved = Vec::with_capacity(items.len());
        for item in items {
            saved.push(save_on(&mut *tx, item).await?.into());
        }

        tx.commit()
            .await
            .map_err(|e| db_error("committing bulk save", e))?;

        info!(count = saved.len(), "Menu items bulk-saved");
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting menu item", e))?;

        // Zero affected rows means the id was already gone; report it rather
        // than swallowing it, so a racing delete still yields a clean 404.
        if result.rows_affected() == 0 {
            return Err(DomainError::ItemNotFound(id));
        }

        Ok(())
    }

    async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(&format!(
            r#"
            SELECT {} FROM menu_items
            WHERE LOWER(name) LIKE '%' || LOWER($1) || '%'
               OR LOWER(ingredients) LIKE '%' || LOWER($1) || '%'
            "#,
            COLUMNS
        ))
        .bind(keyword)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("searching menu items by keyword", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn search_by_category_and_keyword(
        &self,
        category: &str,
        keyword: &str,
    ) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(&format!(
            r#"
            SELECT {} FROM menu_items
            WHERE LOWER(category) = LOWER($1)
              AND (LOWER(name) LIKE '%' || LOWER($2) || '%'
                   OR LOWER(ingredients) LIKE '%' || LOWER($2) || '%')
            "#,
            COLUMNS
        ))
        .bind(category)
        .bind(keyword)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("searching menu items by category and keyword", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_hot(&self, hot: bool) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<MenuItemRow> =
            sqlx::query_as(&format!("SELECT {} FROM menu_items WHERE hot = $1", COLUMNS))
                .bind(hot)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| db_error("searching menu items by temperature", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
