use cardapio_core::menu::CategoryRef;
use cardapio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub restaurant_id: DbId,
    pub name: String,
    pub slug: Option<String>,
    pub position: i32,
    pub active: bool,
    pub created_at: Timestamp,
}

impl From<Category> for CategoryRef {
    fn from(c: Category) -> Self {
        CategoryRef {
            id: c.id,
            name: c.name,
            slug: c.slug,
        }
    }
}

/// DTO for inserting a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub restaurant_id: DbId,
    pub name: String,
    pub slug: Option<String>,
    pub position: Option<i32>,
    pub active: Option<bool>,
}
