//! Repository for the `categories` table.

use cardapio_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory};

/// Column list for `categories` queries.
const COLUMNS: &str = "id, restaurant_id, name, slug, position, active, created_at";

/// Provides category listing for the menu.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (restaurant_id, name, slug, position, active) \
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(input.restaurant_id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.position)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    /// List a restaurant's active categories by position, then insertion order.
    pub async fn list_active(
        pool: &PgPool,
        restaurant_id: DbId,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories \
             WHERE restaurant_id = $1 AND active = true \
             ORDER BY position, id"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(restaurant_id)
            .fetch_all(pool)
            .await
    }
}
