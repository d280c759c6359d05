//! Repository for the `menu_items` table.

use cardapio_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

use crate::models::menu_item::{CreateMenuItem, MenuItem, MenuItemWithRating};

/// Column list for `menu_items` queries.
const COLUMNS: &str = "\
    id, restaurant_id, category_id, name, slug, description, price, \
    image, cook_time_minutes, available, created_at";

/// Provides menu item reads and the price lookup used when ordering.
pub struct MenuItemRepo;

impl MenuItemRepo {
    /// Insert a new menu item.
    pub async fn create(pool: &PgPool, input: &CreateMenuItem) -> Result<MenuItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO menu_items \
                (restaurant_id, category_id, name, slug, description, price, \
                 image, cook_time_minutes, available) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(input.restaurant_id)
            .bind(input.category_id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.image)
            .bind(input.cook_time_minutes)
            .bind(input.available)
            .fetch_one(pool)
            .await
    }

    /// Find a menu item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MenuItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM menu_items WHERE id = $1");
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Current price of an item, or `None` if the id does not resolve.
    ///
    /// Runs on a caller-supplied connection so it can take part in the
    /// order transaction.
    pub async fn find_price(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Decimal>, sqlx::Error> {
        let row: Option<(Decimal,)> = sqlx::query_as("SELECT price FROM menu_items WHERE id = $1")
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(row.map(|(price,)| price))
    }

    /// Change an item's price. Returns `false` if the item does not exist.
    pub async fn update_price(pool: &PgPool, id: DbId, price: Decimal) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE menu_items SET price = $2 WHERE id = $1")
            .bind(id)
            .bind(price)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List a restaurant's available items by name, each joined with its
    /// rating aggregate when one exists.
    pub async fn list_available_with_rating(
        pool: &PgPool,
        restaurant_id: DbId,
    ) -> Result<Vec<MenuItemWithRating>, sqlx::Error> {
        sqlx::query_as::<_, MenuItemWithRating>(
            "SELECT mi.id, mi.category_id, mi.name, mi.slug, mi.description, mi.price, \
                    mi.image, mi.cook_time_minutes, \
                    ira.avg_rating, ira.total_count, ira.counts \
             FROM menu_items mi \
             LEFT JOIN item_rating_aggregates ira ON ira.item_id = mi.id \
             WHERE mi.restaurant_id = $1 AND mi.available = true \
             ORDER BY mi.name, mi.id",
        )
        .bind(restaurant_id)
        .fetch_all(pool)
        .await
    }
}
