//! Repository for the `restaurant_tables` table.

use cardapio_core::types::DbId;
use sqlx::PgPool;

use crate::models::table::{CreateRestaurantTable, RestaurantTable};

/// Column list for `restaurant_tables` queries.
const COLUMNS: &str = "id, restaurant_id, number, qr_code, active, created_at";

/// Provides table lookups for visit resolution.
pub struct TableRepo;

impl TableRepo {
    /// Insert a new table.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRestaurantTable,
    ) -> Result<RestaurantTable, sqlx::Error> {
        let query = format!(
            "INSERT INTO restaurant_tables (restaurant_id, number, qr_code, active) \
             VALUES ($1, $2, $3, COALESCE($4, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RestaurantTable>(&query)
            .bind(input.restaurant_id)
            .bind(input.number)
            .bind(&input.qr_code)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    /// Find the active table carrying this QR code.
    ///
    /// Inactive tables never match, even if the code is correct.
    pub async fn find_active_by_qr(
        pool: &PgPool,
        qr_code: &str,
    ) -> Result<Option<RestaurantTable>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM restaurant_tables \
             WHERE qr_code = $1 AND active = true"
        );
        sqlx::query_as::<_, RestaurantTable>(&query)
            .bind(qr_code)
            .fetch_optional(pool)
            .await
    }

    /// Find a table by its number within a restaurant, active or not.
    pub async fn find_by_number(
        pool: &PgPool,
        restaurant_id: DbId,
        number: i32,
    ) -> Result<Option<RestaurantTable>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM restaurant_tables \
             WHERE restaurant_id = $1 AND number = $2"
        );
        sqlx::query_as::<_, RestaurantTable>(&query)
            .bind(restaurant_id)
            .bind(number)
            .fetch_optional(pool)
            .await
    }

    /// Flip a table's active flag. Returns `false` if the table does not exist.
    pub async fn set_active(pool: &PgPool, id: DbId, active: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE restaurant_tables SET active = $2 WHERE id = $1")
            .bind(id)
            .bind(active)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
