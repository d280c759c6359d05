//! Physical restaurant tables (`restaurant_tables`).

use cardapio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `restaurant_tables` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RestaurantTable {
    pub id: DbId,
    pub restaurant_id: DbId,
    /// Label printed on the table, unique within the restaurant.
    pub number: i32,
    /// Secret encoded in the table's QR code.
    pub qr_code: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting a table.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRestaurantTable {
    pub restaurant_id: DbId,
    pub number: i32,
    pub qr_code: Option<String>,
    /// Defaults to `true`.
    pub active: Option<bool>,
}
