//! Order and order line models.

use cardapio_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub restaurant_id: DbId,
    pub table_id: DbId,
    pub session_token: String,
    pub status: String,
    pub total: Decimal,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// A row from the `order_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderItem {
    pub id: DbId,
    pub order_id: DbId,
    pub item_id: DbId,
    pub qty: i32,
    /// Menu price captured when the order was placed.
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub notes: Option<String>,
}

/// Order header fields, taken from the resolved visit.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub restaurant_id: DbId,
    pub table_id: DbId,
    pub session_token: String,
    pub notes: Option<String>,
}

/// One requested line. The quantity is already clamped.
#[derive(Debug, Clone)]
pub struct NewOrderLine {
    pub item_id: DbId,
    pub qty: i32,
    pub notes: Option<String>,
}

/// Outcome of a committed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedOrder {
    pub order_id: DbId,
    pub total: Decimal,
    /// Requested item ids that did not resolve and were left out.
    pub skipped_items: Vec<DbId>,
}
