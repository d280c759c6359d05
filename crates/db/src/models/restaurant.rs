use cardapio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `restaurants` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Restaurant {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a restaurant.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRestaurant {
    pub slug: String,
    pub name: String,
}
