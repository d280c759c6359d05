//! Menu item rows and the menu projection served to diners.

use cardapio_core::rating::{RatingCounts, RatingSummary};
use cardapio_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `menu_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MenuItem {
    pub id: DbId,
    pub restaurant_id: DbId,
    pub category_id: Option<DbId>,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Decimal,
    pub image: Option<String>,
    pub cook_time_minutes: Option<i32>,
    pub available: bool,
    pub created_at: Timestamp,
}

/// A menu item left-joined with its rating aggregate.
///
/// The aggregate columns are all `NULL` when the item has never been rated.
#[derive(Debug, Clone, FromRow)]
pub struct MenuItemWithRating {
    pub id: DbId,
    pub category_id: Option<DbId>,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Decimal,
    pub image: Option<String>,
    pub cook_time_minutes: Option<i32>,
    pub avg_rating: Option<Decimal>,
    pub total_count: Option<i64>,
    pub counts: Option<Json<RatingCounts>>,
}

impl MenuItemWithRating {
    /// The joined aggregate, if one exists.
    pub fn rating(&self) -> Option<RatingSummary> {
        let avg = self.avg_rating?;
        Some(RatingSummary {
            avg,
            total: self.total_count.unwrap_or(0),
            counts: self
                .counts
                .as_ref()
                .map(|c| c.0.clone())
                .unwrap_or_default(),
        })
    }
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

/// One item as it appears in the menu response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub id: DbId,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Decimal,
    pub image: Option<String>,
    /// Preparation time in minutes.
    pub cook_time: Option<i32>,
    pub rating: Option<RatingSummary>,
}

impl From<MenuItemWithRating> for MenuEntry {
    fn from(row: MenuItemWithRating) -> Self {
        let rating = row.rating();
        MenuEntry {
            id: row.id,
            name: row.name,
            slug: row.slug,
            description: row.description,
            price: row.price,
            image: row.image,
            cook_time: row.cook_time_minutes,
            rating,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for inserting a menu item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMenuItem {
    pub restaurant_id: DbId,
    pub category_id: Option<DbId>,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Decimal,
    pub image: Option<String>,
    pub cook_time_minutes: Option<i32>,
    /// Defaults to `true`.
    pub available: Option<bool>,
}
