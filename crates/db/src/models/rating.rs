//! Rating log and aggregate rows.

use cardapio_core::rating::{RatingCounts, RatingSummary};
use cardapio_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the append-only `ratings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rating {
    pub id: DbId,
    pub item_id: DbId,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for appending a rating.
#[derive(Debug, Clone)]
pub struct CreateRating {
    pub item_id: DbId,
    pub rating: i16,
    pub comment: Option<String>,
}

/// A row from the `item_rating_aggregates` table.
#[derive(Debug, Clone, FromRow)]
pub struct ItemRatingAggregate {
    pub item_id: DbId,
    pub avg_rating: Decimal,
    pub total_count: i64,
    pub counts: Json<RatingCounts>,
    pub updated_at: Timestamp,
}

impl From<ItemRatingAggregate> for RatingSummary {
    fn from(row: ItemRatingAggregate) -> Self {
        RatingSummary {
            avg: row.avg_rating,
            total: row.total_count,
            counts: row.counts.0,
        }
    }
}
