//! Visit (seating session) rows.

use cardapio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `visits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Visit {
    pub id: DbId,
    pub restaurant_id: DbId,
    pub table_id: DbId,
    pub session_token: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a visit.
///
/// `created_at` is supplied by the caller so the occupancy check and the
/// insert observe the same instant.
#[derive(Debug, Clone)]
pub struct CreateVisit {
    pub restaurant_id: DbId,
    pub table_id: DbId,
    pub session_token: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: Timestamp,
}
