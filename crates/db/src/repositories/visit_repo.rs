//! Repository for the `visits` table.

use cardapio_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::visit::{CreateVisit, Visit};

/// Column list for `visits` queries.
const COLUMNS: &str = "id, restaurant_id, table_id, session_token, ip, user_agent, created_at";

/// Provides inserts and lookups for visits.
pub struct VisitRepo;

impl VisitRepo {
    /// Insert a new visit.
    pub async fn create(pool: &PgPool, input: &CreateVisit) -> Result<Visit, sqlx::Error> {
        let query = format!(
            "INSERT INTO visits \
                (restaurant_id, table_id, session_token, ip, user_agent, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Visit>(&query)
            .bind(input.restaurant_id)
            .bind(input.table_id)
            .bind(&input.session_token)
            .bind(&input.ip)
            .bind(&input.user_agent)
            .bind(input.created_at)
            .fetch_one(pool)
            .await
    }

    /// Find the visit that issued a session token.
    pub async fn find_by_session_token(
        pool: &PgPool,
        session_token: &str,
    ) -> Result<Option<Visit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM visits WHERE session_token = $1");
        sqlx::query_as::<_, Visit>(&query)
            .bind(session_token)
            .fetch_optional(pool)
            .await
    }

    /// Whether any visit for the table was created strictly after `since`.
    pub async fn has_visit_since(
        pool: &PgPool,
        table_id: DbId,
        since: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (\
                SELECT 1 FROM visits WHERE table_id = $1 AND created_at > $2\
             )",
        )
        .bind(table_id)
        .bind(since)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// List all visits for a table, newest first.
    pub async fn list_for_table(pool: &PgPool, table_id: DbId) -> Result<Vec<Visit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM visits WHERE table_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Visit>(&query)
            .bind(table_id)
            .fetch_all(pool)
            .await
    }
}
