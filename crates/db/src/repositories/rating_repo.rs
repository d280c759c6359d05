//! Repository for the `ratings` log and `item_rating_aggregates` view.

use cardapio_core::rating::RatingSummary;
use cardapio_core::types::DbId;
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use crate::models::rating::{CreateRating, ItemRatingAggregate, Rating};

/// Column list for `ratings` queries.
const RATING_COLUMNS: &str = "id, item_id, rating, comment, created_at";

/// Column list for `item_rating_aggregates` queries.
const AGGREGATE_COLUMNS: &str = "item_id, avg_rating, total_count, counts, updated_at";

/// Provides rating submission and aggregate maintenance.
pub struct RatingRepo;

impl RatingRepo {
    /// Append a rating and rebuild the item's aggregate in one transaction.
    ///
    /// The aggregate is recomputed from the full log, so a concurrent
    /// submission that commits last still leaves a self-consistent row.
    pub async fn submit(pool: &PgPool, input: &CreateRating) -> Result<RatingSummary, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("INSERT INTO ratings (item_id, rating, comment) VALUES ($1, $2, $3)")
            .bind(input.item_id)
            .bind(input.rating)
            .bind(&input.comment)
            .execute(&mut *tx)
            .await?;

        let summary = Self::rebuild_aggregate(&mut tx, input.item_id).await?;

        tx.commit().await?;
        Ok(summary)
    }

    /// Rebuild an item's aggregate from its log without adding a rating.
    pub async fn recompute(pool: &PgPool, item_id: DbId) -> Result<RatingSummary, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::rebuild_aggregate(&mut conn, item_id).await
    }

    /// Fetch the stored aggregate for an item.
    pub async fn find_aggregate(
        pool: &PgPool,
        item_id: DbId,
    ) -> Result<Option<ItemRatingAggregate>, sqlx::Error> {
        let query =
            format!("SELECT {AGGREGATE_COLUMNS} FROM item_rating_aggregates WHERE item_id = $1");
        sqlx::query_as::<_, ItemRatingAggregate>(&query)
            .bind(item_id)
            .fetch_optional(pool)
            .await
    }

    /// List the raw ratings for an item, oldest first.
    pub async fn list_for_item(pool: &PgPool, item_id: DbId) -> Result<Vec<Rating>, sqlx::Error> {
        let query =
            format!("SELECT {RATING_COLUMNS} FROM ratings WHERE item_id = $1 ORDER BY id");
        sqlx::query_as::<_, Rating>(&query)
            .bind(item_id)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn rebuild_aggregate(
        conn: &mut PgConnection,
        item_id: DbId,
    ) -> Result<RatingSummary, sqlx::Error> {
        let counts: Vec<(i16, i64)> = sqlx::query_as(
            "SELECT rating, COUNT(*) FROM ratings WHERE item_id = $1 GROUP BY rating",
        )
        .bind(item_id)
        .fetch_all(&mut *conn)
        .await?;

        let summary = RatingSummary::from_counts(counts);
        Self::upsert_aggregate(conn, item_id, &summary).await?;

        tracing::debug!(item_id, total = summary.total, avg = %summary.avg, "Rebuilt rating aggregate");
        Ok(summary)
    }

    /// Replace the aggregate row wholesale.
    async fn upsert_aggregate(
        conn: &mut PgConnection,
        item_id: DbId,
        summary: &RatingSummary,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO item_rating_aggregates (item_id, avg_rating, total_count, counts) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (item_id) DO UPDATE SET \
                 avg_rating = EXCLUDED.avg_rating, \
                 total_count = EXCLUDED.total_count, \
                 counts = EXCLUDED.counts, \
                 updated_at = NOW()",
        )
        .bind(item_id)
        .bind(summary.avg)
        .bind(summary.total)
        .bind(Json(&summary.counts))
        .execute(conn)
        .await?;
        Ok(())
    }
}
