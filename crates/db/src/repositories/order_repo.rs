//! Repository for the `orders` and `order_items` tables.
//!
//! Orders are written as a single unit of work: the header, every priced
//! line and the final total either all commit or none do.

use cardapio_core::ordering::{OrderTally, PricedLine, ORDER_STATUS_SUBMITTED};
use cardapio_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::order::{NewOrder, NewOrderLine, Order, OrderItem, PlacedOrder};
use crate::repositories::MenuItemRepo;

/// Column list for `orders` queries.
const ORDER_COLUMNS: &str = "\
    id, restaurant_id, table_id, session_token, status, total, notes, created_at";

/// Column list for `order_items` queries.
const ITEM_COLUMNS: &str = "id, order_id, item_id, qty, unit_price, total_price, notes";

/// Provides order placement and read-back.
pub struct OrderRepo;

impl OrderRepo {
    /// Place an order with its lines in one transaction.
    ///
    /// Lines whose item id does not resolve are skipped and reported in
    /// [`PlacedOrder::skipped_items`]. On any error the transaction is
    /// rolled back before the error is returned.
    pub async fn place(
        pool: &PgPool,
        order: &NewOrder,
        lines: &[NewOrderLine],
    ) -> Result<PlacedOrder, sqlx::Error> {
        let mut tx = pool.begin().await?;

        match Self::place_inner(&mut tx, order, lines).await {
            Ok(placed) => {
                tx.commit().await?;
                Ok(placed)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(
                        error = %rollback_err,
                        "Order rollback failed, connection will discard the transaction",
                    );
                }
                Err(err)
            }
        }
    }

    /// Find an order by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the lines of an order in insertion order.
    pub async fn list_items(pool: &PgPool, order_id: DbId) -> Result<Vec<OrderItem>, sqlx::Error> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM order_items WHERE order_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, OrderItem>(&query)
            .bind(order_id)
            .fetch_all(pool)
            .await
    }

    /// List every order placed under a session token, oldest first.
    pub async fn list_for_session(
        pool: &PgPool,
        session_token: &str,
    ) -> Result<Vec<Order>, sqlx::Error> {
        let query = format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE session_token = $1 ORDER BY id"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(session_token)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn place_inner(
        tx: &mut Transaction<'_, Postgres>,
        order: &NewOrder,
        lines: &[NewOrderLine],
    ) -> Result<PlacedOrder, sqlx::Error> {
        // Total starts at zero and is overwritten before commit.
        let (order_id,): (DbId,) = sqlx::query_as(
            "INSERT INTO orders (restaurant_id, table_id, session_token, status, total, notes) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(order.restaurant_id)
        .bind(order.table_id)
        .bind(&order.session_token)
        .bind(ORDER_STATUS_SUBMITTED)
        .bind(Decimal::ZERO)
        .bind(&order.notes)
        .fetch_one(&mut **tx)
        .await?;

        let mut tally = OrderTally::new();

        for line in lines {
            let Some(unit_price) = MenuItemRepo::find_price(&mut **tx, line.item_id).await? else {
                tracing::warn!(order_id, item_id = line.item_id, "Skipping unknown menu item");
                tally.skip(line.item_id);
                continue;
            };

            let priced = PricedLine::new(line.item_id, line.qty, unit_price);
            Self::insert_item(tx, order_id, &priced, line.notes.as_deref()).await?;
            tally.add(&priced);
        }

        sqlx::query("UPDATE orders SET total = $2 WHERE id = $1")
            .bind(order_id)
            .bind(tally.total())
            .execute(&mut **tx)
            .await?;

        let (total, skipped_items) = tally.into_parts();
        Ok(PlacedOrder {
            order_id,
            total,
            skipped_items,
        })
    }

    async fn insert_item(
        tx: &mut Transaction<'_, Postgres>,
        order_id: DbId,
        line: &PricedLine,
        notes: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO order_items (order_id, item_id, qty, unit_price, total_price, notes) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(order_id)
        .bind(line.item_id)
        .bind(line.quantity)
        .bind(line.unit_price)
        .bind(line.line_total)
        .bind(notes)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
