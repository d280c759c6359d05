//! Handler for placing orders against an open visit.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cardapio_core::error::CoreError;
use cardapio_core::ordering::{clamp_quantity, validate_order_request};
use cardapio_core::types::LooseInt;
use cardapio_db::models::order::{NewOrder, NewOrderLine};
use cardapio_db::repositories::{OrderRepo, VisitRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /orders`.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub session_token: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderLineRequest>,
    pub notes: Option<String>,
}

/// One requested line.
///
/// Numbers may arrive as strings. An `item_id` that is missing or not numeric
/// resolves to id 0, which never matches and is skipped; a non-numeric `qty`
/// counts as absent.
#[derive(Debug, Deserialize)]
pub struct OrderLineRequest {
    pub item_id: Option<LooseInt>,
    pub qty: Option<LooseInt>,
    pub notes: Option<String>,
}

/// POST /orders
///
/// Price the requested lines from the current menu and store the order in
/// one transaction. Returns 201 with the order id, total and any item ids
/// that were left out.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let session_token = validate_order_request(input.session_token.as_deref(), &input.items)?;

    let visit = VisitRepo::find_by_session_token(&state.pool, session_token)
        .await?
        .ok_or(AppError::Core(CoreError::InvalidSession))?;

    let order = NewOrder {
        restaurant_id: visit.restaurant_id,
        table_id: visit.table_id,
        session_token: visit.session_token,
        notes: input.notes,
    };
    let lines: Vec<NewOrderLine> = input
        .items
        .into_iter()
        .map(|line| NewOrderLine {
            item_id: line.item_id.and_then(|id| id.value()).unwrap_or(0),
            qty: clamp_quantity(line.qty.and_then(|q| q.value_as())),
            notes: line.notes,
        })
        .collect();

    let placed = OrderRepo::place(&state.pool, &order, &lines)
        .await
        .map_err(|e| CoreError::OrderFailed(e.to_string()))?;

    tracing::info!(
        order_id = placed.order_id,
        visit_id = visit.id,
        table_id = order.table_id,
        total = %placed.total,
        lines = lines.len(),
        skipped = placed.skipped_items.len(),
        "Order placed",
    );

    Ok((StatusCode::CREATED, Json(placed)))
}
