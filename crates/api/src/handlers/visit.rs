//! Handler for opening a visit (a seating session at a table).
//!
//! The table is resolved from a QR token or from a table number. A fresh
//! session token is issued on every call; `in_use` only reports whether the
//! table saw another visit inside the occupancy window.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use cardapio_core::error::CoreError;
use cardapio_core::types::DbId;
use cardapio_core::visit::{
    generate_session_token, occupancy_cutoff, TableLabel, TableNumberInput, TableSelector,
};
use cardapio_db::models::restaurant::Restaurant;
use cardapio_db::models::table::RestaurantTable;
use cardapio_db::models::visit::CreateVisit;
use cardapio_db::repositories::{RestaurantRepo, TableRepo, VisitRepo};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::client::ClientInfo;
use crate::state::AppState;

/// Request body for `POST /visits`.
#[derive(Debug, Deserialize)]
pub struct CreateVisitRequest {
    pub qr_token: Option<String>,
    pub table_number: Option<TableNumberInput>,
    pub restaurant_slug: Option<String>,
}

/// Response body for `POST /visits`.
#[derive(Debug, Serialize)]
pub struct VisitResponse {
    pub session_token: String,
    pub restaurant_id: DbId,
    pub table_id: DbId,
    pub in_use: bool,
}

/// POST /visits
///
/// Resolve the table and open a new visit for it.
pub async fn create_visit(
    State(state): State<AppState>,
    client: ClientInfo,
    payload: Result<Json<CreateVisitRequest>, JsonRejection>,
) -> AppResult<Json<VisitResponse>> {
    let Json(input) = payload?;

    let selector = TableSelector::from_request(
        input.qr_token.as_deref(),
        input.table_number.as_ref(),
        input.restaurant_slug.as_deref(),
    )?;
    let table = resolve_table(&state, selector).await?;

    let now = Utc::now();
    let in_use = VisitRepo::has_visit_since(
        &state.pool,
        table.id,
        occupancy_cutoff(now, state.config.occupancy_window()),
    )
    .await?;

    let visit = VisitRepo::create(
        &state.pool,
        &CreateVisit {
            restaurant_id: table.restaurant_id,
            table_id: table.id,
            session_token: generate_session_token(),
            ip: client.ip,
            user_agent: client.user_agent,
            created_at: now,
        },
    )
    .await?;

    tracing::info!(
        visit_id = visit.id,
        restaurant_id = visit.restaurant_id,
        table_id = visit.table_id,
        in_use,
        "Visit opened",
    );

    Ok(Json(VisitResponse {
        session_token: visit.session_token,
        restaurant_id: visit.restaurant_id,
        table_id: visit.table_id,
        in_use,
    }))
}

// ---------------------------------------------------------------------------
// Resolution helpers
// ---------------------------------------------------------------------------

async fn resolve_table(state: &AppState, selector: TableSelector<'_>) -> AppResult<RestaurantTable> {
    match selector {
        TableSelector::Qr(qr) => TableRepo::find_active_by_qr(&state.pool, qr)
            .await?
            .ok_or(AppError::Core(CoreError::InvalidQr)),
        TableSelector::Number {
            label,
            restaurant_slug,
        } => {
            let restaurant = resolve_restaurant(state, restaurant_slug).await?;

            let TableLabel::Number(number) = label else {
                return Err(AppError::Core(CoreError::TableNotFound));
            };

            let table = TableRepo::find_by_number(&state.pool, restaurant.id, number)
                .await?
                .ok_or(AppError::Core(CoreError::TableNotFound))?;

            if !table.active {
                return Err(AppError::Core(CoreError::TableInactive));
            }
            Ok(table)
        }
    }
}

/// Resolve by slug, or fall back to the first restaurant when allowed.
async fn resolve_restaurant(state: &AppState, slug: Option<&str>) -> AppResult<Restaurant> {
    if let Some(slug) = slug {
        return RestaurantRepo::find_by_slug(&state.pool, slug)
            .await?
            .ok_or(AppError::Core(CoreError::RestaurantNotFound));
    }

    if !state.config.allow_default_restaurant {
        return Err(AppError::Core(CoreError::MissingRestaurantSelector));
    }

    RestaurantRepo::find_default(&state.pool)
        .await?
        .ok_or(AppError::Core(CoreError::NoRestaurantConfigured))
}
