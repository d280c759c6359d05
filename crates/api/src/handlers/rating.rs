//! Handler for diner ratings of menu items.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use cardapio_core::error::CoreError;
use cardapio_core::rating::{validate_rating_input, RatingSummary};
use cardapio_core::types::LooseInt;
use cardapio_db::models::rating::CreateRating;
use cardapio_db::repositories::RatingRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for `POST /ratings`.
#[derive(Debug, Deserialize)]
pub struct CreateRatingRequest {
    pub item_id: Option<LooseInt>,
    pub rating: Option<LooseInt>,
    pub comment: Option<String>,
}

/// Response body: `{"status": "ok", "avg", "total", "counts"}`.
#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub summary: RatingSummary,
}

/// POST /ratings
///
/// Record a rating and return the item's refreshed aggregate.
pub async fn create_rating(
    State(state): State<AppState>,
    payload: Result<Json<CreateRatingRequest>, JsonRejection>,
) -> AppResult<Json<RatingResponse>> {
    let Json(input) = payload?;
    let (item_id, rating) = validate_rating_input(
        input.item_id.and_then(|id| id.value()),
        input.rating.and_then(|r| r.value_as()),
    )?;

    let summary = RatingRepo::submit(
        &state.pool,
        &CreateRating {
            item_id,
            rating,
            comment: input.comment,
        },
    )
    .await
    .map_err(|e| CoreError::RatingFailed(e.to_string()))?;

    tracing::info!(item_id, rating, avg = %summary.avg, total = summary.total, "Rating recorded");

    Ok(Json(RatingResponse {
        status: "ok",
        summary,
    }))
}
