use axum::routing::post;
use axum::Router;

use crate::handlers::rating;
use crate::state::AppState;

/// Rating routes mounted at `/ratings`.
///
/// ```text
/// POST   /                  -> create_rating
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(rating::create_rating))
}
