use axum::routing::post;
use axum::Router;

use crate::handlers::order;
use crate::state::AppState;

/// Order routes mounted at `/orders`.
///
/// ```text
/// POST   /                  -> create_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(order::create_order))
}
