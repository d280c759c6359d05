use axum::routing::post;
use axum::Router;

use crate::handlers::visit;
use crate::state::AppState;

/// Visit routes mounted at `/visits`.
///
/// ```text
/// POST   /                  -> create_visit
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(visit::create_visit))
}
