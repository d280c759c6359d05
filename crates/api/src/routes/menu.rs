use axum::routing::get;
use axum::Router;

use crate::handlers::menu;
use crate::state::AppState;

/// Menu routes mounted at `/menu`.
///
/// ```text
/// GET    /?slug=            -> get_menu
/// GET    /?restaurant_id=   -> get_menu
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(menu::get_menu))
}
