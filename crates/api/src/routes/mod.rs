pub mod health;
pub mod menu;
pub mod orders;
pub mod ratings;
pub mod visits;

use axum::Router;

use crate::state::AppState;

/// Build the diner-facing route tree.
///
/// Mounted twice by the app router: at the root and under `/api`.
///
/// ```text
/// /visits                      open a visit (POST)
/// /menu                        menu for a restaurant (GET)
/// /orders                      place an order (POST)
/// /ratings                     rate a menu item (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/visits", visits::router())
        .nest("/menu", menu::router())
        .nest("/orders", orders::router())
        .nest("/ratings", ratings::router())
}
