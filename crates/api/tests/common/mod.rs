//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use cardapio_core::types::DbId;
use cardapio_db::models::category::{Category, CreateCategory};
use cardapio_db::models::menu_item::{CreateMenuItem, MenuItem};
use cardapio_db::models::restaurant::{CreateRestaurant, Restaurant};
use cardapio_db::models::table::{CreateRestaurantTable, RestaurantTable};
use cardapio_db::repositories::{CategoryRepo, MenuItemRepo, RestaurantRepo, TableRepo};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tower::ServiceExt;

use cardapio_api::config::{LogFormat, ServerConfig};
use cardapio_api::router::build_app_router;
use cardapio_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        occupancy_window_hours: 6,
        allow_default_restaurant: true,
        uncategorized_label: "Outros".to_string(),
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router, using the given database pool.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Same as [`build_test_app`] with a custom configuration.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, &body.to_string()).await
}

/// POST an arbitrary body with a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn restaurant(pool: &PgPool, slug: &str) -> Restaurant {
    RestaurantRepo::create(
        pool,
        &CreateRestaurant {
            slug: slug.to_string(),
            name: format!("Restaurant {slug}"),
        },
    )
    .await
    .unwrap()
}

pub async fn table(
    pool: &PgPool,
    restaurant_id: DbId,
    number: i32,
    qr_code: Option<&str>,
    active: bool,
) -> RestaurantTable {
    TableRepo::create(
        pool,
        &CreateRestaurantTable {
            restaurant_id,
            number,
            qr_code: qr_code.map(str::to_string),
            active: Some(active),
        },
    )
    .await
    .unwrap()
}

pub async fn category(pool: &PgPool, restaurant_id: DbId, name: &str, position: i32) -> Category {
    category_with_status(pool, restaurant_id, name, position, true).await
}

pub async fn category_with_status(
    pool: &PgPool,
    restaurant_id: DbId,
    name: &str,
    position: i32,
    active: bool,
) -> Category {
    CategoryRepo::create(
        pool,
        &CreateCategory {
            restaurant_id,
            name: name.to_string(),
            slug: Some(name.to_lowercase()),
            position: Some(position),
            active: Some(active),
        },
    )
    .await
    .unwrap()
}

pub async fn menu_item(
    pool: &PgPool,
    restaurant_id: DbId,
    category_id: Option<DbId>,
    name: &str,
    price: Decimal,
) -> MenuItem {
    MenuItemRepo::create(
        pool,
        &CreateMenuItem {
            restaurant_id,
            category_id,
            name: name.to_string(),
            slug: Some(name.to_lowercase().replace(' ', "-")),
            description: None,
            price,
            image: None,
            cook_time_minutes: Some(12),
            available: None,
        },
    )
    .await
    .unwrap()
}

/// Open a visit through the API and return its session token.
pub async fn open_visit(pool: &PgPool, qr_token: &str) -> String {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/visits", serde_json::json!({ "qr_token": qr_token })).await;
    let json = body_json(response).await;
    json["session_token"].as_str().unwrap().to_string()
}
