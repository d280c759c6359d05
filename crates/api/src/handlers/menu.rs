//! Handler for the diner-facing menu.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use cardapio_core::error::CoreError;
use cardapio_core::menu::{assemble_menu, CategoryRef, MenuSection};
use cardapio_db::models::menu_item::MenuEntry;
use cardapio_db::models::restaurant::Restaurant;
use cardapio_db::repositories::{CategoryRepo, MenuItemRepo, RestaurantRepo};

use crate::error::{AppError, AppResult};
use crate::query::RestaurantParams;
use crate::state::AppState;

/// GET /menu?slug= or GET /menu?restaurant_id=
///
/// Active categories in display order, each with its available items and
/// their rating summary. Orphaned items are grouped in a trailing section.
pub async fn get_menu(
    State(state): State<AppState>,
    params: Result<Query<RestaurantParams>, QueryRejection>,
) -> AppResult<Json<Vec<MenuSection<MenuEntry>>>> {
    let Query(params) = params?;
    let restaurant = resolve_restaurant(&state, &params).await?;

    let categories = CategoryRepo::list_active(&state.pool, restaurant.id).await?;
    let items = MenuItemRepo::list_available_with_rating(&state.pool, restaurant.id).await?;

    let item_count = items.len();
    let menu = assemble_menu(
        categories.into_iter().map(CategoryRef::from).collect(),
        items
            .into_iter()
            .map(|row| (row.category_id, MenuEntry::from(row))),
        &state.config.uncategorized_label,
    );

    tracing::debug!(
        restaurant_id = restaurant.id,
        sections = menu.len(),
        items = item_count,
        "Menu assembled",
    );

    Ok(Json(menu))
}

/// Slug first, then id. The menu never falls back to a default restaurant.
async fn resolve_restaurant(state: &AppState, params: &RestaurantParams) -> AppResult<Restaurant> {
    let restaurant = if let Some(slug) = params.slug() {
        RestaurantRepo::find_by_slug(&state.pool, slug).await?
    } else if let Some(id) = params.restaurant_id() {
        RestaurantRepo::find_by_id(&state.pool, id).await?
    } else {
        return Err(AppError::Core(CoreError::MissingRestaurantSelector));
    };

    restaurant.ok_or(AppError::Core(CoreError::RestaurantNotFound))
}
