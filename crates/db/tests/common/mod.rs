//! Fixture builders shared by the repository tests.

#![allow(dead_code)]

use cardapio_core::types::DbId;
use cardapio_db::models::category::{Category, CreateCategory};
use cardapio_db::models::menu_item::{CreateMenuItem, MenuItem};
use cardapio_db::models::restaurant::{CreateRestaurant, Restaurant};
use cardapio_db::models::table::{CreateRestaurantTable, RestaurantTable};
use cardapio_db::repositories::{CategoryRepo, MenuItemRepo, RestaurantRepo, TableRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;

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

pub async fn category(
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
            cook_time_minutes: Some(15),
            available: None,
        },
    )
    .await
    .unwrap()
}
