//! Repository tests for categories and menu items.

mod common;

use cardapio_db::models::rating::CreateRating;
use cardapio_db::repositories::{CategoryRepo, MenuItemRepo, RatingRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_active_categories_order_by_position_then_insertion(pool: PgPool) {
    let r = common::restaurant(&pool, "bistro").await;
    let drinks = common::category(&pool, r.id, "Bebidas", 2, true).await;
    let salads = common::category(&pool, r.id, "Saladas", 1, true).await;
    let burgers = common::category(&pool, r.id, "Hamburgueres", 2, true).await;
    common::category(&pool, r.id, "Sobremesas", 0, false).await;

    let listed = CategoryRepo::list_active(&pool, r.id).await.unwrap();
    let ids: Vec<i64> = listed.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![salads.id, drinks.id, burgers.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_available_items_sorted_by_name_with_optional_rating(pool: PgPool) {
    let r = common::restaurant(&pool, "bistro").await;
    let other = common::restaurant(&pool, "other").await;
    let zucchini = common::menu_item(&pool, r.id, None, "Zucchini", Decimal::new(800, 2)).await;
    let apple = common::menu_item(&pool, r.id, None, "Apple pie", Decimal::new(450, 2)).await;
    common::menu_item(&pool, other.id, None, "Elsewhere", Decimal::ONE).await;

    sqlx::query("UPDATE menu_items SET available = false WHERE id = $1")
        .bind(zucchini.id)
        .execute(&pool)
        .await
        .unwrap();
    let bread = common::menu_item(&pool, r.id, None, "Bread", Decimal::new(150, 2)).await;

    RatingRepo::submit(
        &pool,
        &CreateRating {
            item_id: bread.id,
            rating: 4,
            comment: None,
        },
    )
    .await
    .unwrap();

    let items = MenuItemRepo::list_available_with_rating(&pool, r.id).await.unwrap();
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Apple pie", "Bread"]);

    assert!(items[0].rating().is_none(), "unrated item has no aggregate");
    assert_eq!(items[0].id, apple.id);

    let rating = items[1].rating().expect("rated item carries its aggregate");
    assert_eq!(rating.total, 1);
    assert_eq!(rating.avg, Decimal::new(4, 0));
    assert_eq!(rating.counts.get(&4), Some(&1));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_price_and_update_price(pool: PgPool) {
    let r = common::restaurant(&pool, "bistro").await;
    let item = common::menu_item(&pool, r.id, None, "Soup", Decimal::new(1500, 0)).await;

    let mut conn = pool.acquire().await.unwrap();
    assert_eq!(
        MenuItemRepo::find_price(&mut conn, item.id).await.unwrap(),
        Some(Decimal::new(1500, 0))
    );
    assert_eq!(MenuItemRepo::find_price(&mut conn, 999_999).await.unwrap(), None);
    drop(conn);

    assert!(MenuItemRepo::update_price(&pool, item.id, Decimal::new(1750, 0))
        .await
        .unwrap());
    let reloaded = MenuItemRepo::find_by_id(&pool, item.id).await.unwrap().unwrap();
    assert_eq!(reloaded.price, Decimal::new(1750, 0));
}
