//! Repository tests for tables and visits.

mod common;

use cardapio_core::visit::{generate_session_token, occupancy_cutoff};
use cardapio_db::models::visit::CreateVisit;
use cardapio_db::repositories::{RestaurantRepo, TableRepo, VisitRepo};
use chrono::{Duration, SubsecRound, Utc};
use sqlx::PgPool;

fn new_visit(restaurant_id: i64, table_id: i64, created_at: chrono::DateTime<Utc>) -> CreateVisit {
    CreateVisit {
        restaurant_id,
        table_id,
        session_token: generate_session_token(),
        ip: Some("10.0.0.7".to_string()),
        user_agent: Some("test-agent".to_string()),
        created_at,
    }
}

// ---------------------------------------------------------------------------
// Restaurant lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_restaurant_lookup_by_slug_and_default(pool: PgPool) {
    assert!(RestaurantRepo::find_default(&pool).await.unwrap().is_none());

    let first = common::restaurant(&pool, "minha-lanchonete").await;
    let _second = common::restaurant(&pool, "outro-lugar").await;

    let found = RestaurantRepo::find_by_slug(&pool, "minha-lanchonete")
        .await
        .unwrap()
        .expect("slug should resolve");
    assert_eq!(found.id, first.id);

    assert!(RestaurantRepo::find_by_slug(&pool, "unknown-slug")
        .await
        .unwrap()
        .is_none());

    let default = RestaurantRepo::find_default(&pool).await.unwrap().unwrap();
    assert_eq!(default.id, first.id, "default is the oldest restaurant");
}

// ---------------------------------------------------------------------------
// Table lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_qr_lookup_ignores_inactive_tables(pool: PgPool) {
    let r = common::restaurant(&pool, "bistro").await;
    let active = common::table(&pool, r.id, 1, Some("qr-active"), true).await;
    common::table(&pool, r.id, 2, Some("qr-inactive"), false).await;

    let found = TableRepo::find_active_by_qr(&pool, "qr-active")
        .await
        .unwrap()
        .expect("active table should match");
    assert_eq!(found.id, active.id);

    assert!(TableRepo::find_active_by_qr(&pool, "qr-inactive")
        .await
        .unwrap()
        .is_none());
    assert!(TableRepo::find_active_by_qr(&pool, "qr-missing")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_number_lookup_is_scoped_to_restaurant(pool: PgPool) {
    let a = common::restaurant(&pool, "a").await;
    let b = common::restaurant(&pool, "b").await;
    let table_a = common::table(&pool, a.id, 5, None, true).await;
    let table_b = common::table(&pool, b.id, 5, None, false).await;

    let found_a = TableRepo::find_by_number(&pool, a.id, 5).await.unwrap().unwrap();
    let found_b = TableRepo::find_by_number(&pool, b.id, 5).await.unwrap().unwrap();
    assert_eq!(found_a.id, table_a.id);
    assert_eq!(found_b.id, table_b.id);
    assert!(!found_b.active, "number lookup returns inactive tables too");

    assert!(TableRepo::find_by_number(&pool, a.id, 6).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Visits
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_visit_create_and_find_by_token(pool: PgPool) {
    let r = common::restaurant(&pool, "bistro").await;
    let t = common::table(&pool, r.id, 1, None, true).await;

    let input = new_visit(r.id, t.id, Utc::now());
    let visit = VisitRepo::create(&pool, &input).await.unwrap();
    assert_eq!(visit.session_token, input.session_token);
    assert_eq!(visit.ip.as_deref(), Some("10.0.0.7"));

    let found = VisitRepo::find_by_session_token(&pool, &input.session_token)
        .await
        .unwrap()
        .expect("token should resolve");
    assert_eq!(found.id, visit.id);
    assert_eq!(found.table_id, t.id);

    assert!(VisitRepo::find_by_session_token(&pool, "not-a-token")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_recent_visit_window(pool: PgPool) {
    let r = common::restaurant(&pool, "bistro").await;
    let t = common::table(&pool, r.id, 1, None, true).await;
    let now = Utc::now();
    let window = Duration::hours(6);

    assert!(!VisitRepo::has_visit_since(&pool, t.id, occupancy_cutoff(now, window))
        .await
        .unwrap());

    // Seven hours old: outside the window.
    VisitRepo::create(&pool, &new_visit(r.id, t.id, now - Duration::hours(7)))
        .await
        .unwrap();
    assert!(!VisitRepo::has_visit_since(&pool, t.id, occupancy_cutoff(now, window))
        .await
        .unwrap());

    // Ten minutes old: inside.
    VisitRepo::create(&pool, &new_visit(r.id, t.id, now - Duration::minutes(10)))
        .await
        .unwrap();
    assert!(VisitRepo::has_visit_since(&pool, t.id, occupancy_cutoff(now, window))
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_visit_exactly_at_cutoff_does_not_mark_table_in_use(pool: PgPool) {
    let r = common::restaurant(&pool, "bistro").await;
    let t = common::table(&pool, r.id, 1, None, true).await;
    // Whole seconds, so the stored timestamp matches the cutoff exactly.
    let now = Utc::now().trunc_subsecs(0);
    let cutoff = occupancy_cutoff(now, Duration::hours(6));

    VisitRepo::create(&pool, &new_visit(r.id, t.id, cutoff))
        .await
        .unwrap();
    assert!(!VisitRepo::has_visit_since(&pool, t.id, cutoff).await.unwrap());

    VisitRepo::create(&pool, &new_visit(r.id, t.id, cutoff + Duration::seconds(1)))
        .await
        .unwrap();
    assert!(VisitRepo::has_visit_since(&pool, t.id, cutoff).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_multiple_visits_per_table_are_kept(pool: PgPool) {
    let r = common::restaurant(&pool, "bistro").await;
    let t = common::table(&pool, r.id, 1, None, true).await;

    let first = VisitRepo::create(&pool, &new_visit(r.id, t.id, Utc::now()))
        .await
        .unwrap();
    let second = VisitRepo::create(&pool, &new_visit(r.id, t.id, Utc::now()))
        .await
        .unwrap();
    assert_ne!(first.session_token, second.session_token);

    let visits = VisitRepo::list_for_table(&pool, t.id).await.unwrap();
    assert_eq!(visits.len(), 2);
    assert!(TableRepo::set_active(&pool, t.id, false).await.unwrap());
}
