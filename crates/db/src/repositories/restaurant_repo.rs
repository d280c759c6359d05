//! Repository for the `restaurants` table.

use cardapio_core::types::DbId;
use sqlx::PgPool;

use crate::models::restaurant::{CreateRestaurant, Restaurant};

/// Column list for `restaurants` queries.
const COLUMNS: &str = "id, slug, name, created_at";

/// Provides lookups for restaurants.
pub struct RestaurantRepo;

impl RestaurantRepo {
    /// Insert a new restaurant.
    pub async fn create(pool: &PgPool, input: &CreateRestaurant) -> Result<Restaurant, sqlx::Error> {
        let query = format!(
            "INSERT INTO restaurants (slug, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(&input.slug)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a restaurant by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants WHERE id = $1");
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a restaurant by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants WHERE slug = $1");
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// The restaurant used when a request names none: the oldest one.
    ///
    /// Only meaningful for single-restaurant deployments.
    pub async fn find_default(pool: &PgPool) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Restaurant>(&query)
            .fetch_optional(pool)
            .await
    }
}
