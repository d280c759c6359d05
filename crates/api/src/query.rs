//! Shared query parameter types for API handlers.

use cardapio_core::types::DbId;
use serde::Deserialize;

/// Restaurant selector for read endpoints (`?slug=` or `?restaurant_id=`).
///
/// A non-blank slug wins over the id. A non-positive id counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct RestaurantParams {
    pub slug: Option<String>,
    pub restaurant_id: Option<DbId>,
}

impl RestaurantParams {
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn restaurant_id(&self) -> Option<DbId> {
        self.restaurant_id.filter(|id| *id > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_slug_and_zero_id_are_absent() {
        let params = RestaurantParams {
            slug: Some("  ".into()),
            restaurant_id: Some(0),
        };
        assert_eq!(params.slug(), None);
        assert_eq!(params.restaurant_id(), None);
    }
}
