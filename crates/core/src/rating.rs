//! Rating validation and aggregate math.
//!
//! An item's aggregate (mean, total, per-score histogram) is a materialized
//! view over its append-only rating log. It is always rebuilt from the full
//! per-score counts, never adjusted incrementally.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Lowest accepted score.
pub const MIN_SCORE: i16 = 1;

/// Highest accepted score.
pub const MAX_SCORE: i16 = 5;

/// Decimal places kept on the mean.
pub const AVG_DECIMAL_PLACES: u32 = 2;

/// Score value → number of ratings with that score.
///
/// Serializes with string keys (`{"5": 3, "3": 1}`).
pub type RatingCounts = BTreeMap<i16, i64>;

/// Validate a rating submission, returning the item id and score.
pub fn validate_rating_input(
    item_id: Option<DbId>,
    score: Option<i16>,
) -> Result<(DbId, i16), CoreError> {
    let item_id = item_id
        .filter(|id| *id > 0)
        .ok_or(CoreError::InvalidRatingInput)?;
    let score = score
        .filter(|s| (MIN_SCORE..=MAX_SCORE).contains(s))
        .ok_or(CoreError::InvalidRatingInput)?;
    Ok((item_id, score))
}

/// Derived rating summary for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub avg: Decimal,
    pub total: i64,
    pub counts: RatingCounts,
}

impl RatingSummary {
    /// Summary for an item with no ratings.
    pub fn empty() -> Self {
        Self {
            avg: Decimal::ZERO,
            total: 0,
            counts: RatingCounts::new(),
        }
    }

    /// Build a summary from per-score counts.
    ///
    /// Zero counts are dropped so the histogram only lists scores that were
    /// actually given.
    pub fn from_counts(counts: impl IntoIterator<Item = (i16, i64)>) -> Self {
        let counts: RatingCounts = counts.into_iter().filter(|(_, c)| *c > 0).collect();
        let total: i64 = counts.values().sum();
        if total == 0 {
            return Self::empty();
        }

        let weighted: i64 = counts
            .iter()
            .map(|(score, count)| i64::from(*score) * count)
            .sum();
        let avg = (Decimal::from(weighted) / Decimal::from(total))
            .round_dp_with_strategy(AVG_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

        Self { avg, total, counts }
    }
}
