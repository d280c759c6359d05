//! Order line pricing.
//!
//! Unit prices are snapshotted from the menu at order time, so later price
//! changes never alter a committed order. The order total is always the sum
//! of the priced lines and is never taken from the client.

use rust_decimal::Decimal;

use crate::error::CoreError;
use crate::types::DbId;

/// Status assigned to every newly created order.
pub const ORDER_STATUS_SUBMITTED: &str = "submitted";

/// Clamp a requested quantity to at least one. Absent means one.
pub fn clamp_quantity(qty: Option<i32>) -> i32 {
    qty.unwrap_or(1).max(1)
}

/// Reject order requests with no session token or no lines.
///
/// Returns the trimmed session token.
pub fn validate_order_request<'a, T>(
    session_token: Option<&'a str>,
    items: &[T],
) -> Result<&'a str, CoreError> {
    let token = session_token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(CoreError::MissingSessionOrItems)?;
    if items.is_empty() {
        return Err(CoreError::MissingSessionOrItems);
    }
    Ok(token)
}

/// One order line with its snapshotted price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine {
    pub item_id: DbId,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

impl PricedLine {
    pub fn new(item_id: DbId, quantity: i32, unit_price: Decimal) -> Self {
        Self {
            item_id,
            quantity,
            unit_price,
            line_total: unit_price * Decimal::from(quantity),
        }
    }
}

/// Running total for an order being assembled.
///
/// Also records which requested item ids could not be priced. Unknown items
/// are dropped from the order rather than failing it, so a client with a
/// stale menu still gets the rest of its order placed.
#[derive(Debug, Clone, Default)]
pub struct OrderTally {
    total: Decimal,
    skipped: Vec<DbId>,
}

impl OrderTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, line: &PricedLine) {
        self.total += line.line_total;
    }

    pub fn skip(&mut self, item_id: DbId) {
        self.skipped.push(item_id);
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn into_parts(self) -> (Decimal, Vec<DbId>) {
        (self.total, self.skipped)
    }
}
