//! Visit resolution primitives: session tokens, table selectors and the
//! advisory occupancy window.
//!
//! A visit is one seating at a table. The API resolves the table either from
//! a QR token or from a table number (optionally scoped by restaurant slug),
//! then always opens a fresh session. Whether the table "looks occupied" is
//! derived from recent visits and never enforced.

use chrono::Duration;
use rand::Rng;
use serde::Deserialize;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Random bytes per session token (128 bits).
pub const SESSION_TOKEN_BYTES: usize = 16;

/// Length of the hex-encoded session token.
pub const SESSION_TOKEN_LEN: usize = SESSION_TOKEN_BYTES * 2;

/// Default look-back for the `in_use` flag.
pub const DEFAULT_OCCUPANCY_WINDOW_HOURS: i64 = 6;

// ---------------------------------------------------------------------------
// Session tokens
// ---------------------------------------------------------------------------

/// Generate a new session token: 128 random bits, lowercase hex.
///
/// `rand::rng()` is a thread-local CSPRNG seeded from the OS.
pub fn generate_session_token() -> String {
    let bytes: [u8; SESSION_TOKEN_BYTES] = rand::rng().random();
    hex::encode(bytes)
}

// ---------------------------------------------------------------------------
// Table selection
// ---------------------------------------------------------------------------

/// A table number as sent by clients: either a JSON number or a string.
///
/// The browser prompt posts whatever the diner typed, so `"5"` and `5` must
/// both be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TableNumberInput {
    Number(i64),
    Text(String),
}

/// Parsed table label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLabel {
    Number(i32),
    /// Input was present but can never match a numeric label.
    Unmatchable,
}

impl TableNumberInput {
    /// Parse into a [`TableLabel`], or `None` when the input is blank.
    pub fn label(&self) -> Option<TableLabel> {
        match self {
            Self::Number(n) => Some(
                i32::try_from(*n)
                    .map(TableLabel::Number)
                    .unwrap_or(TableLabel::Unmatchable),
            ),
            Self::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return None;
                }
                Some(
                    s.parse::<i32>()
                        .map(TableLabel::Number)
                        .unwrap_or(TableLabel::Unmatchable),
                )
            }
        }
    }
}

/// How a visit request identifies its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSelector<'a> {
    /// Fast path: QR token. Never falls back to number lookup.
    Qr(&'a str),
    /// Table number, scoped by restaurant slug when one is given.
    Number {
        label: TableLabel,
        restaurant_slug: Option<&'a str>,
    },
}

impl<'a> TableSelector<'a> {
    /// Decide which resolution path a visit request takes.
    ///
    /// Blank strings count as absent. A non-blank QR token always wins.
    pub fn from_request(
        qr_token: Option<&'a str>,
        table_number: Option<&TableNumberInput>,
        restaurant_slug: Option<&'a str>,
    ) -> Result<Self, CoreError> {
        if let Some(qr) = non_blank(qr_token) {
            return Ok(Self::Qr(qr));
        }

        let label = table_number
            .and_then(TableNumberInput::label)
            .ok_or(CoreError::MissingTableNumber)?;

        Ok(Self::Number {
            label,
            restaurant_slug: non_blank(restaurant_slug),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Occupancy
// ---------------------------------------------------------------------------

/// Earliest visit creation time (exclusive) that still marks a table in use.
pub fn occupancy_cutoff(now: Timestamp, window: Duration) -> Timestamp {
    now - window
}
