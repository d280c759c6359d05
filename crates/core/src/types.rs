use serde::Deserialize;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// An integer field as sent by browser clients.
///
/// Cart state keeps ids in `data-*` attributes, so numbers frequently arrive
/// as JSON strings (`"12"`). Anything that does not read as an integer yields
/// `None` from [`LooseInt::value`] and is handled by the caller's own
/// "missing" rule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseInt {
    Int(i64),
    Float(f64),
    Text(String),
}

impl LooseInt {
    /// The integer value, truncating fractional numbers.
    pub fn value(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            Self::Float(_) => None,
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// [`LooseInt::value`] narrowed to `T`; out-of-range values yield `None`.
    pub fn value_as<T: TryFrom<i64>>(&self) -> Option<T> {
        self.value().and_then(|n| T::try_from(n).ok())
    }
}
