/// Broad class of a [`CoreError`], used by the HTTP layer to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed input; the caller can fix the request.
    Validation,
    /// A lookup (QR, slug, table, session) missed; the caller must re-resolve.
    NotFound,
    /// The target exists but is in a state that forbids the operation.
    StateConflict,
    /// Store or transaction failure; not recoverable by the caller.
    Infrastructure,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("No active table matches the QR token")]
    InvalidQr,

    #[error("table_number is required when no qr_token is given")]
    MissingTableNumber,

    #[error("Restaurant not found")]
    RestaurantNotFound,

    #[error("No restaurant is configured")]
    NoRestaurantConfigured,

    #[error("Table not found")]
    TableNotFound,

    #[error("Table is inactive")]
    TableInactive,

    #[error("restaurant_id or slug is required")]
    MissingRestaurantSelector,

    #[error("session_token and items are required")]
    MissingSessionOrItems,

    #[error("Session token does not match any visit")]
    InvalidSession,

    #[error("item_id and rating (1-5) are required")]
    InvalidRatingInput,

    #[error("Order could not be created: {0}")]
    OrderFailed(String),

    #[error("Rating could not be recorded: {0}")]
    RatingFailed(String),
}

impl CoreError {
    /// Stable machine-readable code sent to clients as `error`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidQr => "invalid_qr",
            Self::MissingTableNumber => "missing_table_number",
            Self::RestaurantNotFound => "restaurant_not_found",
            Self::NoRestaurantConfigured => "no_restaurant_configured",
            Self::TableNotFound => "table_not_found",
            Self::TableInactive => "table_inactive",
            Self::MissingRestaurantSelector => "missing_restaurant_selector",
            Self::MissingSessionOrItems => "missing_session_or_items",
            Self::InvalidSession => "invalid_session",
            Self::InvalidRatingInput => "invalid_rating_input",
            Self::OrderFailed(_) => "order_failed",
            Self::RatingFailed(_) => "rating_failed",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingTableNumber
            | Self::MissingRestaurantSelector
            | Self::MissingSessionOrItems
            | Self::InvalidRatingInput => ErrorKind::Validation,
            Self::InvalidQr
            | Self::RestaurantNotFound
            | Self::TableNotFound
            | Self::InvalidSession => ErrorKind::NotFound,
            Self::TableInactive => ErrorKind::StateConflict,
            Self::NoRestaurantConfigured | Self::OrderFailed(_) | Self::RatingFailed(_) => {
                ErrorKind::Infrastructure
            }
        }
    }
}
