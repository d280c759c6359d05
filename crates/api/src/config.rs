use chrono::Duration;

use cardapio_core::menu::DEFAULT_UNCATEGORIZED_LABEL;
use cardapio_core::visit::DEFAULT_OCCUPANCY_WINDOW_HOURS;

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field lines (default).
    Pretty,
    /// One JSON object per event, for log shippers.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on pooled database connections (default: `20`).
    pub db_max_connections: u32,
    /// How far back a visit marks its table as in use (default: `6`).
    pub occupancy_window_hours: i64,
    /// Fall back to the first restaurant when a request names none.
    pub allow_default_restaurant: bool,
    /// Display name of the trailing menu section for orphaned items.
    pub uncategorized_label: String,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `DB_MAX_CONNECTIONS`       | `20`                       |
    /// | `OCCUPANCY_WINDOW_HOURS`   | `6`                        |
    /// | `ALLOW_DEFAULT_RESTAURANT` | `true`                     |
    /// | `UNCATEGORIZED_LABEL`      | `Outros`                   |
    /// | `LOG_FORMAT`               | `pretty` (or `json`)       |
    ///
    /// `DATABASE_URL` is read separately by the binary.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| cardapio_db::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let occupancy_window_hours: i64 = std::env::var("OCCUPANCY_WINDOW_HOURS")
            .unwrap_or_else(|_| DEFAULT_OCCUPANCY_WINDOW_HOURS.to_string())
            .parse()
            .expect("OCCUPANCY_WINDOW_HOURS must be a valid i64");
        assert!(
            occupancy_window_hours > 0,
            "OCCUPANCY_WINDOW_HOURS must be positive"
        );

        let allow_default_restaurant = match std::env::var("ALLOW_DEFAULT_RESTAURANT") {
            Ok(v) => parse_bool(&v).expect("ALLOW_DEFAULT_RESTAURANT must be true or false"),
            Err(_) => true,
        };

        let uncategorized_label = std::env::var("UNCATEGORIZED_LABEL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_UNCATEGORIZED_LABEL.into());

        let log_format = match std::env::var("LOG_FORMAT") {
            Ok(v) => LogFormat::parse(&v).expect("LOG_FORMAT must be pretty or json"),
            Err(_) => LogFormat::Pretty,
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            occupancy_window_hours,
            allow_default_restaurant,
            uncategorized_label,
            log_format,
        }
    }

    /// The occupancy look-back as a duration.
    pub fn occupancy_window(&self) -> Duration {
        Duration::hours(self.occupancy_window_hours)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_flags_accept_common_spellings() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn log_format_defaults_to_pretty_when_blank() {
        assert_eq!(LogFormat::parse(""), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("xml"), None);
    }
}
