//! Service configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`). Every key has a default, so an empty environment starts a
//! working server.

use std::net::SocketAddr;
use std::time::Duration;

/// Log output format for the binary's `tracing` subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`PagerConfig::from_env`].
#[derive(Debug, Clone)]
pub struct PagerConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Items per page used by the listing endpoint when none is given.
    pub default_per_page: u32,

    /// Upper bound applied to a requested `per_page`.
    pub max_per_page: u32,

    /// Drop the duplicate trailing link when the window already ends at the
    /// last page.
    pub collapse_duplicate_trailing: bool,

    /// Per-request timeout; at least one second.
    pub request_timeout: Duration,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            default_per_page: 10,
            max_per_page: 100,
            collapse_duplicate_trailing: false,
            request_timeout: Duration::from_secs(30),
            log_format: LogFormat::Text,
        }
    }
}

impl PagerConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set or unparsable.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr: SocketAddr = match std::env::var("LISTEN_ADDR") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.listen_addr,
        };

        let max_per_page = parse_env("PAGINATION_MAX_PER_PAGE", defaults.max_per_page).max(1);
        let default_per_page = parse_env("PAGINATION_DEFAULT_PER_PAGE", defaults.default_per_page)
            .clamp(1, max_per_page);
        let collapse_duplicate_trailing = parse_env_bool(
            "PAGINATION_COLLAPSE_TRAILING",
            defaults.collapse_duplicate_trailing,
        );
        let request_timeout = request_timeout_from_secs(parse_env(
            "REQUEST_TIMEOUT_SECS",
            defaults.request_timeout.as_secs(),
        ));
        let log_format = match std::env::var("LOG_FORMAT").ok().as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr,
            default_per_page,
            max_per_page,
            collapse_duplicate_trailing,
            request_timeout,
            log_format,
        })
    }
}

/// Converts a timeout in seconds, raising zero to one second.
fn request_timeout_from_secs(secs: u64) -> Duration {
    Duration::from_secs(secs.max(1))
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"`. Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key).ok().as_deref() {
        Some("true") | Some("TRUE") | Some("1") => true,
        Some("false") | Some("FALSE") | Some("0") => false,
        _ => default,
    }
}
