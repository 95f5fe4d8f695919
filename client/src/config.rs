//! Client configuration.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Default API root, matching the development server
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333/api";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the ticket service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root every endpoint path is appended to
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// `User-Agent` header value
    pub user_agent: String,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// - `TICKET_DESK_API_URL` (default `http://localhost:3333/api`)
    /// - `TICKET_DESK_TIMEOUT_SECS` (default 10)
    /// - `TICKET_DESK_USER_AGENT` (default `ticket-desk/<version>`)
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("TICKET_DESK_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(
                env::var("TICKET_DESK_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            user_agent: env::var("TICKET_DESK_USER_AGENT")
                .unwrap_or_else(|_| default_user_agent()),
        }
    }

    /// Replaces the API root
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replaces the per-request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL for an endpoint path
    #[must_use]
    pub fn url_for(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("ticket-desk/{}", env!("CARGO_PKG_VERSION"))
}
