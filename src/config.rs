//! Client configuration and interaction timing constants.

use std::time::Duration;

/// Quiet period after the last keystroke before a search dispatches.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Queries shorter than this are "not a search" and never hit the network.
pub const MIN_QUERY_LEN: usize = 2;

/// How long a success notice stays fully visible before fading.
pub const NOTICE_DISMISS_DELAY: Duration = Duration::from_secs(3);

/// Fade-out duration before a dismissed notice is removed.
pub const NOTICE_FADE_DELAY: Duration = Duration::from_millis(150);

/// Default per-request timeout. A hung request resolves to the
/// transport-failure branch instead of leaving an indicator up forever.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "clinifront=info"
}

/// Connection settings for the clinic server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server origin, e.g. `https://clinic.example.org`.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Config pointing at the given server origin with default timings.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }
}

impl Default for ClientConfig {
    /// Local development server (Django default port).
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
