//! Client configuration
//!
//! Desktop builds read environment variables (after the binary has loaded any
//! `.env`). Browser builds use the API URL baked in at compile time, falling
//! back to the origin that served the page (the engine's static file mode).

/// Default base URL of the request store for desktop builds
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Default request timeout in milliseconds (10 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

pub const API_URL_ENV: &str = "APPROVALS_API_URL";
pub const REQUEST_TIMEOUT_ENV: &str = "APPROVALS_REQUEST_TIMEOUT_MS";
pub const STATUS_CACHE_ENV: &str = "APPROVALS_STATUS_CACHE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every route is appended to; no trailing slash
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    /// Whether decisions are remembered in client storage across reloads
    pub status_cache_enabled: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            status_cache_enabled: true,
        }
    }
}

impl ClientConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_base_url = lookup(API_URL_ENV)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let request_timeout_ms = lookup(REQUEST_TIMEOUT_ENV)
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.request_timeout_ms);

        let status_cache_enabled = lookup(STATUS_CACHE_ENV)
            .map(|raw| {
                !matches!(
                    raw.trim().to_ascii_lowercase().as_str(),
                    "off" | "false" | "0" | "no"
                )
            })
            .unwrap_or(defaults.status_cache_enabled);

        Self {
            api_base_url,
            request_timeout_ms,
            status_cache_enabled,
        }
    }

    /// Configuration for a browser build.
    ///
    /// `build_time_url` is `APPROVALS_API_URL` as seen by the compiler; without
    /// it the page origin is used, then the desktop default.
    pub fn for_browser(build_time_url: Option<&str>, origin: Option<String>) -> Self {
        match (build_time_url, origin) {
            (Some(url), _) if !url.trim().is_empty() => {
                Self::from_lookup(|key| (key == API_URL_ENV).then(|| url.to_string()))
            }
            (_, Some(origin)) => Self::for_origin(origin),
            _ => Self::default(),
        }
    }

    /// Configuration for a browser build served by the request store itself.
    pub fn for_origin(origin: impl Into<String>) -> Self {
        Self {
            api_base_url: origin.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}
