//! Twitch Kraken REST API client library.
//!
//! Provides OAuth authorization and code exchange, a request builder that
//! injects the `Client-ID`, `Accept` and `Authorization` headers, and typed
//! access to the users, channels, streams and games endpoints.

pub mod api;
pub mod auth;
pub mod config;
pub mod transport;

pub use api::{
    ApiResult, ChannelUpdate, QueryParams, RequestDescriptor, RequestOptions, TwitchClient,
};
pub use auth::Token;
pub use config::ClientConfig;
pub use transport::{ReqwestTransport, Transport};

/// Base URL of the Kraken API.
pub const KRAKEN_BASE: &str = "https://api.twitch.tv/kraken";

/// API version used when none is configured.
pub const DEFAULT_API_VERSION: u32 = 5;

/// Newest API version that still serves the v3-only endpoints
/// (channel subscriptions, top games).
pub const LEGACY_API_VERSION: u32 = 3;

/// Unified error type for the twitch-kraken crate.
#[derive(Debug, thiserror::Error)]
pub enum TwitchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{endpoint} is not supported by API version {version}")]
    UnsupportedVersion { endpoint: &'static str, version: u32 },

    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    #[error("Twitch API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),

    #[error("Invalid configuration {key}: {message}")]
    InvalidConfig { key: &'static str, message: String },
}

impl TwitchError {
    /// HTTP status code of the failed exchange, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            TwitchError::Api { status, .. } => Some(*status),
            TwitchError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the error was raised by the transport rather than by a
    /// local pre-check.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            TwitchError::Http(_)
                | TwitchError::Api { .. }
                | TwitchError::Timeout
                | TwitchError::Json(_)
        )
    }
}

impl From<reqwest::Error> for TwitchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TwitchError::Timeout
        } else {
            TwitchError::Http(err)
        }
    }
}
