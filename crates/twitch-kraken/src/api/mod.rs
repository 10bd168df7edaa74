//! Twitch Kraken REST API client.
//!
//! Provides typed access to the Kraken users, channels, streams and games
//! endpoints with automatic `Client-ID`, versioned `Accept` and
//! `OAuth` token header injection.

mod channels;
mod games;
mod request;
mod streams;
mod subscriptions;
mod users;

pub mod models;


use std::time::Duration;

pub use games::DEFAULT_GAMES_LIMIT;
pub use models::{ChannelUpdate, QueryParams};
pub use request::{RequestDescriptor, RequestOptions};

use serde_json::Value;
use url::Url;

use crate::transport::{ReqwestTransport, Transport};
use crate::{ClientConfig, KRAKEN_BASE, LEGACY_API_VERSION, TwitchError};

/// Per-request timeout applied to every descriptor.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Twitch Kraken API client.
///
/// Holds immutable configuration and delegates every HTTP exchange to its
/// [`Transport`].
#[derive(Debug, Clone)]
pub struct TwitchClient<T = ReqwestTransport> {
    pub(crate) config: ClientConfig,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) transport: T,
}

impl TwitchClient<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> TwitchClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            base_url: KRAKEN_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            transport,
        }
    }

    /// Point the client at a different Kraken-compatible origin.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, TwitchError> {
        Url::parse(base_url)?;
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reject endpoints that upstream only serves on v3 and earlier.
    fn require_legacy_version(&self, endpoint: &'static str) -> Result<(), TwitchError> {
        if self.config.api_version > LEGACY_API_VERSION {
            return Err(TwitchError::UnsupportedVersion {
                endpoint,
                version: self.config.api_version,
            });
        }
        Ok(())
    }
}

/// Decoded JSON body of a passthrough endpoint.
pub type ApiResult = Result<Value, TwitchError>;
