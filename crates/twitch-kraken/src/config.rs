//! Client configuration: credentials, redirect URI, scopes and API version.

use std::fmt;

use crate::{DEFAULT_API_VERSION, TwitchError};

/// Static configuration owned by a [`TwitchClient`](crate::TwitchClient).
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// Requested OAuth scopes, in the order they are sent.
    pub scopes: Vec<String>,
    pub api_version: u32,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("scopes", &self.scopes)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            scopes: Vec::new(),
            api_version: DEFAULT_API_VERSION,
        }
    }

    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_api_version(mut self, version: u32) -> Self {
        self.api_version = version;
        self
    }

    /// Load configuration from the environment, reading `.env` first if present.
    ///
    /// Required: `TWITCH_CLIENT_ID`, `TWITCH_CLIENT_SECRET`, `TWITCH_REDIRECT_URI`.
    /// Optional: `TWITCH_SCOPES` (comma or whitespace separated) and
    /// `TWITCH_API_VERSION` (defaults to 5).
    pub fn from_env() -> Result<Self, TwitchError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Failed to load .env: {e}");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TwitchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &'static str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| g(key).ok_or(TwitchError::MissingConfig(key));

        let mut config = Self::new(
            required("TWITCH_CLIENT_ID")?,
            required("TWITCH_CLIENT_SECRET")?,
            required("TWITCH_REDIRECT_URI")?,
        );

        if let Some(raw) = g("TWITCH_SCOPES") {
            config.scopes = parse_scopes(&raw);
        }

        if let Some(raw) = g("TWITCH_API_VERSION") {
            config.api_version = raw.trim().parse::<u32>().map_err(|e| {
                TwitchError::InvalidConfig {
                    key: "TWITCH_API_VERSION",
                    message: e.to_string(),
                }
            })?;
        }

        Ok(config)
    }
}

fn parse_scopes(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
