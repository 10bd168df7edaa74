//! OAuth authorization-code flow for Twitch Kraken.
//!
//! Handles authorization URL generation, authorization code exchange and
//! token refresh. Tokens are returned to the caller and never stored.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::{QueryParams, RequestOptions};
use crate::transport::Transport;
use crate::{TwitchClient, TwitchError};

const AUTHORIZE_PATH: &str = "/oauth2/authorize";
const TOKEN_PATH: &str = "/oauth2/token";

/// Token data decoded from the token endpoint.
///
/// The caller is responsible for persisting this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: Vec<String>,
    /// Unix timestamp (seconds); 0 when the server sent no expiry.
    pub expires_at: i64,
}

impl Token {
    /// Whether the token expires within `margin_secs` from now.
    pub fn expires_within(&self, margin_secs: i64) -> bool {
        self.expires_at != 0 && Utc::now().timestamp() >= self.expires_at - margin_secs
    }
}

/// Kraken OAuth token response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    scope: Option<Vec<String>>,
}

impl<T: Transport> TwitchClient<T> {
    /// Authorization URL requesting the configured scopes.
    pub fn authorization_url(&self) -> String {
        self.authorization_url_with_scopes(self.config.scopes.as_slice())
    }

    /// Authorization URL requesting `scopes`, joined with `+` in the given order.
    pub fn authorization_url_with_scopes<S: AsRef<str>>(&self, scopes: &[S]) -> String {
        let scope = scopes
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("+");
        format!(
            "{}{AUTHORIZE_PATH}?response_type=code&client_id={}&redirect_uri={}&scope={scope}",
            self.base_url, self.config.client_id, self.config.redirect_uri
        )
    }

    /// Exchange an authorization code. Returns the decoded response verbatim.
    pub async fn exchange_code(&self, code: &str) -> Result<Value, TwitchError> {
        let body = self.token_body([
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("code", code),
        ]);

        self.execute(RequestOptions::post(TOKEN_PATH).with_body(body), QueryParams::new())
            .await
    }

    /// Exchange an authorization code and decode the result into a [`Token`].
    pub async fn exchange_code_for_token(&self, code: &str) -> Result<Token, TwitchError> {
        let value = self.exchange_code(code).await?;
        parse_token_response(value)
    }

    /// Refresh an expired token using its refresh token.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<Token, TwitchError> {
        tracing::info!("Refreshing Twitch OAuth token");

        let body = self.token_body([
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ]);

        let value = self
            .execute(RequestOptions::post(TOKEN_PATH).with_body(body), QueryParams::new())
            .await?;
        parse_token_response(value)
    }

    fn token_body<'a>(
        &'a self,
        extra: impl IntoIterator<Item = (&'static str, &'a str)>,
    ) -> Map<String, Value> {
        [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ]
        .into_iter()
        .chain(extra)
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
    }
}

fn parse_token_response(value: Value) -> Result<Token, TwitchError> {
    let resp: TokenResponse = serde_json::from_value(value)?;
    let expires_at = resp
        .expires_in
        .map(|secs| Utc::now().timestamp() + secs)
        .unwrap_or(0);

    Ok(Token {
        access_token: resp.access_token,
        refresh_token: resp.refresh_token,
        scope: resp.scope.unwrap_or_default(),
        expires_at,
    })
}
