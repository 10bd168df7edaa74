use std::time::Duration;

use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::{Map, Value};

use super::*;

/// Per-call request options. Unset fields fall back to their defaults:
/// `GET`, empty path, no token, empty body, configured API version.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub path: String,
    pub access_token: Option<String>,
    pub body: Map<String, Value>,
    pub api_version: Option<u32>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            path: String::new(),
            access_token: None,
            body: Map::new(),
            api_version: None,
        }
    }
}

impl RequestOptions {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn with_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    pub fn with_body(mut self, body: Map<String, Value>) -> Self {
        self.body = body;
        self
    }

    pub fn with_api_version(mut self, version: u32) -> Self {
        self.api_version = Some(version);
        self
    }
}

/// A fully-assembled request, ready to hand to a [`Transport`].
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub query: QueryParams,
    pub body: Map<String, Value>,
    pub timeout: Duration,
}

impl<T: Transport> TwitchClient<T> {
    /// Build the request descriptor for `options`.
    ///
    /// Method and path are passed through unchecked. Fails only when a
    /// header value cannot be encoded.
    pub fn build_request(
        &self,
        options: RequestOptions,
        query: QueryParams,
    ) -> Result<RequestDescriptor, TwitchError> {
        let version = options.api_version.unwrap_or(self.config.api_version);

        let mut headers = HeaderMap::new();
        if let Some(token) = &options.access_token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("OAuth {token}"))?,
            );
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_str(&format!("application/vnd.twitchtv.v{version}+json"))?,
        );
        headers.insert("Client-ID", HeaderValue::from_str(&self.config.client_id)?);

        Ok(RequestDescriptor {
            method: options.method,
            url: format!("{}{}", self.base_url, options.path),
            headers,
            query,
            body: options.body,
            timeout: self.timeout,
        })
    }

    /// Build a request and send it through the transport. Single attempt.
    pub async fn execute(&self, options: RequestOptions, query: QueryParams) -> ApiResult {
        let request = self.build_request(options, query)?;
        self.transport.send(request).await
    }
}
