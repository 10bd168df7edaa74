//! HTTP transport used to send built requests.
//!
//! [`TwitchClient`](crate::TwitchClient) never talks to the network itself;
//! it hands every [`RequestDescriptor`] to a [`Transport`].

use std::future::Future;

use serde_json::Value;

use crate::TwitchError;
use crate::api::RequestDescriptor;

/// Performs one HTTP exchange for a fully-built request.
///
/// Implementations must decode JSON response bodies, report non-2xx
/// responses as [`TwitchError::Api`] carrying the status code, and honor
/// the descriptor's timeout by failing with [`TwitchError::Timeout`].
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: RequestDescriptor,
    ) -> impl Future<Output = Result<Value, TwitchError>> + Send;
}

/// Default transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured `reqwest::Client` (proxies, TLS roots, ...).
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: RequestDescriptor) -> Result<Value, TwitchError> {
        tracing::debug!(method = %request.method, url = %request.url, "Kraken request");

        let mut builder = self
            .http
            .request(request.method, &request.url)
            .headers(request.headers)
            .timeout(request.timeout);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if !request.body.is_empty() {
            builder = builder.json(&request.body);
        }

        let resp = builder.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(TwitchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use httpmock::prelude::*;
    use reqwest::header::{HeaderMap, HeaderValue};
    use serde_json::json;

    use super::*;

    fn descriptor(method: reqwest::Method, url: String) -> RequestDescriptor {
        let mut headers = HeaderMap::new();
        headers.insert("Client-ID", HeaderValue::from_static("test_client_id"));
        RequestDescriptor {
            method,
            url,
            headers,
            query: Default::default(),
            body: Default::default(),
            timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn decodes_json_body() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .path("/kraken/channel")
                .header("client-id", "test_client_id");
            then.status(200).json_body(json!({"_id": "1", "name": "jake_loo"}));
        });

        let req = descriptor(reqwest::Method::GET, server.url("/kraken/channel"));
        let value = ReqwestTransport::new().send(req).await.unwrap();

        m.assert();
        assert_eq!(value["name"], "jake_loo");
    }

    #[tokio::test]
    async fn sends_query_and_json_body() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(PUT)
                .path("/kraken/channels/1")
                .query_param("foo", "bar")
                .json_body(json!({"channel": {"status": "S"}}));
            then.status(200).json_body(json!({"status": "S"}));
        });

        let mut req = descriptor(reqwest::Method::PUT, server.url("/kraken/channels/1"));
        req.query.insert("foo".into(), "bar".into());
        req.body.insert("channel".into(), json!({"status": "S"}));
        let value = ReqwestTransport::new().send(req).await.unwrap();

        m.assert();
        assert_eq!(value["status"], "S");
    }

    #[tokio::test]
    async fn non_success_status_becomes_api_error() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/kraken/missing");
            then.status(404).body(r#"{"error":"Not Found"}"#);
        });

        let req = descriptor(reqwest::Method::GET, server.url("/kraken/missing"));
        let err = ReqwestTransport::new().send(req).await.unwrap_err();

        match err {
            TwitchError::Api { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("Not Found"));
            }
            other => panic!("Expected Api error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_success_body_is_null() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/kraken/empty");
            then.status(204);
        });

        let req = descriptor(reqwest::Method::GET, server.url("/kraken/empty"));
        let value = ReqwestTransport::new().send(req).await.unwrap();
        assert!(value.is_null());
    }

    #[tokio::test]
    async fn slow_response_times_out() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/kraken/slow");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!({}));
        });

        let mut req = descriptor(reqwest::Method::GET, server.url("/kraken/slow"));
        req.timeout = Duration::from_millis(50);
        let err = ReqwestTransport::new().send(req).await.unwrap_err();

        assert!(matches!(err, TwitchError::Timeout), "got {err:?}");
        assert!(err.is_transport());
    }
}
