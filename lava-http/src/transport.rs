//! Authenticated HTTP transport for the Lava API.
//!
//! [`HttpTransport`] owns one request/response cycle: it attaches the auth
//! headers, executes the call over a shared connection-pooling
//! [`reqwest::Client`], reads the body, and either decodes a success
//! response into a typed value or classifies the failure into exactly one
//! [`LavaError`]. It holds no per-request mutable state, so one instance
//! serves any number of concurrent calls.
//!
//! Cancellation is the caller dropping the returned future; a dropped call
//! aborts the request without synthesizing an error. An *unrequested*
//! timeout, by contrast, surfaces as [`LavaError::Http`] with a message
//! that says so, distinguishable from a plain send failure.
//!
//! No retries and no logging happen here; layering either is the caller's
//! choice. The optional `telemetry` feature only adds `tracing` spans.

use std::time::Duration;

use http::StatusCode;
use lava::ErrorCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::constants::{DEFAULT_TIMEOUT, PING_PATH};
use crate::error::{BuildError, LavaError};

/// Authenticated transport bound to one API token and base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Shared reqwest client; owns the connection pool.
    http: reqwest::Client,
    /// Base URL endpoint paths are joined onto.
    base_url: Url,
    /// Raw token sent in the `Authorization` header.
    api_token: String,
    /// Per-request timeout.
    timeout: Option<Duration>,
}

impl HttpTransport {
    /// Creates a transport from a configured client, base URL, and token.
    ///
    /// The base URL is normalized to end with `/` so endpoint paths join
    /// underneath it rather than replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyToken`] if the token is empty or all
    /// whitespace.
    pub fn new(
        http: reqwest::Client,
        base_url: Url,
        api_token: impl Into<String>,
    ) -> Result<Self, BuildError> {
        let api_token = api_token.into();
        if api_token.trim().is_empty() {
            return Err(BuildError::EmptyToken);
        }
        Ok(Self {
            http,
            base_url: with_trailing_slash(base_url),
            api_token,
            timeout: Some(DEFAULT_TIMEOUT),
        })
    }

    /// Replaces the underlying HTTP client.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Replaces the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = with_trailing_slash(base_url);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issues a GET request and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns [`LavaError`] on any network, API, or decoding failure.
    #[cfg_attr(
        feature = "telemetry",
        tracing::instrument(name = "lava.transport.get", skip_all, fields(path = path), err)
    )]
    pub async fn get<R>(&self, path: &str) -> Result<R, LavaError>
    where
        R: DeserializeOwned,
    {
        let request = self.http.get(self.endpoint(path)?);
        self.send(request).await
    }

    /// Issues a POST request with a JSON body and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns [`LavaError`] on any network, API, or decoding failure.
    #[cfg_attr(
        feature = "telemetry",
        tracing::instrument(name = "lava.transport.post", skip_all, fields(path = path), err)
    )]
    pub async fn post_json<T, R>(&self, path: &str, body: &T) -> Result<R, LavaError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.http.post(self.endpoint(path)?).json(body);
        self.send(request).await
    }

    /// Issues a POST request with a pre-serialized body, sent verbatim
    /// with the JSON content type. Used by endpoints that expect a bare
    /// scalar rather than an object.
    ///
    /// # Errors
    ///
    /// Returns [`LavaError`] on any network, API, or decoding failure.
    #[cfg_attr(
        feature = "telemetry",
        tracing::instrument(name = "lava.transport.post_raw", skip_all, fields(path = path), err)
    )]
    pub async fn post_raw<R>(&self, path: &str, body: impl Into<String>) -> Result<R, LavaError>
    where
        R: DeserializeOwned,
    {
        let request = self
            .http
            .post(self.endpoint(path)?)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body.into());
        self.send(request).await
    }

    /// Joins a relative endpoint path onto the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, LavaError> {
        self.base_url.join(path).map_err(|e| LavaError::Http {
            message: format!("invalid endpoint path `{path}`: {e}"),
            status: None,
            body: None,
            source: None,
        })
    }

    /// Executes a prepared request and resolves it to a typed value or a
    /// classified error.
    async fn send<R>(&self, request: reqwest::RequestBuilder) -> Result<R, LavaError>
    where
        R: DeserializeOwned,
    {
        let mut request = request
            .header(http::header::AUTHORIZATION, self.api_token.as_str())
            .header(http::header::ACCEPT, "application/json");
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(send_failure)?;
        let status = response.status();

        // The body is read as text for every status so diagnostics keep
        // the raw payload even when decoding or classification follows.
        let body = response.text().await.map_err(|e| LavaError::Http {
            message: "failed to read Lava API response body".to_owned(),
            status: Some(status.as_u16()),
            body: None,
            source: Some(e),
        })?;

        if !status.is_success() {
            return Err(classify(status, body));
        }
        decode(status, body)
    }
}

/// Wraps a failed send into [`LavaError::Http`], separating unrequested
/// timeouts from plain connection failures.
fn send_failure(source: reqwest::Error) -> LavaError {
    let message = if source.is_timeout() {
        "request to the Lava API timed out".to_owned()
    } else {
        "failed to send request to the Lava API".to_owned()
    };
    LavaError::Http {
        message,
        status: source.status().map(|s| s.as_u16()),
        body: None,
        source: Some(source),
    }
}

/// Decodes a success body into the expected type.
///
/// The body is parsed to a [`Value`] first so a JSON `null` — a response
/// that should carry data but does not — is rejected instead of silently
/// producing a default.
fn decode<R>(status: StatusCode, body: String) -> Result<R, LavaError>
where
    R: DeserializeOwned,
{
    let value: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(source) => {
            return Err(LavaError::Decode {
                message: format!("failed to decode Lava API response: {source}"),
                status: status.as_u16(),
                body,
                source: Some(source),
            });
        }
    };

    if value.is_null() {
        return Err(LavaError::Decode {
            message: "failed to decode Lava API response: result is null".to_owned(),
            status: status.as_u16(),
            body,
            source: None,
        });
    }

    serde_json::from_value(value).map_err(|source| LavaError::Decode {
        message: format!("failed to decode Lava API response: {source}"),
        status: status.as_u16(),
        body,
        source: Some(source),
    })
}

/// Maps a non-success response onto the error taxonomy.
///
/// Checked in order, first match wins: 401/403 — authentication, without
/// looking at the body; 404 — not found; a JSON body with an integer
/// `error_code` — validation or generic API error per the code table;
/// anything else — a generic HTTP error keeping status and body verbatim.
fn classify(status: StatusCode, body: String) -> LavaError {
    let status_code = status.as_u16();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return LavaError::Authentication {
            message: "authentication failed, check your API token".to_owned(),
            status: status_code,
            body,
        };
    }

    if status == StatusCode::NOT_FOUND {
        return LavaError::NotFound {
            message: "resource not found".to_owned(),
            status: status_code,
            body,
        };
    }

    if let Ok(value) = serde_json::from_str::<Value>(&body) {
        let raw_code = value
            .get("error_code")
            .and_then(Value::as_i64)
            .and_then(|code| i32::try_from(code).ok());
        if let Some(raw_code) = raw_code {
            let code = ErrorCode::from_code(raw_code);
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
                .to_owned();
            return if code.is_validation() {
                LavaError::Validation {
                    message,
                    code,
                    status: status_code,
                    body,
                }
            } else {
                LavaError::Api {
                    message,
                    code,
                    status: status_code,
                    body,
                }
            };
        }
    }

    LavaError::Http {
        message: format!("HTTP request failed with status code {status_code}"),
        status: Some(status_code),
        body: Some(body),
        source: None,
    }
}

/// Connectivity probe shared by both endpoint clients.
///
/// Returns `true` iff `test/ping` answers with a body whose `status` field
/// is boolean `true`. Every failure — transport, classification, decoding
/// — collapses to `false`; this is the one place errors are swallowed.
pub(crate) async fn probe(transport: &HttpTransport) -> bool {
    match transport.get::<Value>(PING_PATH).await {
        Ok(value) => value.get("status").and_then(Value::as_bool) == Some(true),
        Err(_) => false,
    }
}

/// Normalizes a base URL so relative endpoint paths join underneath it.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
