//! Typed client for the Lava Business API.

use std::time::Duration;

use lava::models::{CreatePayoffRequest, GetPayoffInfoRequest, PayoffResponse};
use url::Url;

use crate::constants::DEFAULT_BASE_URL;
use crate::error::{BuildError, LavaError};
use crate::transport::{self, HttpTransport};

/// Client for Business API operations.
///
/// Business requests carry an HMAC signature over the body; produce it
/// with [`lava::signature::sign_value`] and the secret key from the Lava
/// dashboard before submitting.
#[derive(Debug, Clone)]
pub struct LavaBusinessClient {
    transport: HttpTransport,
}

impl LavaBusinessClient {
    /// Creates a client against the fixed Lava origin with the default
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if the token is empty.
    pub fn try_new(api_token: impl Into<String>) -> Result<Self, BuildError> {
        let base_url = Url::parse(DEFAULT_BASE_URL)?;
        Ok(Self {
            transport: HttpTransport::new(reqwest::Client::new(), base_url, api_token)?,
        })
    }

    /// Replaces the underlying HTTP client.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.transport = self.transport.with_http_client(http);
        self
    }

    /// Replaces the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.transport = self.transport.with_base_url(base_url);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.transport = self.transport.with_timeout(timeout);
        self
    }

    /// Creates a payoff — a withdrawal from the merchant balance.
    ///
    /// # Errors
    ///
    /// Returns [`LavaError`] on any network, API, or decoding failure.
    pub async fn create_payoff(
        &self,
        request: &CreatePayoffRequest,
    ) -> Result<PayoffResponse, LavaError> {
        self.transport
            .post_json("business/payoff/create", request)
            .await
    }

    /// Looks up a payoff by shop, order, or payoff identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LavaError`] on any network, API, or decoding failure.
    pub async fn payoff_info(
        &self,
        request: &GetPayoffInfoRequest,
    ) -> Result<PayoffResponse, LavaError> {
        self.transport
            .post_json("business/payoff/info", request)
            .await
    }

    /// Probes connectivity and token validity.
    ///
    /// Never fails: any error on the way — network, authentication,
    /// decoding — yields `false`.
    pub async fn ping(&self) -> bool {
        transport::probe(&self.transport).await
    }
}
