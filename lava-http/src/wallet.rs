//! Typed client for the Lava Wallet API.

use std::time::Duration;

use lava::models::{
    CreateInvoiceRequest, CreateTransferRequest, CreateWithdrawRequest, GetTransactionsRequest,
    InvoiceInfoResponse, InvoiceResponse, SbpBanksResponse, StandardResponse, TransactionInfo,
    TransferInfo, WalletInfo, WithdrawInfo,
};
use url::Url;

use crate::constants::DEFAULT_BASE_URL;
use crate::error::{BuildError, LavaError};
use crate::transport::{self, HttpTransport};

/// Client for Wallet API operations.
///
/// One instance is bound to one API token and can serve any number of
/// concurrent calls.
///
/// ```no_run
/// use lava_http::LavaWalletClient;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = LavaWalletClient::try_new("api-token")?;
/// for wallet in client.wallets().await? {
///     println!("{}: {} {}", wallet.account, wallet.balance, wallet.currency);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LavaWalletClient {
    transport: HttpTransport,
}

impl LavaWalletClient {
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

    /// Creates a payment invoice.
    ///
    /// # Errors
    ///
    /// Returns [`LavaError`] on any network, API, or decoding failure.
    pub async fn create_invoice(
        &self,
        request: &CreateInvoiceRequest,
    ) -> Result<InvoiceResponse, LavaError> {
        self.transport.post_json("invoice/create", request).await
    }

    /// Looks up an invoice by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LavaError`] on any network, API, or decoding failure.
    pub async fn invoice_info(&self, invoice_id: &str) -> Result<InvoiceInfoResponse, LavaError> {
        self.transport.post_raw("invoice/info", invoice_id).await
    }

    /// Sets the account-wide webhook URL for invoice notifications.
    ///
    /// # Errors
    ///
    /// Returns [`LavaError`] on any network, API, or decoding failure.
    pub async fn set_webhook_url(&self, webhook_url: &str) -> Result<(), LavaError> {
        let _: serde_json::Value = self
            .transport
            .post_raw("invoice/set-webhook", webhook_url)
            .await?;
        Ok(())
    }

    /// Lists the account's wallets with their balances.
    ///
    /// # Errors
    ///
    /// Returns [`LavaError`] on any network, API, or decoding failure.
    pub async fn wallets(&self) -> Result<Vec<WalletInfo>, LavaError> {
        self.transport.get("wallet/list").await
    }

    /// Creates a withdrawal.
    ///
    /// # Errors
    ///
    /// Returns [`LavaError`] on any network, API, or decoding failure.
    pub async fn create_withdraw(
        &self,
        request: &CreateWithdrawRequest,
    ) -> Result<StandardResponse, LavaError> {
        self.transport.post_json("withdraw/create", request).await
    }

    /// Looks up a withdrawal by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LavaError`] on any network, API, or decoding failure.
    pub async fn withdraw_info(&self, withdraw_id: &str) -> Result<WithdrawInfo, LavaError> {
        self.transport.post_raw("withdraw/info", withdraw_id).await
    }

    /// Creates a transfer between Lava wallets.
    ///
    /// # Errors
    ///
    /// Returns [`LavaError`] on any network, API, or decoding failure.
    pub async fn create_transfer(
        &self,
        request: &CreateTransferRequest,
    ) -> Result<StandardResponse, LavaError> {
        self.transport.post_json("transfer/create", request).await
    }

    /// Looks up a transfer by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LavaError`] on any network, API, or decoding failure.
    pub async fn transfer_info(&self, transfer_id: &str) -> Result<TransferInfo, LavaError> {
        self.transport.post_raw("transfer/info", transfer_id).await
    }

    /// Lists transactions, optionally filtered.
    ///
    /// Passing `None` posts an empty filter object, which the API treats
    /// as "no filter".
    ///
    /// # Errors
    ///
    /// Returns [`LavaError`] on any network, API, or decoding failure.
    pub async fn transactions(
        &self,
        request: Option<&GetTransactionsRequest>,
    ) -> Result<Vec<TransactionInfo>, LavaError> {
        match request {
            Some(request) => self.transport.post_json("transactions/list", request).await,
            None => {
                self.transport
                    .post_json("transactions/list", &serde_json::json!({}))
                    .await
            }
        }
    }

    /// Lists banks available for SBP withdrawals.
    ///
    /// # Errors
    ///
    /// Returns [`LavaError`] on any network, API, or decoding failure.
    pub async fn sbp_banks(&self) -> Result<SbpBanksResponse, LavaError> {
        self.transport
            .post_json("withdraw/get-sbp-bank-list", &serde_json::json!({}))
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

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use wiremock::matchers::{body_json, body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> LavaWalletClient {
        LavaWalletClient::try_new("wallet-token")
            .unwrap()
            .with_base_url(server.uri().parse().unwrap())
    }

    #[test]
    fn rejects_empty_token() {
        assert!(matches!(
            LavaWalletClient::try_new(""),
            Err(BuildError::EmptyToken)
        ));
    }

    #[tokio::test]
    async fn create_invoice_posts_typed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/invoice/create"))
            .and(header("Authorization", "wallet-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"status":"success","id":"inv-1","url":"https://pay","expire":300,"sum":"100.50"}"#,
            ))
            .mount(&server)
            .await;

        let request = CreateInvoiceRequest::new("R123456789", Decimal::new(10050, 2));
        let response = client_for(&server)
            .await
            .create_invoice(&request)
            .await
            .unwrap();
        assert_eq!(response.id, "inv-1");
        assert_eq!(response.sum, "100.50");
    }

    #[tokio::test]
    async fn invoice_info_sends_bare_identifier_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/invoice/info"))
            .and(body_string("inv-1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"status":"success","invoice":{"id":"inv-1","expire":300,"sum":"1.00","status":"created"}}"#,
            ))
            .mount(&server)
            .await;

        let response = client_for(&server).await.invoice_info("inv-1").await.unwrap();
        assert_eq!(response.invoice.id, "inv-1");
        assert_eq!(response.invoice.status, "created");
    }

    #[tokio::test]
    async fn set_webhook_url_discards_response_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/invoice/set-webhook"))
            .and(body_string("https://merchant.example/hook"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"success"}"#))
            .mount(&server)
            .await;

        client_for(&server)
            .await
            .set_webhook_url("https://merchant.example/hook")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn wallets_issues_a_get() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wallet/list"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"account":"R123","currency":"RUB","balance":"10.50"}]"#,
            ))
            .mount(&server)
            .await;

        let wallets = client_for(&server).await.wallets().await.unwrap();
        assert_eq!(wallets.len(), 1);
        assert_eq!(wallets[0].balance, "10.50");
    }

    #[tokio::test]
    async fn unfiltered_transactions_post_an_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/transactions/list"))
            .and(body_json(serde_json::json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;

        let transactions = client_for(&server).await.transactions(None).await.unwrap();
        assert!(transactions.is_empty());
    }

    #[tokio::test]
    async fn sbp_banks_posts_an_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/withdraw/get-sbp-bank-list"))
            .and(body_json(serde_json::json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"data":[{"id":"bank-1","name":"Some Bank"}]}"#,
            ))
            .mount(&server)
            .await;

        let banks = client_for(&server).await.sbp_banks().await.unwrap();
        assert_eq!(banks.data[0].name, "Some Bank");
    }

    #[tokio::test]
    async fn api_failures_propagate_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/withdraw/create"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_string(r#"{"error_code":104,"message":"not enough funds"}"#),
            )
            .mount(&server)
            .await;

        let request = CreateWithdrawRequest::new("R123", Decimal::new(500, 0));
        let err = client_for(&server)
            .await
            .create_withdraw(&request)
            .await
            .unwrap_err();
        match err {
            LavaError::Api { code, .. } => {
                assert_eq!(code, lava::ErrorCode::InsufficientBalance);
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn ping_is_true_only_for_boolean_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/test/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":true}"#))
            .mount(&server)
            .await;
        assert!(client_for(&server).await.ping().await);
    }

    #[tokio::test]
    async fn ping_never_raises() {
        let dead = LavaWalletClient::try_new("token")
            .unwrap()
            .with_base_url("http://127.0.0.1:9/".parse().unwrap());
        assert!(!dead.ping().await);
    }
}
