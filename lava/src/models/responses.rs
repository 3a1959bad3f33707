//! Response bodies returned by the Lava API.
//!
//! Monetary amounts arrive as decimal strings and are kept that way; parse
//! them with [`rust_decimal::Decimal`] at the point of use if arithmetic is
//! needed.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Response to creating an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceResponse {
    /// Request status.
    #[serde(default)]
    pub status: String,

    /// Invoice identifier.
    #[serde(default)]
    pub id: String,

    /// Payment URL for the customer.
    #[serde(default)]
    pub url: String,

    /// Invoice lifetime in minutes.
    #[serde(default)]
    pub expire: u32,

    /// Invoice amount.
    #[serde(default)]
    pub sum: String,

    /// Redirect URL after successful payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,

    /// Redirect URL after failed payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_url: Option<String>,

    /// Webhook URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_url: Option<String>,

    /// Custom data passed back in the webhook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<String>,

    /// Merchant name displayed on the payment form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,

    /// Merchant identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
}

/// Detailed invoice information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceInfo {
    /// Invoice identifier.
    #[serde(default)]
    pub id: String,

    /// Order identifier from the merchant's system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    /// Invoice lifetime in minutes.
    #[serde(default)]
    pub expire: u32,

    /// Invoice amount.
    #[serde(default)]
    pub sum: String,

    /// Invoice comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Invoice status.
    #[serde(default)]
    pub status: String,

    /// Redirect URL after successful payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,

    /// Redirect URL after failed payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_url: Option<String>,

    /// Webhook URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_url: Option<String>,

    /// Custom data passed back in the webhook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<String>,
}

/// Envelope for [`InvoiceInfo`] lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceInfoResponse {
    /// Response status.
    #[serde(default)]
    pub status: String,

    /// Invoice details.
    #[serde(default)]
    pub invoice: InvoiceInfo,
}

/// A wallet belonging to the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    /// Wallet account number.
    #[serde(default)]
    pub account: String,

    /// Wallet currency code.
    #[serde(default)]
    pub currency: String,

    /// Current balance.
    #[serde(default)]
    pub balance: String,
}

/// Standard response for create-style operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardResponse {
    /// Operation identifier.
    #[serde(default)]
    pub id: String,

    /// Operation status.
    #[serde(default)]
    pub status: String,

    /// Amount.
    #[serde(default)]
    pub amount: String,

    /// Commission amount.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub commission: Decimal,
}

/// Withdrawal details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawInfo {
    /// Withdrawal request identifier.
    #[serde(default)]
    pub id: String,

    /// Creation time as a Unix-timestamp string.
    #[serde(default)]
    pub created_at: String,

    /// Withdrawal amount.
    #[serde(default)]
    pub amount: String,

    /// Commission amount.
    #[serde(default)]
    pub commission: String,

    /// Withdrawal status.
    #[serde(default)]
    pub status: String,

    /// Service the withdrawal was made through.
    #[serde(default)]
    pub service: String,

    /// Withdrawal comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Currency code.
    #[serde(default)]
    pub currency: String,
}

/// Transfer details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferInfo {
    /// Transfer identifier.
    #[serde(default)]
    pub id: String,

    /// Creation time as a Unix-timestamp string.
    #[serde(default)]
    pub created_at: String,

    /// Transfer amount.
    #[serde(default)]
    pub amount: String,

    /// Transfer status.
    #[serde(default)]
    pub status: String,

    /// Transfer comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Currency code.
    #[serde(default)]
    pub currency: String,

    /// Transfer type.
    #[serde(default, rename = "type")]
    pub transfer_type: String,

    /// Receiver information.
    #[serde(default)]
    pub receiver: String,

    /// Commission amount.
    #[serde(default)]
    pub commission: String,
}

/// A single entry in the transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInfo {
    /// Transaction identifier.
    #[serde(default)]
    pub id: String,

    /// Creation time as a Unix-timestamp string.
    #[serde(default)]
    pub created_at: String,

    /// Creation date and time.
    pub created_date: NaiveDateTime,

    /// Transaction amount.
    #[serde(default)]
    pub amount: String,

    /// Transaction status.
    #[serde(default)]
    pub status: String,

    /// Transfer type: `withdraw`, `transfer`, and so on.
    #[serde(default)]
    pub transfer_type: String,

    /// Transaction comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Payment method used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Currency code.
    #[serde(default)]
    pub currency: String,

    /// Account number.
    #[serde(default)]
    pub account: String,

    /// Commission amount.
    #[serde(default)]
    pub commission: String,

    /// Transaction type.
    #[serde(default, rename = "type")]
    pub transaction_type: String,

    /// Receiver information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
}

/// A bank reachable through the Fast Payment System.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SbpBank {
    /// Bank identifier.
    #[serde(default)]
    pub id: String,

    /// Bank name.
    #[serde(default)]
    pub name: String,
}

/// List of banks available for SBP withdrawals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SbpBanksResponse {
    /// Available banks.
    #[serde(default)]
    pub data: Vec<SbpBank>,
}

/// Payoff creation data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffData {
    /// Payoff identifier.
    #[serde(default)]
    pub payoff_id: String,

    /// Payoff status: `created`, `success`, or `rejected`.
    #[serde(default)]
    pub payoff_status: String,
}

/// Envelope for payoff operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffResponse {
    /// Payoff data.
    #[serde(default)]
    pub data: PayoffData,

    /// HTTP status code reported in the body.
    #[serde(default)]
    pub status: u16,

    /// Status check flag.
    #[serde(default)]
    pub status_check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_response_deserializes_from_wire_shape() {
        let body = r#"{
            "status": "success",
            "id": "1ee31634-e3e0-34ce-1423-b5b4cb524c6a",
            "url": "https://p2p.lava.ru/form?invoice=1ee31634",
            "expire": 300,
            "sum": "100.00"
        }"#;
        let response: InvoiceResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.status, "success");
        assert_eq!(response.sum, "100.00");
        assert_eq!(response.expire, 300);
        assert!(response.hook_url.is_none());
    }

    #[test]
    fn standard_response_keeps_commission_precision() {
        let body = r#"{"id":"w-1","status":"created","amount":"500.00","commission":12.50}"#;
        let response: StandardResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.commission, Decimal::new(1250, 2));
        assert_eq!(response.amount, "500.00");
    }

    #[test]
    fn transaction_info_parses_iso_datetime() {
        let body = r#"{
            "id": "t-1",
            "created_at": "1634808630",
            "created_date": "2021-10-21T10:30:30",
            "amount": "10.00",
            "status": "success",
            "transfer_type": "withdraw",
            "currency": "RUB",
            "account": "R123",
            "commission": "0.50",
            "type": "withdraw"
        }"#;
        let info: TransactionInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.created_date.to_string(), "2021-10-21 10:30:30");
        assert_eq!(info.transaction_type, "withdraw");
        assert!(info.receiver.is_none());
    }

    #[test]
    fn payoff_response_reads_nested_data() {
        let body = r#"{
            "data": {"payoff_id": "p-1", "payoff_status": "created"},
            "status": 200,
            "status_check": true
        }"#;
        let response: PayoffResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.payoff_id, "p-1");
        assert!(response.status_check);
    }
}
