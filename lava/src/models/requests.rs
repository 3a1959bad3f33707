//! Request bodies accepted by the Lava API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{ServiceType, TransactionType};

const DEFAULT_INVOICE_EXPIRE_MINUTES: u32 = 43_200;

const fn default_invoice_expire() -> u32 {
    DEFAULT_INVOICE_EXPIRE_MINUTES
}

const fn default_withdraw_service() -> ServiceType {
    ServiceType::Card
}

fn default_payoff_subtract() -> String {
    "0".to_owned()
}

/// Request to create a payment invoice (Wallet API).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateInvoiceRequest {
    /// Wallet number that receives the payment, e.g. `R123456789`.
    pub wallet_to: String,

    /// Payment amount.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub sum: Decimal,

    /// Unique order identifier in the merchant's system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    /// Webhook URL for payment notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_url: Option<String>,

    /// Redirect URL after successful payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,

    /// Redirect URL after failed payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_url: Option<String>,

    /// Invoice lifetime in minutes; 1 to 43200 (30 days).
    #[serde(default = "default_invoice_expire")]
    pub expire: u32,

    /// Who pays the commission: 0 — deducted from the merchant, 1 — paid
    /// by the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtract: Option<i32>,

    /// Custom data passed back in the webhook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<String>,

    /// Payment comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Merchant identifier (returned in the webhook only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,

    /// Merchant name displayed on the payment form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
}

impl CreateInvoiceRequest {
    /// Creates an invoice request with the default lifetime and no
    /// optional fields set.
    #[must_use]
    pub fn new(wallet_to: impl Into<String>, sum: Decimal) -> Self {
        Self {
            wallet_to: wallet_to.into(),
            sum,
            order_id: None,
            hook_url: None,
            success_url: None,
            fail_url: None,
            expire: DEFAULT_INVOICE_EXPIRE_MINUTES,
            subtract: None,
            custom_fields: None,
            comment: None,
            merchant_id: None,
            merchant_name: None,
        }
    }
}

/// Request to create a withdrawal (Wallet API).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateWithdrawRequest {
    /// Wallet number the withdrawal is made from.
    pub account: String,

    /// Withdrawal amount.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,

    /// Unique order identifier in the merchant's system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    /// Webhook URL for notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_url: Option<String>,

    /// Who pays the commission: 0 — deducted from the amount, 1 — paid
    /// from the balance.
    #[serde(default)]
    pub subtract: i32,

    /// Withdrawal service.
    #[serde(default = "default_withdraw_service")]
    pub service: ServiceType,

    /// Recipient wallet or card number; omitted for Lava wallet transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_to: Option<String>,

    /// Withdrawal comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Bank identifier for SBP transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sbp_bank_id: Option<String>,
}

impl CreateWithdrawRequest {
    /// Creates a card withdrawal request with no optional fields set.
    #[must_use]
    pub fn new(account: impl Into<String>, amount: Decimal) -> Self {
        Self {
            account: account.into(),
            amount,
            order_id: None,
            hook_url: None,
            subtract: 0,
            service: ServiceType::Card,
            wallet_to: None,
            comment: None,
            sbp_bank_id: None,
        }
    }
}

/// Request to transfer funds between Lava wallets (Wallet API).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransferRequest {
    /// Source wallet number.
    pub account_from: String,

    /// Destination wallet number.
    pub account_to: String,

    /// Transfer amount.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,

    /// Who pays the commission: 0 — deducted from the amount, 1 — paid
    /// from the balance.
    #[serde(default)]
    pub subtract: i32,

    /// Transfer comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CreateTransferRequest {
    /// Creates a transfer request with no comment and commission deducted
    /// from the amount.
    #[must_use]
    pub fn new(
        account_from: impl Into<String>,
        account_to: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            account_from: account_from.into(),
            account_to: account_to.into(),
            amount,
            subtract: 0,
            comment: None,
        }
    }
}

/// Filters for listing wallet transactions (Wallet API).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransactionsRequest {
    /// Transaction type filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_type: Option<TransactionType>,

    /// Wallet number filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    /// Period start, e.g. `21.10.2021 10:30:30`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,

    /// Period end, e.g. `21.10.2021 11:30:00`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,

    /// Pagination offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Maximum number of results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Request to create a payoff (Business API).
///
/// The `signature` field is an HMAC-SHA256 tag over the request body,
/// produced with [`crate::signature::sign_value`] and the secret key from
/// the Lava dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayoffRequest {
    /// Payoff amount.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,

    /// Unique payment identifier in the merchant's system.
    pub order_id: String,

    /// Request signature.
    pub signature: String,

    /// Project (shop) identifier.
    pub shop_id: Uuid,

    /// Webhook URL for notifications, at most 500 characters.
    pub hook_url: String,

    /// Payoff service: `lava_payoff`, `qiwi_payoff`, `card_payoff`, or
    /// `steam_payoff`.
    pub service: String,

    /// Recipient wallet number; omitted for the merchant's own Lava wallet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_to: Option<String>,

    /// Who pays the commission: `"1"` — merchant, `"0"` — deducted from
    /// the amount.
    #[serde(default = "default_payoff_subtract")]
    pub subtract: String,
}

/// Request to look up payoff information (Business API).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPayoffInfoRequest {
    /// Request signature; optional when provided in headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,

    /// Project (shop) identifier.
    pub shop_id: Uuid,

    /// Order identifier in the merchant's system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<Uuid>,

    /// Payoff identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payoff_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_value<T: Serialize>(value: &T) -> serde_json::Value {
        serde_json::to_value(value).unwrap()
    }

    #[test]
    fn invoice_request_uses_snake_case_wire_names() {
        let request = CreateInvoiceRequest::new("R123456789", Decimal::new(10050, 2));
        let expected: serde_json::Value =
            serde_json::from_str(r#"{"wallet_to":"R123456789","sum":100.50,"expire":43200}"#)
                .unwrap();
        assert_eq!(to_value(&request), expected);
    }

    #[test]
    fn invoice_request_omits_unset_optionals() {
        let request = CreateInvoiceRequest::new("R1", Decimal::new(1, 0));
        let value = to_value(&request);
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("order_id"));
        assert!(!object.contains_key("hook_url"));
        assert!(!object.contains_key("subtract"));
    }

    #[test]
    fn withdraw_request_defaults_to_card_service() {
        let request = CreateWithdrawRequest::new("R40510054", Decimal::new(500, 0));
        let value = to_value(&request);
        assert_eq!(value["service"], "card");
        assert_eq!(value["subtract"], 0);
    }

    #[test]
    fn payoff_request_uses_camel_case_wire_names() {
        let request = CreatePayoffRequest {
            amount: Decimal::new(1000, 0),
            order_id: "order-1".into(),
            signature: "sig".into(),
            shop_id: Uuid::parse_str("0190b9c0-7f7b-7e07-b123-1234567890ab").unwrap(),
            hook_url: "https://merchant.example/hook".into(),
            service: "card_payoff".into(),
            wallet_to: None,
            subtract: "0".into(),
        };
        let value = to_value(&request);
        let object = value.as_object().unwrap();
        assert!(object.contains_key("orderId"));
        assert!(object.contains_key("shopId"));
        assert!(object.contains_key("hookUrl"));
        assert!(!object.contains_key("walletTo"));
    }

    #[test]
    fn empty_transactions_filter_serializes_to_empty_object() {
        let value = to_value(&GetTransactionsRequest::default());
        assert_eq!(value, serde_json::json!({}));
    }
}
