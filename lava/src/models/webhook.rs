//! Webhook notifications sent by Lava on payment state changes.

use serde::{Deserialize, Serialize};

/// A payment notification delivered to the merchant's hook URL.
///
/// Authenticity must be checked before trusting the payload: recompute the
/// tag over the raw request body with [`crate::signature::verify`] and the
/// additional key issued in the Lava dashboard, comparing against
/// [`sign`](Self::sign).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookData {
    /// Notification type.
    #[serde(default, rename = "type")]
    pub notification_type: i32,

    /// Invoice identifier.
    #[serde(default)]
    pub invoice_id: String,

    /// Order identifier from the merchant's system.
    #[serde(default)]
    pub order_id: String,

    /// Payment status.
    #[serde(default)]
    pub status: String,

    /// Payment time, Unix seconds.
    #[serde(default)]
    pub pay_time: i64,

    /// Payment amount.
    #[serde(default)]
    pub amount: String,

    /// Custom data supplied when the invoice was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<String>,

    /// Amount credited to the balance.
    #[serde(default)]
    pub credited: String,

    /// Merchant identifier.
    #[serde(default)]
    pub merchant_id: String,

    /// Merchant name.
    #[serde(default)]
    pub merchant_name: String,

    /// Signature over the notification body.
    #[serde(default)]
    pub sign: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature;

    #[test]
    fn deserializes_full_notification() {
        let body = r#"{
            "type": 1,
            "invoice_id": "1ee31634-e3e0-34ce-1423-b5b4cb524c6a",
            "order_id": "order-42",
            "status": "success",
            "pay_time": 1634808630,
            "amount": "100.00",
            "credited": "97.50",
            "merchant_id": "m-1",
            "merchant_name": "Shop",
            "sign": "abc123"
        }"#;
        let data: WebhookData = serde_json::from_str(body).unwrap();
        assert_eq!(data.notification_type, 1);
        assert_eq!(data.order_id, "order-42");
        assert_eq!(data.pay_time, 1_634_808_630);
        assert_eq!(data.credited, "97.50");
        assert!(data.custom_fields.is_none());
    }

    #[test]
    fn raw_body_verifies_against_dashboard_key() {
        let raw_body = r#"{"invoice_id":"abc","status":"success","amount":"10.00"}"#;
        let tag = signature::sign(raw_body, "dashboard-key").unwrap();
        assert!(signature::verify(raw_body, &tag, "dashboard-key"));
        assert!(!signature::verify(raw_body, &tag, "wrong-key"));
    }
}
