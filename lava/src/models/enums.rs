//! Domain enumerations shared by both API surfaces.

use serde::{Deserialize, Serialize};

/// The Lava account surface a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Merchant account (Business API).
    Business,
    /// Personal wallet account (Wallet API).
    Wallet,
}

/// Payment and withdrawal services supported by Lava.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    /// Bank card transfer.
    #[serde(rename = "card")]
    Card,
    /// QIWI wallet.
    #[serde(rename = "qiwi")]
    Qiwi,
    /// YooMoney wallet.
    #[serde(rename = "yoomoney")]
    YooMoney,
    /// Lava wallet (internal transfer).
    #[serde(rename = "lava")]
    Lava,
    /// AdvCash wallet.
    #[serde(rename = "advcash")]
    AdvCash,
    /// Payeer wallet.
    #[serde(rename = "payeer")]
    Payeer,
    /// Mobile phone number.
    #[serde(rename = "phone")]
    Phone,
    /// PerfectMoney wallet.
    #[serde(rename = "perfectmoney")]
    PerfectMoney,
    /// Fast Payment System transfer.
    #[serde(rename = "sbp")]
    Sbp,
    /// Steam wallet.
    #[serde(rename = "steam")]
    Steam,
}

impl ServiceType {
    /// Returns the wire string used in request bodies.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Qiwi => "qiwi",
            Self::YooMoney => "yoomoney",
            Self::Lava => "lava",
            Self::AdvCash => "advcash",
            Self::Payeer => "payeer",
            Self::Phone => "phone",
            Self::PerfectMoney => "perfectmoney",
            Self::Sbp => "sbp",
            Self::Steam => "steam",
        }
    }
}

impl core::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Invoice created, awaiting payment.
    Created,
    /// Payment received and confirmed.
    Success,
    /// Invoice expired without payment.
    Expired,
    /// Payment cancelled or rejected.
    Cancelled,
}

impl InvoiceStatus {
    /// Returns the wire string used in response bodies.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Success => "success",
            Self::Expired => "expired",
            Self::Cancelled => "cancelled",
        }
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of a wallet transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Withdrawal from the account.
    Withdraw,
    /// Transfer between accounts.
    Transfer,
    /// Incoming payment.
    Income,
}

impl TransactionType {
    /// Returns the wire string used in transaction filters.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Withdraw => "withdraw",
            Self::Transfer => "transfer",
            Self::Income => "income",
        }
    }
}

impl core::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_type_serializes_to_wire_string() {
        let json = serde_json::to_string(&ServiceType::YooMoney).unwrap();
        assert_eq!(json, r#""yoomoney""#);
    }

    #[test]
    fn invoice_status_round_trips() {
        for status in [
            InvoiceStatus::Created,
            InvoiceStatus::Success,
            InvoiceStatus::Expired,
            InvoiceStatus::Cancelled,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!(r#""{status}""#));
            let back: InvoiceStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn transaction_type_matches_filter_strings() {
        assert_eq!(TransactionType::Withdraw.as_str(), "withdraw");
        assert_eq!(TransactionType::Transfer.as_str(), "transfer");
        assert_eq!(TransactionType::Income.as_str(), "income");
    }
}
