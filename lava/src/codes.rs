//! Provider error codes returned by the Lava API.
//!
//! The API reports failures as a JSON object with an integer `error_code`
//! field. This module carries the published code table and the subset of
//! codes that indicate a request-validation failure (as opposed to a state
//! or infrastructure problem on the provider side).

/// A provider error code from the Lava API.
///
/// The named variants cover every code the API documents. Codes outside the
/// published table are preserved as [`ErrorCode::Other`] so the numeric
/// value survives classification and can still be matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Unknown error (0).
    UnknownError,
    /// Object not found (1).
    ObjectNotFound,
    /// Invalid parameter value (2).
    InvalidParameterValue,
    /// Invalid JWT token (5).
    InvalidJwtToken,
    /// Server error (6).
    ServerError,
    /// Invalid request type (7).
    InvalidRequestType,
    /// Invalid parameters provided (100).
    InvalidParameters,
    /// Invalid invoice number (101).
    InvalidInvoiceNumber,
    /// Amount is below the allowed minimum (102).
    AmountBelowMinimum,
    /// Amount exceeds the allowed maximum (103).
    AmountAboveMaximum,
    /// Insufficient balance (104).
    InsufficientBalance,
    /// Transaction not found (105).
    TransactionNotFound,
    /// Transfer unavailable (107).
    TransferUnavailable,
    /// Expire time is below the allowed minimum (202).
    ExpireBelowMinimum,
    /// Expire time exceeds the allowed maximum (203).
    ExpireAboveMaximum,
    /// Order number exceeds 255 characters (204).
    OrderNumberTooLong,
    /// Order number already exists (205).
    OrderNumberAlreadyExists,
    /// Invoice not found (206).
    InvoiceNotFound,
    /// Invoice has expired (207).
    InvoiceExpired,
    /// Invoice already paid (208).
    InvoiceAlreadyPaid,
    /// Secret key not set (209).
    SecretKeyNotSet,
    /// Invalid signature (210).
    InvalidSignature,
    /// Conversion unavailable (251).
    ConversionUnavailable,
    /// A code outside the published table.
    Other(i32),
}

impl ErrorCode {
    /// Maps a raw numeric code onto the published table.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::UnknownError,
            1 => Self::ObjectNotFound,
            2 => Self::InvalidParameterValue,
            5 => Self::InvalidJwtToken,
            6 => Self::ServerError,
            7 => Self::InvalidRequestType,
            100 => Self::InvalidParameters,
            101 => Self::InvalidInvoiceNumber,
            102 => Self::AmountBelowMinimum,
            103 => Self::AmountAboveMaximum,
            104 => Self::InsufficientBalance,
            105 => Self::TransactionNotFound,
            107 => Self::TransferUnavailable,
            202 => Self::ExpireBelowMinimum,
            203 => Self::ExpireAboveMaximum,
            204 => Self::OrderNumberTooLong,
            205 => Self::OrderNumberAlreadyExists,
            206 => Self::InvoiceNotFound,
            207 => Self::InvoiceExpired,
            208 => Self::InvoiceAlreadyPaid,
            209 => Self::SecretKeyNotSet,
            210 => Self::InvalidSignature,
            251 => Self::ConversionUnavailable,
            other => Self::Other(other),
        }
    }

    /// Returns the raw numeric code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::UnknownError => 0,
            Self::ObjectNotFound => 1,
            Self::InvalidParameterValue => 2,
            Self::InvalidJwtToken => 5,
            Self::ServerError => 6,
            Self::InvalidRequestType => 7,
            Self::InvalidParameters => 100,
            Self::InvalidInvoiceNumber => 101,
            Self::AmountBelowMinimum => 102,
            Self::AmountAboveMaximum => 103,
            Self::InsufficientBalance => 104,
            Self::TransactionNotFound => 105,
            Self::TransferUnavailable => 107,
            Self::ExpireBelowMinimum => 202,
            Self::ExpireAboveMaximum => 203,
            Self::OrderNumberTooLong => 204,
            Self::OrderNumberAlreadyExists => 205,
            Self::InvoiceNotFound => 206,
            Self::InvoiceExpired => 207,
            Self::InvoiceAlreadyPaid => 208,
            Self::SecretKeyNotSet => 209,
            Self::InvalidSignature => 210,
            Self::ConversionUnavailable => 251,
            Self::Other(code) => *code,
        }
    }

    /// Returns `true` if this code indicates a request-validation failure.
    ///
    /// Validation failures mean the request parameters themselves were
    /// rejected; fixing the request is expected to resolve them. Every
    /// other code classifies as a generic API error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameterValue
                | Self::InvalidParameters
                | Self::InvalidInvoiceNumber
                | Self::AmountBelowMinimum
                | Self::AmountAboveMaximum
                | Self::ExpireBelowMinimum
                | Self::ExpireAboveMaximum
                | Self::OrderNumberTooLong
                | Self::OrderNumberAlreadyExists
        )
    }

    /// Returns a short human-readable description of the code.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnknownError => "unknown error",
            Self::ObjectNotFound => "object not found",
            Self::InvalidParameterValue => "invalid parameter value",
            Self::InvalidJwtToken => "invalid JWT token",
            Self::ServerError => "server error",
            Self::InvalidRequestType => "invalid request type",
            Self::InvalidParameters => "invalid parameters provided",
            Self::InvalidInvoiceNumber => "invalid invoice number",
            Self::AmountBelowMinimum => "amount is below minimum",
            Self::AmountAboveMaximum => "amount exceeds maximum",
            Self::InsufficientBalance => "insufficient balance",
            Self::TransactionNotFound => "transaction not found",
            Self::TransferUnavailable => "transfer unavailable",
            Self::ExpireBelowMinimum => "expire time is below minimum",
            Self::ExpireAboveMaximum => "expire time exceeds maximum",
            Self::OrderNumberTooLong => "order number exceeds 255 characters",
            Self::OrderNumberAlreadyExists => "order number already exists",
            Self::InvoiceNotFound => "invoice not found",
            Self::InvoiceExpired => "invoice has expired",
            Self::InvoiceAlreadyPaid => "invoice already paid",
            Self::SecretKeyNotSet => "secret key not set",
            Self::InvalidSignature => "invalid signature",
            Self::ConversionUnavailable => "conversion unavailable",
            Self::Other(_) => "undocumented error code",
        }
    }
}

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (code {})", self.description(), self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_published_codes() {
        assert_eq!(ErrorCode::from_code(0), ErrorCode::UnknownError);
        assert_eq!(ErrorCode::from_code(102), ErrorCode::AmountBelowMinimum);
        assert_eq!(
            ErrorCode::from_code(205),
            ErrorCode::OrderNumberAlreadyExists
        );
        assert_eq!(ErrorCode::from_code(251), ErrorCode::ConversionUnavailable);
    }

    #[test]
    fn preserves_unpublished_codes() {
        let code = ErrorCode::from_code(9000);
        assert_eq!(code, ErrorCode::Other(9000));
        assert_eq!(code.code(), 9000);
        assert!(!code.is_validation());
    }

    #[test]
    fn code_round_trips_for_published_table() {
        for raw in [
            0, 1, 2, 5, 6, 7, 100, 101, 102, 103, 104, 105, 107, 202, 203, 204, 205, 206, 207,
            208, 209, 210, 251,
        ] {
            assert_eq!(ErrorCode::from_code(raw).code(), raw);
        }
    }

    #[test]
    fn validation_subset_is_exact() {
        let validation = [2, 100, 101, 102, 103, 202, 203, 204, 205];
        for raw in validation {
            assert!(ErrorCode::from_code(raw).is_validation(), "code {raw}");
        }
        for raw in [0, 1, 5, 6, 7, 104, 105, 107, 206, 207, 208, 209, 210, 251] {
            assert!(!ErrorCode::from_code(raw).is_validation(), "code {raw}");
        }
    }

    #[test]
    fn display_includes_numeric_code() {
        let rendered = ErrorCode::AmountBelowMinimum.to_string();
        assert!(rendered.contains("102"));
    }
}
