//! Error types for the Lava API request cycle.

use lava::ErrorCode;

/// Errors produced while talking to the Lava API.
///
/// Every fallible operation resolves to exactly one of these variants. The
/// kind tells the caller what to do about it: [`Authentication`] — fix the
/// token; [`Validation`] — fix the request parameters (the code says
/// which); [`NotFound`] — the resource is absent; [`Http`] and [`Decode`]
/// are infrastructure-level and a caller-side retry policy may apply.
/// The shared accessors ([`error_code`], [`status`], [`response_body`])
/// expose the same diagnostic fields regardless of kind.
///
/// [`Authentication`]: Self::Authentication
/// [`Validation`]: Self::Validation
/// [`NotFound`]: Self::NotFound
/// [`Http`]: Self::Http
/// [`Decode`]: Self::Decode
/// [`error_code`]: Self::error_code
/// [`status`]: Self::status
/// [`response_body`]: Self::response_body
#[derive(Debug, thiserror::Error)]
pub enum LavaError {
    /// The API rejected the token (HTTP 401 or 403).
    #[error("{message}")]
    Authentication {
        /// Human-readable message.
        message: String,
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("{message}")]
    NotFound {
        /// Human-readable message.
        message: String,
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The API rejected the request parameters.
    #[error("{message}")]
    Validation {
        /// Message from the response body.
        message: String,
        /// Provider error code; always in the validation subset.
        code: ErrorCode,
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The API reported a non-validation failure with an error code.
    #[error("{message}")]
    Api {
        /// Message from the response body.
        message: String,
        /// Provider error code.
        code: ErrorCode,
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The request failed at the HTTP level: the send failed, the call
    /// timed out, or the API returned a status the classifier could not
    /// attribute to a provider error code.
    #[error("{message}")]
    Http {
        /// Human-readable message; distinguishes timeouts from send
        /// failures.
        message: String,
        /// HTTP status code, when a response was received.
        status: Option<u16>,
        /// Raw response body, when a response was received.
        body: Option<String>,
        /// Underlying network error, when the send itself failed.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// A success response carried a body that could not be decoded into
    /// the expected type, or decoded to JSON `null`.
    #[error("{message}")]
    Decode {
        /// Human-readable message.
        message: String,
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body.
        body: String,
        /// Underlying deserialization error, when there was one.
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl LavaError {
    /// Returns the provider error code, when the API reported one.
    #[must_use]
    pub const fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Validation { code, .. } | Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the HTTP status code, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. }
            | Self::NotFound { status, .. }
            | Self::Validation { status, .. }
            | Self::Api { status, .. }
            | Self::Decode { status, .. } => Some(*status),
            Self::Http { status, .. } => *status,
        }
    }

    /// Returns the raw response body, when one was captured.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Authentication { body, .. }
            | Self::NotFound { body, .. }
            | Self::Validation { body, .. }
            | Self::Api { body, .. }
            | Self::Decode { body, .. } => Some(body),
            Self::Http { body, .. } => body.as_deref(),
        }
    }
}

/// Errors that can occur while constructing a client.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The API token was empty or all whitespace.
    #[error("API token cannot be empty")]
    EmptyToken,

    /// The base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}
