//! HMAC-SHA256 request signing and webhook verification.
//!
//! The Business API requires merchant requests to carry a `signature` field
//! computed over the JSON request body with a secret key from the Lava
//! dashboard. The same primitive authenticates inbound webhooks: Lava signs
//! the notification body with the dashboard's additional key and the
//! receiver checks it with [`verify`].
//!
//! Signing is pure and deterministic: the same `(body, key)` pair always
//! produces the same lowercase hex tag. [`sign_value`] serializes with
//! `serde_json`, whose output for a given struct is fixed by field
//! declaration order, so signing a value is deterministic as well.

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Errors that can occur while producing a signature.
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    /// The JSON body to sign was empty.
    #[error("JSON body cannot be empty")]
    EmptyBody,

    /// The secret key was empty.
    #[error("secret key cannot be empty")]
    EmptyKey,

    /// Serializing the value to JSON failed.
    #[error("failed to serialize value for signing: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Computes the HMAC-SHA256 signature of a JSON body.
///
/// The tag is computed over the UTF-8 bytes of `json_body` keyed with the
/// UTF-8 bytes of `secret_key`, and returned as lowercase hex.
///
/// # Errors
///
/// Returns [`SignatureError`] if `json_body` or `secret_key` is empty.
pub fn sign(json_body: &str, secret_key: &str) -> Result<String, SignatureError> {
    if json_body.is_empty() {
        return Err(SignatureError::EmptyBody);
    }
    if secret_key.is_empty() {
        return Err(SignatureError::EmptyKey);
    }

    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(json_body.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Serializes `value` to JSON and signs the result.
///
/// # Errors
///
/// Returns [`SignatureError`] if serialization fails or produces an empty
/// body, or if `secret_key` is empty.
pub fn sign_value<T>(value: &T, secret_key: &str) -> Result<String, SignatureError>
where
    T: Serialize + ?Sized,
{
    let json_body = serde_json::to_string(value)?;
    sign(&json_body, secret_key)
}

/// Checks a candidate signature against a JSON body and key.
///
/// Returns `false` — never an error — when any argument is empty or the
/// candidate is not valid hex. Hex decoding makes the comparison
/// case-insensitive, and the final check runs in constant time via the
/// `hmac` crate's `verify_slice`.
#[must_use]
pub fn verify(json_body: &str, signature: &str, secret_key: &str) -> bool {
    if json_body.is_empty() || signature.is_empty() || secret_key.is_empty() {
        return false;
    }

    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(json_body.as_bytes());

    // Invalid hex compares against zeros so the hot path stays uniform.
    let candidate = hex::decode(signature).unwrap_or_else(|_| vec![0u8; 32]);
    mac.verify_slice(&candidate).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_is_deterministic() {
        let a = sign(r#"{"amount":1}"#, "key").unwrap();
        let b = sign(r#"{"amount":1}"#, "key").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sign_matches_rfc4231_vector() {
        // RFC 4231 test case 2.
        let tag = sign("what do ya want for nothing?", "Jefe").unwrap();
        assert_eq!(
            tag,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn sign_is_lowercase_hex() {
        let tag = sign("body", "key").unwrap();
        assert_eq!(tag.len(), 64);
        assert!(tag.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn sign_rejects_empty_inputs() {
        assert!(matches!(sign("", "key"), Err(SignatureError::EmptyBody)));
        assert!(matches!(sign("body", ""), Err(SignatureError::EmptyKey)));
    }

    #[test]
    fn sign_value_delegates_to_string_form() {
        #[derive(serde::Serialize)]
        struct Payload {
            amount: u32,
        }

        let by_value = sign_value(&Payload { amount: 5 }, "key").unwrap();
        let by_string = sign(r#"{"amount":5}"#, "key").unwrap();
        assert_eq!(by_value, by_string);
    }

    #[test]
    fn verify_round_trips() {
        let body = r#"{"invoice_id":"abc","status":"success"}"#;
        let tag = sign(body, "hook-key").unwrap();
        assert!(verify(body, &tag, "hook-key"));
    }

    #[test]
    fn verify_is_case_insensitive() {
        let body = r#"{"invoice_id":"abc"}"#;
        let tag = sign(body, "hook-key").unwrap().to_uppercase();
        assert!(verify(body, &tag, "hook-key"));
    }

    #[test]
    fn verify_rejects_empty_inputs() {
        let tag = sign("body", "key").unwrap();
        assert!(!verify("", &tag, "key"));
        assert!(!verify("body", "", "key"));
        assert!(!verify("body", &tag, ""));
    }

    #[test]
    fn verify_rejects_wrong_key_and_tampered_body() {
        let tag = sign("body", "key").unwrap();
        assert!(!verify("body", &tag, "other-key"));
        assert!(!verify("tampered", &tag, "key"));
    }

    #[test]
    fn verify_rejects_invalid_hex() {
        assert!(!verify("body", "not-hex-zz", "key"));
    }
}
