#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for the Lava payment API.
//!
//! This crate provides the foundational pieces shared by both Lava account
//! surfaces — the consumer Wallet API and the merchant Business API. The
//! HTTP transport and the typed endpoint clients live in the companion
//! `lava-http` crate.
//!
//! # Modules
//!
//! - [`codes`] — the fixed table of provider error codes and the validation
//!   subset used for error classification
//! - [`models`] — request, response, and webhook wire models
//! - [`signature`] — HMAC-SHA256 signing and webhook signature verification
//!
//! # Monetary amounts
//!
//! Request amounts are [`rust_decimal::Decimal`] values serialized as exact
//! JSON numbers. Response amounts are kept as the decimal strings the API
//! returns, so no precision is lost on either direction of the wire.

pub mod codes;
pub mod models;
pub mod signature;

pub use codes::ErrorCode;
