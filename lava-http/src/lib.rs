#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP transport and typed clients for the Lava payment API.
//!
//! This crate wraps the two Lava account surfaces behind typed async
//! clients: [`LavaWalletClient`] for the consumer Wallet API and
//! [`LavaBusinessClient`] for the merchant Business API. Both share the
//! same [`HttpTransport`], which owns the authenticated request cycle and
//! resolves every call to either a decoded value or exactly one
//! [`LavaError`].
//!
//! # Modules
//!
//! - [`constants`] — fixed origin, default timeout, probe path
//! - [`error`] — the [`LavaError`] taxonomy and construction errors
//! - [`transport`] — the authenticated request/response cycle
//! - [`wallet`] — Wallet API operations
//! - [`business`] — Business API operations
//!
//! # Feature flags
//!
//! - `telemetry` — adds `tracing` spans around transport calls

pub mod business;
pub mod constants;
pub mod error;
pub mod transport;
pub mod wallet;

pub use business::LavaBusinessClient;
pub use error::{BuildError, LavaError};
pub use transport::HttpTransport;
pub use wallet::LavaWalletClient;
