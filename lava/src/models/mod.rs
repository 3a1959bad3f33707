//! Wire models for the Lava API.
//!
//! Field names map onto the remote JSON contract exactly: Wallet-surface
//! requests use `snake_case` names, Business-surface requests use
//! `camelCase`. Monetary response fields stay decimal strings as returned
//! by the API.

pub mod enums;
pub mod requests;
pub mod responses;
pub mod webhook;

pub use enums::{AccountType, InvoiceStatus, ServiceType, TransactionType};
pub use requests::{
    CreateInvoiceRequest, CreatePayoffRequest, CreateTransferRequest, CreateWithdrawRequest,
    GetPayoffInfoRequest, GetTransactionsRequest,
};
pub use responses::{
    InvoiceInfo, InvoiceInfoResponse, InvoiceResponse, PayoffData, PayoffResponse, SbpBank,
    SbpBanksResponse, StandardResponse, TransactionInfo, TransferInfo, WalletInfo, WithdrawInfo,
};
pub use webhook::WebhookData;
