//! # Wallet Errors
//!
//! A single error type, [`WalletError`], is shared by the store, the wallet
//! capability port and the sync adapter. The adapter is the only place that turns
//! an error into something the user sees (an alert or the send status line).
//!
//! ## Error Categories
//!
//! - **Missing capability**: [`NotInstalled`](WalletError::NotInstalled)
//! - **Precondition**: [`NotConnected`](WalletError::NotConnected),
//!   [`InvalidInput`](WalletError::InvalidInput), [`InvalidAmount`](WalletError::InvalidAmount)
//! - **Wallet/RPC**: [`Provider`](WalletError::Provider),
//!   [`UnrecognizedChain`](WalletError::UnrecognizedChain), [`NoAccounts`](WalletError::NoAccounts),
//!   [`Decode`](WalletError::Decode)
//! - **Persistence**: [`Storage`](WalletError::Storage)

use thiserror::Error;

use crate::constants::UNRECOGNIZED_CHAIN_CODE;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    /// No injected wallet (`window.ethereum`) is available.
    #[error("No wallet installed")]
    NotInstalled,

    /// An operation needs a connected address and none is known.
    #[error("Wallet not connected")]
    NotConnected,

    /// User input failed validation before any wallet call was made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The amount could not be converted to wei.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The wallet rejected the request or the RPC call failed.
    #[error("{message}")]
    Provider { code: Option<i64>, message: String },

    /// The wallet does not know the requested chain (EIP-1193 code 4902).
    #[error("Unrecognized chain")]
    UnrecognizedChain,

    /// `eth_requestAccounts` resolved with an empty list.
    #[error("No accounts returned by wallet")]
    NoAccounts,

    /// A wallet response had an unexpected shape.
    #[error("Unexpected wallet response: {0}")]
    Decode(String),

    /// The key-value store refused a write.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl WalletError {
    /// Build a provider error from an EIP-1193 `{ code, message }` pair.
    ///
    /// Code 4902 is folded into [`WalletError::UnrecognizedChain`] so callers can
    /// match on it without knowing the numeric code.
    pub fn from_provider(code: Option<i64>, message: impl Into<String>) -> Self {
        if code == Some(UNRECOGNIZED_CHAIN_CODE) {
            return WalletError::UnrecognizedChain;
        }
        WalletError::Provider {
            code,
            message: message.into(),
        }
    }

    pub fn is_unrecognized_chain(&self) -> bool {
        matches!(self, WalletError::UnrecognizedChain)
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        WalletError::Decode(err.to_string())
    }
}
