//! # Wallet Capability Port
//!
//! [`WalletCapability`] is the exact set of operations the harness needs from an
//! injected wallet. The browser build implements it over EIP-1193
//! (`window.ethereum`); tests use a scripted mock.
//!
//! All futures are `?Send`: the harness runs on a single-threaded event loop.

use alloy_primitives::U256;
use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::networks::AddChainParams;

/// Notification pushed by the wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    AccountsChanged(Vec<String>),
    /// The wallet switched chains; the new id has to be read back.
    ChainChanged,
}

pub type EventListener = Box<dyn Fn(ProviderEvent)>;

/// Native-currency transfer. `value` is wei and serializes as a `0x` quantity.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub value: U256,
}

/// A broadcast transaction whose confirmation is still pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentTransaction {
    pub hash: String,
}

#[async_trait(?Send)]
pub trait WalletCapability {
    /// Ask the user for account access. The first entry is the active account.
    async fn request_accounts(&self) -> Result<Vec<String>>;

    /// Chain id of the currently selected network.
    async fn chain_id(&self) -> Result<u64>;

    /// Native balance in wei.
    async fn get_balance(&self, address: &str) -> Result<U256>;

    /// Sign and broadcast through the wallet. Resolves once a hash is known.
    async fn send_transaction(&self, request: TransactionRequest) -> Result<SentTransaction>;

    /// Resolves when the transaction is mined. No timeout.
    async fn wait_for_confirmation(&self, hash: &str) -> Result<()>;

    /// `wallet_switchEthereumChain`. Unknown chains fail with
    /// [`WalletError::UnrecognizedChain`](crate::WalletError::UnrecognizedChain).
    async fn switch_chain(&self, chain_id_hex: &str) -> Result<()>;

    /// `wallet_addEthereumChain`.
    async fn add_chain(&self, params: &AddChainParams) -> Result<()>;

    /// Register a listener for `accountsChanged` and `chainChanged`.
    fn subscribe(&self, listener: EventListener);
}
