//! # BAINT Wallet Harness Core
//!
//! Platform-independent core of the wallet test harness. The browser crate
//! supplies the three ports (wallet, storage, presentation); everything else
//! lives here and is tested natively.
//!
//! ## Structure
//!
//! - **[`model`]**: [`WalletState`] and [`TxRecord`], the persisted data
//! - **[`reducer`]**: [`WalletEvent`] and the pure [`reduce`] function
//! - **[`storage`]**: [`KeyValueStorage`] port and the write-through [`StateStore`]
//! - **[`provider`]**: [`WalletCapability`] port for the injected wallet
//! - **[`presenter`]**: [`Presenter`] port for rendering and alerts
//! - **[`sync`]**: [`WalletSync`], the adapter tying the ports together
//! - **[`networks`]**: test network presets
//! - **[`utils`]**: address/amount/time formatting and input validation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shared::{MemoryStorage, Presenter, WalletCapability, WalletSync};
//!
//! async fn run<W: WalletCapability, P: Presenter>(wallet: Option<W>, presenter: P) {
//!     let sync = WalletSync::new(wallet, MemoryStorage::new(), presenter);
//!     sync.bootstrap().await;
//!     sync.connect().await;
//!     sync.switch_network("sepolia").await;
//!     sync.send_native("0xAb8483F64d9C6d1EcF9b849Ae677dD3315835cb2", "0.01").await;
//! }
//! ```

pub mod constants;
pub mod error;
pub mod model;
pub mod networks;
pub mod presenter;
pub mod provider;
pub mod reducer;
pub mod storage;
pub mod sync;
pub mod utils;

#[cfg(test)]
mod testing;

pub use error::{Result, WalletError};
pub use model::*;
pub use networks::{ChainPreset, CHAIN_PRESETS};
pub use presenter::{AccountView, Presenter};
pub use provider::{EventListener, ProviderEvent, SentTransaction, TransactionRequest, WalletCapability};
pub use reducer::{reduce, WalletEvent};
pub use storage::{KeyValueStorage, MemoryStorage, StateStore};
pub use sync::WalletSync;
