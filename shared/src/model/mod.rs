//! # Wallet State Model
//!
//! Persisted data of the harness.
//!
//! - [`state`] - [`WalletState`], the single persisted record
//! - [`transaction`] - [`TxRecord`] history entries
//!
//! ## Wire Format
//!
//! The state is stored as one JSON blob with camelCase keys:
//!
//! ```text
//! {
//!   "address": "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4",
//!   "chainId": 11155111,
//!   "txs": [
//!     { "type": "Send", "to": "0xAb84...", "amount": "1.5", "hash": "0x9f...", "time": 1718000000000 }
//!   ]
//! }
//! ```

pub mod state;
pub mod transaction;

pub use state::*;
pub use transaction::*;
