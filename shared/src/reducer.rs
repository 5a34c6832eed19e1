//! # State Reducer
//!
//! Every change to [`WalletState`] is expressed as a [`WalletEvent`] and applied by
//! [`reduce`]. User actions (connect, switch, send, mock receive) and wallet
//! notifications (`accountsChanged`, `chainChanged`) produce the same event type,
//! so there is exactly one mutation path.

use crate::model::{TxRecord, WalletState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    /// Accounts were granted and the current chain was read.
    Connected { address: String, chain_id: u64 },
    /// The wallet reported a new account list; the first entry is active.
    AccountsChanged(Vec<String>),
    /// The wallet is now on `chain_id`.
    ChainChanged(u64),
    /// A transaction (real or mock) was created.
    TransactionAdded(TxRecord),
}

/// Apply `event` to `state`.
pub fn reduce(mut state: WalletState, event: WalletEvent) -> WalletState {
    match event {
        WalletEvent::Connected { address, chain_id } => {
            state.address = Some(address);
            state.chain_id = Some(chain_id);
        }
        WalletEvent::AccountsChanged(accounts) => {
            state.address = accounts.into_iter().next();
        }
        WalletEvent::ChainChanged(chain_id) => {
            state.chain_id = Some(chain_id);
        }
        WalletEvent::TransactionAdded(tx) => state.push_tx(tx),
    }
    state
}
