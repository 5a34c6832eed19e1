use serde::{Deserialize, Serialize};

use super::transaction::TxRecord;
use crate::constants::MAX_TX_HISTORY;

/// Persisted wallet state: last observed account and chain plus the history.
///
/// `address` and `chain_id` only ever hold values reported by the wallet.
/// `txs` is newest-first and never longer than [`MAX_TX_HISTORY`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    pub address: Option<String>,
    pub chain_id: Option<u64>,
    #[serde(default)]
    pub txs: Vec<TxRecord>,
}

impl WalletState {
    /// Parse a persisted blob. Anything unreadable yields `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str::<WalletState>(raw) {
            Ok(mut state) => {
                state.txs.truncate(MAX_TX_HISTORY);
                Some(state)
            }
            Err(e) => {
                log::warn!("Discarding malformed persisted state: {}", e);
                None
            }
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// Prepend `tx`, dropping the oldest entries past the cap.
    pub(crate) fn push_tx(&mut self, tx: TxRecord) {
        self.txs.insert(0, tx);
        self.txs.truncate(MAX_TX_HISTORY);
    }
}
