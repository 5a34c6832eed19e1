//! # State Store
//!
//! [`StateStore`] owns the [`WalletState`] and writes it through to a
//! [`KeyValueStorage`] after every change. The storage port lets the browser use
//! `localStorage` while tests use [`MemoryStorage`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::constants::STATE_KEY;
use crate::error::Result;
use crate::model::{TxRecord, WalletState};
use crate::reducer::{reduce, WalletEvent};

/// Key-value persistence port.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage. Clones share the same entries, so a second store built
/// from a clone sees what the first one saved.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Owner of the wallet state and its persisted copy.
pub struct StateStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    state: WalletState,
}

impl<S: KeyValueStorage> StateStore<S> {
    /// Create a store with default state under [`STATE_KEY`]. Call [`load`](Self::load)
    /// to rehydrate.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STATE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            state: WalletState::default(),
        }
    }

    pub fn state(&self) -> &WalletState {
        &self.state
    }

    /// Rehydrate from storage. Absent or malformed data leaves the current state
    /// untouched.
    pub fn load(&mut self) -> &WalletState {
        if let Some(state) = self.storage.get(&self.key).as_deref().and_then(WalletState::from_json) {
            log::debug!("Loaded wallet state ({} txs)", state.txs.len());
            self.state = state;
        }
        &self.state
    }

    /// Write the current state to storage. Failures are logged, not returned.
    pub fn save(&self) {
        let result = self
            .state
            .to_json()
            .and_then(|json| self.storage.set(&self.key, &json));
        if let Err(e) = result {
            log::warn!("Failed to persist wallet state: {}", e);
        }
    }

    /// Apply `event` and persist.
    pub fn dispatch(&mut self, event: WalletEvent) -> &WalletState {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
        self.save();
        &self.state
    }

    pub fn add_transaction(&mut self, tx: TxRecord) -> &WalletState {
        self.dispatch(WalletEvent::TransactionAdded(tx))
    }

    /// Back to `{None, None, []}`, persisted.
    pub fn reset(&mut self) {
        self.state = WalletState::default();
        self.save();
    }
}
