//! # Wallet Sync Tests
//!
//! Adapter behavior against a scripted wallet, in-memory storage and a journaling
//! presenter.

mod send;

use super::*;
use crate::storage::MemoryStorage;
use crate::testing::{journal, Journal, MockWallet, RecordingPresenter};

pub const ADDRESS: &str = "0xdef0000000000000000000000000000000000001";

pub type TestSync = WalletSync<MockWallet, MemoryStorage, RecordingPresenter>;

pub struct Harness {
    pub sync: TestSync,
    pub wallet: MockWallet,
    pub storage: MemoryStorage,
    pub journal: Journal,
}

impl Harness {
    pub fn presenter(&self) -> &RecordingPresenter {
        self.sync.presenter()
    }

    pub fn entries(&self) -> Vec<String> {
        self.journal.borrow().clone()
    }
}

/// Adapter with a wallet present, not yet connected.
pub fn setup() -> Harness {
    let journal = journal();
    let wallet = MockWallet::new(journal.clone());
    let storage = MemoryStorage::new();
    let sync = WalletSync::new(
        Some(wallet.clone()),
        storage.clone(),
        RecordingPresenter::new(journal.clone()),
    );
    Harness { sync, wallet, storage, journal }
}

/// Adapter with a wallet present and already connected.
pub async fn setup_connected() -> Harness {
    let harness = setup();
    harness.sync.connect().await;
    harness.journal.borrow_mut().clear();
    harness
}

/// Adapter without any injected wallet.
pub fn setup_without_wallet() -> (TestSync, Journal) {
    let journal = journal();
    let sync = WalletSync::new(
        None::<MockWallet>,
        MemoryStorage::new(),
        RecordingPresenter::new(journal.clone()),
    );
    (sync, journal)
}
