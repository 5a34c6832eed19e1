//! Wallet view state management

use std::rc::Rc;

use leptos::prelude::*;
use shared::constants::PLACEHOLDER;
use shared::{AccountView, Presenter, TxRecord, WalletState, WalletSync};

use crate::services::{BrowserStorage, Eip1193Wallet};

/// Reactive view of the wallet state. Written only by the sync adapter through
/// [`Presenter`].
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub account: RwSignal<AccountView>,
    pub balance: RwSignal<String>,
    pub txs: RwSignal<Vec<TxRecord>>,
    pub send_status: RwSignal<String>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            account: RwSignal::new(AccountView::from_state(&WalletState::default())),
            balance: RwSignal::new(PLACEHOLDER.to_string()),
            txs: RwSignal::new(Vec::new()),
            send_status: RwSignal::new(String::new()),
        }
    }
}

impl Presenter for WalletContext {
    fn render_account(&self, view: &AccountView) {
        self.account.set(view.clone());
    }

    fn render_balance(&self, text: &str) {
        self.balance.set(text.to_string());
    }

    fn render_transactions(&self, txs: &[TxRecord]) {
        self.txs.set(txs.to_vec());
    }

    fn set_send_status(&self, text: &str) {
        self.send_status.set(text.to_string());
    }

    fn alert(&self, message: &str) {
        log::info!("alert: {}", message);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

pub type HarnessSync = WalletSync<Eip1193Wallet, BrowserStorage, WalletContext>;

/// Shared handle to the sync adapter for event handlers.
#[derive(Clone, Copy)]
pub struct SyncHandle(StoredValue<Rc<HarnessSync>, LocalStorage>);

impl SyncHandle {
    pub fn get(&self) -> Rc<HarnessSync> {
        self.0.get_value()
    }

    /// Run `action` against the adapter on the local executor.
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<HarnessSync>) -> Fut + 'static,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        let sync = self.get();
        leptos::task::spawn_local(action(sync));
    }
}

/// Create the view state and the adapter, and make both available to components.
pub fn provide_wallet_context() -> (WalletContext, SyncHandle) {
    let context = WalletContext::new();
    let sync = WalletSync::new(Eip1193Wallet::detect(), BrowserStorage::open(), context);
    let handle = SyncHandle(StoredValue::new_local(Rc::new(sync)));

    provide_context(context);
    provide_context(handle);
    (context, handle)
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

pub fn use_sync() -> SyncHandle {
    expect_context::<SyncHandle>()
}
