//! # Wallet Sync Adapter
//!
//! [`WalletSync`] sits between the UI and the injected wallet. Each operation
//! calls the wallet, turns the result into a [`WalletEvent`], dispatches it to the
//! [`StateStore`] (which persists it) and re-renders through the [`Presenter`].
//!
//! Wallet notifications take the same route: the listener registered on the
//! wallet only forwards [`ProviderEvent`]s into a channel, and
//! [`WalletSync::run_event_loop`] (or [`WalletSync::process_pending_events`])
//! feeds them to [`WalletSync::handle_wallet_event`].
//!
//! ## Error Surfacing
//!
//! | Operation | Precondition failure | Wallet failure |
//! |-----------|----------------------|----------------|
//! | `connect` | alert | alert |
//! | `switch_network` | alert | alert (4902 falls back to add-chain) |
//! | `send_native` | alert | send status line |
//! | `add_mock_receive` | alert | - |
//! | `refresh_balance` | silent | balance shows `—` |
//!
//! The store is only ever borrowed between awaits, never across one.

use std::cell::{Cell, RefCell};

use async_channel::{Receiver, Sender};

use crate::constants::PLACEHOLDER;
use crate::error::{Result, WalletError};
use crate::model::{TxRecord, WalletState};
use crate::networks::{native_unit, preset_by_key, AddChainParams, ChainPreset};
use crate::presenter::{AccountView, Presenter};
use crate::provider::{ProviderEvent, TransactionRequest, WalletCapability};
use crate::reducer::WalletEvent;
use crate::storage::{KeyValueStorage, StateStore};
use crate::utils::{
    format_balance, now_millis, parse_amount, random_mock_amount, random_mock_hash,
    validate_send_input,
};

const MSG_INSTALL_WALLET: &str = "Please install MetaMask to test.";
const MSG_NO_WALLET: &str = "No wallet";
const MSG_CONNECT_FIRST: &str = "Connect first";
const MSG_CONNECT_FOR_MOCK: &str = "Generate/Connect wallet first";
const MSG_MOCK_ADDED: &str = "Mock receive added";

pub struct WalletSync<W, S, P>
where
    W: WalletCapability,
    S: KeyValueStorage,
    P: Presenter,
{
    wallet: Option<W>,
    store: RefCell<StateStore<S>>,
    presenter: P,
    events_tx: Sender<ProviderEvent>,
    events_rx: Receiver<ProviderEvent>,
    subscribed: Cell<bool>,
}

impl<W, S, P> WalletSync<W, S, P>
where
    W: WalletCapability,
    S: KeyValueStorage,
    P: Presenter,
{
    /// `wallet` is `None` when no extension was injected.
    pub fn new(wallet: Option<W>, storage: S, presenter: P) -> Self {
        let (events_tx, events_rx) = async_channel::unbounded();
        Self {
            wallet,
            store: RefCell::new(StateStore::new(storage)),
            presenter,
            events_tx,
            events_rx,
            subscribed: Cell::new(false),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> WalletState {
        self.store.borrow().state().clone()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Startup sequence: rehydrate, render, refresh balance, and listen to the
    /// wallet if one is present.
    pub async fn bootstrap(&self) {
        self.load();
        self.render_account();
        self.refresh_balance().await;
        self.install_listeners();
    }

    /// Rehydrate from storage and render the history.
    pub fn load(&self) {
        let state = self.store.borrow_mut().load().clone();
        self.presenter.render_transactions(&state.txs);
    }

    /// Prepend `tx`, persist and re-render the history.
    pub fn add_transaction(&self, tx: TxRecord) {
        let state = self.apply(WalletEvent::TransactionAdded(tx));
        self.presenter.render_transactions(&state.txs);
    }

    pub async fn connect(&self) {
        let Some(wallet) = self.wallet.as_ref() else {
            self.presenter.alert(MSG_INSTALL_WALLET);
            return;
        };

        if let Err(e) = self.try_connect(wallet).await {
            log::error!("Connection failed: {}", e);
            self.presenter.alert(&format!("Connection failed: {}", e));
        }
    }

    async fn try_connect(&self, wallet: &W) -> Result<()> {
        let accounts = wallet.request_accounts().await?;
        let address = accounts.into_iter().next().ok_or(WalletError::NoAccounts)?;
        let chain_id = wallet.chain_id().await?;

        log::info!("Connected {} on chain {}", address, chain_id);
        self.apply(WalletEvent::Connected { address, chain_id });
        self.render_account();
        self.refresh_balance().await;
        self.install_listeners();
        Ok(())
    }

    /// Re-query the native balance of the current address.
    pub async fn refresh_balance(&self) {
        let (address, chain_id) = {
            let store = self.store.borrow();
            let state = store.state();
            (state.address.clone(), state.chain_id)
        };
        let Some(address) = address else {
            return;
        };

        let result = match self.wallet.as_ref() {
            Some(wallet) => wallet.get_balance(&address).await,
            None => Err(WalletError::NotInstalled),
        };

        match result {
            Ok(wei) => self.presenter.render_balance(&format_balance(wei, native_unit(chain_id))),
            Err(e) => {
                log::error!("Balance query failed: {}", e);
                self.presenter.render_balance(PLACEHOLDER);
            }
        }
    }

    /// Switch the wallet to the preset named `preset_key`, adding the chain first
    /// if the wallet does not know it.
    pub async fn switch_network(&self, preset_key: &str) {
        let Some(wallet) = self.wallet.as_ref() else {
            self.presenter.alert(MSG_NO_WALLET);
            return;
        };
        let Some(preset) = preset_by_key(preset_key) else {
            log::debug!("Ignoring unknown network preset '{}'", preset_key);
            return;
        };

        if let Err(alert) = self.request_chain(wallet, preset).await {
            self.presenter.alert(&alert);
            return;
        }

        match wallet.chain_id().await {
            Ok(chain_id) => {
                self.apply(WalletEvent::ChainChanged(chain_id));
                self.render_account();
                self.refresh_balance().await;
            }
            Err(e) => {
                log::error!("Reading network after switch failed: {}", e);
                self.presenter.alert(&format!("Switch failed: {}", e));
            }
        }
    }

    /// Switch, falling back to add-chain on 4902. The error is the alert text.
    async fn request_chain(&self, wallet: &W, preset: &ChainPreset) -> std::result::Result<(), String> {
        match wallet.switch_chain(preset.chain_id_hex).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_unrecognized_chain() => {
                log::info!("{} unknown to wallet, requesting add", preset.name);
                wallet
                    .add_chain(&AddChainParams::from(preset))
                    .await
                    .map_err(|e| {
                        log::error!("add chain error: {}", e);
                        format!("Could not add chain: {}", e)
                    })
            }
            Err(e) => {
                log::error!("switch error: {}", e);
                Err(format!("Switch failed: {}", e))
            }
        }
    }

    /// Send `amount` of native currency to `to`.
    ///
    /// The `Send` record is added as soon as the wallet returns a hash, before
    /// confirmation.
    pub async fn send_native(&self, to: &str, amount: &str) {
        let Some(from) = self.store.borrow().state().address.clone() else {
            self.presenter.alert(MSG_CONNECT_FIRST);
            return;
        };
        let (to, amount) = match validate_send_input(to, amount) {
            Ok(input) => input,
            Err(e) => {
                let message = match e {
                    WalletError::InvalidInput(message) => message,
                    other => other.to_string(),
                };
                self.presenter.alert(&message);
                return;
            }
        };

        if let Err(e) = self.try_send(from, to, amount).await {
            log::error!("Send failed: {}", e);
            self.presenter.set_send_status(&format!("Error: {}", e));
        }
    }

    async fn try_send(&self, from: String, to: String, amount: String) -> Result<()> {
        let wallet = self.wallet.as_ref().ok_or(WalletError::NotInstalled)?;
        let value = parse_amount(&amount)?;

        let sent = wallet
            .send_transaction(TransactionRequest { from, to: to.clone(), value })
            .await?;
        self.presenter.set_send_status(&format!("Sending tx: {}", sent.hash));
        self.add_transaction(TxRecord::send(to, amount, sent.hash.clone(), now_millis()));

        wallet.wait_for_confirmation(&sent.hash).await?;
        log::info!("Confirmed {}", sent.hash);
        self.presenter.set_send_status(&format!("Confirmed: {}", sent.hash));
        self.refresh_balance().await;
        Ok(())
    }

    /// Add a fabricated `Receive` entry for testing the history display.
    pub fn add_mock_receive(&self) {
        let Some(address) = self.store.borrow().state().address.clone() else {
            self.presenter.alert(MSG_CONNECT_FOR_MOCK);
            return;
        };

        self.add_transaction(TxRecord::receive(
            address,
            random_mock_amount(),
            random_mock_hash(),
            now_millis(),
        ));
        self.presenter.alert(MSG_MOCK_ADDED);
    }

    /// Reconcile with a notification pushed by the wallet.
    pub async fn handle_wallet_event(&self, event: ProviderEvent) {
        log::debug!("Wallet event: {:?}", event);
        match event {
            ProviderEvent::AccountsChanged(accounts) => {
                let state = self.apply(WalletEvent::AccountsChanged(accounts));
                if state.address.is_none() {
                    self.presenter.render_balance(PLACEHOLDER);
                }
            }
            ProviderEvent::ChainChanged => {
                let Some(wallet) = self.wallet.as_ref() else {
                    return;
                };
                match wallet.chain_id().await {
                    Ok(chain_id) => {
                        self.apply(WalletEvent::ChainChanged(chain_id));
                    }
                    Err(e) => {
                        log::error!("Reading network after chainChanged failed: {}", e);
                        return;
                    }
                }
            }
        }
        self.render_account();
        self.refresh_balance().await;
    }

    /// Handle every queued wallet event and return how many there were.
    pub async fn process_pending_events(&self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_wallet_event(event).await;
            handled += 1;
        }
        handled
    }

    /// Handle wallet events as they arrive. Runs for the lifetime of the adapter.
    pub async fn run_event_loop(&self) {
        while let Ok(event) = self.events_rx.recv().await {
            self.handle_wallet_event(event).await;
        }
    }

    /// Register the forwarding listener once per adapter.
    fn install_listeners(&self) {
        let Some(wallet) = self.wallet.as_ref() else {
            return;
        };
        if self.subscribed.replace(true) {
            return;
        }

        let events_tx = self.events_tx.clone();
        wallet.subscribe(Box::new(move |event| {
            if let Err(e) = events_tx.try_send(event) {
                log::warn!("Dropping wallet event: {}", e);
            }
        }));
        log::debug!("Subscribed to wallet events");
    }

    fn apply(&self, event: WalletEvent) -> WalletState {
        self.store.borrow_mut().dispatch(event).clone()
    }

    fn render_account(&self) {
        let view = AccountView::from_state(self.store.borrow().state());
        self.presenter.render_account(&view);
    }
}

#[cfg(test)]
mod tests;
