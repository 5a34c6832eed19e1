//! Test doubles for the storage, wallet and presentation ports.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use alloy_primitives::U256;
use async_trait::async_trait;

use crate::error::{Result, WalletError};
use crate::model::TxRecord;
use crate::networks::AddChainParams;
use crate::presenter::{AccountView, Presenter};
use crate::provider::{EventListener, ProviderEvent, SentTransaction, TransactionRequest, WalletCapability};
use crate::storage::KeyValueStorage;
use crate::utils::parse_hex_u64;

/// Ordered record of everything the wallet and presenter were asked to do.
pub type Journal = Rc<RefCell<Vec<String>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

/// Storage whose writes always fail.
pub struct FailingStorage;

impl KeyValueStorage for FailingStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(WalletError::Storage("QuotaExceededError".to_string()))
    }
}

struct MockWalletInner {
    journal: Journal,
    accounts: RefCell<Result<Vec<String>>>,
    chain_id: Cell<u64>,
    chain_id_error: RefCell<Option<WalletError>>,
    balance: RefCell<Result<U256>>,
    send_result: RefCell<Result<String>>,
    wait_result: RefCell<Result<()>>,
    switch_error: RefCell<Option<WalletError>>,
    add_error: RefCell<Option<WalletError>>,
    sent: RefCell<Vec<TransactionRequest>>,
    added: RefCell<Vec<AddChainParams>>,
    listeners: RefCell<Vec<EventListener>>,
}

/// Scripted wallet. Clones share state so a test can keep a handle after
/// moving one into the adapter.
#[derive(Clone)]
pub struct MockWallet {
    inner: Rc<MockWalletInner>,
}

impl MockWallet {
    pub fn new(journal: Journal) -> Self {
        Self {
            inner: Rc::new(MockWalletInner {
                journal,
                accounts: RefCell::new(Ok(vec!["0xdef0000000000000000000000000000000000001".to_string()])),
                chain_id: Cell::new(11155111),
                chain_id_error: RefCell::new(None),
                balance: RefCell::new(Ok(U256::from(2_000_000_000_000_000_000u128))),
                send_result: RefCell::new(Ok("0xfeed".to_string())),
                wait_result: RefCell::new(Ok(())),
                switch_error: RefCell::new(None),
                add_error: RefCell::new(None),
                sent: RefCell::new(Vec::new()),
                added: RefCell::new(Vec::new()),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn set_accounts(&self, accounts: Result<Vec<String>>) {
        *self.inner.accounts.borrow_mut() = accounts;
    }

    pub fn set_chain_id(&self, chain_id: u64) {
        self.inner.chain_id.set(chain_id);
    }

    pub fn fail_chain_id(&self, err: WalletError) {
        *self.inner.chain_id_error.borrow_mut() = Some(err);
    }

    pub fn set_balance(&self, balance: Result<U256>) {
        *self.inner.balance.borrow_mut() = balance;
    }

    pub fn set_send_result(&self, result: Result<String>) {
        *self.inner.send_result.borrow_mut() = result;
    }

    pub fn set_wait_result(&self, result: Result<()>) {
        *self.inner.wait_result.borrow_mut() = result;
    }

    pub fn fail_switch(&self, err: WalletError) {
        *self.inner.switch_error.borrow_mut() = Some(err);
    }

    pub fn fail_add(&self, err: WalletError) {
        *self.inner.add_error.borrow_mut() = Some(err);
    }

    pub fn sent(&self) -> Vec<TransactionRequest> {
        self.inner.sent.borrow().clone()
    }

    pub fn added(&self) -> Vec<AddChainParams> {
        self.inner.added.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Deliver `event` to every registered listener, as the extension would.
    pub fn emit(&self, event: ProviderEvent) {
        for listener in self.inner.listeners.borrow().iter() {
            listener(event.clone());
        }
    }

    fn record(&self, entry: String) {
        self.inner.journal.borrow_mut().push(entry);
    }
}

#[async_trait(?Send)]
impl WalletCapability for MockWallet {
    async fn request_accounts(&self) -> Result<Vec<String>> {
        self.record("wallet:request_accounts".to_string());
        self.inner.accounts.borrow().clone()
    }

    async fn chain_id(&self) -> Result<u64> {
        self.record("wallet:chain_id".to_string());
        match self.inner.chain_id_error.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(self.inner.chain_id.get()),
        }
    }

    async fn get_balance(&self, address: &str) -> Result<U256> {
        self.record(format!("wallet:get_balance:{address}"));
        self.inner.balance.borrow().clone()
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<SentTransaction> {
        self.record(format!("wallet:send:{}", request.to));
        self.inner.sent.borrow_mut().push(request);
        let hash = self.inner.send_result.borrow().clone()?;
        Ok(SentTransaction { hash })
    }

    async fn wait_for_confirmation(&self, hash: &str) -> Result<()> {
        self.record(format!("wallet:wait:{hash}"));
        self.inner.wait_result.borrow().clone()
    }

    async fn switch_chain(&self, chain_id_hex: &str) -> Result<()> {
        self.record(format!("wallet:switch_chain:{chain_id_hex}"));
        if let Some(err) = self.inner.switch_error.borrow().clone() {
            return Err(err);
        }
        self.inner.chain_id.set(parse_hex_u64(chain_id_hex)?);
        Ok(())
    }

    async fn add_chain(&self, params: &AddChainParams) -> Result<()> {
        self.record(format!("wallet:add_chain:{}", params.chain_id));
        self.inner.added.borrow_mut().push(params.clone());
        if let Some(err) = self.inner.add_error.borrow().clone() {
            return Err(err);
        }
        self.inner.chain_id.set(parse_hex_u64(&params.chain_id)?);
        Ok(())
    }

    fn subscribe(&self, listener: EventListener) {
        self.record("wallet:subscribe".to_string());
        self.inner.listeners.borrow_mut().push(listener);
    }
}

/// Presenter that journals every call.
#[derive(Clone)]
pub struct RecordingPresenter {
    journal: Journal,
}

impl RecordingPresenter {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }

    fn entries_with(&self, prefix: &str) -> Vec<String> {
        self.journal
            .borrow()
            .iter()
            .filter_map(|e| e.strip_prefix(prefix).map(str::to_string))
            .collect()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.entries_with("alert:")
    }

    pub fn statuses(&self) -> Vec<String> {
        self.entries_with("status:")
    }

    pub fn balances(&self) -> Vec<String> {
        self.entries_with("balance:")
    }

    pub fn accounts(&self) -> Vec<String> {
        self.entries_with("account:")
    }
}

impl Presenter for RecordingPresenter {
    fn render_account(&self, view: &AccountView) {
        self.journal
            .borrow_mut()
            .push(format!("account:{} {}", view.address, view.network));
    }

    fn render_balance(&self, text: &str) {
        self.journal.borrow_mut().push(format!("balance:{text}"));
    }

    fn render_transactions(&self, txs: &[TxRecord]) {
        self.journal.borrow_mut().push(format!("txs:{}", txs.len()));
    }

    fn set_send_status(&self, text: &str) {
        self.journal.borrow_mut().push(format!("status:{text}"));
    }

    fn alert(&self, message: &str) {
        self.journal.borrow_mut().push(format!("alert:{message}"));
    }
}
