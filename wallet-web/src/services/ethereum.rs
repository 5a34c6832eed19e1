//! EIP-1193 Wallet Integration via wasm-bindgen
//!
//! Implements [`WalletCapability`] over the injected `window.ethereum` provider
//! (MetaMask and compatible extensions). Every call is a JSON-RPC `request`; the
//! JS shim normalizes thrown errors to `{ code, message }`.

use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use alloy_primitives::U256;
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use shared::constants::RECEIPT_POLL_INTERVAL_MS;
use shared::networks::AddChainParams;
use shared::utils::parse_hex_u64;
use shared::{
    EventListener, ProviderEvent, Result, SentTransaction, TransactionRequest, WalletCapability,
    WalletError,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(inline_js = "
export function hasEthereum() {
    return typeof window !== 'undefined' && !!window.ethereum;
}

export async function ethereumRequest(method, params) {
    try {
        return await window.ethereum.request({ method, params });
    } catch (error) {
        const code = error && typeof error.code === 'number' ? error.code : null;
        const message = (error && error.message) || String(error);
        throw { code, message };
    }
}

export function onEthereumEvent(name, callback) {
    if (window.ethereum && typeof window.ethereum.on === 'function') {
        window.ethereum.on(name, callback);
    }
}
")]
extern "C" {
    /// Whether an EIP-1193 provider is injected
    fn hasEthereum() -> bool;

    /// `window.ethereum.request({ method, params })`
    #[wasm_bindgen(catch)]
    async fn ethereumRequest(method: &str, params: JsValue) -> std::result::Result<JsValue, JsValue>;

    /// `window.ethereum.on(name, callback)`
    fn onEthereumEvent(name: &str, callback: &js_sys::Function);
}

#[derive(Deserialize)]
struct RpcErrorPayload {
    code: Option<i64>,
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SwitchChainParams<'a> {
    chain_id: &'a str,
}

#[derive(Deserialize)]
struct ReceiptStatus {
    status: Option<String>,
}

/// Mined receipt to a result. Status `0x0` means the transaction reverted.
fn receipt_outcome(receipt: &ReceiptStatus) -> Result<()> {
    match receipt.status.as_deref() {
        Some("0x0") => Err(WalletError::from_provider(None, "transaction reverted")),
        _ => Ok(()),
    }
}

fn provider_error(err: JsValue) -> WalletError {
    match serde_wasm_bindgen::from_value::<RpcErrorPayload>(err.clone()) {
        Ok(payload) => WalletError::from_provider(payload.code, payload.message),
        Err(_) => WalletError::from_provider(
            None,
            err.as_string().unwrap_or_else(|| format!("{:?}", err)),
        ),
    }
}

/// Handle to the injected provider.
pub struct Eip1193Wallet {
    // Kept alive for as long as the wallet may call them
    listeners: RefCell<Vec<Closure<dyn Fn(JsValue)>>>,
}

impl Eip1193Wallet {
    /// `Some` when `window.ethereum` exists.
    pub fn detect() -> Option<Self> {
        if !hasEthereum() {
            log::warn!("No injected wallet found");
            return None;
        }
        Some(Self {
            listeners: RefCell::new(Vec::new()),
        })
    }

    async fn request<T: DeserializeOwned>(&self, method: &str, params: impl Serialize) -> Result<T> {
        let params = params
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| WalletError::Decode(e.to_string()))?;

        log::debug!("-> {}", method);
        let value = ethereumRequest(method, params).await.map_err(provider_error)?;

        serde_wasm_bindgen::from_value(value).map_err(|e| WalletError::Decode(format!("{method}: {e}")))
    }

    fn listen(&self, name: &str, handler: impl Fn(JsValue) + 'static) {
        let closure = Closure::<dyn Fn(JsValue)>::new(handler);
        onEthereumEvent(name, closure.as_ref().unchecked_ref());
        self.listeners.borrow_mut().push(closure);
    }
}

#[async_trait(?Send)]
impl WalletCapability for Eip1193Wallet {
    async fn request_accounts(&self) -> Result<Vec<String>> {
        self.request("eth_requestAccounts", Vec::<String>::new()).await
    }

    async fn chain_id(&self) -> Result<u64> {
        let hex: String = self.request("eth_chainId", Vec::<String>::new()).await?;
        parse_hex_u64(&hex)
    }

    async fn get_balance(&self, address: &str) -> Result<U256> {
        let hex: String = self.request("eth_getBalance", [address, "latest"]).await?;
        U256::from_str(&hex).map_err(|e| WalletError::Decode(format!("balance {hex}: {e}")))
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<SentTransaction> {
        let hash: String = self.request("eth_sendTransaction", [request]).await?;
        Ok(SentTransaction { hash })
    }

    async fn wait_for_confirmation(&self, hash: &str) -> Result<()> {
        loop {
            let receipt: Option<ReceiptStatus> =
                self.request("eth_getTransactionReceipt", [hash]).await?;
            if let Some(receipt) = receipt {
                return receipt_outcome(&receipt);
            }
            TimeoutFuture::new(RECEIPT_POLL_INTERVAL_MS).await;
        }
    }

    async fn switch_chain(&self, chain_id_hex: &str) -> Result<()> {
        let _: IgnoredAny = self
            .request("wallet_switchEthereumChain", [SwitchChainParams { chain_id: chain_id_hex }])
            .await?;
        Ok(())
    }

    async fn add_chain(&self, params: &AddChainParams) -> Result<()> {
        let _: IgnoredAny = self.request("wallet_addEthereumChain", [params]).await?;
        Ok(())
    }

    fn subscribe(&self, listener: EventListener) {
        let listener = Rc::new(listener);

        let on_accounts = Rc::clone(&listener);
        self.listen("accountsChanged", move |accounts| {
            let accounts: Vec<String> = serde_wasm_bindgen::from_value(accounts).unwrap_or_default();
            on_accounts(ProviderEvent::AccountsChanged(accounts));
        });

        self.listen("chainChanged", move |_| listener(ProviderEvent::ChainChanged));
    }
}
