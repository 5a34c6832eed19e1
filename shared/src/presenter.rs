//! Presentation port: everything the sync adapter shows to the user goes through here.

use crate::constants::PLACEHOLDER;
use crate::model::{TxRecord, WalletState};
use crate::networks::network_name;
use crate::utils::abbreviate_address;

/// Account panel contents derived from [`WalletState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountView {
    pub address: String,
    pub network: String,
}

impl AccountView {
    pub fn from_state(state: &WalletState) -> Self {
        Self {
            address: abbreviate_address(state.address.as_deref()),
            network: state
                .chain_id
                .map(|id| network_name(id).to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }
}

pub trait Presenter {
    fn render_account(&self, view: &AccountView);
    fn render_balance(&self, text: &str);
    fn render_transactions(&self, txs: &[TxRecord]);
    /// Inline status line under the send form.
    fn set_send_status(&self, text: &str);
    /// Blocking notification.
    fn alert(&self, message: &str);
}
