//! # Test Network Presets
//!
//! Static catalog of the networks the harness can switch to, plus the
//! `wallet_addEthereumChain` payload built from a preset.

use serde::Serialize;

use crate::constants::NATIVE_DECIMALS;

/// A predefined test network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainPreset {
    /// Selector value used by the UI.
    pub key: &'static str,
    pub chain_id_hex: &'static str,
    pub chain_id: u64,
    pub name: &'static str,
    /// Empty when the wallet is expected to know the chain already.
    pub rpc_url: &'static str,
    pub currency_symbol: &'static str,
}

pub const SEPOLIA: ChainPreset = ChainPreset {
    key: "sepolia",
    chain_id_hex: "0xaa36a7",
    chain_id: 11155111,
    name: "Sepolia",
    rpc_url: "",
    currency_symbol: "tETH",
};

pub const BSC_TESTNET: ChainPreset = ChainPreset {
    key: "bsc_testnet",
    chain_id_hex: "0x61",
    chain_id: 97,
    name: "BSC Testnet",
    rpc_url: "https://data-seed-prebsc-1-s1.binance.org:8545/",
    currency_symbol: "tBNB",
};

pub const CHAIN_PRESETS: &[ChainPreset] = &[SEPOLIA, BSC_TESTNET];

pub fn preset_by_key(key: &str) -> Option<&'static ChainPreset> {
    CHAIN_PRESETS.iter().find(|p| p.key == key)
}

pub fn preset_by_chain_id(chain_id: u64) -> Option<&'static ChainPreset> {
    CHAIN_PRESETS.iter().find(|p| p.chain_id == chain_id)
}

/// Human network name for the account panel.
pub fn network_name(chain_id: u64) -> &'static str {
    match chain_id {
        id if id == SEPOLIA.chain_id => "Sepolia (ETH)",
        id if id == BSC_TESTNET.chain_id => "BSC Testnet",
        _ => "Other / Unknown",
    }
}

/// Unit shown next to the balance.
pub fn native_unit(chain_id: Option<u64>) -> &'static str {
    chain_id
        .and_then(preset_by_chain_id)
        .map(|p| p.currency_symbol)
        .unwrap_or("native")
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// `wallet_addEthereumChain` parameter object.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
}

impl From<&ChainPreset> for AddChainParams {
    fn from(preset: &ChainPreset) -> Self {
        Self {
            chain_id: preset.chain_id_hex.to_string(),
            chain_name: preset.name.to_string(),
            native_currency: NativeCurrency {
                name: format!("{} Coin", preset.name),
                symbol: preset.currency_symbol.to_string(),
                decimals: NATIVE_DECIMALS,
            },
            rpc_urls: vec![preset.rpc_url.to_string()],
            block_explorer_urls: Vec::new(),
        }
    }
}
