//! Browser implementations of the wallet and storage ports

pub mod ethereum;
pub mod storage;

pub use ethereum::Eip1193Wallet;
pub use storage::BrowserStorage;
