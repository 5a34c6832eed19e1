//! UI Components

pub mod account_panel;
pub mod navbar;
pub mod network_select;
pub mod send_form;
pub mod tx_list;

pub use account_panel::AccountPanel;
pub use navbar::Navbar;
pub use network_select::NetworkSelect;
pub use send_form::SendForm;
pub use tx_list::TxList;
