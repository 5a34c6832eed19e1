//! Wallet test page - account, network switch, transfers and history on one screen

use leptos::prelude::*;

use crate::components::{AccountPanel, NetworkSelect, SendForm, TxList};

#[component]
pub fn HarnessPage() -> impl IntoView {
    view! {
        <main class="container">
            <p class="muted small">
                "Test networks only. Transactions are signed by your wallet extension; history is kept in this browser."
            </p>
            <AccountPanel/>
            <NetworkSelect/>
            <SendForm/>
            <TxList/>
        </main>
    }
}
