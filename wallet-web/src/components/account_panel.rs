//! Account panel: address, network, balance and the connect button

use leptos::prelude::*;

use crate::state::wallet::{use_sync, use_wallet_context};

#[component]
pub fn AccountPanel() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let sync = use_sync();

    let on_connect = move |_| {
        sync.spawn(|sync| async move { sync.connect().await });
    };

    view! {
        <div class="card">
            <div class="row">
                <h2 class="card-title">"Account"</h2>
                <button id="connectBtn" class="btn" on:click=on_connect>
                    "Connect Wallet"
                </button>
            </div>
            <dl class="account-grid">
                <dt>"Address"</dt>
                <dd id="addr" class="mono">{move || wallet_ctx.account.get().address}</dd>
                <dt>"Network"</dt>
                <dd id="networkName">{move || wallet_ctx.account.get().network}</dd>
                <dt>"Balance"</dt>
                <dd id="balance" class="mono">{move || wallet_ctx.balance.get()}</dd>
            </dl>
        </div>
    }
}
