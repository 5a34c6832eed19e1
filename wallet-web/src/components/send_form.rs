//! Native transfer form

use leptos::prelude::*;

use crate::state::wallet::{use_sync, use_wallet_context};

#[component]
pub fn SendForm() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let sync = use_sync();

    let (to, set_to) = signal(String::new());
    let (amount, set_amount) = signal(String::new());

    let on_send = move |_| {
        let to = to.get_untracked();
        let amount = amount.get_untracked();
        sync.spawn(move |sync| async move { sync.send_native(&to, &amount).await });
    };

    let on_mock_receive = move |_| sync.get().add_mock_receive();

    view! {
        <div class="card">
            <h2 class="card-title">"Send native (tETH / tBNB)"</h2>
            <input
                id="to"
                type="text"
                placeholder="Recipient 0x..."
                prop:value=to
                on:input=move |ev| set_to.set(event_target_value(&ev))
            />
            <input
                id="amount"
                type="text"
                placeholder="Amount, e.g. 0.01"
                prop:value=amount
                on:input=move |ev| set_amount.set(event_target_value(&ev))
            />
            <div class="row">
                <button id="sendBtn" class="btn" on:click=on_send>"Send"</button>
                <button id="faucetBtn" class="btn btn-secondary" on:click=on_mock_receive>
                    "Add mock receive"
                </button>
            </div>
            <p id="sendStatus" class="muted small mono">{move || wallet_ctx.send_status.get()}</p>
        </div>
    }
}
