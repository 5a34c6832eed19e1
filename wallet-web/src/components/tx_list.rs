//! Transaction history, newest first

use leptos::prelude::*;
use shared::utils::format_timestamp;
use shared::TxRecord;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn TxList() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <div class="card">
            <h2 class="card-title">"Transactions"</h2>
            <div id="txList">
                {move || {
                    let txs = wallet_ctx.txs.get();
                    if txs.is_empty() {
                        view! { <div class="muted">"No transactions yet."</div> }.into_any()
                    } else {
                        let items = txs
                            .into_iter()
                            .map(|tx| view! { <TxItem tx=tx/> })
                            .collect::<Vec<_>>();
                        view! { <div>{items}</div> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn TxItem(tx: TxRecord) -> impl IntoView {
    let hash = if tx.hash.is_empty() {
        String::new()
    } else {
        format!(" • {}", tx.hash)
    };

    view! {
        <div class="tx-item">
            <div>
                <strong>{tx.kind.label()}</strong>
                {format!(" {} → {}", tx.amount, tx.to)}
            </div>
            <div class="muted small">{format_timestamp(tx.time)}{hash}</div>
        </div>
    }
}
