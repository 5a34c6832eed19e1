//! Preset network selector

use leptos::prelude::*;
use shared::CHAIN_PRESETS;

use crate::state::wallet::use_sync;

/// Selector value that leaves the wallet on whatever chain it is on.
const AUTO: &str = "auto";

#[component]
pub fn NetworkSelect() -> impl IntoView {
    let sync = use_sync();

    let on_change = move |ev: web_sys::Event| {
        let key = event_target_value(&ev);
        if key == AUTO {
            return;
        }
        sync.spawn(move |sync| async move { sync.switch_network(&key).await });
    };

    view! {
        <div class="card">
            <h2 class="card-title">"Network"</h2>
            <select id="networkSelect" on:change=on_change>
                <option value=AUTO>"Auto (wallet network)"</option>
                {CHAIN_PRESETS
                    .iter()
                    .map(|preset| view! { <option value=preset.key>{preset.name}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}
