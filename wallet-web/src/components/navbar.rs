//! Navigation Bar Component

use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div style="max-width: 960px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <span class="nav-title">
                    <span class="brand">"BAINT"</span>" Wallet"
                </span>
                <span class="badge">"Test Mode · Sepolia + BSC Testnet"</span>
            </div>
        </nav>
    }
}
