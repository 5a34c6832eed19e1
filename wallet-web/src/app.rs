//! BAINT Wallet Test Mode - Leptos Frontend

use leptos::prelude::*;

use crate::components::Navbar;
use crate::pages::HarnessPage;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    let (_, sync) = provide_wallet_context();

    // Rehydrate, then reconcile wallet events for the lifetime of the page
    sync.spawn(|sync| async move {
        sync.bootstrap().await;
        sync.run_event_loop().await;
    });

    view! {
        <div class="app-container">
            <Navbar/>
            <HarnessPage/>
        </div>
    }
}
