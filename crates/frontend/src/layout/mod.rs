pub mod header;

use header::Header;
use leptos::prelude::*;

/// Application shell: header on top, the routed screen below.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
