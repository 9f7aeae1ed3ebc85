use leptos::prelude::*;

use crate::shared::config::use_client_config;

/// Shown instead of a screen while the competition has not opened.
#[component]
pub fn NotStarted() -> impl IntoView {
    let config = use_client_config();

    view! {
        <div class="row u-center">
            <div class="card not-started">
                <div class="content">
                    <p class="title">{format!("{} has not started yet.", config.ctf_name)}</p>
                    <p>"Check back once the competition opens."</p>
                </div>
            </div>
        </div>
    }
}
