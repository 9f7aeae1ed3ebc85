use crate::shared::config::use_client_config;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    let config = use_client_config();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">{config.ctf_name}</span>
                <nav class="header__nav">
                    <A href="/scores">{icon("scoreboard")}" Scoreboard"</A>
                    <A href="/challs">{icon("flag")}" Challenges"</A>
                </nav>
            </div>
        </header>
    }
}
