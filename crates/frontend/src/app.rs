use crate::routes::routes::AppRoutes;
use crate::shared::config::provide_client_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // ClientConfig доступен всем экранам через context
    provide_client_config();

    view! {
        <AppRoutes />
    }
}
