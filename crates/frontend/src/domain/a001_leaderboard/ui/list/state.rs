use leptos::prelude::*;

use crate::domain::a001_leaderboard::model::ScoreboardModel;
use crate::domain::a001_leaderboard::view_state::ViewStateStore;
use crate::shared::config::ScoreboardSettings;
use crate::shared::query_params::BrowserAddressBar;
use crate::shared::storage::LocalStorage;

/// Seed the screen from localStorage, then from the address bar.
pub fn create_state(settings: &ScoreboardSettings) -> RwSignal<ScoreboardModel> {
    let view = ViewStateStore::activate(&LocalStorage, &BrowserAddressBar, settings);
    RwSignal::new(ScoreboardModel::new(view))
}

/// Persist preferences and mirror page/division/pageSize into the address bar.
pub fn persist_state(view: &ViewStateStore, settings: &ScoreboardSettings) {
    view.sync(&LocalStorage, &BrowserAddressBar, settings);
}
