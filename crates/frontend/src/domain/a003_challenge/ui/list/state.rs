use leptos::prelude::*;

use crate::domain::a003_challenge::model::{ChallengeListModel, ChallengePreferences};
use crate::shared::config::ChallengeSettings;
use crate::shared::storage::LocalStorage;

pub fn create_state(settings: &ChallengeSettings) -> RwSignal<ChallengeListModel> {
    let preferences = ChallengePreferences::load(&LocalStorage, settings);
    RwSignal::new(ChallengeListModel::new(preferences))
}

pub fn persist_state(preferences: &ChallengePreferences, settings: &ChallengeSettings) {
    preferences.save(&LocalStorage, settings);
}
