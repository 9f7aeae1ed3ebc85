use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_profile::api::fetch_profile;
use crate::domain::a004_profile::model::{ProfileScreen, ProfileState};

/// ViewModel for the profile screen
#[derive(Clone, Copy)]
pub struct ProfileDetailsViewModel {
    pub state: RwSignal<ProfileState>,
}

impl ProfileDetailsViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ProfileState::default()),
        }
    }

    pub fn screen(&self) -> ProfileScreen {
        self.state.with(|s| s.screen().clone())
    }

    /// Load the profile of `team_id`; a late answer for a previous team is dropped.
    pub fn load(&self, api_base: String, team_id: String) {
        let state = self.state;
        state.update(|s| s.begin(&team_id));
        spawn_local(async move {
            let result = fetch_profile(&api_base, &team_id).await;
            state.try_update(|s| s.resolve(&team_id, result));
        });
    }
}

impl Default for ProfileDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
