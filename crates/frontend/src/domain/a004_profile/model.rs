//! Team profile: summary lines and the load state of the screen.

use contracts::domain::a004_profile::aggregate::PublicProfile;

use crate::shared::api_utils::FetchError;
use crate::shared::config::ClientConfig;
use crate::shared::load_state::RemoteOutcome;

pub const PROFILE_NOT_FOUND: &str = "Profile not found";

/// 1 -> "1st", 12 -> "12th", 22 -> "22nd"
pub fn ordinal(place: u64) -> String {
    let suffix = match (place % 10, place % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", place, suffix)
}

/// Text of the summary card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub name: String,
    pub score: String,
    pub division_place: String,
    pub global_place: String,
    pub division: String,
    pub ctftime_url: Option<String>,
}

impl ProfileSummary {
    pub fn new(profile: &PublicProfile, config: &ClientConfig) -> Self {
        let division = config.division_name(&profile.division).to_string();
        // команда без очков в рейтинге не участвует
        let ranked = profile.score != 0;
        let place = |value: Option<u64>, text: &dyn Fn(String) -> String| match value {
            Some(p) if ranked => text(ordinal(p)),
            _ => "Unranked".to_string(),
        };

        Self {
            name: profile.name.clone(),
            score: if ranked {
                format!("{} total points", profile.score)
            } else {
                "No points earned".to_string()
            },
            division_place: place(profile.division_place, &|p| {
                format!("{} in the {} division", p, division)
            }),
            global_place: place(profile.global_place, &|p| format!("{} across all teams", p)),
            division: format!("{} division", division),
            ctftime_url: profile
                .ctftime_id
                .as_ref()
                .filter(|id| !id.is_empty())
                .map(|id| format!("https://ctftime.org/team/{}", id)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileScreen {
    Loading,
    Error(String),
    Ready(PublicProfile),
}

/// Profile screen state for the team currently in the address bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileState {
    team_id: String,
    screen: ProfileScreen,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            team_id: String::new(),
            screen: ProfileScreen::Loading,
        }
    }
}

impl ProfileState {
    pub fn screen(&self) -> &ProfileScreen {
        &self.screen
    }

    /// Start loading `team_id`; the previous profile is dropped.
    pub fn begin(&mut self, team_id: &str) {
        self.team_id = team_id.to_string();
        self.screen = ProfileScreen::Loading;
    }

    /// Apply a fetch for `team_id`. Returns `false` when another team was requested meanwhile.
    pub fn resolve(
        &mut self,
        team_id: &str,
        result: Result<RemoteOutcome<PublicProfile>, FetchError>,
    ) -> bool {
        if team_id != self.team_id {
            log::debug!("Discarding profile '{}', showing '{}'", team_id, self.team_id);
            return false;
        }
        self.screen = match result {
            Ok(RemoteOutcome::Ready(profile)) => ProfileScreen::Ready(profile),
            Ok(RemoteOutcome::NotStarted) => ProfileScreen::Error(PROFILE_NOT_FOUND.to_string()),
            Err(e) => {
                log::error!("Failed to fetch profile '{}': {}", team_id, e);
                ProfileScreen::Error(PROFILE_NOT_FOUND.to_string())
            }
        };
        true
    }
}
