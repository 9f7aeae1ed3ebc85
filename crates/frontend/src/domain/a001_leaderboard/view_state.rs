//! Scoreboard view state: division filter, page size and page.
//!
//! Three sources feed it: the preference store, the address bar and user
//! interaction. Precedence on activation is address bar > preference store >
//! defaults; after that only [`ViewStateStore`] operations write the state and
//! [`ViewStateStore::sync`] propagates it back to the other two sources.

use serde::{Deserialize, Serialize};

use super::pagination::page_for_new_size;
use crate::shared::config::ScoreboardSettings;
use crate::shared::query_params::{encode_view_query, AddressBar, QueryOverrides};
use crate::shared::storage::{load_json, save_json, PreferenceStore};

pub const ALL_DIVISIONS: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum DivisionFilter {
    #[default]
    All,
    Division(String),
}

impl DivisionFilter {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_DIVISIONS {
            DivisionFilter::All
        } else {
            DivisionFilter::Division(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DivisionFilter::All => ALL_DIVISIONS,
            DivisionFilter::Division(code) => code,
        }
    }

    /// Division code for server-side aggregation, `None` for all divisions.
    pub fn code(&self) -> Option<&str> {
        match self {
            DivisionFilter::All => None,
            DivisionFilter::Division(code) => Some(code),
        }
    }

    pub fn matches(&self, division: &str) -> bool {
        match self {
            DivisionFilter::All => true,
            DivisionFilter::Division(code) => code == division,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub division: DivisionFilter,
    pub page_size: usize,
    /// 1-based
    pub page: usize,
}

/// Subset of the view state that survives a reload. `page` is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedPreferences {
    pub page_size: usize,
    pub division: String,
}

impl PersistedPreferences {
    /// Read from the store; each field falls back to its default on its own.
    pub fn load(store: &impl PreferenceStore, settings: &ScoreboardSettings) -> Self {
        let mut prefs = PersistedPreferences {
            page_size: settings.default_page_size,
            division: ALL_DIVISIONS.to_string(),
        };
        let Some(value) = load_json(store, &settings.storage_key) else {
            return prefs;
        };

        match value.get("pageSize").and_then(|v| v.as_u64()) {
            Some(size) => match usize::try_from(size) {
                Ok(size) if settings.is_allowed_page_size(size) => prefs.page_size = size,
                _ => log::debug!("Ignoring persisted page size {}", size),
            },
            None => {}
        }
        match value.get("division").and_then(|v| v.as_str()) {
            Some(division) if division == ALL_DIVISIONS || settings.is_known_division(division) => {
                prefs.division = division.to_string()
            }
            Some(division) => log::debug!("Ignoring persisted division '{}'", division),
            None => {}
        }
        prefs
    }

    pub fn save(&self, store: &impl PreferenceStore, settings: &ScoreboardSettings) {
        save_json(store, &settings.storage_key, self);
    }
}

/// Merge persisted preferences with address-bar overrides, field by field.
pub fn seed_view_state(persisted: &PersistedPreferences, overrides: &QueryOverrides) -> ViewState {
    ViewState {
        division: DivisionFilter::parse(
            overrides.division.as_deref().unwrap_or(&persisted.division),
        ),
        page_size: overrides.page_size.unwrap_or(persisted.page_size),
        page: overrides.page.unwrap_or(1),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewStateStore {
    state: ViewState,
}

impl ViewStateStore {
    /// Seed from the preference store, then the address bar.
    pub fn activate(
        store: &impl PreferenceStore,
        address_bar: &impl AddressBar,
        settings: &ScoreboardSettings,
    ) -> Self {
        let persisted = PersistedPreferences::load(store, settings);
        let overrides = QueryOverrides::parse(&address_bar.query());
        let state = seed_view_state(&persisted, &overrides);
        log::debug!("Scoreboard view state seeded: {:?}", state);
        Self { state }
    }

    pub fn from_state(state: ViewState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// A new filter invalidates the old page position.
    pub fn set_division(&mut self, division: DivisionFilter) {
        self.state.division = division;
        self.state.page = 1;
    }

    /// Keeps the entry that was on top of the visible page on the new page.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            log::debug!("Ignoring page size 0");
            return;
        }
        self.state.page = page_for_new_size(self.state.page, self.state.page_size, page_size);
        self.state.page_size = page_size;
    }

    pub fn set_page(&mut self, page: usize) {
        self.state.page = page.max(1);
    }

    /// Persist preferences and mirror the state into the address bar.
    ///
    /// The untouched default case (page 1, empty query) leaves the address bar alone.
    pub fn sync(
        &self,
        store: &impl PreferenceStore,
        address_bar: &impl AddressBar,
        settings: &ScoreboardSettings,
    ) {
        PersistedPreferences {
            page_size: self.state.page_size,
            division: self.state.division.as_str().to_string(),
        }
        .save(store, settings);

        let current = address_bar.query();
        if self.state.page == 1 && current.is_empty() {
            return;
        }
        let query = encode_view_query(
            self.state.page,
            self.state.division.as_str(),
            self.state.page_size,
        );
        if query != current {
            address_bar.replace_query(&query);
        }
    }
}
