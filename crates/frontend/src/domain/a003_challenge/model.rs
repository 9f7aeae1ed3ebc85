use contracts::domain::a003_challenge::aggregate::Challenge;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::filter::{category_counts, merge_categories, problems_to_display};
use crate::shared::api_utils::FetchError;
use crate::shared::config::ChallengeSettings;
use crate::shared::load_state::{LoadState, RemoteOutcome};
use crate::shared::storage::{load_json, save_json, PreferenceStore};

/// `{categories: {name: checked}}` kept across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengePreferences {
    #[serde(default)]
    pub categories: BTreeMap<String, bool>,
}

impl ChallengePreferences {
    pub fn load(store: &impl PreferenceStore, settings: &ChallengeSettings) -> Self {
        load_json(store, &settings.storage_key)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, store: &impl PreferenceStore, settings: &ChallengeSettings) {
        save_json(store, &settings.storage_key, self);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeListModel {
    problems: Option<Vec<Challenge>>,
    preferences: ChallengePreferences,
    load_state: LoadState,
}

impl ChallengeListModel {
    pub fn new(preferences: ChallengePreferences) -> Self {
        Self {
            problems: None,
            preferences,
            load_state: LoadState::Pending,
        }
    }

    pub fn preferences(&self) -> &ChallengePreferences {
        &self.preferences
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loaded(&self) -> bool {
        self.problems.is_some()
    }

    pub fn resolve(&mut self, result: Result<RemoteOutcome<Vec<Challenge>>, FetchError>) {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Failed to fetch challenges: {}", e);
                return;
            }
        };
        self.load_state = self.load_state.resolve(&outcome);
        if let RemoteOutcome::Ready(problems) = outcome {
            merge_categories(&mut self.preferences.categories, &problems);
            self.problems = Some(problems);
        }
    }

    pub fn set_category(&mut self, category: &str, checked: bool) {
        self.preferences
            .categories
            .insert(category.to_string(), checked);
    }

    pub fn is_checked(&self, category: &str) -> bool {
        self.preferences
            .categories
            .get(category)
            .copied()
            .unwrap_or(false)
    }

    pub fn problems_to_display(&self) -> Vec<Challenge> {
        match &self.problems {
            Some(problems) => problems_to_display(problems, &self.preferences.categories),
            None => Vec::new(),
        }
    }

    pub fn category_counts(&self) -> Vec<(String, usize)> {
        match &self.problems {
            Some(problems) => category_counts(problems).into_iter().collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    fn chall(id: &str, category: &str, points: i64) -> Challenge {
        Challenge {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            category: category.to_string(),
            author: String::new(),
            files: Vec::new(),
            points,
            solves: 0,
            sort_weight: None,
        }
    }

    #[test]
    fn test_selection_survives_reload() {
        let store = MemoryStore::new();
        let settings = ChallengeSettings::default();

        let mut model = ChallengeListModel::new(ChallengePreferences::load(&store, &settings));
        model.resolve(Ok(RemoteOutcome::Ready(vec![
            chall("a", "pwn", 100),
            chall("b", "rev", 200),
        ])));
        model.set_category("rev", true);
        model.preferences().save(&store, &settings);

        let reloaded = ChallengeListModel::new(ChallengePreferences::load(&store, &settings));
        assert!(reloaded.is_checked("rev"));
        assert!(!reloaded.is_checked("pwn"));
    }

    #[test]
    fn test_corrupt_preferences_are_ignored() {
        let store = MemoryStore::with_item("challPageState", r#"{"categories":[1,2]}"#);
        let prefs = ChallengePreferences::load(&store, &ChallengeSettings::default());
        assert!(prefs.categories.is_empty());
    }

    #[test]
    fn test_not_started_and_failures() {
        let mut model = ChallengeListModel::new(ChallengePreferences::default());
        model.resolve(Err(FetchError::Status(500)));
        assert_eq!(model.load_state(), LoadState::Pending);
        assert!(model.problems_to_display().is_empty());

        model.resolve(Ok(RemoteOutcome::NotStarted));
        assert_eq!(model.load_state(), LoadState::NotStarted);
        assert!(!model.is_loaded());
    }

    #[test]
    fn test_filtering_through_model() {
        let mut model = ChallengeListModel::new(ChallengePreferences::default());
        model.resolve(Ok(RemoteOutcome::Ready(vec![
            chall("b", "web", 300),
            chall("a", "pwn", 100),
            chall("c", "web", 200),
        ])));
        assert_eq!(model.load_state(), LoadState::Ready);
        assert_eq!(model.problems_to_display().len(), 3);

        model.set_category("web", true);
        let shown: Vec<String> = model.problems_to_display().into_iter().map(|p| p.id).collect();
        assert_eq!(shown, vec!["c", "b"]);
        assert_eq!(
            model.category_counts(),
            vec![("pwn".to_string(), 1), ("web".to_string(), 2)]
        );
    }
}
