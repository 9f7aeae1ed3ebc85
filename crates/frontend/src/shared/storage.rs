//! Persisted preferences: a string-keyed, string-valued store surviving across sessions.

use std::cell::RefCell;
use std::collections::HashMap;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Fire-and-forget: a failed write is logged, never reported.
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = get_local_storage() else {
            log::warn!("localStorage unavailable, '{}' not saved", key);
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("Failed to write '{}' to localStorage", key);
        }
    }
}

/// In-memory store, used when no browser storage is around (tests, SSR-less hosts).
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Read a JSON blob; anything unparsable counts as absent.
pub fn load_json(store: &impl PreferenceStore, key: &str) -> Option<serde_json::Value> {
    let raw = store.get(key)?;
    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("Ignoring corrupt '{}' in preference store: {}", key, e);
            None
        }
    }
}

pub fn save_json<T: serde::Serialize>(store: &impl PreferenceStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(e) => log::warn!("Failed to serialize '{}': {}", key, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryStore::with_item("k", "1");
        store.set("k", "2");
        assert_eq!(store.get("k").as_deref(), Some("2"));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_load_json_ignores_corrupt_blob() {
        let store = MemoryStore::with_item("k", "{not json");
        assert!(load_json(&store, "k").is_none());

        save_json(&store, "k", &serde_json::json!({"a": 1}));
        assert_eq!(load_json(&store, "k"), Some(serde_json::json!({"a": 1})));
    }
}
