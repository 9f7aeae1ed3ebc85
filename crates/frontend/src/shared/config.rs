//! Client configuration
//!
//! The configuration is embedded into the WASM bundle at build time from
//! `crates/frontend/config.toml` and provided to the component tree via context.

use leptos::prelude::*;
use serde::Deserialize;

const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientConfig {
    pub ctf_name: String,
    /// Prefix for all competition resources, e.g. "/fixtures"
    #[serde(default)]
    pub api_base: String,
    #[serde(default)]
    pub divisions: Vec<DivisionOption>,
    #[serde(default)]
    pub scoreboard: ScoreboardSettings,
    #[serde(default)]
    pub challenges: ChallengeSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DivisionOption {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoreboardSettings {
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
    pub storage_key: String,
    /// Codes of divisions a persisted filter may refer to
    #[serde(skip)]
    pub division_codes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChallengeSettings {
    pub storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ctf_name: "CTF".to_string(),
            api_base: "/fixtures".to_string(),
            divisions: Vec::new(),
            scoreboard: ScoreboardSettings::default(),
            challenges: ChallengeSettings::default(),
        }
    }
}

impl Default for ScoreboardSettings {
    fn default() -> Self {
        Self {
            page_size_options: vec![25, 50, 100],
            default_page_size: 100,
            storage_key: "scoreboardPageState".to_string(),
            division_codes: Vec::new(),
        }
    }
}

impl Default for ChallengeSettings {
    fn default() -> Self {
        Self {
            storage_key: "challPageState".to_string(),
        }
    }
}

impl ScoreboardSettings {
    pub fn is_allowed_page_size(&self, size: usize) -> bool {
        self.page_size_options.contains(&size)
    }

    pub fn is_known_division(&self, code: &str) -> bool {
        self.division_codes.iter().any(|c| c == code)
    }
}

impl ClientConfig {
    /// Parse a TOML document and fill in derived fields.
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        let mut config: ClientConfig = toml::from_str(raw)?;
        config.scoreboard.division_codes =
            config.divisions.iter().map(|d| d.code.clone()).collect();
        if config.scoreboard.page_size_options.is_empty() {
            config.scoreboard.page_size_options = ScoreboardSettings::default().page_size_options;
        }
        if config.scoreboard.default_page_size == 0 {
            config.scoreboard.default_page_size = ScoreboardSettings::default().default_page_size;
        }
        Ok(config)
    }

    /// Embedded configuration, or defaults when it cannot be parsed.
    pub fn load() -> Self {
        match Self::from_toml(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Invalid embedded config.toml, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn division_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.divisions
            .iter()
            .find(|d| d.code == code)
            .map(|d| d.name.as_str())
            .unwrap_or(code)
    }
}

pub fn provide_client_config() {
    provide_context(ClientConfig::load());
}

pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>().expect("ClientConfig not found. Call provide_client_config() in App.")
}

/// Sets `document.title` to "<screen> | <ctf name>".
pub fn set_document_title(screen: &str, config: &ClientConfig) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&format!("{} | {}", screen, config.ctf_name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = ClientConfig::from_toml(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.scoreboard.page_size_options, vec![25, 50, 100]);
        assert_eq!(config.scoreboard.default_page_size, 100);
        assert!(config.scoreboard.is_known_division("open"));
        assert!(!config.scoreboard.is_known_division("all"));
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = ClientConfig::from_toml(r#"ctf_name = "Test CTF""#).unwrap();
        assert_eq!(config.scoreboard.default_page_size, 100);
        assert_eq!(config.challenges.storage_key, "challPageState");
        assert!(config.divisions.is_empty());
    }

    #[test]
    fn test_division_name_falls_back_to_code() {
        let config = ClientConfig::from_toml(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.division_name("lac"), "LA Community");
        assert_eq!(config.division_name("mystery"), "mystery");
    }
}
