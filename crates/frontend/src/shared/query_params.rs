//! Address-bar bridge: typed overrides read on activation, view state mirrored back.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use web_sys::window;

/// Overrides taken from `?page=..&pageSize=..&division=..`.
/// A field is `None` when the parameter is missing or unusable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOverrides {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub division: Option<String>,
}

fn parse_positive(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|v| *v > 0)
}

impl QueryOverrides {
    /// Parse a query string, with or without the leading `?`. Never fails.
    ///
    /// Pairs are decoded one by one: a malformed pair is skipped on its own
    /// and for a repeated key the first value wins.
    pub fn parse(query: &str) -> Self {
        let mut page = None;
        let mut page_size = None;
        let mut division = None;

        for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let decoded: HashMap<String, String> = match serde_qs::from_str(pair) {
                Ok(decoded) => decoded,
                Err(e) => {
                    log::debug!("Ignoring query parameter '{}': {}", pair, e);
                    continue;
                }
            };
            for (key, value) in decoded {
                let slot = match key.as_str() {
                    "page" => &mut page,
                    "pageSize" => &mut page_size,
                    "division" => &mut division,
                    _ => continue,
                };
                if slot.is_none() {
                    *slot = Some(value);
                }
            }
        }

        Self {
            page: page.as_deref().and_then(parse_positive),
            page_size: page_size.as_deref().and_then(parse_positive),
            division,
        }
    }
}

/// `?page={page}&division={division}&pageSize={page_size}`, division percent-encoded.
pub fn encode_view_query(page: usize, division: &str, page_size: usize) -> String {
    format!(
        "?page={}&division={}&pageSize={}",
        page,
        urlencoding::encode(division),
        page_size
    )
}

pub trait AddressBar {
    /// Current query string including the leading `?`, or empty.
    fn query(&self) -> String;

    /// Replace the query string without adding a history entry.
    fn replace_query(&self, query: &str);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAddressBar;

impl AddressBar for BrowserAddressBar {
    fn query(&self) -> String {
        window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }

    fn replace_query(&self, query: &str) {
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                if history
                    .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(query))
                    .is_err()
                {
                    log::warn!("history.replaceState rejected '{}'", query);
                }
            }
        }
    }
}

/// Address bar kept in memory; counts replacements so callers can check history behaviour.
#[derive(Debug, Default)]
pub struct MemoryAddressBar {
    query: RefCell<String>,
    replacements: Cell<usize>,
}

impl MemoryAddressBar {
    pub fn new(query: &str) -> Self {
        Self {
            query: RefCell::new(query.to_string()),
            replacements: Cell::new(0),
        }
    }

    pub fn replacements(&self) -> usize {
        self.replacements.get()
    }
}

impl AddressBar for MemoryAddressBar {
    fn query(&self) -> String {
        self.query.borrow().clone()
    }

    fn replace_query(&self, query: &str) {
        *self.query.borrow_mut() = query.to_string();
        self.replacements.set(self.replacements.get() + 1);
    }
}
