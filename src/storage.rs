//! Storage helpers for the per-host zoom defaults in chrome.storage
//!
//! Each default is its own top-level entry: `{ "<hostname>": <zoom factor> }`.
//! `storage.get(hostname)` answers with `{}` when nothing was saved.
use crate::zoom::is_valid_zoom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which `chrome.storage` area holds the defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageArea {
    #[default]
    Local,
    Sync,
}

impl StorageArea {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageArea::Local => "local",
            StorageArea::Sync => "sync",
        }
    }
}

/// Result object of a `storage.get(hostname)` call
pub type StorageEntry = HashMap<String, serde_json::Value>;

/// Pick the zoom saved for `hostname` out of a storage result.
///
/// Missing keys, non-numbers and non-positive numbers all count as "no default".
pub fn stored_zoom_from_entry(entry: &StorageEntry, hostname: &str) -> Option<f64> {
    let value = entry.get(hostname)?;

    match value.as_f64() {
        Some(zoom) if is_valid_zoom(zoom) => Some(zoom),
        _ => {
            log::warn!("Ignoring invalid stored zoom for {}: {}", hostname, value);
            None
        }
    }
}

/// Build the object passed to `storage.set` for one default
pub fn zoom_entry(hostname: &str, zoom: f64) -> StorageEntry {
    let mut entry = StorageEntry::new();
    entry.insert(hostname.to_string(), serde_json::Value::from(zoom));
    entry
}
