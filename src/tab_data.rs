//! Data structures for Site Zoom
use serde::{Deserialize, Serialize};

pub type TabId = i32;

/// The active tab of the current window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActiveTab {
    pub id: TabId,
    #[serde(default)]
    pub url: String,
}

impl ActiveTab {
    pub fn new(id: TabId, url: String) -> ActiveTab {
        ActiveTab { id, url }
    }

    pub fn hostname(&self) -> Option<String> {
        crate::host::extract_hostname(&self.url)
    }
}

/// The `changeInfo` of a tab update event. Only URL changes matter here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TabChange {
    #[serde(default)]
    pub url: Option<String>,
}

/// Payload of a `tabs.onZoomChange` event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZoomChange {
    pub tab_id: TabId,
    pub new_zoom_factor: f64,
}
