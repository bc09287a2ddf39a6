//! Browser capabilities the popup and the watcher are written against.
//!
//! `bridge::ExtensionApi` implements them over the WebExtension API; tests use a fake.
#![allow(async_fn_in_trait)]

use crate::error::ZoomError;
use crate::tab_data::{ActiveTab, TabId};

pub trait TabDirectory {
    async fn active_tab(&self) -> Result<ActiveTab, ZoomError>;
}

pub trait ZoomControl {
    async fn zoom(&self, tab_id: TabId) -> Result<f64, ZoomError>;

    async fn set_zoom(&self, tab_id: TabId, zoom: f64) -> Result<(), ZoomError>;
}

/// Per-host zoom defaults, keyed by hostname
pub trait ZoomStore {
    async fn stored_zoom(&self, hostname: &str) -> Result<Option<f64>, ZoomError>;

    async fn store_zoom(&self, hostname: &str, zoom: f64) -> Result<(), ZoomError>;
}

pub trait PopupWindow {
    fn close(&self);
}
