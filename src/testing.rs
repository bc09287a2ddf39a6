//! In-memory browser for controller and watcher tests

use crate::browser::{PopupWindow, TabDirectory, ZoomControl, ZoomStore};
use crate::error::ZoomError;
use crate::tab_data::{ActiveTab, TabId};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Default)]
pub struct FakeBrowser {
    active: RefCell<Option<ActiveTab>>,
    zooms: RefCell<HashMap<TabId, f64>>,
    store: RefCell<HashMap<String, f64>>,
    lookups: RefCell<Vec<String>>,
    zoom_sets: RefCell<Vec<(TabId, f64)>>,
    fail_writes: Cell<bool>,
    closed: Cell<bool>,
}

impl FakeBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active_tab(id: TabId, url: &str, zoom: f64) -> Self {
        let browser = Self::new();
        browser.navigate_active(id, url);
        browser.zoom_tab(id, zoom);
        browser
    }

    pub fn navigate_active(&self, id: TabId, url: &str) {
        *self.active.borrow_mut() = Some(ActiveTab::new(id, url.to_string()));
    }

    pub fn zoom_tab(&self, id: TabId, zoom: f64) {
        self.zooms.borrow_mut().insert(id, zoom);
    }

    pub fn zoom_of(&self, id: TabId) -> Option<f64> {
        self.zooms.borrow().get(&id).copied()
    }

    pub fn store(&self, hostname: &str, zoom: f64) {
        self.store.borrow_mut().insert(hostname.to_string(), zoom);
    }

    pub fn stored(&self, hostname: &str) -> Option<f64> {
        self.store.borrow().get(hostname).copied()
    }

    pub fn fail_writes(&self) {
        self.fail_writes.set(true);
    }

    /// Hostnames looked up in the store, in order
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }

    pub fn zoom_sets(&self) -> Vec<(TabId, f64)> {
        self.zoom_sets.borrow().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

impl TabDirectory for FakeBrowser {
    async fn active_tab(&self) -> Result<ActiveTab, ZoomError> {
        self.active.borrow().clone().ok_or(ZoomError::NoActiveTab)
    }
}

impl ZoomControl for FakeBrowser {
    async fn zoom(&self, tab_id: TabId) -> Result<f64, ZoomError> {
        Ok(self.zoom_of(tab_id).unwrap_or(1.0))
    }

    async fn set_zoom(&self, tab_id: TabId, zoom: f64) -> Result<(), ZoomError> {
        self.zoom_sets.borrow_mut().push((tab_id, zoom));
        self.zoom_tab(tab_id, zoom);
        Ok(())
    }
}

impl ZoomStore for FakeBrowser {
    async fn stored_zoom(&self, hostname: &str) -> Result<Option<f64>, ZoomError> {
        self.lookups.borrow_mut().push(hostname.to_string());
        Ok(self.stored(hostname))
    }

    async fn store_zoom(&self, hostname: &str, zoom: f64) -> Result<(), ZoomError> {
        if self.fail_writes.get() {
            return Err(ZoomError::Bridge("QUOTA_BYTES quota exceeded".to_string()));
        }
        self.store(hostname, zoom);
        Ok(())
    }
}

impl PopupWindow for FakeBrowser {
    fn close(&self) {
        self.closed.set(true);
    }
}
