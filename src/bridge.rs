//! WebExtension API access through the `extension.js` bridge module

use crate::browser::{PopupWindow, TabDirectory, ZoomControl, ZoomStore};
use crate::error::ZoomError;
use crate::storage::{StorageArea, StorageEntry, stored_zoom_from_entry, zoom_entry};
use crate::tab_data::{ActiveTab, TabChange, TabId, ZoomChange};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/extension.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getZoom(tab_id: i32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setZoom(tab_id: i32, zoom: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getStorage(area: &str, key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(area: &str, entry: JsValue) -> Result<(), JsValue>;

    fn addTabUpdatedListener(listener: &js_sys::Function);
    fn removeTabUpdatedListener(listener: &js_sys::Function);

    fn addTabRemovedListener(listener: &js_sys::Function);
    fn removeTabRemovedListener(listener: &js_sys::Function);

    fn addZoomChangeListener(listener: &js_sys::Function);
    fn removeZoomChangeListener(listener: &js_sys::Function);
}

/// The real browser, reached through `extension.js`
#[derive(Debug, Clone, Copy)]
pub struct ExtensionApi {
    area: StorageArea,
}

impl ExtensionApi {
    pub fn new(area: StorageArea) -> Self {
        ExtensionApi { area }
    }

    pub fn area(&self) -> StorageArea {
        self.area
    }
}

impl TabDirectory for ExtensionApi {
    async fn active_tab(&self) -> Result<ActiveTab, ZoomError> {
        let tab_js = queryActiveTab().await.map_err(ZoomError::bridge)?;
        if tab_js.is_null() || tab_js.is_undefined() {
            return Err(ZoomError::NoActiveTab);
        }
        Ok(serde_wasm_bindgen::from_value(tab_js)?)
    }
}

impl ZoomControl for ExtensionApi {
    async fn zoom(&self, tab_id: TabId) -> Result<f64, ZoomError> {
        let zoom_js = getZoom(tab_id).await.map_err(ZoomError::bridge)?;
        zoom_js
            .as_f64()
            .ok_or_else(|| ZoomError::Decode(format!("zoom factor {:?}", zoom_js)))
    }

    async fn set_zoom(&self, tab_id: TabId, zoom: f64) -> Result<(), ZoomError> {
        setZoom(tab_id, zoom).await.map_err(ZoomError::bridge)
    }
}

impl ZoomStore for ExtensionApi {
    async fn stored_zoom(&self, hostname: &str) -> Result<Option<f64>, ZoomError> {
        let entry_js = getStorage(self.area.as_str(), hostname)
            .await
            .map_err(ZoomError::bridge)?;
        if entry_js.is_null() || entry_js.is_undefined() {
            return Ok(None);
        }

        let entry: StorageEntry = serde_wasm_bindgen::from_value(entry_js)?;
        Ok(stored_zoom_from_entry(&entry, hostname))
    }

    async fn store_zoom(&self, hostname: &str, zoom: f64) -> Result<(), ZoomError> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let entry_js = zoom_entry(hostname, zoom).serialize(&serializer)?;

        setStorage(self.area.as_str(), entry_js)
            .await
            .map_err(ZoomError::bridge)
    }
}

impl PopupWindow for ExtensionApi {
    fn close(&self) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.close() {
                    log::error!("Failed to close popup: {:?}", e);
                }
            }
            None => log::warn!("No window to close"),
        }
    }
}

/// Tab update and tab removal listeners, registered until `unsubscribe`
pub struct NavigationSubscription {
    on_updated: Closure<dyn FnMut(i32, JsValue)>,
    on_removed: Closure<dyn FnMut(i32)>,
}

impl NavigationSubscription {
    pub fn subscribe<U, R>(mut on_update: U, mut on_remove: R) -> NavigationSubscription
    where
        U: FnMut(TabId, TabChange) + 'static,
        R: FnMut(TabId) + 'static,
    {
        let on_updated = Closure::wrap(Box::new(move |tab_id: i32, change_js: JsValue| {
            match serde_wasm_bindgen::from_value::<TabChange>(change_js) {
                Ok(change) => on_update(tab_id, change),
                Err(e) => log::warn!("Unreadable update for tab {}: {}", tab_id, e),
            }
        }) as Box<dyn FnMut(i32, JsValue)>);

        let on_removed = Closure::wrap(Box::new(move |tab_id: i32| {
            on_remove(tab_id);
        }) as Box<dyn FnMut(i32)>);

        addTabUpdatedListener(on_updated.as_ref().unchecked_ref());
        addTabRemovedListener(on_removed.as_ref().unchecked_ref());

        NavigationSubscription { on_updated, on_removed }
    }

    pub fn unsubscribe(self) {
        removeTabUpdatedListener(self.on_updated.as_ref().unchecked_ref());
        removeTabRemovedListener(self.on_removed.as_ref().unchecked_ref());
    }
}

/// `tabs.onZoomChange` listener, registered until `unsubscribe`
pub struct ZoomChangeSubscription {
    on_zoom_change: Closure<dyn FnMut(JsValue)>,
}

impl ZoomChangeSubscription {
    pub fn subscribe<F>(mut on_change: F) -> ZoomChangeSubscription
    where
        F: FnMut(ZoomChange) + 'static,
    {
        let on_zoom_change = Closure::wrap(Box::new(move |change_js: JsValue| {
            match serde_wasm_bindgen::from_value::<ZoomChange>(change_js) {
                Ok(change) => on_change(change),
                Err(e) => log::warn!("Unreadable zoom change: {}", e),
            }
        }) as Box<dyn FnMut(JsValue)>);

        addZoomChangeListener(on_zoom_change.as_ref().unchecked_ref());

        ZoomChangeSubscription { on_zoom_change }
    }

    pub fn unsubscribe(self) {
        removeZoomChangeListener(self.on_zoom_change.as_ref().unchecked_ref());
    }
}
