//! Popup logic: show the active tab's zoom and save it as the host default

use crate::browser::{PopupWindow, TabDirectory, ZoomControl, ZoomStore};
use crate::error::ZoomError;
use crate::tab_data::{ActiveTab, TabId};
use crate::zoom::{DefaultTag, format_zoom};

/// What the popup shows for one open
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupState {
    pub tab_id: TabId,
    pub zoom: f64,
    pub tag: DefaultTag,
}

impl PopupState {
    pub fn title(&self) -> String {
        format_zoom(self.zoom)
    }
}

pub struct PopupController<B> {
    browser: B,
}

impl<B> PopupController<B>
where
    B: TabDirectory + ZoomControl + ZoomStore + PopupWindow,
{
    pub fn new(browser: B) -> Self {
        PopupController { browser }
    }

    #[cfg(test)]
    pub(crate) fn browser(&self) -> &B {
        &self.browser
    }

    /// Read the active tab's zoom and compare it to the saved default for its host
    pub async fn initialize(&self) -> Result<PopupState, ZoomError> {
        let tab = self.browser.active_tab().await?;
        let zoom = self.browser.zoom(tab.id).await?;

        let stored = match tab.hostname() {
            Some(hostname) => self.browser.stored_zoom(&hostname).await?,
            None => None,
        };

        let tag = DefaultTag::compare(stored, zoom);
        log::debug!("Popup opened on tab {}: zoom {}, stored {:?}", tab.id, zoom, stored);

        Ok(PopupState { tab_id: tab.id, zoom, tag })
    }

    /// Save the active tab's zoom as its host default, then close the popup.
    ///
    /// The zoom is read again here rather than taken from `initialize`, since the
    /// user may have zoomed while the popup was open. The popup closes whether or
    /// not the write went through.
    pub async fn save_and_close(&self) -> Result<(String, f64), ZoomError> {
        let saved = self.save_current_zoom().await;
        self.browser.close();
        saved
    }

    async fn save_current_zoom(&self) -> Result<(String, f64), ZoomError> {
        let tab = self.browser.active_tab().await?;
        let zoom = self.browser.zoom(tab.id).await?;
        let hostname = require_hostname(&tab)?;

        self.browser.store_zoom(&hostname, zoom).await?;
        log::info!("Saved {} as default zoom for {}", format_zoom(zoom), hostname);

        Ok((hostname, zoom))
    }
}

fn require_hostname(tab: &ActiveTab) -> Result<String, ZoomError> {
    tab.hostname()
        .ok_or_else(|| ZoomError::NoHostname(tab.url.clone()))
}
