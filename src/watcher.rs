//! Re-apply saved zoom defaults when a tab moves to another host

use crate::browser::{ZoomControl, ZoomStore};
use crate::error::ZoomError;
use crate::host::extract_hostname;
use crate::tab_data::{TabChange, TabId};
use crate::zoom::format_zoom;
use std::cell::RefCell;
use std::collections::HashMap;

/// What a tab update led to
#[derive(Debug, Clone, PartialEq)]
pub enum WatchOutcome {
    /// No URL in the change, or a URL without a host
    Ignored,
    /// First host seen for this tab
    Baseline,
    SameHost,
    NoStoredZoom,
    Applied(f64),
}

/// Remembers the last host of every tab and applies the stored zoom on host changes.
///
/// The first URL seen for a tab only sets its baseline, so startup never rezooms
/// pages that are already open.
pub struct NavigationWatcher<B> {
    browser: B,
    last_hosts: RefCell<HashMap<TabId, String>>,
}

impl<B> NavigationWatcher<B>
where
    B: ZoomControl + ZoomStore,
{
    pub fn new(browser: B) -> Self {
        NavigationWatcher {
            browser,
            last_hosts: RefCell::new(HashMap::new()),
        }
    }

    #[cfg(test)]
    pub(crate) fn browser(&self) -> &B {
        &self.browser
    }

    pub async fn handle_update(&self, tab_id: TabId, change: &TabChange) -> Result<WatchOutcome, ZoomError> {
        let Some(hostname) = change.url.as_deref().and_then(extract_hostname) else {
            return Ok(WatchOutcome::Ignored);
        };

        // Decided before the first await so overlapping handlers see the new host.
        let previous = self.last_hosts.borrow_mut().insert(tab_id, hostname.clone());

        match previous {
            None => {
                log::debug!("Tab {} baseline host {}", tab_id, hostname);
                Ok(WatchOutcome::Baseline)
            }
            Some(previous) if previous == hostname => Ok(WatchOutcome::SameHost),
            Some(previous) => {
                log::debug!("Tab {} moved from {} to {}", tab_id, previous, hostname);
                self.apply_stored_zoom(tab_id, &hostname).await
            }
        }
    }

    /// Drop the remembered host of a closed tab
    pub fn forget_tab(&self, tab_id: TabId) {
        self.last_hosts.borrow_mut().remove(&tab_id);
    }

    #[cfg(test)]
    pub(crate) fn tracked_tabs(&self) -> usize {
        self.last_hosts.borrow().len()
    }

    async fn apply_stored_zoom(&self, tab_id: TabId, hostname: &str) -> Result<WatchOutcome, ZoomError> {
        match self.browser.stored_zoom(hostname).await? {
            Some(zoom) => {
                self.browser.set_zoom(tab_id, zoom).await?;
                log::info!("Applied {} to tab {} ({})", format_zoom(zoom), tab_id, hostname);
                Ok(WatchOutcome::Applied(zoom))
            }
            None => Ok(WatchOutcome::NoStoredZoom),
        }
    }
}
