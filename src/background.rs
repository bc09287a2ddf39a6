//! Background context: runs the navigation watcher for the extension's lifetime

use crate::bridge::{ExtensionApi, NavigationSubscription};
use crate::config::ExtensionConfig;
use crate::tab_data::{TabChange, TabId};
use crate::watcher::{NavigationWatcher, WatchOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

thread_local! {
    static SUBSCRIPTION: RefCell<Option<NavigationSubscription>> = const { RefCell::new(None) };
}

/// Register the tab listeners. Calling it again replaces the previous registration.
pub fn start(config: &ExtensionConfig) {
    let watcher = Rc::new(NavigationWatcher::new(watcher_api(config)));

    let on_update = {
        let watcher = watcher.clone();
        move |tab_id: TabId, change: TabChange| {
            let watcher = watcher.clone();
            spawn_local(async move {
                match watcher.handle_update(tab_id, &change).await {
                    Ok(WatchOutcome::Ignored) => {}
                    Ok(outcome) => log::debug!("Tab {} update: {:?}", tab_id, outcome),
                    Err(e) => log::error!("Failed to apply zoom to tab {}: {}", tab_id, e),
                }
            });
        }
    };

    let on_remove = move |tab_id: TabId| watcher.forget_tab(tab_id);

    stop();
    let subscription = NavigationSubscription::subscribe(on_update, on_remove);
    SUBSCRIPTION.with(|slot| *slot.borrow_mut() = Some(subscription));

    log::info!("Zoom watcher started (storage.{})", config.storage_area.as_str());
}

pub(crate) fn watcher_api(config: &ExtensionConfig) -> ExtensionApi {
    config.extension_api()
}

/// Remove the tab listeners, if registered
pub fn stop() {
    if let Some(subscription) = SUBSCRIPTION.with(|slot| slot.borrow_mut().take()) {
        subscription.unsubscribe();
        log::info!("Zoom watcher stopped");
    }
}
