//! Popup UI for Site Zoom

use crate::bridge::{ExtensionApi, ZoomChangeSubscription};
use crate::config::ExtensionConfig;
use crate::controller::{PopupController, PopupState};
use crate::tab_data::TabId;
use patternfly_yew::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AppProps {
    pub config: ExtensionConfig,
}

impl AppProps {
    pub fn extension_api(&self) -> ExtensionApi {
        self.config.extension_api()
    }
}

#[derive(Clone, PartialEq)]
enum PopupView {
    Loading,
    Ready(PopupState),
    Saving(PopupState),
    // Browser calls failed; the reason only goes to the console
    Unavailable,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let api = props.extension_api();
    let view = use_state(|| PopupView::Loading);
    let active_tab = use_mut_ref(|| None::<TabId>);

    // Read zoom and stored default on mount
    {
        let view = view.clone();
        let active_tab = active_tab.clone();
        use_effect_with((), move |_| {
            load_view(api, view, active_tab);
            || ()
        });
    }

    // Follow zoom changes of the active tab while the popup is open
    {
        let view = view.clone();
        let active_tab = active_tab.clone();
        use_effect_with((), move |_| {
            let subscription = ZoomChangeSubscription::subscribe(move |change| {
                if *active_tab.borrow() == Some(change.tab_id) {
                    load_view(api, view.clone(), active_tab.clone());
                }
            });
            move || subscription.unsubscribe()
        });
    }

    // Save handler
    let on_save = {
        let view = view.clone();

        Callback::from(move |_: MouseEvent| {
            if let PopupView::Ready(state) = &*view {
                view.set(PopupView::Saving(*state));
            }

            spawn_local(async move {
                let controller = PopupController::new(api);
                if let Err(e) = controller.save_and_close().await {
                    log::error!("Failed to save default zoom: {}", e);
                }
            });
        })
    };

    let (title, tag, is_ready) = match &*view {
        PopupView::Ready(state) => (state.title(), state.tag.label(), true),
        PopupView::Saving(state) => (state.title(), state.tag.label(), false),
        PopupView::Loading | PopupView::Unavailable => (String::new(), "", false),
    };

    html! {
        <div class="padding-20">
            <h1 id="zoom-level-message" class="popup-title">{title}</h1>

            if matches!(*view, PopupView::Loading | PopupView::Saving(_)) {
                <div class="loading-text-center">
                    <Spinner />
                </div>
            }

            <p id="zoom-level-tag" class="zoom-level-tag">{tag}</p>

            <Button onclick={on_save} disabled={!is_ready} variant={ButtonVariant::Primary} block={true}>
                {"Save zoom for this site"}
            </Button>
        </div>
    }
}

// Helper functions

fn load_view(api: ExtensionApi, view: UseStateHandle<PopupView>, active_tab: Rc<RefCell<Option<TabId>>>) {
    spawn_local(async move {
        let controller = PopupController::new(api);
        match controller.initialize().await {
            Ok(state) => {
                *active_tab.borrow_mut() = Some(state.tab_id);
                view.set(PopupView::Ready(state));
            }
            Err(e) => {
                log::error!("Failed to read zoom: {}", e);
                view.set(PopupView::Unavailable);
            }
        }
    });
}
