use std::{cell::RefCell, rc::Rc};

use archfolio_shared::{
    AutosaveConfig, DraftAutosaveManager, DraftFormData, DraftSessionState, DraftSnapshot,
    DraftStorage, FormEdit,
};
use gloo_timers::callback::Interval;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;
use yew::prelude::*;

use crate::storage::{BrowserClock, LocalStorage};

type EditorDrafts = DraftAutosaveManager<LocalStorage, BrowserClock>;

/// Handle to the draft manager owned by one editor instance.
///
/// Every mutating call re-renders the component so status text and the
/// recovery prompt stay current.
#[derive(Clone)]
pub struct DraftAutosaveHandle {
    manager: Rc<RefCell<EditorDrafts>>,
    rerender: UseForceUpdateHandle,
}

impl PartialEq for DraftAutosaveHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.manager, &other.manager)
    }
}

impl DraftAutosaveHandle {
    pub fn state(&self) -> DraftSessionState {
        self.manager.borrow().state()
    }

    pub fn snapshot(&self) -> DraftSnapshot {
        self.manager.borrow().current().clone()
    }

    pub fn is_degraded(&self) -> bool {
        self.manager.borrow().is_degraded()
    }

    pub fn debug_overlay(&self) -> bool {
        self.manager.borrow().config().debug_overlay
    }

    pub fn recovery_message(&self) -> Option<String> {
        self.manager.borrow().recovery_message()
    }

    /// Raw stored value, for the debug panel.
    pub fn stored_raw(&self) -> Option<String> {
        let manager = self.manager.borrow();
        manager
            .storage()
            .get_item(&manager.config().storage_key)
            .ok()
            .flatten()
    }

    pub fn update(&self, edit: FormEdit) {
        self.manager.borrow_mut().update_form(edit);
        self.rerender.force_update();
    }

    pub fn set_upload_state(&self, is_uploading: bool, progress: u8, uploaded_url: Option<String>) {
        self.manager
            .borrow_mut()
            .set_upload_state(is_uploading, progress, uploaded_url);
        self.rerender.force_update();
    }

    pub fn hydrate(&self, form: DraftFormData, id: Option<String>, featured_image: Option<String>) {
        self.manager.borrow_mut().hydrate(form, id, featured_image);
        self.rerender.force_update();
    }

    pub fn recover(&self) -> Option<DraftSnapshot> {
        let recovered = self.manager.borrow_mut().recover();
        self.rerender.force_update();
        recovered
    }

    pub fn discard(&self) {
        self.manager.borrow_mut().discard();
        self.rerender.force_update();
    }

    pub fn reset(&self) {
        self.manager.borrow_mut().reset();
        self.rerender.force_update();
    }

    pub fn mark_published(&self, id: Option<String>) {
        self.manager.borrow_mut().mark_published(id);
        self.rerender.force_update();
    }
}

/// Own a draft manager for the lifetime of the calling component.
///
/// On mount the manager checks storage for an interrupted session; while
/// mounted an interval drives the periodic autosave tick. Pending edits are
/// also written when the page is hidden and when the editor unmounts, after
/// which autosave stops.
///
/// # Example
/// ```rust,ignore
/// #[function_component(Editor)]
/// fn editor() -> Html {
///     let drafts = use_draft_autosave(crate::config::autosave_config());
///     html! { <p>{ format!("{:?}", drafts.state()) }</p> }
/// }
/// ```
#[hook]
pub fn use_draft_autosave(config: AutosaveConfig) -> DraftAutosaveHandle {
    let interval_ms = config.interval_ms;
    let manager = use_mut_ref(move || {
        let mut manager = DraftAutosaveManager::new(LocalStorage, BrowserClock, config);
        manager.begin_session();
        manager
    });
    let rerender = use_force_update();

    {
        let manager = manager.clone();
        let rerender = rerender.clone();
        use_effect_with(interval_ms, move |interval_ms| {
            let interval = {
                let manager = manager.clone();
                Interval::new(*interval_ms, move || {
                    let before = manager.borrow().state();
                    manager.borrow_mut().tick();
                    if manager.borrow().state() != before {
                        rerender.force_update();
                    }
                })
            };

            let on_pagehide = {
                let manager = manager.clone();
                Closure::wrap(Box::new(move || manager.borrow_mut().tick()) as Box<dyn Fn()>)
            };
            let win = window();
            if let Some(win) = win.as_ref() {
                let _ = win.add_event_listener_with_callback(
                    "pagehide",
                    on_pagehide.as_ref().unchecked_ref(),
                );
            }

            move || {
                drop(interval);
                if let Some(win) = win.as_ref() {
                    let _ = win.remove_event_listener_with_callback(
                        "pagehide",
                        on_pagehide.as_ref().unchecked_ref(),
                    );
                }
                drop(on_pagehide);
                manager.borrow_mut().tick();
            }
        });
    }

    DraftAutosaveHandle {
        manager,
        rerender,
    }
}
