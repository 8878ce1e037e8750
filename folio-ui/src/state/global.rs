//! Global Application State
//!
//! Reactive state management using Leptos signals. UI state and content
//! collections live in signals; content mutations go to the backend from
//! spawned tasks and land in the collections signal when they resolve.

use leptos::*;
use std::rc::Rc;

use folio::store::{apply_created, apply_deleted, fetch_all};
use folio::{
    AdminGate, Collections, ContentSource, Fields, Page, Profile, Section, Skill, UiState,
};

use super::log;
use crate::api;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Page, theme, menu, admin session and loading gate
    pub ui: RwSignal<UiState>,
    /// Works, certifications and blog posts
    pub collections: RwSignal<Collections>,
    pub profile: StoredValue<Profile>,
    pub skills: StoredValue<Vec<Skill>>,
    pub gate: StoredValue<AdminGate>,
    pub source: StoredValue<Rc<dyn ContentSource>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Informational message (for toasts)
    pub notice: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        ui: create_rw_signal(UiState::new()),
        collections: create_rw_signal(Collections::default()),
        profile: store_value(Profile::default()),
        skills: store_value(folio::content::default_skills()),
        gate: store_value(AdminGate::default()),
        source: store_value(api::content_source()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        notice: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Fetch every section, then open the loading gate whatever the outcome
    pub fn load(&self) {
        let state = *self;
        let source = self.source.get_value();

        spawn_local(async move {
            match fetch_all(&*source).await {
                Ok(collections) => {
                    log::info(&format!(
                        "Loaded {} works, {} certifications, {} posts",
                        collections.works.len(),
                        collections.certifications.len(),
                        collections.blog.len()
                    ));
                    state.collections.set(collections);
                }
                Err(e) => log::error(&format!("Failed to fetch data: {}", e)),
            }
            state.ui.update(|ui| ui.mark_ready());
        });
    }

    pub fn navigate(&self, page: Page) {
        self.ui.update(|ui| ui.navigate(page));
    }

    /// Check the admin password; the login page reads the error back from `ui`
    pub fn login(&self, password: &str) {
        let gate = self.gate.get_value();
        self.ui.update(|ui| {
            if ui.login(&gate, password).is_err() {
                log::warn("Admin login failed");
            }
        });
    }

    pub fn logout(&self) {
        self.ui.update(|ui| ui.logout());
    }

    /// Create an item on the backend and append it once it has an id
    pub fn add(&self, section: Section, fields: Fields) {
        let state = *self;
        let source = self.source.get_value();

        spawn_local(async move {
            let created = source.create(section, &fields).await;
            let mut outcome = None;
            state
                .collections
                .update(|c| outcome = Some(apply_created(c, section, created)));
            match outcome {
                Some(Ok(_)) => state.show_success(&format!("{} added", section.singular())),
                Some(Err(e)) => {
                    log::error(&format!("Failed to add {}: {}", section.singular(), e));
                    state.show_error(&format!("Could not add {}", section.singular()));
                }
                None => {}
            }
        });
    }

    /// Tell the backend, then drop the item locally whatever it answered
    pub fn remove(&self, section: Section, id: String) {
        let state = *self;
        let source = self.source.get_value();

        spawn_local(async move {
            let deleted = source.delete(section, &id).await;
            let mut outcome = None;
            state
                .collections
                .update(|c| outcome = Some(apply_deleted(c, section, &id, deleted)));
            let Some(removal) = outcome else { return };

            if let Some(e) = &removal.remote_error {
                log::warn(&format!(
                    "Failed to delete {} {} on the backend: {}",
                    section.singular(),
                    id,
                    e
                ));
            }
            if removal.removed > 0 {
                state.show_success(&format!("{} deleted", section.singular()));
            }
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an informational message (auto-clears after timeout)
    pub fn show_notice(&self, message: &str) {
        self.notice.set(Some(message.to_string()));

        let notice_signal = self.notice;
        gloo_timers::callback::Timeout::new(3000, move || {
            notice_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
