//! Application controller
//!
//! [`Portfolio`] owns the UI state, the content store and the read-only
//! profile, and exposes the named operations pages are allowed to trigger.
//! [`Portfolio::render`] hands out a borrowed [`View`] of the current screen.

use crate::content::{
    default_skills, BlogPost, Certification, Collections, Fields, Item, Profile, Section, Skill,
    WorkItem,
};
use crate::store::{ContentSource, PortfolioStore, Removal, StoreResult};
use crate::view::{
    form_spec, AdminGate, AuthError, FormError, FormSpec, FormState, Page, Screen, UiState,
    EDIT_PLACEHOLDER,
};

/// Read-only view model of the current screen
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Loading,
    Home {
        profile: &'a Profile,
    },
    About {
        profile: &'a Profile,
        skills: &'a [Skill],
    },
    Works(&'a [WorkItem]),
    Certifications(&'a [Certification]),
    Blog(&'a [BlogPost]),
    Contact,
    AdminLogin {
        error: Option<&'a str>,
    },
    AdminPanel {
        tab: Section,
        form: &'static FormSpec,
        items: Vec<Item>,
    },
}

/// The site: UI state, content store and static profile
pub struct Portfolio<S> {
    ui: UiState,
    store: PortfolioStore<S>,
    gate: AdminGate,
    profile: Profile,
    skills: Vec<Skill>,
}

impl<S: ContentSource> Portfolio<S> {
    pub fn new(source: S, gate: AdminGate, profile: Profile) -> Self {
        Self {
            ui: UiState::new(),
            store: PortfolioStore::new(source),
            gate,
            profile,
            skills: default_skills(),
        }
    }

    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = skills;
        self
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn store(&self) -> &PortfolioStore<S> {
        &self.store
    }

    pub fn collections(&self) -> &Collections {
        self.store.collections()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn navigate(&mut self, page: Page) {
        self.ui.navigate(page);
    }

    pub fn toggle_theme(&mut self) {
        self.ui.toggle_theme();
    }

    pub fn toggle_menu(&mut self) {
        self.ui.toggle_menu();
    }

    pub fn select_admin_tab(&mut self, section: Section) {
        self.ui.select_admin_tab(section);
    }

    pub fn login(&mut self, password: &str) -> Result<(), AuthError> {
        self.ui.login(&self.gate, password)
    }

    pub fn logout(&mut self) {
        self.ui.logout();
    }

    /// Load content and open the loading gate.
    ///
    /// The gate opens whether or not the load succeeded; on failure the
    /// pages show whatever the collections held before.
    pub async fn load(&mut self) -> StoreResult<()> {
        let result = self.store.load().await;
        self.ui.mark_ready();
        result
    }

    /// Add an item. Requires an admin login; failures are logged by the store
    /// and reported as `None`.
    pub async fn add(&mut self, section: Section, fields: Fields) -> Option<Item> {
        if !self.ui.is_authenticated() {
            tracing::warn!(section = %section, "Add ignored: not logged in");
            return None;
        }
        self.store.add(section, fields).await.ok()
    }

    /// Remove an item. Requires an admin login.
    pub async fn remove(&mut self, section: Section, id: &str) -> Option<Removal> {
        if !self.ui.is_authenticated() {
            tracing::warn!(section = %section, id = %id, "Remove ignored: not logged in");
            return None;
        }
        Some(self.store.remove(section, id).await)
    }

    /// Submit an admin form: validate, reset it and add the collected record
    pub async fn submit_form(&mut self, form: &mut FormState) -> Result<Option<Item>, FormError> {
        let fields = form.submit()?;
        Ok(self.add(form.section(), fields).await)
    }

    /// The edit control: never mutates, always answers with a placeholder
    pub fn edit(&self, section: Section, id: &str) -> &'static str {
        tracing::debug!(section = %section, id = %id, "Edit requested");
        EDIT_PLACEHOLDER
    }

    pub fn render(&self) -> View<'_> {
        let collections = self.store.collections();
        match self.ui.screen() {
            Screen::Loading => View::Loading,
            Screen::Home => View::Home {
                profile: &self.profile,
            },
            Screen::About => View::About {
                profile: &self.profile,
                skills: &self.skills,
            },
            Screen::Works => View::Works(&collections.works),
            Screen::Certifications => View::Certifications(&collections.certifications),
            Screen::Blog => View::Blog(&collections.blog),
            Screen::Contact => View::Contact,
            Screen::AdminLogin => View::AdminLogin {
                error: self.ui.login_error(),
            },
            Screen::AdminPanel => {
                let tab = self.ui.admin_tab();
                View::AdminPanel {
                    tab,
                    form: form_spec(tab),
                    items: collections.items(tab),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LocalSource;

    fn site() -> Portfolio<LocalSource> {
        Portfolio::new(
            LocalSource::with_defaults(),
            AdminGate::new("secret"),
            Profile::default(),
        )
    }

    #[tokio::test]
    async fn test_loading_gate() {
        let mut site = site();
        assert_eq!(site.render(), View::Loading);

        site.load().await.unwrap();
        assert!(matches!(site.render(), View::Home { .. }));
    }

    #[tokio::test]
    async fn test_public_pages_render_collections() {
        let mut site = site();
        site.load().await.unwrap();

        site.navigate(Page::Works);
        match site.render() {
            View::Works(works) => assert_eq!(works.len(), 2),
            other => panic!("unexpected view: {:?}", other),
        }

        site.navigate(Page::About);
        match site.render() {
            View::About { skills, .. } => assert_eq!(skills.len(), 12),
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mutations_require_login() {
        let mut site = site();
        site.load().await.unwrap();

        let mut fields = Fields::new();
        fields.insert("title".to_string(), "X".to_string());
        assert!(site.add(Section::Works, fields.clone()).await.is_none());
        assert!(site.remove(Section::Works, "1").await.is_none());
        assert_eq!(site.collections().works.len(), 2);

        site.login("secret").unwrap();
        assert!(site.add(Section::Works, fields).await.is_some());
        assert_eq!(site.collections().works.len(), 3);
    }

    #[tokio::test]
    async fn test_admin_panel_flow() {
        let mut site = site();
        site.load().await.unwrap();
        site.navigate(Page::Admin);

        assert!(site.login("wrong").is_err());
        match site.render() {
            View::AdminLogin { error } => assert!(!error.unwrap_or_default().is_empty()),
            other => panic!("unexpected view: {:?}", other),
        }

        site.login("secret").unwrap();
        site.select_admin_tab(Section::Blog);

        let mut form = FormState::new(Section::Blog);
        form.set("title", "T").unwrap();
        form.set("date", "2025-01-01").unwrap();
        form.set("slug", "t").unwrap();
        form.set("excerpt", "E").unwrap();
        let item = site.submit_form(&mut form).await.unwrap().unwrap();
        assert_eq!(form.value("title"), "");

        match site.render() {
            View::AdminPanel { tab, form, items } => {
                assert_eq!(tab, Section::Blog);
                assert_eq!(form.section, Section::Blog);
                assert_eq!(items.len(), 2);
                assert_eq!(items[1].id(), item.id());
            }
            other => panic!("unexpected view: {:?}", other),
        }

        let removal = site.remove(Section::Blog, item.id()).await.unwrap();
        assert_eq!(removal.removed, 1);

        assert_eq!(site.edit(Section::Blog, "1"), EDIT_PLACEHOLDER);
        assert_eq!(site.collections().blog.len(), 1);

        site.logout();
        assert!(matches!(site.render(), View::Home { .. }));
    }

    #[tokio::test]
    async fn test_incomplete_form_is_not_submitted() {
        let mut site = site();
        site.load().await.unwrap();
        site.login("secret").unwrap();

        let mut form = FormState::new(Section::Works);
        form.set("title", "X").unwrap();
        let err = site.submit_form(&mut form).await.unwrap_err();
        assert_eq!(err, FormError::Missing("Category"));
        assert_eq!(site.collections().works.len(), 2);
    }
}
