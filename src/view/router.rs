//! View Router
//!
//! UI-only state: which page is active, whether the mobile menu is open, the
//! theme, the loading phase and the admin login. Every change goes through a
//! named method; views only read.

use super::auth::{AdminGate, AuthError};
use crate::content::Section;

/// Navigation targets, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Works,
    Certifications,
    Blog,
    Contact,
    Admin,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Works,
        Page::Certifications,
        Page::Blog,
        Page::Contact,
        Page::Admin,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Works => "works",
            Page::Certifications => "certifications",
            Page::Blog => "blog",
            Page::Contact => "contact",
            Page::Admin => "admin",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Works => "Works",
            Page::Certifications => "Certifications",
            Page::Blog => "Blog",
            Page::Contact => "Contact",
            Page::Admin => "Admin",
        }
    }

    /// Resolve a page id; anything unknown lands on Home
    pub fn from_id(id: &str) -> Page {
        Page::ALL
            .into_iter()
            .find(|page| page.id().eq_ignore_ascii_case(id.trim()))
            .unwrap_or_default()
    }

    /// Content section a public page lists, if any
    pub fn section(&self) -> Option<Section> {
        match self {
            Page::Works => Some(Section::Works),
            Page::Certifications => Some(Section::Certifications),
            Page::Blog => Some(Section::Blog),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Whether the initial content load has finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
}

/// The single view currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Home,
    About,
    Works,
    Certifications,
    Blog,
    Contact,
    AdminLogin,
    AdminPanel,
}

/// UI state record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    page: Page,
    phase: Phase,
    theme: Theme,
    menu_open: bool,
    authenticated: bool,
    login_error: Option<String>,
    admin_tab: Section,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            page: Page::Home,
            phase: Phase::Loading,
            theme: Theme::Dark,
            menu_open: false,
            authenticated: false,
            login_error: None,
            admin_tab: Section::Works,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn admin_tab(&self) -> Section {
        self.admin_tab
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.page == page
    }

    /// Switch pages; always closes the mobile menu
    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(from = self.page.id(), to = page.id(), "Navigate");
        self.page = page;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Open the loading gate. There is no way back to `Loading`.
    pub fn mark_ready(&mut self) {
        self.phase = Phase::Ready;
    }

    pub fn login(&mut self, gate: &AdminGate, candidate: &str) -> Result<(), AuthError> {
        match gate.check(candidate) {
            Ok(()) => {
                if !self.authenticated {
                    tracing::info!("Admin logged in");
                }
                self.authenticated = true;
                self.login_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Admin login rejected");
                self.login_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Drop authentication and return to the home page. The next admin
    /// session starts on the works tab.
    pub fn logout(&mut self) {
        self.authenticated = false;
        self.login_error = None;
        self.admin_tab = Section::Works;
        self.navigate(Page::Home);
    }

    pub fn select_admin_tab(&mut self, section: Section) {
        self.admin_tab = section;
    }

    pub fn screen(&self) -> Screen {
        if self.phase == Phase::Loading {
            return Screen::Loading;
        }

        match self.page {
            Page::Home => Screen::Home,
            Page::About => Screen::About,
            Page::Works => Screen::Works,
            Page::Certifications => Screen::Certifications,
            Page::Blog => Screen::Blog,
            Page::Contact => Screen::Contact,
            Page::Admin if self.authenticated => Screen::AdminPanel,
            Page::Admin => Screen::AdminLogin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> UiState {
        let mut ui = UiState::new();
        ui.mark_ready();
        ui
    }

    #[test]
    fn test_starts_loading() {
        let mut ui = UiState::new();
        assert_eq!(ui.screen(), Screen::Loading);
        ui.navigate(Page::Works);
        assert_eq!(ui.screen(), Screen::Loading);
        ui.mark_ready();
        assert_eq!(ui.screen(), Screen::Works);
    }

    #[test]
    fn test_navigation_closes_menu() {
        let mut ui = ready();
        ui.toggle_menu();
        assert!(ui.menu_open());
        ui.navigate(Page::Blog);
        assert!(!ui.menu_open());
        assert!(ui.is_active(Page::Blog));
        assert_eq!(ui.screen(), Screen::Blog);
    }

    #[test]
    fn test_page_from_id() {
        assert_eq!(Page::from_id("certifications"), Page::Certifications);
        assert_eq!(Page::from_id("Admin"), Page::Admin);
        assert_eq!(Page::from_id("nowhere"), Page::Home);
        assert_eq!(Page::Works.section(), Some(Section::Works));
        assert_eq!(Page::Contact.section(), None);
    }

    #[test]
    fn test_theme_toggle() {
        let mut ui = ready();
        assert!(ui.theme().is_dark());
        ui.toggle_theme();
        assert_eq!(ui.theme(), Theme::Light);
        ui.toggle_theme();
        assert_eq!(ui.theme(), Theme::Dark);
    }

    #[test]
    fn test_admin_login_flow() {
        let gate = AdminGate::new("secret");
        let mut ui = ready();
        ui.navigate(Page::Admin);
        assert_eq!(ui.screen(), Screen::AdminLogin);

        let err = ui.login(&gate, "guess").unwrap_err();
        assert_eq!(err, AuthError::IncorrectPassword);
        assert!(!ui.is_authenticated());
        assert_eq!(ui.login_error(), Some("Incorrect password. Please try again."));
        assert_eq!(ui.screen(), Screen::AdminLogin);

        ui.login(&gate, "secret").unwrap();
        assert!(ui.is_authenticated());
        assert_eq!(ui.login_error(), None);
        assert_eq!(ui.screen(), Screen::AdminPanel);
    }

    #[test]
    fn test_logout_returns_home() {
        let gate = AdminGate::new("secret");
        let mut ui = ready();
        ui.navigate(Page::Admin);
        ui.login(&gate, "secret").unwrap();
        ui.select_admin_tab(Section::Blog);

        ui.logout();
        assert!(!ui.is_authenticated());
        assert_eq!(ui.page(), Page::Home);
        assert_eq!(ui.screen(), Screen::Home);

        ui.navigate(Page::Admin);
        assert_eq!(ui.screen(), Screen::AdminLogin);
        assert_eq!(ui.admin_tab(), Section::Works);

        ui.login(&gate, "secret").unwrap();
        assert_eq!(ui.admin_tab(), Section::Works);
    }
}
