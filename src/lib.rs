//! # Folio
//!
//! Personal portfolio site - public pages (home, about, works,
//! certifications, blog, contact) and a password-gated admin panel that
//! adds and deletes content through a small REST backend, or against
//! embedded defaults when no backend is configured.
//!
//! ## Modules
//!
//! - [`content`]: Records, collections and the static profile
//! - [`store`]: Store Sync and its content sources
//! - [`view`]: Routing, admin gate, admin and contact forms
//! - [`app`]: The [`Portfolio`] controller tying them together
//! - [`config`]: TOML configuration (native builds)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use folio::{AdminGate, LocalSource, Page, Portfolio, Profile, View};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut site = Portfolio::new(
//!         LocalSource::with_defaults(),
//!         AdminGate::default(),
//!         Profile::default(),
//!     );
//!
//!     // Load failures are logged; the pages then show empty collections
//!     let _ = site.load().await;
//!
//!     site.navigate(Page::Works);
//!     if let View::Works(works) = site.render() {
//!         println!("{} works", works.len());
//!     }
//! }
//! ```

pub mod app;
pub mod content;
pub mod store;
pub mod view;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

pub use app::{Portfolio, View};

pub use content::{
    BlogPost, Certification, Collections, ContentError, Fields, Item, Profile, Section, Skill,
    WorkItem,
};

pub use store::{
    ContentSource, LocalSource, PortfolioStore, Removal, SourceKind, StoreError, StoreResult,
};

#[cfg(feature = "native")]
pub use store::{RemoteConfig, RemoteSource};

pub use view::{
    AdminGate, AuthError, ContactForm, FieldKind, FormError, FormSpec, FormState, Page, Screen,
    Theme, UiState,
};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
