//! UI Components
//!
//! Reusable Leptos components for the site.

pub mod admin_section;
pub mod loading;
pub mod nav;
pub mod section;
pub mod toast;

pub use admin_section::AdminSection;
pub use loading::Loading;
pub use nav::Nav;
pub use section::{PageSection, SectionTitle};
pub use toast::Toast;
