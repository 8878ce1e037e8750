//! Pages
//!
//! Top-level page components, one per screen.

pub mod about;
pub mod admin;
pub mod blog;
pub mod certifications;
pub mod contact;
pub mod home;
pub mod login;
pub mod works;

pub use about::About;
pub use admin::Admin;
pub use blog::Blog;
pub use certifications::Certifications;
pub use contact::Contact;
pub use home::Home;
pub use login::Login;
pub use works::Works;
