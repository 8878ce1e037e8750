//! View layer state
//!
//! Everything the pages read or change that is not content: routing and
//! theme ([`router`]), the admin gate ([`auth`]), the generic admin form
//! ([`form`]) and the contact form ([`contact`]).

pub mod auth;
pub mod contact;
pub mod form;
pub mod router;

pub use auth::{AdminGate, AuthError, DEFAULT_ADMIN_PASSWORD};
pub use contact::{ContactForm, ContactStatus};
pub use form::{
    form_spec, FieldKind, FieldSpec, FormError, FormSpec, FormState, RowAction,
    EDIT_PLACEHOLDER, EMPTY_LIST_NOTICE,
};
pub use router::{Page, Phase, Screen, Theme, UiState};
