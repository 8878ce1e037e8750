//! Admin gate
//!
//! A plain string-equality check that hides the admin panel. The password is
//! delivered with the client, so this is a UI gate only; access control for
//! the backend's mutating endpoints has to live on the backend.

use std::fmt;
use thiserror::Error;

/// Password the site has always shipped with
pub const DEFAULT_ADMIN_PASSWORD: &str = "password123";

/// Login failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Incorrect password. Please try again.")]
    IncorrectPassword,
}

/// Client-side admin password check
#[derive(Clone, PartialEq, Eq)]
pub struct AdminGate {
    password: String,
}

impl AdminGate {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    pub fn check(&self, candidate: &str) -> Result<(), AuthError> {
        if candidate == self.password {
            Ok(())
        } else {
            Err(AuthError::IncorrectPassword)
        }
    }
}

impl Default for AdminGate {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_PASSWORD)
    }
}

impl fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminGate")
            .field("password", &"<redacted>")
            .finish()
    }
}
