//! Contact form
//!
//! The contact page has no delivery backend; sending is simulated by the
//! front end (a short delay, then a success notice that clears itself).

use super::form::FormError;

/// Submission progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    status: ContactStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == ContactStatus::Sending
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let required = [
            (&self.name, "Your Name"),
            (&self.email, "Your Email"),
            (&self.subject, "Subject"),
            (&self.message, "Your Message"),
        ];
        if let Some((_, label)) = required.into_iter().find(|(value, _)| value.trim().is_empty()) {
            return Err(FormError::Missing(label));
        }

        match self.email.trim().split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(FormError::InvalidEmail),
        }
    }

    /// Validate and move to `Sending`. A second submit while sending is a no-op.
    pub fn begin_send(&mut self) -> Result<(), FormError> {
        if self.is_sending() {
            return Ok(());
        }
        self.validate()?;
        self.status = ContactStatus::Sending;
        Ok(())
    }

    /// Delivery finished: clear the fields and show the success notice
    pub fn finish_send(&mut self) {
        if self.is_sending() {
            *self = Self {
                status: ContactStatus::Sent,
                ..Self::default()
            };
        }
    }

    /// Hide the success notice
    pub fn clear_notice(&mut self) {
        if self.status == ContactStatus::Sent {
            self.status = ContactStatus::Idle;
        }
    }
}
