//! Landing page email form.

use std::time::Duration;

use tracing::debug;

use crate::effects::{Effect, Notice};
use crate::email::{EmailAddress, EmailError};
use crate::routes::join_path;

#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    input: String,
    error: Option<EmailError>,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Update the field. Editing clears a previous validation error.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        self.error = None;
    }

    pub fn error(&self) -> Option<EmailError> {
        self.error
    }

    /// Validate and hand the address to the join flow.
    ///
    /// On success the field is cleared and the confetti fires right away,
    /// before anything is known about the join request itself.
    pub fn submit(&mut self) -> Result<Vec<Effect>, EmailError> {
        let email = match EmailAddress::parse(self.input.trim()) {
            Ok(email) => email,
            Err(e) => {
                self.error = Some(e);
                return Err(e);
            }
        };

        debug!(email = %email, "Waitlist form submitted");
        self.input.clear();
        self.error = None;

        Ok(vec![
            Effect::Notify(Notice::success(
                "Thank you for joining the waitlist!",
                "We will get back to you soon.",
            )),
            Effect::Confetti {
                after: Duration::ZERO,
            },
            Effect::Navigate {
                to: join_path(&email),
                after: Duration::ZERO,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_submit_is_required() {
        let mut form = IntakeForm::new();
        assert_eq!(form.submit(), Err(EmailError::Required));
        assert_eq!(form.error(), Some(EmailError::Required));

        form.set_input("   ");
        assert_eq!(form.submit(), Err(EmailError::Required));
    }

    #[test]
    fn test_invalid_submit_keeps_input() {
        let mut form = IntakeForm::new();
        form.set_input("not-an-email");
        assert_eq!(form.submit(), Err(EmailError::Invalid));
        assert_eq!(form.input(), "not-an-email");
    }

    #[test]
    fn test_editing_clears_error() {
        let mut form = IntakeForm::new();
        form.submit().unwrap_err();
        form.set_input("a");
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_valid_submit_clears_and_hands_off() {
        let mut form = IntakeForm::new();
        form.set_input(" hello@example.com ");
        let effects = form.submit().unwrap();

        assert_eq!(form.input(), "");
        assert!(effects.contains(&Effect::Confetti {
            after: Duration::ZERO
        }));
        assert!(effects.contains(&Effect::Navigate {
            to: "/waitlist?email=hello%40example.com".into(),
            after: Duration::ZERO,
        }));
        assert_eq!(
            effects
                .iter()
                .filter(|e| matches!(e, Effect::Notify(_)))
                .count(),
            1
        );
    }
}
