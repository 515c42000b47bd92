//! Login form guard.
//!
//! Binds to a form, its two text inputs and an error display, clears stale
//! errors whenever the user types, and refuses submission until both fields
//! hold something other than whitespace.
//!
//! # Lifecycle
//!
//! 1. The host calls [`FormGuard::bind`] once when its page is ready.
//!    Missing elements leave the page unguarded: `bind` returns `None`.
//! 2. The host forwards input events to [`FormEvents::on_input_changed`].
//! 3. The host forwards submit events to [`FormEvents::on_submit_attempted`];
//!    the guard either shows a message or acknowledges and submits.

use tracing::{debug, trace};

use crate::domain::elements::{
    Acknowledger, BoundElements, ErrorDisplay, Field, FormElements, FormTarget, SubmitEvent,
    TextField,
};
use crate::domain::validation::{Credentials, ValidationFailure, validate};

/// Notice shown to the user right before a validated form is submitted.
pub const SUBMIT_ACKNOWLEDGMENT: &str = "Validation passed. Submitting form...";

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A message is displayed and the form was not submitted.
    Blocked(ValidationFailure),
    /// The form was submitted with these credentials.
    Submitted(Credentials),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// Event callbacks a host UI layer invokes.
pub trait FormEvents {
    /// The user changed the value of `field`.
    fn on_input_changed(&mut self, field: Field);

    /// The user tried to submit the form.
    fn on_submit_attempted(&mut self, event: &mut dyn SubmitEvent) -> SubmitOutcome;
}

/// Validation guard bound to one login form.
pub struct FormGuard<F, T, D, A> {
    form: F,
    username: T,
    password: T,
    error_display: D,
    acknowledger: A,
}

impl<F, T, D, A> FormGuard<F, T, D, A>
where
    F: FormTarget,
    T: TextField,
    D: ErrorDisplay,
    A: Acknowledger,
{
    /// Binds a guard to the given elements.
    ///
    /// Returns `None` without touching anything if any of the four elements
    /// is missing.
    pub fn bind(elements: FormElements<F, T, D>, acknowledger: A) -> Option<Self> {
        let FormElements {
            form: Some(form),
            username: Some(username),
            password: Some(password),
            error_display: Some(error_display),
        } = elements
        else {
            debug!("Login form elements missing, guard stays inert");
            return None;
        };

        Some(Self {
            form,
            username,
            password,
            error_display,
            acknowledger,
        })
    }

    /// Mutable access for hosts that own the input buffer themselves.
    pub fn field_mut(&mut self, field: Field) -> &mut T {
        match field {
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        }
    }

    /// Unbinds the guard, handing the elements back to the host.
    pub fn into_parts(self) -> (BoundElements<F, T, D>, A) {
        (
            BoundElements {
                form: self.form,
                username: self.username,
                password: self.password,
                error_display: self.error_display,
            },
            self.acknowledger,
        )
    }

    fn clear_error(&mut self) {
        self.error_display.set_text("");
        self.error_display.set_error_marker(false);
    }

    fn show_error(&mut self, failure: ValidationFailure) {
        self.error_display.set_text(&failure.to_string());
        self.field_mut(failure.focus()).focus();
        self.error_display.set_error_marker(true);
    }
}

impl<F, T, D, A> FormEvents for FormGuard<F, T, D, A>
where
    F: FormTarget,
    T: TextField,
    D: ErrorDisplay,
    A: Acknowledger,
{
    fn on_input_changed(&mut self, field: Field) {
        trace!(field = field.id(), "Input changed, clearing error");
        self.clear_error();
    }

    fn on_submit_attempted(&mut self, event: &mut dyn SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        let username = self.username.value();
        let password = self.password.value();

        match validate(&username, &password) {
            Err(failure) => {
                debug!(reason = failure.code(), "Login form submission blocked");
                self.show_error(failure);
                SubmitOutcome::Blocked(failure)
            }
            Ok(credentials) => {
                self.clear_error();
                self.acknowledger.acknowledge(SUBMIT_ACKNOWLEDGMENT);
                self.form.submit();
                debug!(username = credentials.username(), "Login form submitted");
                SubmitOutcome::Submitted(credentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::elements::{
        MockAcknowledger, MockErrorDisplay, MockFormTarget, MockSubmitEvent, MockTextField,
    };
    use mockall::Sequence;

    type MockGuard = FormGuard<MockFormTarget, MockTextField, MockErrorDisplay, MockAcknowledger>;

    fn field_with(value: &str) -> MockTextField {
        let mut field = MockTextField::new();
        field.expect_value().return_const(value.to_string());
        field
    }

    fn focused_field_with(value: &str) -> MockTextField {
        let mut field = field_with(value);
        field.expect_focus().times(1).return_const(());
        field
    }

    fn prevented_event() -> MockSubmitEvent {
        let mut event = MockSubmitEvent::new();
        event.expect_prevent_default().times(1).return_const(());
        event
    }

    fn display_expecting(message: &'static str) -> MockErrorDisplay {
        let mut display = MockErrorDisplay::new();
        display
            .expect_set_text()
            .withf(move |text| text == message)
            .times(1)
            .return_const(());
        display
            .expect_set_error_marker()
            .withf(|on| *on)
            .times(1)
            .return_const(());
        display
    }

    fn bind(
        username: MockTextField,
        password: MockTextField,
        display: MockErrorDisplay,
    ) -> MockGuard {
        FormGuard::bind(
            FormElements::complete(MockFormTarget::new(), username, password, display),
            MockAcknowledger::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_bind_inert_when_element_missing() {
        let elements: FormElements<MockFormTarget, MockTextField, MockErrorDisplay> =
            FormElements {
                form: Some(MockFormTarget::new()),
                username: Some(MockTextField::new()),
                password: None,
                error_display: Some(MockErrorDisplay::new()),
            };

        assert!(FormGuard::bind(elements, MockAcknowledger::new()).is_none());
    }

    #[test]
    fn test_bind_inert_without_form_or_display() {
        let no_form: FormElements<MockFormTarget, MockTextField, MockErrorDisplay> = FormElements {
            form: None,
            username: Some(MockTextField::new()),
            password: Some(MockTextField::new()),
            error_display: Some(MockErrorDisplay::new()),
        };
        assert!(FormGuard::bind(no_form, MockAcknowledger::new()).is_none());

        let no_display: FormElements<MockFormTarget, MockTextField, MockErrorDisplay> =
            FormElements {
                form: Some(MockFormTarget::new()),
                username: Some(MockTextField::new()),
                password: Some(MockTextField::new()),
                error_display: None,
            };
        assert!(FormGuard::bind(no_display, MockAcknowledger::new()).is_none());
    }

    #[test]
    fn test_both_empty_blocks_and_focuses_username() {
        let mut guard = bind(
            focused_field_with(""),
            field_with(""),
            display_expecting("Please enter username and password."),
        );

        let outcome = guard.on_submit_attempted(&mut prevented_event());

        assert_eq!(outcome, SubmitOutcome::Blocked(ValidationFailure::MissingBoth));
    }

    #[test]
    fn test_missing_password_focuses_password() {
        let mut guard = bind(
            field_with("alice"),
            focused_field_with(""),
            display_expecting("Please enter password."),
        );

        let outcome = guard.on_submit_attempted(&mut prevented_event());

        assert_eq!(
            outcome,
            SubmitOutcome::Blocked(ValidationFailure::MissingPassword)
        );
    }

    #[test]
    fn test_missing_username_focuses_username() {
        let mut guard = bind(
            focused_field_with(""),
            field_with("secret"),
            display_expecting("Please enter username."),
        );

        let outcome = guard.on_submit_attempted(&mut prevented_event());

        assert_eq!(
            outcome,
            SubmitOutcome::Blocked(ValidationFailure::MissingUsername)
        );
    }

    #[test]
    fn test_whitespace_username_is_missing() {
        let mut guard = bind(
            focused_field_with("   "),
            field_with("secret"),
            display_expecting("Please enter username."),
        );

        let outcome = guard.on_submit_attempted(&mut prevented_event());

        assert!(!outcome.is_submitted());
    }

    #[test]
    fn test_valid_submission_acknowledges_then_submits() {
        let mut seq = Sequence::new();

        let mut display = MockErrorDisplay::new();
        display
            .expect_set_text()
            .withf(|text| text.is_empty())
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        display
            .expect_set_error_marker()
            .withf(|on| !*on)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut acknowledger = MockAcknowledger::new();
        acknowledger
            .expect_acknowledge()
            .withf(|message| message == SUBMIT_ACKNOWLEDGMENT)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut form = MockFormTarget::new();
        form.expect_submit()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        // No focus expectations: validation must not move focus on success.
        let mut guard = FormGuard::bind(
            FormElements::complete(form, field_with("alice"), field_with("secret"), display),
            acknowledger,
        )
        .unwrap();

        let outcome = guard.on_submit_attempted(&mut prevented_event());

        match outcome {
            SubmitOutcome::Submitted(credentials) => {
                assert_eq!(credentials.username(), "alice");
                assert_eq!(credentials.password(), "secret");
            }
            SubmitOutcome::Blocked(failure) => panic!("unexpected block: {failure}"),
        }
    }

    #[test]
    fn test_input_clears_error_idempotently() {
        let mut display = MockErrorDisplay::new();
        display
            .expect_set_text()
            .withf(|text| text.is_empty())
            .times(3)
            .return_const(());
        display
            .expect_set_error_marker()
            .withf(|on| !*on)
            .times(3)
            .return_const(());

        let mut guard = bind(MockTextField::new(), MockTextField::new(), display);

        guard.on_input_changed(Field::Username);
        guard.on_input_changed(Field::Username);
        guard.on_input_changed(Field::Password);
    }

    #[test]
    fn test_default_prevented_even_when_blocked() {
        let mut event = MockSubmitEvent::new();
        event.expect_prevent_default().times(1).return_const(());

        let mut guard = bind(
            focused_field_with(""),
            field_with(""),
            display_expecting("Please enter username and password."),
        );

        guard.on_submit_attempted(&mut event);
    }

    #[test]
    fn test_into_parts_returns_elements() {
        let guard = bind(field_with("alice"), field_with("secret"), MockErrorDisplay::new());

        let (elements, _acknowledger) = guard.into_parts();

        assert_eq!(elements.username.value(), "alice");
        assert_eq!(elements.password.value(), "secret");
    }
}
