//! Server-side host for the login form guard.
//!
//! A posted form is replayed against a [`FormGuard`]: each element records
//! what the guard did to it, and the handler renders the page (or forwards
//! the submission) from those records.

use serde::Deserialize;

use crate::domain::elements::{
    Acknowledger, BoundElements, ErrorDisplay, Field, FormElements, FormTarget, SubmitEvent,
    TextField,
};
use crate::domain::guard::FormGuard;

/// Form-encoded body posted by the login page.
///
/// A field absent from the body means the posting page had no such input,
/// which is different from an input left empty.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// A text input as posted by the browser.
#[derive(Debug, Default, Clone)]
pub struct PostedField {
    value: String,
    focused: bool,
}

impl PostedField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            focused: false,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl TextField for PostedField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

/// The `errorMsg` element of the page being rendered.
#[derive(Debug, Default, Clone)]
pub struct ErrorSlot {
    pub text: String,
    pub marked: bool,
}

impl ErrorDisplay for ErrorSlot {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_error_marker(&mut self, on: bool) {
        self.marked = on;
    }
}

/// The `loginForm` element; remembers whether the guard let it through.
#[derive(Debug, Default, Clone)]
pub struct PostedForm {
    submitted: bool,
}

impl PostedForm {
    pub fn was_submitted(&self) -> bool {
        self.submitted
    }
}

impl FormTarget for PostedForm {
    fn submit(&mut self) {
        self.submitted = true;
    }
}

/// Acknowledgment sink; a server has nobody to block, so it logs.
#[derive(Debug, Default)]
pub struct LoggedNotice;

impl Acknowledger for LoggedNotice {
    fn acknowledge(&mut self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// The POST request standing in for the browser's submit event.
#[derive(Debug, Default)]
pub struct PostedSubmit {
    default_prevented: bool,
}

impl PostedSubmit {
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl SubmitEvent for PostedSubmit {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

pub type ServerGuard = FormGuard<PostedForm, PostedField, ErrorSlot, LoggedNotice>;

/// Page elements after the guard ran.
pub type ServerElements = BoundElements<PostedForm, PostedField, ErrorSlot>;

impl LoginForm {
    /// Binds a guard to the elements this post describes.
    ///
    /// Returns `None` when the post lacks one of the inputs.
    pub fn bind_guard(&self) -> Option<ServerGuard> {
        FormGuard::bind(
            FormElements {
                form: Some(PostedForm::default()),
                username: self.username.as_deref().map(PostedField::new),
                password: self.password.as_deref().map(PostedField::new),
                error_display: Some(ErrorSlot::default()),
            },
            LoggedNotice,
        )
    }
}

/// Field the guard left focused, if any.
pub fn focused_field(elements: &ServerElements) -> Option<Field> {
    if elements.username.is_focused() {
        Some(Field::Username)
    } else if elements.password.is_focused() {
        Some(Field::Password)
    } else {
        None
    }
}
