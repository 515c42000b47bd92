//! Collaborator contracts the form guard is bound to.
//!
//! A host UI layer (the HTML page renderer, the terminal prompt, a test)
//! provides one implementation per element. The guard never looks elements
//! up itself; it receives them through [`FormElements`].

/// CSS class applied to the error display while a message is shown.
pub const ERROR_CLASS: &str = "error";

/// The two text inputs of a login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Password,
}

impl Field {
    /// Stable element identifier used by the HTML page.
    pub fn id(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Password => "password",
        }
    }
}

/// The form container itself.
#[cfg_attr(test, mockall::automock)]
pub trait FormTarget {
    /// Submits the form to its configured destination.
    fn submit(&mut self);
}

/// A single-line text input.
#[cfg_attr(test, mockall::automock)]
pub trait TextField {
    /// Current raw value, untrimmed.
    fn value(&self) -> String;

    /// Moves input focus to this field.
    fn focus(&mut self);
}

/// Inline element that shows the current validation message.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorDisplay {
    fn set_text(&mut self, text: &str);

    /// Applies or removes the [`ERROR_CLASS`] marker.
    fn set_error_marker(&mut self, on: bool);
}

/// Blocking, user-facing notice shown before a successful submission.
#[cfg_attr(test, mockall::automock)]
pub trait Acknowledger {
    fn acknowledge(&mut self, message: &str);
}

/// The submit event delivered by the host.
#[cfg_attr(test, mockall::automock)]
pub trait SubmitEvent {
    /// Stops the host's own submission so validation runs first.
    fn prevent_default(&mut self);
}

/// The four elements a guard needs, each possibly missing.
///
/// Hosts fill in whatever they managed to locate; [`FormGuard::bind`]
/// decides whether that is enough.
///
/// [`FormGuard::bind`]: crate::domain::guard::FormGuard::bind
#[derive(Debug)]
pub struct FormElements<F, T, D> {
    pub form: Option<F>,
    pub username: Option<T>,
    pub password: Option<T>,
    pub error_display: Option<D>,
}

impl<F, T, D> FormElements<F, T, D> {
    /// Elements for a host that always has all four available.
    pub fn complete(form: F, username: T, password: T, error_display: D) -> Self {
        Self {
            form: Some(form),
            username: Some(username),
            password: Some(password),
            error_display: Some(error_display),
        }
    }
}

/// Elements handed back by [`FormGuard::into_parts`], all present.
///
/// [`FormGuard::into_parts`]: crate::domain::guard::FormGuard::into_parts
#[derive(Debug)]
pub struct BoundElements<F, T, D> {
    pub form: F,
    pub username: T,
    pub password: T,
    pub error_display: D,
}
