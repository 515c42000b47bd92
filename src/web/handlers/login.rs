//! Login page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::elements::{ERROR_CLASS, Field, TextField};
use crate::domain::guard::{FormEvents, SubmitOutcome};
use crate::state::AppState;
use crate::web::form::{LoginForm, PostedSubmit, ServerElements, focused_field};

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - `loginForm` posting to `/login`
/// - `username` / `password` inputs
/// - `errorMsg` holding the current validation message
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub username: String,
    pub error_message: String,
    pub error_class: &'static str,
    pub autofocus_username: bool,
    pub autofocus_password: bool,
}

impl LoginTemplate {
    /// Fresh page: no error, focus on the username.
    pub fn blank() -> Self {
        Self {
            username: String::new(),
            error_message: String::new(),
            error_class: "",
            autofocus_username: true,
            autofocus_password: false,
        }
    }

    /// Page re-rendered from what the guard left on the elements.
    ///
    /// The password is never echoed back.
    pub fn from_elements(elements: &ServerElements) -> Self {
        let focus = focused_field(elements);

        Self {
            username: elements.username.value(),
            error_message: elements.error_display.text.clone(),
            error_class: if elements.error_display.marked {
                ERROR_CLASS
            } else {
                ""
            },
            autofocus_username: focus == Some(Field::Username),
            autofocus_password: focus == Some(Field::Password),
        }
    }
}

/// Renders the login page.
///
/// # Endpoints
///
/// `GET /`, `GET /login`
pub async fn login_page_handler() -> impl IntoResponse {
    LoginTemplate::blank()
}

/// Receives the login form.
///
/// # Endpoint
///
/// `POST /login` (`application/x-www-form-urlencoded`)
///
/// # Flow
///
/// 1. Bind a [`crate::domain::guard::FormGuard`] to the posted elements
/// 2. Replay the submit event through the guard
/// 3. Blocked: re-render the page with the message, `400 Bad Request`
/// 4. Submitted: forward to [`crate::application::services::LoginService`],
///    `200 OK` with a plain-text welcome
///
/// A post missing one of the inputs leaves the guard inert. The submission
/// then goes to the service unchecked, which treats the absent input as
/// empty and answers `400` with a JSON error body.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Response {
    let Some(mut guard) = form.bind_guard() else {
        tracing::debug!("Login post without both inputs, skipping form guard");
        let username = form.username.as_deref().unwrap_or_default();
        let password = form.password.as_deref().unwrap_or_default();
        return match state.login_service.login(username, password) {
            Ok(success) => success.message.into_response(),
            Err(err) => err.into_response(),
        };
    };

    let outcome = guard.on_submit_attempted(&mut PostedSubmit::default());
    let (elements, _) = guard.into_parts();

    match outcome {
        SubmitOutcome::Blocked(_) => (
            StatusCode::BAD_REQUEST,
            LoginTemplate::from_elements(&elements),
        )
            .into_response(),
        SubmitOutcome::Submitted(credentials) => {
            let success = state.login_service.accept(credentials);
            success.message.into_response()
        }
    }
}
