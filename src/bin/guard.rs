//! Terminal host for the login form guard.
//!
//! Runs the same guard the web page uses, with the terminal standing in for
//! the browser: prompts are the text fields, a red line is the error
//! display, and a successful submission goes straight to the login service.
//!
//! # Usage
//!
//! ```bash
//! # One submission from arguments (exit code 1 when blocked)
//! cargo run --bin guard -- check --username alice --password secret
//!
//! # Interactive form, re-prompting until the submission passes
//! cargo run --bin guard -- prompt
//! ```

use login_guard::application::services::{LoginService, LoginSuccess};
use login_guard::domain::elements::{
    Acknowledger, ErrorDisplay, Field, FormElements, FormTarget, SubmitEvent, TextField,
};
use login_guard::domain::guard::{FormEvents, FormGuard, SubmitOutcome};
use login_guard::domain::validation::ValidationFailure;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};

/// Login form in the terminal.
#[derive(Parser)]
#[command(name = "guard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit the form once with the given values
    Check {
        #[arg(short, long, default_value = "")]
        username: String,

        #[arg(short, long, default_value = "")]
        password: String,
    },

    /// Fill in the form interactively
    Prompt,
}

/// A prompt-backed text input.
struct PromptField {
    label: &'static str,
    value: String,
}

impl PromptField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }

    fn set(&mut self, value: String) {
        self.value = value;
    }
}

impl TextField for PromptField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn focus(&mut self) {
        println!("  {} {}", "→".bright_cyan(), self.label.bright_white());
    }
}

/// Red status line under the form.
#[derive(Default)]
struct ErrorLine {
    text: String,
}

impl ErrorDisplay for ErrorLine {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_error_marker(&mut self, on: bool) {
        if on && !self.text.is_empty() {
            eprintln!("{}", format!("❌ {}", self.text).red().bold());
        }
    }
}

#[derive(Default)]
struct PendingSubmit {
    submitted: bool,
}

impl FormTarget for PendingSubmit {
    fn submit(&mut self) {
        self.submitted = true;
    }
}

struct StdoutNotice;

impl Acknowledger for StdoutNotice {
    fn acknowledge(&mut self, message: &str) {
        println!("{}", message.green());
    }
}

/// Pressing Enter on the last prompt; the terminal has no default action.
struct EnterPressed;

impl SubmitEvent for EnterPressed {
    fn prevent_default(&mut self) {}
}

type TerminalGuard = FormGuard<PendingSubmit, PromptField, ErrorLine, StdoutNotice>;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let service = LoginService::new();

    match cli.command {
        Commands::Check { username, password } => {
            let mut guard = bind(&username, &password)?;
            match guard.on_submit_attempted(&mut EnterPressed) {
                SubmitOutcome::Blocked(_) => std::process::exit(1),
                SubmitOutcome::Submitted(credentials) => {
                    print_success(&service.accept(credentials));
                }
            }
        }
        Commands::Prompt => {
            let mut guard = bind("", "")?;
            let success = prompt_until_submitted(&mut guard, &service)?;
            print_success(&success);
        }
    }

    Ok(())
}

fn bind(username: &str, password: &str) -> Result<TerminalGuard> {
    FormGuard::bind(
        FormElements::complete(
            PendingSubmit::default(),
            PromptField::new("Username", username),
            PromptField::new("Password", password),
            ErrorLine::default(),
        ),
        StdoutNotice,
    )
    .context("Login form is incomplete")
}

/// Prompts for the fields, re-asking only for the ones left blank.
fn prompt_until_submitted(
    guard: &mut TerminalGuard,
    service: &LoginService,
) -> Result<LoginSuccess> {
    println!("{}", "🔐 Login".bright_blue().bold());
    println!();

    let mut pending = ValidationFailure::MissingBoth.missing_fields();

    loop {
        for &field in pending {
            let value = read_field(field)?;
            guard.field_mut(field).set(value);
            guard.on_input_changed(field);
        }

        match guard.on_submit_attempted(&mut EnterPressed) {
            SubmitOutcome::Blocked(failure) => pending = failure.missing_fields(),
            SubmitOutcome::Submitted(credentials) => return Ok(service.accept(credentials)),
        }
    }
}

fn read_field(field: Field) -> Result<String> {
    let value = match field {
        Field::Username => Input::<String>::new()
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()?,
        Field::Password => Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?,
    };
    Ok(value)
}

fn print_success(success: &LoginSuccess) {
    println!();
    println!("{}", format!("✅ {}", success.message).green().bold());
}
