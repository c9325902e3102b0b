// Command handlers
//
// Handlers call application commands and queries and turn the result into
// text for stdout plus an optional notice for stderr. Failures carry the
// error notice alongside the exit code.

pub mod auth_handlers;
pub mod event_handlers;
pub mod resource_handlers;

pub use auth_handlers::*;
pub use event_handlers::*;
pub use resource_handlers::*;

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::{debug, warn};

use eventora_application::{AppError, AppState, Notice};

use crate::commands::Command;
use crate::error::CliError;

/// Asks the operator to confirm a destructive action.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let mut stderr = io::stderr();
        let _ = write!(stderr, "{} [y/N] ", prompt);
        let _ = stderr.flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

pub struct CliContext<'a> {
    pub state: &'a AppState,
    pub json: bool,
    pub confirm: &'a dyn Confirm,
}

impl CliContext<'_> {
    pub(crate) fn render<T: Serialize>(&self, value: &T, text: impl FnOnce(&T) -> String) -> Result<String, AppError> {
        if self.json {
            let mut out = serde_json::to_string_pretty(value).map_err(anyhow::Error::from)?;
            out.push('\n');
            Ok(out)
        } else {
            Ok(text(value))
        }
    }
}

#[derive(Debug, Default)]
pub struct Output {
    pub stdout: String,
    pub notice: Option<Notice>,
}

impl Output {
    pub fn text(stdout: String) -> Self {
        Self {
            stdout,
            notice: None,
        }
    }

    pub fn notice(notice: Notice) -> Self {
        Self {
            stdout: String::new(),
            notice: Some(notice),
        }
    }
}

#[derive(Debug)]
pub struct Failure {
    pub notice: Notice,
    pub error: CliError,
}

pub async fn dispatch(ctx: &CliContext<'_>, command: Command) -> Result<Output, Failure> {
    let result = match command {
        Command::Auth(command) => handle_auth(ctx, command).await,
        Command::Events(command) => handle_events(ctx, command).await,
        Command::Vendors(command) => {
            handle_resource(ctx, ctx.state.vendors.as_ref(), command.into(), crate::render::vendor_table)
                .await
        }
        Command::Users(command) => {
            handle_resource(ctx, ctx.state.users.as_ref(), command.into(), crate::render::user_table).await
        }
        Command::Bookings(command) => {
            handle_resource(ctx, ctx.state.bookings.as_ref(), command.into(), crate::render::booking_table)
                .await
        }
    };
    result.map_err(|err| {
        match &err {
            // Input mistakes are already shown to the operator as a notice.
            AppError::Validation(_) | AppError::BadRequest(_) => debug!("command rejected: {}", err),
            _ => warn!("command failed: {}", err),
        }
        Failure {
            notice: ctx.state.error_notice(&err),
            error: CliError::from(err),
        }
    })
}

#[cfg(test)]
pub(crate) mod test_support;
