use eventora_application::commands::{login, logout, register};
use eventora_application::queries::whoami;
use eventora_application::AppError;

use crate::commands::AuthCommand;
use crate::render;

use super::{CliContext, Output};

pub async fn handle_auth(ctx: &CliContext<'_>, command: AuthCommand) -> Result<Output, AppError> {
    let state = ctx.state;
    match command {
        AuthCommand::Login { email, password } => {
            let session = login(state, email, password).await?;
            let name = session
                .user
                .map(|user| user.name)
                .unwrap_or_else(|| "admin".to_string());
            Ok(Output::notice(state.success_notice(format!("Welcome back, {}", name))))
        }
        AuthCommand::Register {
            name,
            email,
            password,
        } => {
            register(state, name, email, password).await?;
            Ok(Output::notice(state.success_notice("Account created")))
        }
        AuthCommand::Logout => {
            logout(state).await?;
            Ok(Output::notice(state.success_notice("Signed out")))
        }
        AuthCommand::Whoami => {
            let who = whoami(state).await;
            Ok(Output::text(ctx.render(&who, render::whoami)?))
        }
    }
}
