use serde::Serialize;
use tracing::info;

use eventora_application::commands::{create_resource, delete_resource, update_resource};
use eventora_application::queries::{get_resource, list_resources, Listing};
use eventora_application::{AppError, Notice, NoticeLevel};
use eventora_domain::{ListQuery, Resource, ResourceGateway};

use crate::commands::{ResourceAction, ResourceCommand, ResourceForm};

use super::{CliContext, Output};

fn capitalized(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// Detail views are structured; JSON is the text form too.
fn detail<R: Serialize>(item: &R) -> Result<String, AppError> {
    let mut out = serde_json::to_string_pretty(item).map_err(anyhow::Error::from)?;
    out.push('\n');
    Ok(out)
}

pub async fn handle_resource<F>(
    ctx: &CliContext<'_>,
    gateway: &dyn ResourceGateway<F::Resource>,
    action: ResourceAction<F>,
    table: fn(&Listing<F::Resource>) -> String,
) -> Result<Output, AppError>
where
    F: ResourceForm,
    F::Resource: Serialize,
{
    let state = ctx.state;
    let label = <F::Resource as Resource>::LABEL;
    match action {
        ResourceAction::Browse(command) => browse(ctx, gateway, command, table).await,
        ResourceAction::Create(form) => {
            let mut draft: <F::Resource as Resource>::Draft = Default::default();
            form.apply(&mut draft);
            let created = create_resource(gateway, draft).await?;
            Ok(Output {
                stdout: detail(&created)?,
                notice: Some(state.success_notice(format!("{} created", capitalized(label)))),
            })
        }
        ResourceAction::Update { id, form } => {
            let current = get_resource(gateway, &id).await?;
            let mut draft = current.to_draft();
            form.apply(&mut draft);
            let updated = update_resource(gateway, current.id(), draft).await?;
            Ok(Output {
                stdout: detail(&updated)?,
                notice: Some(state.success_notice(format!("{} updated", capitalized(label)))),
            })
        }
    }
}

async fn browse<R>(
    ctx: &CliContext<'_>,
    gateway: &dyn ResourceGateway<R>,
    command: ResourceCommand,
    table: fn(&Listing<R>) -> String,
) -> Result<Output, AppError>
where
    R: Resource + Serialize,
{
    let state = ctx.state;
    match command {
        ResourceCommand::List { page, search } => {
            let query = ListQuery::new(page, state.config.page_size, search);
            let listing = list_resources(gateway, query).await?;
            Ok(Output::text(ctx.render(&listing, table)?))
        }
        ResourceCommand::Show { id } => {
            let item = get_resource(gateway, &id).await?;
            Ok(Output::text(detail(&item)?))
        }
        ResourceCommand::Delete { id, yes } => {
            if !yes && !ctx.confirm.confirm(&format!("Delete {} {}?", R::LABEL, id)) {
                info!("delete of {} {} cancelled", R::LABEL, id);
                return Ok(Output::notice(Notice::new(
                    NoticeLevel::Info,
                    "Delete cancelled",
                    state.notice_window(),
                )));
            }
            delete_resource(gateway, &id).await?;
            Ok(Output::notice(
                state.success_notice(format!("{} deleted", capitalized(R::LABEL))),
            ))
        }
    }
}
