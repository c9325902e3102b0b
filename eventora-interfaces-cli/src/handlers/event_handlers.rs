use tracing::info;

use eventora_application::commands::{create_event, update_event};
use eventora_application::queries::{dashboard_stats, get_event};
use eventora_application::{AppError, EventBoard, Notice, NoticeLevel};
use eventora_domain::{EventDraft, EventFilter, EventId};

use crate::commands::{EventFormArgs, EventsCommand, ListEventsArgs};
use crate::render;

use super::{CliContext, Output};

pub async fn handle_events(ctx: &CliContext<'_>, command: EventsCommand) -> Result<Output, AppError> {
    let state = ctx.state;
    match command {
        EventsCommand::List(args) => list_events(ctx, args).await,
        EventsCommand::Show { id } => {
            let event = get_event(state, &EventId::from(id)).await?;
            Ok(Output::text(ctx.render(&event, render::event_detail)?))
        }
        EventsCommand::Stats => {
            let stats = dashboard_stats(state).await?;
            Ok(Output::text(ctx.render(&stats, render::stats)?))
        }
        EventsCommand::Create(form) => {
            let draft = apply_form(EventDraft::default(), form, false);
            let event = create_event(state, draft).await?;
            Ok(Output {
                stdout: ctx.render(&event, render::event_detail)?,
                notice: Some(state.success_notice("Event created")),
            })
        }
        EventsCommand::Update {
            id,
            form,
            clear_extras,
        } => {
            let id = EventId::from(id);
            let current = get_event(state, &id).await?;
            let draft = apply_form(EventDraft::from_event(&current), form, clear_extras);
            let event = update_event(state, &id, draft).await?;
            Ok(Output {
                stdout: ctx.render(&event, render::event_detail)?,
                notice: Some(state.success_notice("Event updated")),
            })
        }
        EventsCommand::Delete { id, yes, view } => {
            let id = EventId::from(id.trim());
            if !yes && !ctx.confirm.confirm(&format!("Delete event {}?", id)) {
                info!("delete of event {} cancelled", id);
                return Ok(Output::notice(Notice::new(
                    NoticeLevel::Info,
                    "Delete cancelled",
                    state.notice_window(),
                )));
            }
            let board = open_board(ctx, view).await?;
            board.delete(&id).await?;
            let view = board.view().await;
            Ok(Output {
                stdout: ctx.render(&view, render::event_table)?,
                notice: Some(state.success_notice("Event deleted")),
            })
        }
    }
}

async fn open_board(ctx: &CliContext<'_>, args: ListEventsArgs) -> Result<EventBoard, AppError> {
    let board = EventBoard::new(ctx.state.events.clone(), ctx.state.config.page_size);
    let filter = EventFilter::new(args.search, args.category, args.status);
    board.load(filter, args.page).await?;
    Ok(board)
}

async fn list_events(ctx: &CliContext<'_>, args: ListEventsArgs) -> Result<Output, AppError> {
    let board = open_board(ctx, args).await?;
    let view = board.view().await;
    Ok(Output::text(ctx.render(&view, render::event_table)?))
}

/// Overlays the provided flags on a draft. Extras are appended unless
/// `clear_extras` drops the existing ones first.
pub fn apply_form(mut draft: EventDraft, form: EventFormArgs, clear_extras: bool) -> EventDraft {
    if let Some(title) = form.title {
        draft.title = title;
    }
    if form.category.is_some() {
        draft.category = form.category;
    }
    if form.date.is_some() {
        draft.date = form.date;
    }
    if form.time.is_some() {
        draft.time = form.time;
    }
    if let Some(location) = form.location {
        draft.location = location;
    }
    if form.description.is_some() {
        draft.description = form.description;
    }
    if form.base_price.is_some() {
        draft.base_price = form.base_price;
    }
    if let Some(status) = form.status {
        draft.status = status;
    }
    if clear_extras {
        draft.extra_items.clear();
    }
    draft.extra_items.extend(form.extras);
    if form.image.is_some() {
        draft.image_path = form.image;
    }
    draft
}
