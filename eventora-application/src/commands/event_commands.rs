use tracing::{error, info};

use crate::{AppError, AppState};
use eventora_domain::{Event, EventDraft, EventId, Validate};

/// Validates the draft locally before anything is sent.
pub async fn create_event(state: &AppState, draft: EventDraft) -> Result<Event, AppError> {
    draft.validate()?;
    let event = state.events.create_event(&draft).await.map_err(|err| {
        error!("failed to create event '{}': {}", draft.title, err);
        AppError::from(err)
    })?;
    info!("created event {} ({})", event.id, event.title);
    Ok(event)
}

pub async fn update_event(
    state: &AppState,
    id: &EventId,
    draft: EventDraft,
) -> Result<Event, AppError> {
    draft.validate()?;
    let event = state.events.update_event(id, &draft).await.map_err(|err| {
        error!("failed to update event {}: {}", id, err);
        AppError::from(err)
    })?;
    info!("updated event {}", event.id);
    Ok(event)
}
