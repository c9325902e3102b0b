use tracing::{debug, error};

use crate::{AppError, AppState};
use eventora_domain::{compute_stats, Event, EventId, EventQuery, EventStats};

pub async fn get_event(state: &AppState, id: &EventId) -> Result<Event, AppError> {
    let event = state.events.get_event(id).await?;
    Ok(event)
}

/// Walks every backend page, unfiltered, until the reported last page.
pub async fn fetch_all_events(state: &AppState) -> Result<Vec<Event>, AppError> {
    let mut events = Vec::new();
    let mut page = 1;
    loop {
        let query = EventQuery::new(page, state.config.stats_page_size, Default::default());
        let batch = state.events.list_events(&query).await.map_err(|err| {
            error!("failed to fetch events page {}: {}", page, err);
            AppError::from(err)
        })?;
        let last_page = batch.total_pages.max(1);
        let empty = batch.data.is_empty();
        events.extend(batch.data);
        if page >= last_page || empty {
            break;
        }
        page += 1;
    }
    debug!("fetched {} events across {} pages", events.len(), page);
    Ok(events)
}

pub async fn dashboard_stats(state: &AppState) -> Result<EventStats, AppError> {
    let events = fetch_all_events(state).await?;
    Ok(compute_stats(
        &events,
        state.clock.today(),
        state.config.upcoming_window_days,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use chrono::Duration;
    use eventora_domain::{EventStatus, ExtraItem, Money};

    use crate::testing::{app_state, sample_event, today, FakeEventGateway};

    #[tokio::test]
    async fn stats_cover_every_page() {
        let mut events: Vec<Event> = (1..=9)
            .map(|n| sample_event(&format!("e{n}"), "Party", 1_000))
            .collect();
        events[0].date = today() + Duration::days(30);
        events[1].date = today() + Duration::days(31);
        events[2].status = EventStatus::Ongoing;
        events[3].extra_items = vec![ExtraItem::new("Cake", Money::from_cents(2_500), 2)];

        let gateway = Arc::new(FakeEventGateway::with_events(events));
        let state = app_state(gateway.clone()).await;
        let stats = dashboard_stats(&state).await.expect("stats");

        // stats_page_size is 4 in the test config, so nine events take three pages.
        assert_eq!(gateway.list_calls.load(Ordering::SeqCst), 3);
        assert_eq!(stats.total_events, 9);
        assert_eq!(stats.active_events, 1);
        assert_eq!(stats.upcoming_events, 1);
        assert_eq!(stats.total_revenue, Money::from_cents(9 * 1_000 + 5_000));
    }

    #[tokio::test]
    async fn empty_backend_gives_zero_stats() {
        let state = app_state(Arc::new(FakeEventGateway::default())).await;
        let stats = dashboard_stats(&state).await.expect("stats");
        assert_eq!(stats.total_events, 0);
        assert_eq!(stats.total_revenue, Money::ZERO);
    }

    #[tokio::test]
    async fn missing_event_is_not_found() {
        let state = app_state(Arc::new(FakeEventGateway::default())).await;
        let err = get_event(&state, &EventId::from("nope")).await.expect_err("missing");
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
