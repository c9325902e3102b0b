// Event board
//
// Holds the currently displayed page of events together with the filter and
// pagination that produced it. Every refresh is numbered; only the most
// recently issued refresh may replace the page.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use eventora_domain::{
    sort_newest_first, Event, EventFilter, EventGateway, EventId, EventQuery, Page, Pagination,
};

use crate::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    /// A newer refresh was issued while this one was in flight.
    Superseded,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub events: Vec<Event>,
    pub pagination: Pagination,
    #[serde(skip)]
    pub filter: EventFilter,
}

struct BoardState {
    filter: EventFilter,
    pagination: Pagination,
    events: Vec<Event>,
    // Last page confirmed by the server.
    snapshot: Vec<Event>,
    snapshot_total: u64,
}

impl BoardState {
    fn apply(&mut self, pagination: Pagination, page: Page<Event>) {
        let mut events = self.filter.apply(&page.data);
        sort_newest_first(&mut events);
        self.pagination = pagination;
        self.snapshot = events.clone();
        self.snapshot_total = pagination.total_items();
        self.events = events;
    }

    fn restore_snapshot(&mut self) {
        self.events = self.snapshot.clone();
        self.pagination = self.pagination.with_total(self.snapshot_total);
    }
}

#[derive(Clone)]
pub struct EventBoard {
    gateway: Arc<dyn EventGateway>,
    state: Arc<Mutex<BoardState>>,
    issued: Arc<AtomicU64>,
}

impl EventBoard {
    pub fn new(gateway: Arc<dyn EventGateway>, page_size: u32) -> Self {
        Self {
            gateway,
            state: Arc::new(Mutex::new(BoardState {
                filter: EventFilter::default(),
                pagination: Pagination::new(1, page_size, 0),
                events: Vec::new(),
                snapshot: Vec::new(),
                snapshot_total: 0,
            })),
            issued: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn view(&self) -> BoardView {
        let state = self.state.lock().await;
        BoardView {
            events: state.events.clone(),
            pagination: state.pagination,
            filter: state.filter.clone(),
        }
    }

    pub async fn refresh(&self) -> Result<RefreshOutcome, AppError> {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let query = {
            let state = self.state.lock().await;
            EventQuery::new(
                state.pagination.page(),
                state.pagination.page_size(),
                state.filter.clone(),
            )
        };

        let result = self.fetch(query).await;

        let mut state = self.state.lock().await;
        if self.issued.load(Ordering::SeqCst) != generation {
            debug!("discarding superseded refresh #{}", generation);
            return Ok(RefreshOutcome::Superseded);
        }
        let (pagination, page) = result?;
        state.apply(pagination, page);
        debug!(
            "board refreshed #{}: page {}/{} ({} items)",
            generation,
            pagination.page(),
            pagination.total_pages(),
            pagination.total_items()
        );
        Ok(RefreshOutcome::Applied)
    }

    // Fetches the requested page. When the server reports fewer pages than
    // requested, the last existing page is fetched instead.
    async fn fetch(&self, query: EventQuery) -> Result<(Pagination, Page<Event>), AppError> {
        let page = self.gateway.list_events(&query).await?;
        let pagination = Pagination::new(query.page, query.limit, page.total_items);
        if pagination.page() == query.page {
            return Ok((pagination, page));
        }
        let retry = EventQuery::new(pagination.page(), query.limit, query.filter);
        let page = self.gateway.list_events(&retry).await?;
        let pagination = Pagination::new(retry.page, retry.limit, page.total_items);
        Ok((pagination, page))
    }

    /// Applies `filter` and opens `page` with a single request.
    pub async fn load(&self, filter: EventFilter, page: u32) -> Result<RefreshOutcome, AppError> {
        {
            let mut state = self.state.lock().await;
            state.filter = filter;
            // Total unknown until the server answers; `fetch` clamps the page.
            state.pagination = Pagination::new(page.max(1), state.pagination.page_size(), u64::MAX);
        }
        self.refresh().await
    }

    /// Removes the event from the board before the server confirms.
    ///
    /// If the server rejects the delete, the page is re-fetched; if that
    /// fails too, the last server-confirmed page is put back. The delete
    /// error is returned in both cases.
    pub async fn delete(&self, id: &EventId) -> Result<(), AppError> {
        {
            let mut state = self.state.lock().await;
            let before = state.events.len();
            state.events.retain(|event| &event.id != id);
            if state.events.len() < before {
                let remaining = state.pagination.total_items().saturating_sub(1);
                state.pagination = state.pagination.with_total(remaining);
            }
        }

        match self.gateway.delete_event(id).await {
            Ok(()) => {
                info!("event {} deleted", id);
                {
                    let mut state = self.state.lock().await;
                    let before = state.snapshot.len();
                    state.snapshot.retain(|event| &event.id != id);
                    if state.snapshot.len() < before {
                        state.snapshot_total = state.snapshot_total.saturating_sub(1);
                    }
                }
                if let Err(err) = self.refresh().await {
                    warn!("failed to reload events after delete: {}", err);
                }
                Ok(())
            }
            Err(err) => {
                warn!("failed to delete event {}: {}", id, err);
                if let Err(reload_err) = self.refresh().await {
                    warn!("reload after failed delete also failed: {}", reload_err);
                    self.state.lock().await.restore_snapshot();
                }
                Err(err.into())
            }
        }
    }
}
