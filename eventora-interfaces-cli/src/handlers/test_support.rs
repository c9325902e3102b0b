// In-memory ports for handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use eventora_application::{AppState, SessionContext};
use eventora_domain::{
    AuthGateway, Booking, Clock, Credentials, Event, EventDraft, EventGateway, EventId,
    EventQuery, GatewayError, ListQuery, Page, Pagination, Registration, Resource,
    ResourceGateway, RuntimeConfig, Session, TokenStore, User, Vendor,
};

use super::Confirm;

pub struct Answer(pub bool);

impl Confirm for Answer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

#[derive(Default)]
pub struct Events {
    pub items: Mutex<Vec<Event>>,
    pub deletes: Mutex<Vec<String>>,
    pub reject_delete: Mutex<bool>,
    pub last_draft: Mutex<Option<EventDraft>>,
}

#[async_trait]
impl EventGateway for Events {
    async fn list_events(&self, query: &EventQuery) -> Result<Page<Event>, GatewayError> {
        let items = query.filter.apply(&self.items.lock().expect("items"));
        let pagination = Pagination::new(query.page, query.limit, items.len() as u64);
        Ok(Page {
            data: items[pagination.window(items.len())].to_vec(),
            total_pages: pagination.total_pages(),
            total_items: pagination.total_items(),
        })
    }

    async fn get_event(&self, id: &EventId) -> Result<Event, GatewayError> {
        self.items
            .lock()
            .expect("items")
            .iter()
            .find(|event| &event.id == id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(format!("event {id}")))
    }

    async fn create_event(&self, draft: &EventDraft) -> Result<Event, GatewayError> {
        *self.last_draft.lock().expect("draft") = Some(draft.clone());
        Err(GatewayError::Api {
            status: 500,
            message: "read-only test backend".to_string(),
        })
    }

    async fn update_event(&self, id: &EventId, draft: &EventDraft) -> Result<Event, GatewayError> {
        *self.last_draft.lock().expect("draft") = Some(draft.clone());
        let mut event = self.get_event(id).await?;
        event.title = draft.title.clone();
        event.extra_items = draft.extra_items.clone();
        Ok(event)
    }

    async fn delete_event(&self, id: &EventId) -> Result<(), GatewayError> {
        self.deletes.lock().expect("deletes").push(id.to_string());
        if *self.reject_delete.lock().expect("reject") {
            return Err(GatewayError::Api {
                status: 409,
                message: "event has bookings".to_string(),
            });
        }
        self.items.lock().expect("items").retain(|event| &event.id != id);
        Ok(())
    }
}

pub struct NoAuth;

#[async_trait]
impl AuthGateway for NoAuth {
    async fn login(&self, _credentials: &Credentials) -> Result<Session, GatewayError> {
        Err(GatewayError::Unauthorized)
    }

    async fn register(&self, _registration: &Registration) -> Result<Session, GatewayError> {
        Err(GatewayError::Unauthorized)
    }
}

/// Records every draft sent, keyed by the id of the update (none for create).
pub struct Collection<R: Resource> {
    pub items: Mutex<Vec<R>>,
    pub drafts: Mutex<Vec<(Option<String>, R::Draft)>>,
}

pub fn collection<R: Resource>(items: Vec<R>) -> Arc<Collection<R>> {
    Arc::new(Collection {
        items: Mutex::new(items),
        drafts: Mutex::new(Vec::new()),
    })
}

#[async_trait]
impl<R> ResourceGateway<R> for Collection<R>
where
    R: Resource,
    R::Draft: Clone,
{
    async fn list(&self, query: &ListQuery) -> Result<Page<R>, GatewayError> {
        let items = self.items.lock().expect("items").clone();
        let pagination = Pagination::new(query.page, query.limit, items.len() as u64);
        Ok(Page {
            data: items[pagination.window(items.len())].to_vec(),
            total_pages: pagination.total_pages(),
            total_items: pagination.total_items(),
        })
    }

    async fn get(&self, id: &str) -> Result<R, GatewayError> {
        self.items
            .lock()
            .expect("items")
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))
    }

    async fn create(&self, draft: &R::Draft) -> Result<R, GatewayError> {
        self.drafts.lock().expect("drafts").push((None, draft.clone()));
        Err(GatewayError::Api {
            status: 500,
            message: "read-only test backend".to_string(),
        })
    }

    async fn update(&self, id: &str, draft: &R::Draft) -> Result<R, GatewayError> {
        self.drafts
            .lock()
            .expect("drafts")
            .push((Some(id.to_string()), draft.clone()));
        self.get(id).await
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        self.items.lock().expect("items").retain(|item| item.id() != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct NoSession;

#[async_trait]
impl TokenStore for NoSession {
    async fn load(&self) -> anyhow::Result<Option<Session>> {
        Ok(None)
    }

    async fn save(&self, _session: &Session) -> anyhow::Result<()> {
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

pub struct Today;

impl Clock for Today {
    fn today(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).expect("date")
    }
}

pub async fn state(events: Arc<Events>, vendors: Vec<Vendor>) -> AppState {
    state_with_vendors(events, collection(vendors)).await
}

pub async fn state_with_vendors(events: Arc<Events>, vendors: Arc<Collection<Vendor>>) -> AppState {
    AppState {
        config: RuntimeConfig {
            api_base_url: "http://127.0.0.1:5000/api".to_string(),
            public_paths: vec!["/auth/login".to_string()],
            request_timeout_seconds: 5,
            page_size: 6,
            stats_page_size: 100,
            notice_seconds: 3,
            upcoming_window_days: 30,
        },
        events,
        auth: Arc::new(NoAuth),
        vendors,
        users: collection::<User>(Vec::new()),
        bookings: collection::<Booking>(Vec::new()),
        session: SessionContext::restore(Arc::new(NoSession)).await,
        clock: Arc::new(Today),
    }
}
