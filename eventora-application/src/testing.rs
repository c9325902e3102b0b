// In-memory doubles for the gateway ports, used by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Notify;

use eventora_domain::{
    AuthGateway, Booking, Clock, Credentials, Event, EventCategory, EventDraft, EventGateway,
    EventId, EventQuery, EventStatus, GatewayError, ListQuery, Money, Page, Pagination,
    Registration, Resource, ResourceGateway, RuntimeConfig, Session, TokenStore, User, UserId,
    UserRole, Vendor,
};

use crate::{AppState, SessionContext};

#[derive(Default)]
pub struct MemoryTokenStore {
    session: Mutex<Option<Session>>,
}

impl MemoryTokenStore {
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }

    pub fn snapshot(&self) -> Option<Session> {
        self.session.lock().expect("store lock").clone()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> anyhow::Result<Option<Session>> {
        Ok(self.snapshot())
    }

    async fn save(&self, session: &Session) -> anyhow::Result<()> {
        *self.session.lock().expect("store lock") = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        *self.session.lock().expect("store lock") = None;
        Ok(())
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("date")
}

pub fn sample_user() -> User {
    User {
        id: UserId::from("u-1"),
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        role: UserRole::Admin,
        created_at: None,
    }
}

pub fn sample_event(id: &str, title: &str, base_cents: i64) -> Event {
    Event {
        id: EventId::from(id),
        title: title.to_string(),
        category: EventCategory::Party,
        date: today(),
        time: None,
        location: "Main Hall".to_string(),
        description: None,
        base_price: Money::from_cents(base_cents),
        status: EventStatus::Planning,
        extra_items: Vec::new(),
        image: None,
        owner: None,
        created_at: None,
        updated_at: None,
    }
}

/// Backend double that filters and pages like the real API.
#[derive(Default)]
pub struct FakeEventGateway {
    pub events: Mutex<Vec<Event>>,
    pub fail_list: AtomicBool,
    pub fail_delete: AtomicBool,
    pub list_calls: AtomicUsize,
    pub created: Mutex<Vec<EventDraft>>,
    held_list: Mutex<Option<(Arc<Notify>, Arc<Notify>)>>,
}

impl FakeEventGateway {
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(events),
            ..Self::default()
        }
    }

    /// The next list call signals `entered` and then waits for `release`.
    pub fn hold_next_list(&self) -> (Arc<Notify>, Arc<Notify>) {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        *self.held_list.lock().expect("hold lock") = Some((entered.clone(), release.clone()));
        (entered, release)
    }
}

#[async_trait]
impl EventGateway for FakeEventGateway {
    async fn list_events(&self, query: &EventQuery) -> Result<Page<Event>, GatewayError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let (matching, pagination) = {
            let events = self.events.lock().expect("events lock");
            let matching = query.filter.apply(&events);
            let pagination = Pagination::new(query.page, query.limit, matching.len() as u64);
            (matching, pagination)
        };
        let hold = self.held_list.lock().expect("hold lock").take();
        if let Some((entered, release)) = hold {
            entered.notify_one();
            release.notified().await;
        }
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(GatewayError::Transport("connection refused".to_string()));
        }
        Ok(Page {
            data: matching[pagination.window(matching.len())].to_vec(),
            total_pages: pagination.total_pages(),
            total_items: pagination.total_items(),
        })
    }

    async fn get_event(&self, id: &EventId) -> Result<Event, GatewayError> {
        self.events
            .lock()
            .expect("events lock")
            .iter()
            .find(|event| &event.id == id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(format!("event {id}")))
    }

    async fn create_event(&self, draft: &EventDraft) -> Result<Event, GatewayError> {
        self.created.lock().expect("created lock").push(draft.clone());
        let mut events = self.events.lock().expect("events lock");
        let event = Event {
            id: EventId::from(format!("evt-{}", events.len() + 1)),
            title: draft.title.clone(),
            category: draft.category.unwrap_or(EventCategory::Other),
            date: draft.date.unwrap_or_else(today),
            time: draft.time,
            location: draft.location.clone(),
            description: draft.description.clone(),
            base_price: draft.base_price.unwrap_or(Money::ZERO),
            status: draft.status,
            extra_items: draft.extra_items.clone(),
            image: None,
            owner: None,
            created_at: None,
            updated_at: None,
        };
        events.push(event.clone());
        Ok(event)
    }

    async fn update_event(&self, id: &EventId, draft: &EventDraft) -> Result<Event, GatewayError> {
        let mut events = self.events.lock().expect("events lock");
        let event = events
            .iter_mut()
            .find(|event| &event.id == id)
            .ok_or_else(|| GatewayError::NotFound(format!("event {id}")))?;
        event.title = draft.title.clone();
        event.base_price = draft.base_price.unwrap_or(Money::ZERO);
        event.extra_items = draft.extra_items.clone();
        event.status = draft.status;
        Ok(event.clone())
    }

    async fn delete_event(&self, id: &EventId) -> Result<(), GatewayError> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(GatewayError::Api {
                status: 500,
                message: "delete failed".to_string(),
            });
        }
        let mut events = self.events.lock().expect("events lock");
        let before = events.len();
        events.retain(|event| &event.id != id);
        if events.len() == before {
            return Err(GatewayError::NotFound(format!("event {id}")));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeAuthGateway {
    pub accounts: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl AuthGateway for FakeAuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<Session, GatewayError> {
        let accounts = self.accounts.lock().expect("accounts lock");
        match accounts.get(&credentials.email) {
            Some(password) if password == &credentials.password => Ok(Session {
                token: format!("token-{}", credentials.email),
                user: Some(sample_user()),
            }),
            _ => Err(GatewayError::Unauthorized),
        }
    }

    async fn register(&self, registration: &Registration) -> Result<Session, GatewayError> {
        self.accounts
            .lock()
            .expect("accounts lock")
            .insert(registration.email.clone(), registration.password.clone());
        Ok(Session {
            token: format!("token-{}", registration.email),
            user: Some(User {
                name: registration.name.clone(),
                email: registration.email.clone(),
                ..sample_user()
            }),
        })
    }
}

pub struct FakeResourceGateway<R: Resource> {
    pub items: Mutex<Vec<R>>,
    pub deleted: Mutex<Vec<String>>,
}

impl<R: Resource> FakeResourceGateway<R> {
    pub fn with_items(items: Vec<R>) -> Self {
        Self {
            items: Mutex::new(items),
            deleted: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl<R: Resource> ResourceGateway<R> for FakeResourceGateway<R> {
    async fn list(&self, query: &ListQuery) -> Result<Page<R>, GatewayError> {
        let items = self.items.lock().expect("items lock");
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
            .expect("items lock")
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(format!("{} {id}", R::LABEL)))
    }

    async fn create(&self, _draft: &R::Draft) -> Result<R, GatewayError> {
        Err(GatewayError::Api {
            status: 501,
            message: "not supported by the fake".to_string(),
        })
    }

    async fn update(&self, id: &str, _draft: &R::Draft) -> Result<R, GatewayError> {
        self.get(id).await
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        let mut items = self.items.lock().expect("items lock");
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Err(GatewayError::NotFound(format!("{} {id}", R::LABEL)));
        }
        self.deleted.lock().expect("deleted lock").push(id.to_string());
        Ok(())
    }
}

pub fn runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        api_base_url: "http://127.0.0.1:5000/api".to_string(),
        public_paths: vec!["/auth/login".to_string(), "/auth/register".to_string()],
        request_timeout_seconds: 15,
        page_size: 6,
        stats_page_size: 4,
        notice_seconds: 3,
        upcoming_window_days: 30,
    }
}

pub async fn app_state(events: Arc<FakeEventGateway>) -> AppState {
    let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::default());
    AppState {
        config: runtime_config(),
        events,
        auth: Arc::new(FakeAuthGateway::default()),
        vendors: Arc::new(FakeResourceGateway::<Vendor>::with_items(Vec::new())),
        users: Arc::new(FakeResourceGateway::<User>::with_items(vec![sample_user()])),
        bookings: Arc::new(FakeResourceGateway::<Booking>::with_items(Vec::new())),
        session: SessionContext::restore(store).await,
        clock: Arc::new(FixedClock(today())),
    }
}
