use async_trait::async_trait;

use crate::entities::{
    Booking, BookingDraft, Credentials, Event, EventDraft, EventQuery, ListQuery, Page, Registration,
    Session, User, UserDraft, Vendor, VendorDraft,
};
use crate::error::GatewayError;
use crate::services::Validate;
use crate::value_objects::EventId;

#[async_trait]
pub trait EventGateway: Send + Sync {
    async fn list_events(&self, query: &EventQuery) -> Result<Page<Event>, GatewayError>;
    async fn get_event(&self, id: &EventId) -> Result<Event, GatewayError>;
    async fn create_event(&self, draft: &EventDraft) -> Result<Event, GatewayError>;
    async fn update_event(&self, id: &EventId, draft: &EventDraft) -> Result<Event, GatewayError>;
    async fn delete_event(&self, id: &EventId) -> Result<(), GatewayError>;
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<Session, GatewayError>;
    async fn register(&self, registration: &Registration) -> Result<Session, GatewayError>;
}

/// A plain CRUD collection exposed by the backend under `/{COLLECTION}`.
pub trait Resource: Clone + Send + Sync + 'static {
    type Draft: Validate + Default + Send + Sync;
    const COLLECTION: &'static str;
    const LABEL: &'static str;

    fn id(&self) -> &str;

    /// Form state for editing this record in place.
    fn to_draft(&self) -> Self::Draft;
}

impl Resource for Vendor {
    type Draft = VendorDraft;
    const COLLECTION: &'static str = "vendors";
    const LABEL: &'static str = "vendor";

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn to_draft(&self) -> VendorDraft {
        VendorDraft {
            name: self.name.clone(),
            service_type: self.service_type.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
            starting_price: self.starting_price,
            description: self.description.clone(),
        }
    }
}

impl Resource for User {
    type Draft = UserDraft;
    const COLLECTION: &'static str = "users";
    const LABEL: &'static str = "user";

    fn id(&self) -> &str {
        self.id.as_str()
    }

    // The password is never read back; an edit only sends one when given.
    fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            password: None,
        }
    }
}

impl Resource for Booking {
    type Draft = BookingDraft;
    const COLLECTION: &'static str = "bookings";
    const LABEL: &'static str = "booking";

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn to_draft(&self) -> BookingDraft {
        BookingDraft {
            event: Some(self.event.clone()),
            user: Some(self.user.clone()),
            vendor: self.vendor.clone(),
            status: self.status,
            guests: self.guests,
            amount: self.amount,
            notes: self.notes.clone(),
        }
    }
}

#[async_trait]
pub trait ResourceGateway<R: Resource>: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<Page<R>, GatewayError>;
    async fn get(&self, id: &str) -> Result<R, GatewayError>;
    async fn create(&self, draft: &R::Draft) -> Result<R, GatewayError>;
    async fn update(&self, id: &str, draft: &R::Draft) -> Result<R, GatewayError>;
    async fn delete(&self, id: &str) -> Result<(), GatewayError>;
}
