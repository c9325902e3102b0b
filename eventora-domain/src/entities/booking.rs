// Booking entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{BookingId, BookingStatus, EventId, Money, UserId, VendorId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub event: EventId,
    pub user: UserId,
    pub vendor: Option<VendorId>,
    pub status: BookingStatus,
    pub guests: u32,
    pub booked_at: Option<DateTime<Utc>>,
    pub amount: Option<Money>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingDraft {
    pub event: Option<EventId>,
    pub user: Option<UserId>,
    pub vendor: Option<VendorId>,
    pub status: BookingStatus,
    pub guests: u32,
    pub amount: Option<Money>,
    pub notes: Option<String>,
}
