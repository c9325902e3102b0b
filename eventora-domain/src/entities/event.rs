// Event entity
// An event managed from the dashboard together with its priced extras.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::pricing;
use crate::value_objects::{EventCategory, EventId, EventStatus, Money, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub category: EventCategory,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub location: String,
    pub description: Option<String>,
    pub base_price: Money,
    pub status: EventStatus,
    pub extra_items: Vec<ExtraItem>,
    pub image: Option<String>,
    pub owner: Option<UserId>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Base price plus every extra line; recomputed on each call.
    pub fn total(&self) -> Money {
        pricing::derived_total(Some(self.base_price), &self.extra_items)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraItem {
    pub name: String,
    pub unit_price: Option<Money>,
    pub quantity: Option<u32>,
}

impl ExtraItem {
    pub fn new(name: impl Into<String>, unit_price: Money, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price: Some(unit_price),
            quantity: Some(quantity),
        }
    }

    pub fn line_total(&self) -> Money {
        pricing::line_total(self)
    }
}

/// Form input for creating or editing an event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventDraft {
    pub title: String,
    pub category: Option<EventCategory>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location: String,
    pub description: Option<String>,
    pub base_price: Option<Money>,
    pub status: EventStatus,
    pub extra_items: Vec<ExtraItem>,
    pub image_path: Option<PathBuf>,
}

impl EventDraft {
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            category: Some(event.category),
            date: Some(event.date),
            time: event.time,
            location: event.location.clone(),
            description: event.description.clone(),
            base_price: Some(event.base_price),
            status: event.status,
            extra_items: event.extra_items.clone(),
            image_path: None,
        }
    }

    pub fn total(&self) -> Money {
        pricing::derived_total(self.base_price, &self.extra_items)
    }
}
