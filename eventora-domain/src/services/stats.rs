// Dashboard stats
//
// Always computed from the complete, unfiltered event collection, never from
// the page currently on screen.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::entities::Event;
use crate::value_objects::{EventStatus, Money};

pub const DEFAULT_UPCOMING_WINDOW_DAYS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStats {
    pub total_events: usize,
    pub active_events: usize,
    pub upcoming_events: usize,
    pub total_revenue: Money,
}

/// Upcoming means `today < date <= today + window_days`.
pub fn compute_stats(events: &[Event], today: NaiveDate, window_days: u32) -> EventStats {
    // A window past the calendar's end has no upper bound.
    let horizon = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);
    EventStats {
        total_events: events.len(),
        active_events: events
            .iter()
            .filter(|event| event.status == EventStatus::Ongoing)
            .count(),
        upcoming_events: events
            .iter()
            .filter(|event| event.date > today && event.date <= horizon)
            .count(),
        total_revenue: events.iter().map(Event::total).sum(),
    }
}
