// Event search and filtering
//
// All active criteria are ANDed. Filtering keeps input order; sorting is a
// separate stage applied afterwards.

use std::cmp::Reverse;

use crate::entities::Event;
use crate::utils::{contains_ignore_case, normalize_optional_text};
use crate::value_objects::{EventCategory, EventStatus};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventFilter {
    pub search: Option<String>,
    pub category: Option<EventCategory>,
    pub status: Option<EventStatus>,
}

impl EventFilter {
    pub fn new(
        search: Option<String>,
        category: Option<EventCategory>,
        status: Option<EventStatus>,
    ) -> Self {
        Self {
            search: normalize_optional_text(search),
            category,
            status,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search_term().is_none() && self.category.is_none() && self.status.is_none()
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.matches_term(event, self.search_term().as_deref())
    }

    fn matches_term(&self, event: &Event, term: Option<&str>) -> bool {
        if let Some(category) = self.category {
            if event.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if event.status != status {
                return false;
            }
        }
        match term {
            None => true,
            Some(term) => {
                contains_ignore_case(&event.title, term)
                    || contains_ignore_case(&event.location, term)
                    || event
                        .description
                        .as_deref()
                        .map(|description| contains_ignore_case(description, term))
                        .unwrap_or(false)
            }
        }
    }

    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        let term = self.search_term();
        events
            .iter()
            .filter(|event| self.matches_term(event, term.as_deref()))
            .cloned()
            .collect()
    }
}

/// Newest first by creation time; events without a timestamp go last.
/// The sort is stable, so ties keep their filtered order.
pub fn sort_newest_first(events: &mut [Event]) {
    events.sort_by_key(|event| Reverse(event.created_at));
}
