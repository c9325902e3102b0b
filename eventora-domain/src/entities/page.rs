// Paged list envelope and list queries

use serde::{Deserialize, Serialize};

use crate::services::EventFilter;
use crate::utils::normalize_optional_text;

pub const DEFAULT_PAGE_SIZE: u32 = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total_pages: u32,
    pub total_items: u64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            total_pages: 1,
            total_items: 0,
        }
    }

    /// Wraps an unpaged list as a single page.
    pub fn single(data: Vec<T>) -> Self {
        let total_items = data.len() as u64;
        Self {
            data,
            total_pages: 1,
            total_items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
}

impl ListQuery {
    pub fn new(page: u32, limit: u32, search: Option<String>) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            search: normalize_optional_text(search),
        }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE, None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    pub page: u32,
    pub limit: u32,
    pub filter: EventFilter,
}

impl EventQuery {
    pub fn new(page: u32, limit: u32, filter: EventFilter) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            filter,
        }
    }
}

impl Default for EventQuery {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE, EventFilter::default())
    }
}
