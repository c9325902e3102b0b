// Pagination coordinator
//
// Pages are 1-based. Out-of-range page requests are clamped, never rejected.

use std::ops::Range;

use serde::Serialize;

pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    let size = u64::from(page_size.max(1));
    let pages = total_items.div_ceil(size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    page: u32,
    page_size: u32,
    total_items: u64,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32, total_items: u64) -> Self {
        let page_size = page_size.max(1);
        let last = total_pages(total_items, page_size);
        Self {
            page: page.clamp(1, last),
            page_size,
            total_items,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_items, self.page_size)
    }

    /// Zero-based index of the first item on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.page - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }

    /// Moves to `page`, clamped into the valid range.
    pub fn go_to(&self, page: u32) -> Self {
        Self::new(page, self.page_size, self.total_items)
    }

    pub fn with_total(&self, total_items: u64) -> Self {
        Self::new(self.page, self.page_size, total_items)
    }

    /// Shown as `start–end of total`, with the end clamped to the total.
    pub fn range_label(&self) -> String {
        if self.total_items == 0 {
            return "0–0 of 0".to_string();
        }
        let start = self.offset() + 1;
        let end = (self.offset() + u64::from(self.page_size)).min(self.total_items);
        format!("{}–{} of {}", start, end, self.total_items)
    }

    /// Slice bounds for this page over an in-memory list of `len` items.
    pub fn window(&self, len: usize) -> Range<usize> {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(len);
        let end = start.saturating_add(self.page_size as usize).min(len);
        start..end
    }
}
