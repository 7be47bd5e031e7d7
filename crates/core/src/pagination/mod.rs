//! Server-side page envelopes and client-side page slicing.

use serde::{Deserialize, Serialize};

/// One page of a paginated API collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default = "first_page")]
    pub pages: u32,
}

fn first_page() -> u32 {
    1
}

/// A single page cut out of an already-filtered list.
#[derive(Debug, PartialEq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    /// 1-based page actually returned (after clamping).
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// An owned page, ready to hand to presentation code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> PageSlice<'_, T> {
    /// Copies the slice into an owned [`Page`], converting each item.
    pub fn to_page<U>(&self, convert: impl FnMut(&T) -> U) -> Page<U> {
        Page {
            items: self.items.iter().map(convert).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Number of pages needed for `total_items`; an empty list still has one page.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total_items.div_ceil(page_size).max(1)
}

/// Returns page `page` (1-based) of `items`.
///
/// Pages below 1 are treated as 1 and pages past the end are clamped to the
/// last page, so the result is never out of range.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> PageSlice<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());

    PageSlice {
        items: &items[start.min(end)..end],
        page,
        page_size,
        total_items: items.len(),
        total_pages,
    }
}
