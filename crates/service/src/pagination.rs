//! Pagination utilities for service layer
//!
//! Provides the `Page` result shape plus a `Pagination` struct that
//! normalizes transport inputs to the zero-based repository index.

use serde::Serialize;

/// One bounded, ordered slice of a collection plus paging metadata.
#[derive(Clone, Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 0-based page index this slice was cut from
    pub page: u64,
    /// requested slice size; `items.len() <= per_page`
    pub per_page: u64,
    /// total records in storage, not just in this slice
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Convert the item type while keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Pagination parameters
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    /// Clamp to sane defaults and convert to `u64`
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, 100);
        ((page - 1) as u64, per_page as u64)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 20 } }
}
