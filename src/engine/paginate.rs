//! Paginator.

use serde::Serialize;

/// Fixed number of records shown per page.
pub const PAGE_SIZE: usize = 20;

/// One page of a filtered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }
}

/// Number of pages needed for `len` items.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Slice out page `current_page` (1-based).
///
/// A page past the end yields no items rather than an error; the page number
/// itself is passed through untouched.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, current_page: usize) -> Page<T> {
    let total_pages = total_pages(items.len(), page_size);

    let visible = if page_size == 0 || current_page == 0 {
        Vec::new()
    } else {
        let start = (current_page - 1).saturating_mul(page_size);
        let end = start.saturating_add(page_size).min(items.len());
        items.get(start..end).map(<[T]>::to_vec).unwrap_or_default()
    };

    Page {
        items: visible,
        current_page,
        total_pages,
        total_items: items.len(),
    }
}
