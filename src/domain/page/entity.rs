use serde::{Deserialize, Serialize};

/// Items returned per page unless the caller overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A 1-based page request.
///
/// Page numbers below 1 are clamped to 1 before the offset is computed,
/// so a request can never produce a negative offset. This is the single
/// policy for out-of-range page numbers; pages past the end are not an
/// error either, they yield an empty slice. The size is clamped to a
/// minimum of 1 the same way: a zero-size page would report a next page
/// forever without ever yielding an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: u32, size: usize) -> Self {
        let clamped_page = page.max(1);
        if clamped_page != page {
            log::warn!("page number {} clamped to 1", page);
        }
        let clamped_size = size.max(1);
        if clamped_size != size {
            log::warn!("page size 0 clamped to 1");
        }
        Self {
            page: clamped_page,
            size: clamped_size,
        }
    }

    /// Page `page` with the default page size.
    pub fn for_page(page: u32) -> Self {
        Self::new(page, DEFAULT_PAGE_SIZE)
    }

    /// Zero-based index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of a filtered sequence, plus navigation metadata.
/// Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_prev: bool,
    pub has_next: bool,
    pub page: u32,
    pub offset: usize,
}

