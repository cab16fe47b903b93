// src/domain/page/engine.rs
//
// Pure pagination half of the filter-and-paginate engine.

use crate::domain::page::{Page, PageRequest};

/// Slice one page out of an already-filtered sequence.
///
/// offset = (page - 1) * size, end = offset + size, both clamped to the
/// sequence bounds. A page past the end yields empty items, never an
/// error. `has_prev` depends only on the page number; `has_next` is true
/// exactly while the unclamped end falls short of the total length.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let total = items.len();
    let start = request.offset();
    let end = start + request.size;

    let sliced = if start >= total {
        Vec::new()
    } else {
        items[start..end.min(total)].to_vec()
    };

    Page {
        items: sliced,
        has_prev: request.page > 1,
        has_next: end < total,
        page: request.page,
        offset: start,
    }
}
