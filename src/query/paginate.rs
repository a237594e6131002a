//! Deterministic page slicing

use serde::Serialize;

/// One page of an ordered collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    /// The items on this page, at most `page_size` of them
    pub posts: &'a [T],
    pub current_page: usize,
    pub total_pages: usize,
    pub total_posts: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Slice `posts` into the requested page.
///
/// `total_pages` is `ceil(len / page_size)` with a floor of 1, and `page` is
/// clamped into `[1, total_pages]` before slicing. Out-of-range page numbers
/// (0, negative once parsed, or far past the end) are recovered here, never
/// surfaced as errors.
pub fn paginate<T>(posts: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    // A zero page size is recovered the same way out-of-range pages are
    let page_size = page_size.max(1);

    let total_posts = posts.len();
    let total_pages = total_posts.div_ceil(page_size).max(1);
    let current_page = page.clamp(1, total_pages);

    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(total_posts);
    // An empty collection clamps to page 1 with start past the (empty) end
    let posts = if start >= total_posts {
        &posts[0..0]
    } else {
        &posts[start..end]
    };

    Page {
        posts,
        current_page,
        total_pages,
        total_posts,
        has_next_page: current_page < total_pages,
        has_prev_page: current_page > 1,
    }
}
