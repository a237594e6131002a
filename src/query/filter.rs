//! Category filtering and query-parameter parsing

use crate::content::Post;

/// Sentinel category slug meaning "no filter"
pub const ALL_CATEGORIES: &str = "all";

/// Narrow `posts` to the requested category, preserving relative order.
///
/// `"all"` or an empty slug returns everything unchanged. An unknown slug
/// returns an empty list: that is the "no results" state on the blog index,
/// not an error.
pub fn filter_by_category<'a>(posts: &'a [Post], category_slug: &str) -> Vec<&'a Post> {
    if category_slug.is_empty() || category_slug == ALL_CATEGORIES {
        return posts.iter().collect();
    }

    posts
        .iter()
        .filter(|p| p.category == category_slug)
        .collect()
}

/// Parse the `category` query parameter, defaulting to `"all"`
pub fn parse_category_param(raw: Option<&str>) -> String {
    match raw {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => ALL_CATEGORIES.to_string(),
    }
}

/// Parse the `page` query parameter.
///
/// Missing or non-numeric values parse as 1; out-of-range numbers are left
/// for the paginator to clamp.
pub fn parse_page_param(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(1)
}
