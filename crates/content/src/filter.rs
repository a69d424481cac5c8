//! Category filtering and free-text search over post lists.

use crate::post::Post;

/// Filter value that matches every post.
pub const ALL: &str = "all";

/// Posts whose category matches `filter`, preserving input order.
///
/// `"all"` is a passthrough; anything else is an exact category match.
pub fn filter_by_category<'a>(posts: &'a [Post], filter: &str) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| filter == ALL || post.category == filter)
        .collect()
}

/// Case-insensitive substring search over title, excerpt and category.
///
/// An empty or whitespace-only query matches everything.
pub fn search<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return posts.iter().collect();
    }
    posts
        .iter()
        .filter(|post| {
            post.title.to_lowercase().contains(&needle)
                || post.excerpt.to_lowercase().contains(&needle)
                || post.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Initial filter from a page query string.
///
/// Accepts `filter` (portfolio pages) or `category` (blog pages), decoding
/// percent-escapes. A missing or empty parameter falls back to `"all"`.
pub fn filter_from_query(query: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or_default();
        if key != "filter" && key != "category" {
            continue;
        }
        let raw = parts.next().unwrap_or_default();
        let value = urlencoding::decode(raw)
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| raw.to_string());
        if !value.is_empty() {
            return value;
        }
    }
    ALL.to_string()
}

/// Query-string value to persist after a filter change.
///
/// Selecting `"all"` clears the parameter instead of writing it out.
pub fn filter_query_value(filter: &str) -> Option<&str> {
    (filter != ALL).then_some(filter)
}
