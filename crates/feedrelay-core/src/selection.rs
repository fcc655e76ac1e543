//! New-post selection against the last processed id.

use std::cmp::Ordering;

use feedrelay_protocols::FeedPost;

/// Order two post ids numerically without overflowing.
///
/// Ids are decimal strings longer than `u64` can hold comfortably, so
/// digit-only ids are compared by significant length and then digit by
/// digit. Anything else falls back to plain string order.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (digits(a), digits(b)) {
        (Some(a), Some(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}

/// Sort posts ascending by id (oldest first).
pub fn sort_posts(posts: &mut [FeedPost]) {
    posts.sort_by(|a, b| compare_ids(&a.id, &b.id));
}

/// Pick the posts that still need processing.
///
/// With no stored id only the newest post is returned, so a fresh
/// deployment announces one post instead of flooding the channel.
pub fn select_new_posts(posts: &[FeedPost], last_id: Option<&str>) -> Vec<FeedPost> {
    let last_id = match last_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => id,
        None => return posts.last().cloned().into_iter().collect(),
    };

    let last_numeric = nonzero_digits(last_id);

    posts
        .iter()
        .filter(|post| match (last_numeric, nonzero_digits(&post.id)) {
            (Some(last), Some(current)) => {
                compare_ids(current, last) == Ordering::Greater
            }
            _ => post.id.as_str() > last_id,
        })
        .cloned()
        .collect()
}

/// Significant digits of an all-digit id, `None` for anything else.
fn digits(id: &str) -> Option<&str> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(id.trim_start_matches('0'))
}

/// Like [`digits`] but treats zero as "not a usable number".
fn nonzero_digits(id: &str) -> Option<&str> {
    digits(id).filter(|d| !d.is_empty())
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
