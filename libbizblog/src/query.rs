//! Query engine
//!
//! Pure functions deriving the views a page needs from the post list.
//! Nothing is cached: callers recompute on every state change.

use crate::types::{CategoryFilter, Post, ALL_CATEGORIES};

/// Posts whose title contains `search` (case-insensitive) and whose
/// category passes `filter`, in list order. An empty search matches all.
pub fn filtered_posts<'a>(posts: &'a [Post], search: &str, filter: &CategoryFilter) -> Vec<&'a Post> {
    let needle = search.to_lowercase();
    posts
        .iter()
        .filter(|post| post.title.to_lowercase().contains(&needle) && filter.matches(&post.category))
        .collect()
}

/// `"All"` followed by each distinct category in first-occurrence order
pub fn categories(posts: &[Post]) -> Vec<String> {
    let mut labels = vec![ALL_CATEGORIES.to_string()];
    for post in posts {
        if !labels.iter().any(|label| label == &post.category) {
            labels.push(post.category.clone());
        }
    }
    labels
}

/// The `count` most recently published posts
pub fn popular_posts(posts: &[Post], count: usize) -> &[Post] {
    &posts[..count.min(posts.len())]
}

/// Up to `limit` other posts sharing `selected`'s category, in list order
pub fn related_posts<'a>(posts: &'a [Post], selected: &Post, limit: usize) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| post.category == selected.category && post.id != selected.id)
        .take(limit)
        .collect()
}

/// Number of pages needed for `count` items; never less than 1
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// One page of a larger sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-indexed, as requested; not clamped
    pub current_page: usize,
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Slice out page `current_page` (1-indexed) of `items`.
///
/// A page past the end, or page 0, yields an empty slice rather than an error.
pub fn paginate<T>(items: &[T], page_size: usize, current_page: usize) -> Page<'_, T> {
    let total = total_pages(items.len(), page_size);

    let slice = if current_page == 0 || page_size == 0 {
        &items[..0]
    } else {
        let start = (current_page - 1).saturating_mul(page_size).min(items.len());
        let end = current_page.saturating_mul(page_size).min(items.len());
        &items[start..end]
    };

    Page {
        items: slice,
        current_page,
        total_pages: total,
    }
}
