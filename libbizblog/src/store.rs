//! Content store
//!
//! Owns the ordered list of posts, newest first. Posts are only ever added,
//! by publishing a draft; nothing is edited or removed.

use std::fmt::Write;

use chrono::{DateTime, Local};

use crate::config::BlogConfig;
use crate::error::{BlogError, Result};
use crate::markup;
use crate::seed;
use crate::service::validation::validate_draft;
use crate::types::{Draft, Post, PostId};

#[derive(Debug, Clone)]
pub struct ContentStore {
    posts: Vec<Post>,
    /// Next id to hand out. Only ever grows, so ids are never reused.
    next_id: u64,
    excerpt_length: usize,
    date_format: String,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore {
    /// An empty store with default excerpt and date settings
    pub fn new() -> Self {
        Self::with_settings(&BlogConfig::default())
    }

    /// An empty store using the excerpt length and date format from `config`
    pub fn with_settings(config: &BlogConfig) -> Self {
        Self {
            posts: Vec::new(),
            next_id: 1,
            excerpt_length: config.excerpt_length,
            date_format: config.date_format.clone(),
        }
    }

    /// A store holding the starter catalogue
    pub fn seeded() -> Self {
        Self::seeded_with(&BlogConfig::default())
    }

    /// The starter catalogue with settings from `config`
    pub fn seeded_with(config: &BlogConfig) -> Self {
        Self::with_settings(config).with_trusted_posts(seed::seed_posts())
    }

    /// Replace the contents with `posts`, given newest first.
    ///
    /// Fails if two posts share an id.
    pub fn with_posts(self, posts: Vec<Post>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for post in &posts {
            if !seen.insert(post.id) {
                return Err(BlogError::InvalidInput(format!(
                    "Duplicate post id: {}",
                    post.id
                )));
            }
        }
        Ok(self.with_trusted_posts(posts))
    }

    fn with_trusted_posts(mut self, posts: Vec<Post>) -> Self {
        self.next_id = posts.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        self.posts = posts;
        self
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Publish `draft` dated now. See [`ContentStore::publish_at`].
    pub fn publish(&mut self, draft: &Draft) -> Result<&Post> {
        self.publish_at(draft, Local::now())
    }

    /// Validate `draft` and prepend it as the newest post.
    ///
    /// On a validation failure the store is left untouched. The title and
    /// category are stored trimmed; the content is stored verbatim and its
    /// excerpt derived from it.
    pub fn publish_at(&mut self, draft: &Draft, at: DateTime<Local>) -> Result<&Post> {
        if let Err(e) = validate_draft(draft).into_result() {
            tracing::warn!(error = %e, "Rejected publish");
            return Err(e.into());
        }

        let date = self.display_date(at)?;
        let id = PostId(self.next_id);
        let post = Post {
            id,
            title: draft.title.trim().to_string(),
            excerpt: markup::excerpt(&draft.content, self.excerpt_length),
            content: draft.content.clone(),
            date,
            image: draft
                .image
                .as_ref()
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty()),
            category: draft.category.trim().to_string(),
        };

        self.next_id += 1;
        self.posts.insert(0, post);

        tracing::info!(post_id = %id, category = %self.posts[0].category, "Published post");
        Ok(&self.posts[0])
    }

    /// Format `at` with the configured strftime pattern. A pattern chrono
    /// cannot render is an error rather than a panic.
    fn display_date(&self, at: DateTime<Local>) -> Result<String> {
        let mut date = String::new();
        write!(date, "{}", at.format(&self.date_format)).map_err(|_| {
            BlogError::InvalidInput(format!(
                "Date format '{}' is not a valid strftime pattern",
                self.date_format
            ))
        })?;
        Ok(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use chrono::TimeZone;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 9, 1, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_seeded_store() {
        let store = ContentStore::seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(store.posts()[0].id, PostId(1));
        assert_eq!(store.posts()[2].title, "SEO Basics for Business Owners");
    }

    #[test]
    fn test_publish_prepends_with_next_id() {
        let mut store = ContentStore::seeded();
        let post = store
            .publish_at(&Draft::new("New Post", "<p>Hello</p>", "Tips"), at())
            .unwrap();

        assert_eq!(post.id, PostId(4));
        assert_eq!(post.excerpt, "Hello...");
        assert_eq!(post.date, "Sep 1, 2025");
        assert_eq!(store.len(), 4);
        assert_eq!(store.posts()[0].id, PostId(4));
        assert_eq!(store.posts()[1].id, PostId(1));
    }

    #[test]
    fn test_publish_on_empty_store_starts_at_one() {
        let mut store = ContentStore::new();
        let post = store.publish_at(&Draft::new("First", "Body", "News"), at()).unwrap();
        assert_eq!(post.id, PostId(1));
    }

    #[test]
    fn test_ids_follow_max_not_count() {
        let posts = vec![
            Post { id: PostId(10), ..seed::seed_posts()[0].clone() },
            Post { id: PostId(2), ..seed::seed_posts()[1].clone() },
        ];
        let mut store = ContentStore::new().with_posts(posts).unwrap();
        let post = store.publish_at(&Draft::new("Next", "Body", "News"), at()).unwrap();

        // count + 1 would give 3, which is already taken
        assert_eq!(post.id, PostId(11));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let posts = vec![seed::seed_posts()[0].clone(), seed::seed_posts()[0].clone()];
        assert!(ContentStore::new().with_posts(posts).is_err());
    }

    #[test]
    fn test_invalid_publish_leaves_store_untouched() {
        let mut store = ContentStore::seeded();
        let before = store.posts().to_vec();

        let err = store
            .publish_at(&Draft::new("Title", "   ", "Tips"), at())
            .unwrap_err();

        match err {
            BlogError::Validation(ValidationError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["content"]);
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert_eq!(store.posts(), before.as_slice());

        // The failed attempt does not burn an id
        let post = store.publish_at(&Draft::new("Title", "Body", "Tips"), at()).unwrap();
        assert_eq!(post.id, PostId(4));
    }

    #[test]
    fn test_publish_trims_title_category_and_blank_image() {
        let mut store = ContentStore::new();
        let draft = Draft::new("  Spaced  ", "Body", " Tips ").with_image("   ");
        let post = store.publish_at(&draft, at()).unwrap();

        assert_eq!(post.title, "Spaced");
        assert_eq!(post.category, "Tips");
        assert_eq!(post.image, None);
    }

    #[test]
    fn test_publish_keeps_image() {
        let mut store = ContentStore::new();
        let draft = Draft::new("Title", "Body", "Tips").with_image("https://example.com/a.png");
        let post = store.publish_at(&draft, at()).unwrap();
        assert_eq!(post.image.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_custom_date_format_and_excerpt_length() {
        let config = BlogConfig {
            excerpt_length: 5,
            date_format: "%Y-%m-%d".to_string(),
            ..BlogConfig::default()
        };
        let mut store = ContentStore::with_settings(&config);
        let post = store
            .publish_at(&Draft::new("Title", "<p>Hello world</p>", "Tips"), at())
            .unwrap();

        assert_eq!(post.date, "2025-09-01");
        assert_eq!(post.excerpt, "Hello...");
    }

    #[test]
    fn test_unrenderable_date_format_is_an_error() {
        let config = BlogConfig {
            date_format: "%Q".to_string(),
            ..BlogConfig::default()
        };
        let mut store = ContentStore::with_settings(&config).with_trusted_posts(seed::seed_posts());

        let err = store
            .publish_at(&Draft::new("Title", "Body", "Tips"), at())
            .unwrap_err();
        assert!(matches!(err, BlogError::InvalidInput(ref msg) if msg.contains("%Q")));
        assert_eq!(store.len(), 3);
        assert_eq!(store.next_id, 4);
    }

    #[test]
    fn test_get() {
        let store = ContentStore::seeded();
        assert_eq!(store.get(PostId(2)).map(|p| p.category.as_str()), Some("Monetization"));
        assert!(store.get(PostId(99)).is_none());
    }
}
