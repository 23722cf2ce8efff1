//! Service layer for BizBlog
//!
//! `BlogService` is the single entry point a front-end talks to. It owns the
//! content store, the author, the session's view state and the configuration,
//! and exposes every read and write the page needs.
//!
//! - `validation`: draft checks run before publishing
//! - `newsletter`: signup acknowledgement
//!
//! # Example
//!
//! ```
//! use libbizblog::service::BlogService;
//! use libbizblog::{CategoryFilter, Config, Draft};
//!
//! # fn example() -> libbizblog::Result<()> {
//! let mut service = BlogService::from_config(Config::default());
//!
//! service.set_filter(CategoryFilter::Named("SEO".to_string()));
//! assert_eq!(service.page().posts.len(), 1);
//!
//! *service.draft_mut() = Draft::new("New Post", "<p>Hello</p>", "Tips");
//! let id = service.publish_draft()?;
//! assert_eq!(service.posts()[0].id, id);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod newsletter;
pub mod validation;

use crate::config::Config;
use crate::error::Result;
use crate::query;
use crate::seed;
use crate::store::ContentStore;
use crate::types::{Author, CategoryFilter, Draft, Post, PostId};
use crate::view::{View, ViewState};

use self::newsletter::Acknowledgement;
use self::validation::ValidationReport;

/// The slice of the filtered list currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    pub posts: Vec<&'a Post>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Size of the filtered list across all pages
    pub filtered_count: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Main service facade
#[derive(Debug, Clone)]
pub struct BlogService {
    config: Config,
    store: ContentStore,
    author: Author,
    view: ViewState,
}

impl BlogService {
    /// Create a service from the default configuration file, seeded with
    /// the starter catalogue
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or is invalid.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::from_config(config))
    }

    /// Create a seeded service with a pre-built configuration
    pub fn from_config(config: Config) -> Self {
        let store = ContentStore::seeded_with(&config.blog);
        Self::with_store(config, store)
    }

    /// Create a service around an existing store
    pub fn with_store(config: Config, store: ContentStore) -> Self {
        let author = config.author.clone().unwrap_or_else(seed::default_author);
        let view = ViewState::new(config.blog.pagination_policy);
        Self {
            config,
            store,
            author,
            view,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn posts(&self) -> &[Post] {
        self.store.posts()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn view(&self) -> View {
        self.view.view
    }

    // === Navigation ===

    pub fn navigate(&mut self, target: View) {
        self.view.navigate(target);
    }

    /// Open a post. Membership in the store is not checked here; a stale id
    /// simply has no [`BlogService::selected_post`].
    pub fn select(&mut self, id: PostId) {
        self.view.select(id);
    }

    pub fn clear_selection(&mut self) {
        self.view.clear_selection();
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.view.selected().and_then(|id| self.store.get(id))
    }

    // === Query ===

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.view.set_search(query);
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.view.set_filter(filter);
    }

    /// Move the category filter to the next (or previous) entry of
    /// [`BlogService::categories`], wrapping around
    pub fn cycle_filter(&mut self, forward: bool) {
        let labels = self.categories();
        let current = labels
            .iter()
            .position(|label| label == self.view.filter.label())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % labels.len()
        } else {
            (current + labels.len() - 1) % labels.len()
        };
        self.set_filter(CategoryFilter::from_label(&labels[next]));
    }

    pub fn filtered(&self) -> Vec<&Post> {
        query::filtered_posts(self.store.posts(), &self.view.search_query, &self.view.filter)
    }

    pub fn page(&self) -> PageView<'_> {
        let filtered = self.filtered();
        let page = query::paginate(&filtered, self.config.blog.page_size, self.view.current_page);
        PageView {
            posts: page.items.to_vec(),
            current_page: page.current_page,
            total_pages: page.total_pages,
            filtered_count: filtered.len(),
            has_prev: page.has_prev(),
            has_next: page.has_next(),
        }
    }

    fn total_pages(&self) -> usize {
        query::total_pages(self.filtered().len(), self.config.blog.page_size)
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.total_pages();
        self.view.next_page(total)
    }

    pub fn prev_page(&mut self) -> bool {
        self.view.prev_page()
    }

    pub fn goto_page(&mut self, page: usize) -> bool {
        let total = self.total_pages();
        self.view.goto_page(page, total)
    }

    pub fn categories(&self) -> Vec<String> {
        query::categories(self.store.posts())
    }

    pub fn popular(&self) -> &[Post] {
        query::popular_posts(self.store.posts(), self.config.blog.popular_count)
    }

    /// Related posts for the open post; empty when nothing is selected
    pub fn related(&self) -> Vec<&Post> {
        match self.selected_post() {
            Some(selected) => {
                query::related_posts(self.store.posts(), selected, self.config.blog.related_limit)
            }
            None => Vec::new(),
        }
    }

    // === Writing ===

    pub fn draft(&self) -> &Draft {
        &self.view.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.view.draft
    }

    pub fn validate_draft(&self) -> ValidationReport {
        validation::validate_draft(&self.view.draft)
    }

    /// Publish the write form's draft.
    ///
    /// On success the draft is cleared and the list is shown. On failure
    /// nothing changes and the draft is kept for correction.
    pub fn publish_draft(&mut self) -> Result<PostId> {
        let id = self.store.publish(&self.view.draft)?.id;
        self.view.clear_draft();
        self.view.navigate(View::List);
        Ok(id)
    }

    /// Publish directly from field values, bypassing the write form
    pub fn publish(
        &mut self,
        title: &str,
        content: &str,
        category: &str,
        image: Option<&str>,
    ) -> Result<Post> {
        let mut draft = Draft::new(title, content, category);
        draft.image = image.map(str::to_string);
        Ok(self.store.publish(&draft)?.clone())
    }

    /// Abandon the draft and return to the list
    pub fn cancel_write(&mut self) {
        self.view.clear_draft();
        self.view.navigate(View::List);
    }

    pub fn subscribe(&self, email: &str) -> Result<Acknowledgement> {
        newsletter::subscribe(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlogError;
    use crate::view::PaginationPolicy;

    fn service() -> BlogService {
        BlogService::from_config(Config::default())
    }

    #[test]
    fn test_seeded_service() {
        let service = service();
        assert_eq!(service.posts().len(), 3);
        assert_eq!(service.view(), View::List);
        assert_eq!(service.author().name, "John Doe");
    }

    #[test]
    fn test_author_override_from_config() {
        let mut config = Config::default();
        let mut author = seed::default_author();
        author.name = "Jane Roe".to_string();
        config.author = Some(author);

        assert_eq!(BlogService::from_config(config).author().name, "Jane Roe");
    }

    #[test]
    fn test_cycle_filter_wraps() {
        let mut service = service();
        assert_eq!(service.view_state().filter, CategoryFilter::All);

        service.cycle_filter(true);
        assert_eq!(service.view_state().filter.label(), "Marketing");

        service.cycle_filter(false);
        service.cycle_filter(false);
        assert_eq!(service.view_state().filter.label(), "SEO");

        service.cycle_filter(true);
        assert_eq!(service.view_state().filter, CategoryFilter::All);
    }

    #[test]
    fn test_related_without_selection_is_empty() {
        assert!(service().related().is_empty());
    }

    #[test]
    fn test_select_unknown_id() {
        let mut service = service();
        service.select(PostId(42));
        assert_eq!(service.view(), View::Detail(PostId(42)));
        assert!(service.selected_post().is_none());
        assert!(service.related().is_empty());
    }

    #[test]
    fn test_publish_draft_clears_and_returns_to_list() {
        let mut service = service();
        service.navigate(View::Write);
        *service.draft_mut() = Draft::new("Title", "Body", "Tips");

        let id = service.publish_draft().unwrap();
        assert_eq!(id, PostId(4));
        assert_eq!(service.view(), View::List);
        assert!(service.draft().is_empty());
    }

    #[test]
    fn test_failed_publish_keeps_draft_and_view() {
        let mut service = service();
        service.navigate(View::Write);
        service.draft_mut().title = "Only a title".to_string();

        assert!(service.publish_draft().is_err());
        assert_eq!(service.view(), View::Write);
        assert_eq!(service.draft().title, "Only a title");
        assert_eq!(service.posts().len(), 3);
    }

    #[test]
    fn test_cancel_write() {
        let mut service = service();
        service.navigate(View::Write);
        service.draft_mut().title = "Scrap this".to_string();
        service.cancel_write();

        assert_eq!(service.view(), View::List);
        assert!(service.draft().is_empty());
    }

    #[test]
    fn test_page_navigation_bounded_by_filtered_count() {
        let mut config = Config::default();
        config.blog.page_size = 2;
        let mut service = BlogService::from_config(config);

        assert_eq!(service.page().total_pages, 2);
        assert!(service.next_page());
        assert!(!service.next_page());
        assert_eq!(service.page().posts.len(), 1);
        assert!(!service.goto_page(3));
    }

    #[test]
    fn test_stale_page_under_preserve_policy() {
        let mut config = Config::default();
        config.blog.page_size = 1;
        config.blog.pagination_policy = PaginationPolicy::Preserve;
        let mut service = BlogService::from_config(config);

        assert!(service.goto_page(3));
        service.set_filter(CategoryFilter::Named("SEO".to_string()));

        let page = service.page();
        assert_eq!(page.current_page, 3);
        assert_eq!(page.total_pages, 1);
        assert!(page.posts.is_empty());
        assert!(page.has_prev);
    }

    #[test]
    fn test_reset_policy_shows_first_page() {
        let mut config = Config::default();
        config.blog.page_size = 1;
        config.blog.pagination_policy = PaginationPolicy::ResetOnQueryChange;
        let mut service = BlogService::from_config(config);

        assert!(service.goto_page(3));
        service.set_filter(CategoryFilter::Named("SEO".to_string()));

        let page = service.page();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.posts.len(), 1);
    }

    #[test]
    fn test_publish_with_unrenderable_date_format_fails_cleanly() {
        let mut config = Config::default();
        config.blog.date_format = "%Q".to_string();
        let mut service = BlogService::from_config(config);

        assert!(matches!(
            service.publish("T", "Body", "Tips", None),
            Err(BlogError::InvalidInput(_))
        ));
        assert_eq!(service.posts().len(), 3);
    }

    #[test]
    fn test_subscribe_delegates() {
        let ack = service().subscribe("a@b.c").unwrap();
        assert_eq!(ack.message, "Thanks for subscribing, a@b.c!");
    }
}
