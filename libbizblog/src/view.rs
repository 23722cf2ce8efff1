//! View routing and per-session view state
//!
//! The active screen is a single tagged value, so only one of the detail,
//! write, shop, about and contact screens can be showing at a time. The
//! selected post lives inside [`View::Detail`].

use serde::{Deserialize, Serialize};

use crate::types::{CategoryFilter, Draft, PostId};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Post list (home / blog). The fallback screen.
    #[default]
    List,
    Detail(PostId),
    Write,
    Shop,
    About,
    Contact,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::List => "Blog",
            View::Detail(_) => "Post",
            View::Write => "Write",
            View::Shop => "Shop",
            View::About => "About",
            View::Contact => "Contact",
        }
    }
}

/// What happens to the current page when the search or category changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaginationPolicy {
    /// Keep the current page; it may render empty until the reader pages back
    #[default]
    Preserve,
    /// Jump back to page 1
    ResetOnQueryChange,
}

/// Ephemeral state of one reading session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub view: View,
    /// Case-insensitive title substring
    pub search_query: String,
    pub filter: CategoryFilter,
    /// 1-indexed
    pub current_page: usize,
    pub draft: Draft,
    pub policy: PaginationPolicy,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PaginationPolicy::default())
    }
}

impl ViewState {
    pub fn new(policy: PaginationPolicy) -> Self {
        Self {
            view: View::List,
            search_query: String::new(),
            filter: CategoryFilter::All,
            current_page: 1,
            draft: Draft::default(),
            policy,
        }
    }

    /// Switch screens. Any previous selection is dropped unless the target
    /// is itself a detail view. The draft survives so an unfinished post is
    /// still there when the reader comes back to the write form.
    pub fn navigate(&mut self, target: View) {
        tracing::debug!(from = ?self.view, to = ?target, "Navigate");
        self.view = target;
    }

    pub fn select(&mut self, id: PostId) {
        self.navigate(View::Detail(id));
    }

    /// Leave the detail view for the list. No-op on other screens.
    pub fn clear_selection(&mut self) {
        if matches!(self.view, View::Detail(_)) {
            self.navigate(View::List);
        }
    }

    pub fn selected(&self) -> Option<PostId> {
        match self.view {
            View::Detail(id) => Some(id),
            _ => None,
        }
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.on_query_change();
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.on_query_change();
    }

    fn on_query_change(&mut self) {
        if self.policy == PaginationPolicy::ResetOnQueryChange {
            self.current_page = 1;
        }
    }

    /// Advance one page if `total_pages` allows. Returns whether the page changed.
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.current_page < total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page unless already on the first. Returns whether the page changed.
    pub fn prev_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `page` when it lies within `1..=total_pages`
    pub fn goto_page(&mut self, page: usize, total_pages: usize) -> bool {
        if (1..=total_pages).contains(&page) {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    pub fn clear_draft(&mut self) {
        self.draft = Draft::default();
    }
}
