//! BizBlog - the content model behind a small-business blog
//!
//! This library holds the posts, answers the questions a blog page asks of
//! them (search, category filter, pagination, popular and related posts) and
//! tracks which screen a reader is on. It has no persistence and no network:
//! everything lives in memory for one session.

pub mod config;
pub mod error;
pub mod logging;
pub mod markup;
pub mod query;
pub mod seed;
pub mod service;
pub mod store;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::Config;
pub use error::{BlogError, Result, ValidationError};
pub use service::BlogService;
pub use store::ContentStore;
pub use types::{Author, CategoryFilter, Draft, Post, PostId, ALL_CATEGORIES};
pub use view::{PaginationPolicy, View, ViewState};
