/// Forum Service Library
///
/// Posts grouped by category, single-valued votes, comments, and the
/// registration/login flow that issues the bearer tokens used to act on them.
/// All state lives in memory for the lifetime of the process.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route table
/// - `models`: Posts, comments, users and request payloads
/// - `services`: Operation surface consumed by handlers
/// - `store`: Lock-guarded in-memory stores and the vote ledger
/// - `security`: Password hashing
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod security;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};

use services::{AuthService, CommentService, PostService};
use std::sync::Arc;
use store::{PostStore, UserStore};

/// Shared application state. One instance is created per process and shared
/// by every worker, so all requests see the same stores.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub comments: CommentService,
    pub auth: AuthService,
}

impl AppState {
    pub fn new() -> Self {
        let post_store = Arc::new(PostStore::new());
        let user_store = Arc::new(UserStore::new());

        Self {
            posts: PostService::new(Arc::clone(&post_store)),
            comments: CommentService::new(post_store),
            auth: AuthService::new(user_store),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
