/// Business logic layer for forum-service
///
/// This module provides the operation surface used by HTTP handlers:
/// - Post service: Post creation, retrieval, deletion and voting
/// - Comment service: Comment attachment and removal
/// - Auth service: Registration, login and user lookup
pub mod auth;
pub mod comments;
pub mod posts;

pub use auth::AuthService;
pub use comments::CommentService;
pub use posts::PostService;
