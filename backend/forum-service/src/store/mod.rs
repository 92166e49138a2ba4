/// In-memory storage layer for forum-service
///
/// - `post_store`: Posts, their vote ledgers and comment threads behind one lock
/// - `user_store`: Registered users
/// - `vote_ledger`: Per-post single-vote state machine
/// - `comments`: Per-post comment thread
///
/// Stores hand out clones; nothing outside a store holds a reference into
/// its state.
pub mod comments;
pub mod permissions;
pub mod post_store;
pub mod user_store;
pub mod vote_ledger;

pub use comments::CommentThread;
pub use post_store::PostStore;
pub use user_store::UserStore;
pub use vote_ledger::{VoteConflict, VoteLedger};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("post {0} not found")]
    PostNotFound(i64),

    #[error("comment {0} not found")]
    CommentNotFound(i64),

    #[error("user not found")]
    UserNotFound,

    #[error("username already exists")]
    UsernameTaken,

    #[error("not authorized to delete this {0}")]
    NotAuthor(&'static str),

    #[error(transparent)]
    Vote(#[from] VoteConflict),
}
