/// Data models for forum-service
///
/// This module defines structures for:
/// - Post: Categorised user content with its vote ledger and comment thread
/// - Comment: Text replies attached to a post
/// - User: Registered accounts (referenced by identity from posts and comments)
/// - Request payloads accepted by the HTTP layer
use crate::store::{CommentThread, VoteLedger};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Direction of a single user's vote on a post. Absence of a vote is
/// represented by the user having no ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteDirection::Up => write!(f, "up"),
            VoteDirection::Down => write!(f, "down"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub category: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub comments: CommentThread,
    /// Serialized inline as `upvotes`, `downvotes` and `voters`.
    #[serde(flatten)]
    pub votes: VoteLedger,
}

impl Post {
    pub fn upvotes(&self) -> u32 {
        self.votes.upvotes()
    }

    pub fn downvotes(&self) -> u32 {
        self.votes.downvotes()
    }
}

/// Validated input for a new post. Identity, timestamps and vote state are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: Option<String>,
    pub url: Option<String>,
    pub text: Option<String>,
    pub category: String,
    pub author_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Argon2id PHC string
    #[serde(skip_serializing)]
    pub password_hash: String,
}

// =====================================================================
// Request payloads
// =====================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, message = "comment text must not be empty"))]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AuthRequest {
    #[validate(length(min = 1, max = 32, message = "username must be 1-32 characters"))]
    pub username: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
