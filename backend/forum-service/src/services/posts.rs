/// Post service - validates drafts and forwards to the post store
use crate::error::{AppError, Result};
use crate::models::{CreatePostRequest, Post, PostDraft};
use crate::store::PostStore;
use std::sync::Arc;
use validator::Validate;

#[derive(Clone)]
pub struct PostService {
    store: Arc<PostStore>,
}

/// Trim a free-form field, treating blank input as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl PostService {
    pub fn new(store: Arc<PostStore>) -> Self {
        Self { store }
    }

    /// Build a draft from a request: category required, and at least one of
    /// title, url or text must carry content.
    pub fn draft_from_request(req: CreatePostRequest, author_id: i64) -> Result<PostDraft> {
        req.validate()?;

        let category = req.category.trim().to_string();
        if category.is_empty() {
            return Err(AppError::ValidationError(
                "category must not be empty".to_string(),
            ));
        }

        let draft = PostDraft {
            title: non_blank(req.title),
            url: non_blank(req.url),
            text: non_blank(req.text),
            category,
            author_id,
        };

        if draft.title.is_none() && draft.url.is_none() && draft.text.is_none() {
            return Err(AppError::ValidationError(
                "post needs a title, url or text".to_string(),
            ));
        }

        Ok(draft)
    }

    pub fn create_post(&self, req: CreatePostRequest, author_id: i64) -> Result<Post> {
        let draft = Self::draft_from_request(req, author_id)?;
        Ok(self.store.create_post(draft))
    }

    pub fn get_all_posts(&self) -> Vec<Post> {
        self.store.get_all_posts()
    }

    pub fn get_posts_by_category(&self, category: &str) -> Vec<Post> {
        tracing::debug!(category, "listing posts by category");
        self.store.get_posts_by_category(category)
    }

    pub fn get_post(&self, post_id: i64) -> Result<Post> {
        Ok(self.store.get_post_by_id(post_id)?)
    }

    pub fn get_posts_by_user(&self, author_id: i64) -> Vec<Post> {
        self.store.get_posts_by_user(author_id)
    }

    pub fn delete_post(&self, post_id: i64, user_id: i64) -> Result<()> {
        Ok(self.store.delete_post(post_id, user_id)?)
    }

    pub fn upvote_post(&self, post_id: i64, user_id: i64) -> Result<Post> {
        Ok(self.store.upvote_post(post_id, user_id)?)
    }

    pub fn downvote_post(&self, post_id: i64, user_id: i64) -> Result<Post> {
        Ok(self.store.downvote_post(post_id, user_id)?)
    }

    pub fn unvote_post(&self, post_id: i64, user_id: i64) -> Result<()> {
        Ok(self.store.unvote_post(post_id, user_id)?)
    }
}
