/// Comment service - attaches comments to posts held by the post store
use crate::error::{AppError, Result};
use crate::models::{AddCommentRequest, Comment};
use crate::store::PostStore;
use std::sync::Arc;
use validator::Validate;

#[derive(Clone)]
pub struct CommentService {
    store: Arc<PostStore>,
}

impl CommentService {
    pub fn new(store: Arc<PostStore>) -> Self {
        Self { store }
    }

    pub fn add_comment(&self, post_id: i64, author_id: i64, req: AddCommentRequest) -> Result<Comment> {
        req.validate()?;

        let text = req.text.trim();
        if text.is_empty() {
            return Err(AppError::ValidationError(
                "comment text must not be empty".to_string(),
            ));
        }

        Ok(self.store.add_comment(post_id, author_id, text.to_string())?)
    }

    /// Delete a comment; only its author may do so.
    pub fn delete_comment(&self, post_id: i64, comment_id: i64, user_id: i64) -> Result<()> {
        Ok(self.store.delete_comment(post_id, comment_id, user_id)?)
    }
}
