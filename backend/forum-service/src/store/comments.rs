//! Comment thread embedded in each post.
use super::permissions::check_comment_deletion;
use super::StoreError;
use crate::models::Comment;
use serde::Serialize;

/// Comments of one post in ascending identity order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommentThread {
    comments: Vec<Comment>,
}

impl CommentThread {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter()
    }

    /// Append a comment. Identities come from a store-wide increasing
    /// sequence, so appending keeps the thread sorted.
    pub(crate) fn push(&mut self, comment: Comment) {
        debug_assert!(self.comments.last().map_or(true, |last| last.id < comment.id));
        self.comments.push(comment);
    }

    /// Remove `comment_id` on behalf of `user_id`, who must be its author.
    pub(crate) fn remove(&mut self, comment_id: i64, user_id: i64) -> Result<Comment, StoreError> {
        let index = self
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or(StoreError::CommentNotFound(comment_id))?;

        check_comment_deletion(user_id, &self.comments[index])?;
        Ok(self.comments.remove(index))
    }
}
