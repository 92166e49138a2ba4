/// Ownership checks for content mutations.
///
/// Only the author may delete a post or a comment. The checks run inside the
/// store's critical section so the author seen here is the one removed.
use super::StoreError;
use crate::models::{Comment, Post};

pub fn check_post_deletion(user_id: i64, post: &Post) -> Result<(), StoreError> {
    if post.author_id == user_id {
        Ok(())
    } else {
        Err(StoreError::NotAuthor("post"))
    }
}

pub fn check_comment_deletion(user_id: i64, comment: &Comment) -> Result<(), StoreError> {
    if comment.author_id == user_id {
        Ok(())
    } else {
        Err(StoreError::NotAuthor("comment"))
    }
}
