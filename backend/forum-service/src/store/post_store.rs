/// Post store - authoritative registry of posts and their vote state
///
/// All reads and writes go through a single `RwLock`. A vote touches the
/// ledger's map and counters while holding the write guard, so readers never
/// see a half-applied vote. Callers always receive clones.
use super::permissions::check_post_deletion;
use super::{CommentThread, StoreError, VoteLedger};
use crate::models::{Comment, Post, PostDraft, VoteDirection};
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::BTreeMap;

pub struct PostStore {
    inner: RwLock<PostTable>,
}

struct PostTable {
    /// Keyed by id; iteration order is creation order.
    posts: BTreeMap<i64, Post>,
    next_post_id: i64,
    next_comment_id: i64,
}

impl PostTable {
    fn post_mut(&mut self, post_id: i64) -> Result<&mut Post, StoreError> {
        self.posts
            .get_mut(&post_id)
            .ok_or(StoreError::PostNotFound(post_id))
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(PostTable {
                posts: BTreeMap::new(),
                next_post_id: 1,
                next_comment_id: 1,
            }),
        }
    }

    /// Store a new post. Ids start at 1 and are never reused, even after
    /// the post is deleted.
    pub fn create_post(&self, draft: PostDraft) -> Post {
        let mut table = self.inner.write();

        let id = table.next_post_id;
        table.next_post_id += 1;

        let post = Post {
            id,
            title: draft.title,
            url: draft.url,
            text: draft.text,
            category: draft.category,
            author_id: draft.author_id,
            created_at: Utc::now(),
            comments: CommentThread::new(),
            votes: VoteLedger::new(),
        };
        table.posts.insert(id, post.clone());

        tracing::info!(post_id = id, author_id = post.author_id, category = %post.category, "post created");
        post
    }

    /// All posts, ascending by id.
    pub fn get_all_posts(&self) -> Vec<Post> {
        self.inner.read().posts.values().cloned().collect()
    }

    pub fn get_posts_by_category(&self, category: &str) -> Vec<Post> {
        self.inner
            .read()
            .posts
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    pub fn get_post_by_id(&self, post_id: i64) -> Result<Post, StoreError> {
        self.inner
            .read()
            .posts
            .get(&post_id)
            .cloned()
            .ok_or(StoreError::PostNotFound(post_id))
    }

    pub fn get_posts_by_user(&self, author_id: i64) -> Vec<Post> {
        self.inner
            .read()
            .posts
            .values()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect()
    }

    /// Remove a post together with its comments. Only the author may delete.
    pub fn delete_post(&self, post_id: i64, user_id: i64) -> Result<(), StoreError> {
        let mut table = self.inner.write();

        let post = table
            .posts
            .get(&post_id)
            .ok_or(StoreError::PostNotFound(post_id))?;
        if let Err(err) = check_post_deletion(user_id, post) {
            tracing::warn!(post_id, user_id, author_id = post.author_id, "post deletion refused");
            return Err(err);
        }

        let comments = table.posts.remove(&post_id).map_or(0, |p| p.comments.len());
        tracing::info!(post_id, user_id, comments, "post deleted");
        Ok(())
    }

    pub fn upvote_post(&self, post_id: i64, user_id: i64) -> Result<Post, StoreError> {
        self.cast_vote(post_id, user_id, VoteDirection::Up)
    }

    pub fn downvote_post(&self, post_id: i64, user_id: i64) -> Result<Post, StoreError> {
        self.cast_vote(post_id, user_id, VoteDirection::Down)
    }

    fn cast_vote(
        &self,
        post_id: i64,
        user_id: i64,
        direction: VoteDirection,
    ) -> Result<Post, StoreError> {
        let mut table = self.inner.write();
        let post = table.post_mut(post_id)?;

        if let Err(conflict) = post.votes.cast(user_id, direction) {
            tracing::debug!(post_id, user_id, %direction, %conflict, "vote rejected");
            return Err(conflict.into());
        }
        debug_assert!(post.votes.counters_match_voters());

        tracing::info!(
            post_id,
            user_id,
            %direction,
            upvotes = post.votes.upvotes(),
            downvotes = post.votes.downvotes(),
            "vote cast"
        );
        Ok(post.clone())
    }

    pub fn unvote_post(&self, post_id: i64, user_id: i64) -> Result<(), StoreError> {
        let mut table = self.inner.write();
        let post = table.post_mut(post_id)?;

        match post.votes.unvote(user_id) {
            Ok(direction) => {
                debug_assert!(post.votes.counters_match_voters());
                tracing::info!(post_id, user_id, %direction, "vote removed");
                Ok(())
            }
            Err(conflict) => {
                tracing::debug!(post_id, user_id, %conflict, "unvote rejected");
                Err(conflict.into())
            }
        }
    }

    /// Attach a comment to an existing post.
    pub fn add_comment(
        &self,
        post_id: i64,
        author_id: i64,
        text: String,
    ) -> Result<Comment, StoreError> {
        let mut table = self.inner.write();

        // Look the post up before consuming an id so failed calls leave no gap.
        if !table.posts.contains_key(&post_id) {
            return Err(StoreError::PostNotFound(post_id));
        }
        let id = table.next_comment_id;
        table.next_comment_id += 1;

        let comment = Comment {
            id,
            post_id,
            author_id,
            text,
            created_at: Utc::now(),
        };
        table.post_mut(post_id)?.comments.push(comment.clone());

        tracing::info!(post_id, comment_id = id, author_id, "comment added");
        Ok(comment)
    }

    pub fn delete_comment(
        &self,
        post_id: i64,
        comment_id: i64,
        user_id: i64,
    ) -> Result<(), StoreError> {
        let mut table = self.inner.write();
        let post = table.post_mut(post_id)?;

        match post.comments.remove(comment_id, user_id) {
            Ok(_) => {
                tracing::info!(post_id, comment_id, user_id, "comment deleted");
                Ok(())
            }
            Err(err @ StoreError::NotAuthor(_)) => {
                tracing::warn!(post_id, comment_id, user_id, "comment deletion refused");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}
