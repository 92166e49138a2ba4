//! Per-post vote ledger.
//!
//! Each user holds at most one vote per post. State machine per (post, user):
//!
//! - NoVote → Up / Down on upvote / downvote
//! - Up → Up, Down → Down: rejected (`AlreadyUpvoted` / `AlreadyDownvoted`)
//! - Up → Down, Down → Up: rejected (`AlreadyVoted`), the vote must be removed first
//! - Up / Down → NoVote on unvote
//! - NoVote → unvote: rejected (`NoVoteToRemove`)
//!
//! Counters are only touched next to the map update they summarize, so
//! `upvotes`/`downvotes` always equal the number of Up/Down entries.
use crate::models::VoteDirection;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VoteConflict {
    #[error("already upvoted")]
    AlreadyUpvoted,

    #[error("already downvoted")]
    AlreadyDownvoted,

    #[error("already voted {current}, unvote first")]
    AlreadyVoted { current: VoteDirection },

    #[error("no vote to remove")]
    NoVoteToRemove,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VoteLedger {
    upvotes: u32,
    downvotes: u32,
    voters: BTreeMap<i64, VoteDirection>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upvotes(&self) -> u32 {
        self.upvotes
    }

    pub fn downvotes(&self) -> u32 {
        self.downvotes
    }

    /// Current vote of `user_id`, `None` if they have not voted.
    pub fn vote_of(&self, user_id: i64) -> Option<VoteDirection> {
        self.voters.get(&user_id).copied()
    }

    pub fn upvote(&mut self, user_id: i64) -> Result<(), VoteConflict> {
        self.cast(user_id, VoteDirection::Up)
    }

    pub fn downvote(&mut self, user_id: i64) -> Result<(), VoteConflict> {
        self.cast(user_id, VoteDirection::Down)
    }

    /// Record a vote for a user with no active vote.
    pub fn cast(&mut self, user_id: i64, direction: VoteDirection) -> Result<(), VoteConflict> {
        match (self.vote_of(user_id), direction) {
            (None, _) => {
                *self.counter_mut(direction) += 1;
                self.voters.insert(user_id, direction);
                Ok(())
            }
            (Some(VoteDirection::Up), VoteDirection::Up) => Err(VoteConflict::AlreadyUpvoted),
            (Some(VoteDirection::Down), VoteDirection::Down) => {
                Err(VoteConflict::AlreadyDownvoted)
            }
            (Some(current), _) => Err(VoteConflict::AlreadyVoted { current }),
        }
    }

    /// Remove the user's vote, returning the direction that was removed.
    pub fn unvote(&mut self, user_id: i64) -> Result<VoteDirection, VoteConflict> {
        let direction = self
            .voters
            .remove(&user_id)
            .ok_or(VoteConflict::NoVoteToRemove)?;
        *self.counter_mut(direction) -= 1;
        Ok(direction)
    }

    fn counter_mut(&mut self, direction: VoteDirection) -> &mut u32 {
        match direction {
            VoteDirection::Up => &mut self.upvotes,
            VoteDirection::Down => &mut self.downvotes,
        }
    }

    /// True when both counters agree with the voter map.
    pub fn counters_match_voters(&self) -> bool {
        let ups = self
            .voters
            .values()
            .filter(|d| **d == VoteDirection::Up)
            .count();
        let downs = self.voters.len() - ups;
        ups == self.upvotes as usize && downs == self.downvotes as usize
    }
}
