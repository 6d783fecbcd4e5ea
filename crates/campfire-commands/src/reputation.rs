//! Global reputation shown on member profiles.

use crate::error::CommandError;
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashSet;
use std::fmt;

/// Vote totals for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reputation {
    /// Number of upvotes received.
    pub upvotes: u64,
    /// Number of downvotes received.
    pub downvotes: u64,
}

impl Reputation {
    /// Upvotes minus downvotes.
    #[allow(clippy::cast_possible_wrap)]
    pub const fn score(&self) -> i64 {
        self.upvotes as i64 - self.downvotes as i64
    }
}

/// `+N`, `-N`, or `-` for a zero score.
impl fmt::Display for Reputation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.score() {
            0 => f.write_str("-"),
            score if score > 0 => write!(f, "+{score}"),
            score => write!(f, "{score}"),
        }
    }
}

/// Direction of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    /// Positive vote.
    Up,
    /// Negative vote.
    Down,
}

/// Storage for reputation votes, keyed by Discord user id.
#[async_trait]
pub trait ReputationStore: Send + Sync {
    /// Totals for `user_id`; users without votes have zero of each.
    async fn reputation(&self, user_id: u64) -> Reputation;

    /// Records `voter`'s vote on `target`, replacing any earlier vote by the
    /// same voter.
    async fn record_vote(&self, target: u64, voter: u64, vote: Vote);
}

/// Records `voter`'s vote on `target` and returns the target's new totals.
/// Members cannot vote on themselves.
pub async fn cast_vote(
    store: &dyn ReputationStore,
    target: u64,
    voter: u64,
    vote: Vote,
) -> Result<Reputation, CommandError> {
    if target == voter {
        return Err(CommandError::SelfVote);
    }
    store.record_vote(target, voter, vote).await;
    Ok(store.reputation(target).await)
}

#[derive(Debug, Default)]
struct Votes {
    up: HashSet<u64>,
    down: HashSet<u64>,
}

/// Process-local store; votes are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryReputationStore {
    votes: DashMap<u64, Votes>,
}

impl InMemoryReputationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReputationStore for InMemoryReputationStore {
    async fn reputation(&self, user_id: u64) -> Reputation {
        self.votes
            .get(&user_id)
            .map(|votes| Reputation {
                upvotes: votes.up.len() as u64,
                downvotes: votes.down.len() as u64,
            })
            .unwrap_or_default()
    }

    async fn record_vote(&self, target: u64, voter: u64, vote: Vote) {
        let mut votes = self.votes.entry(target).or_default();
        match vote {
            Vote::Up => {
                votes.down.remove(&voter);
                votes.up.insert(voter);
            }
            Vote::Down => {
                votes.up.remove(&voter);
                votes.down.insert(voter);
            }
        }
    }
}
