//! Resubmission chains.
//!
//! A rejected goal is superseded by a new draft whose `previous_goal_id`
//! points back at it. This module derives the active set from a flat list and
//! walks the back-references to rebuild a goal's history.

use std::collections::{HashMap, HashSet};

use log::warn;

use crate::constants::MAX_HISTORY_DEPTH;
use crate::goals::{GoalRecord, GoalStatus};

/// Drops rejected records that have already been resubmitted.
///
/// A rejected record without a successor stays, so "has rejected" remains
/// visible until the owner reacts.
pub fn active_goals(goals: Vec<GoalRecord>) -> Vec<GoalRecord> {
    let superseded: HashSet<String> = goals
        .iter()
        .filter_map(|g| g.previous_goal_id.clone())
        .collect();

    goals
        .into_iter()
        .filter(|g| !(g.status == GoalStatus::Rejected && superseded.contains(&g.id)))
        .collect()
}

/// Index of goals by id, for chain lookups over an already loaded list.
pub fn index_by_id(goals: &[GoalRecord]) -> HashMap<&str, &GoalRecord> {
    goals.iter().map(|g| (g.id.as_str(), g)).collect()
}

/// Cycle and depth guard for walking a resubmission chain.
struct ChainGuard {
    root: String,
    visited: HashSet<String>,
    steps: usize,
}

impl ChainGuard {
    fn new(start: &GoalRecord) -> Self {
        Self {
            root: start.id.clone(),
            visited: HashSet::from([start.id.clone()]),
            steps: 0,
        }
    }

    /// Whether the walk may continue to `id`.
    fn admit(&mut self, id: &str) -> bool {
        if self.steps >= MAX_HISTORY_DEPTH {
            warn!(
                "[History] Chain for goal {} exceeds {} records, truncating",
                self.root, MAX_HISTORY_DEPTH
            );
            return false;
        }
        if !self.visited.insert(id.to_string()) {
            warn!("[History] Cycle detected at goal {} in chain of {}", id, self.root);
            return false;
        }
        self.steps += 1;
        true
    }
}

/// Step-by-step walk over `previous_goal_id` links, newest first.
///
/// The caller fetches each id returned by [`next_id`](Self::next_id) however it
/// likes (index lookup, API call) and hands the record back through
/// [`push`](Self::push). The walk ends on a missing link, a cycle, or after
/// [`MAX_HISTORY_DEPTH`] predecessors. `start` itself is not part of the chain.
pub struct ChainWalk {
    guard: ChainGuard,
    next: Option<String>,
    chain: Vec<GoalRecord>,
}

impl ChainWalk {
    pub fn new(start: &GoalRecord) -> Self {
        Self {
            guard: ChainGuard::new(start),
            next: start.previous_goal_id.clone(),
            chain: Vec::new(),
        }
    }

    /// Id of the next predecessor to fetch, or `None` once the walk is over.
    pub fn next_id(&mut self) -> Option<String> {
        let id = self.next.take()?;
        self.guard.admit(&id).then_some(id)
    }

    pub fn push(&mut self, previous: GoalRecord) {
        self.next = previous.previous_goal_id.clone();
        self.chain.push(previous);
    }

    pub fn finish(self) -> Vec<GoalRecord> {
        self.chain
    }
}

/// Walks `previous_goal_id` links starting at `start`, newest first.
///
/// `fetch` resolves an id to its record; a `None` ends the walk.
pub fn walk_chain<F>(start: &GoalRecord, mut fetch: F) -> Vec<GoalRecord>
where
    F: FnMut(&str) -> Option<GoalRecord>,
{
    let mut walk = ChainWalk::new(start);
    while let Some(id) = walk.next_id() {
        match fetch(&id) {
            Some(previous) => walk.push(previous),
            None => break,
        }
    }
    walk.finish()
}

/// History of `start` using only records that are already loaded.
pub fn chain_from_index(start: &GoalRecord, index: &HashMap<&str, &GoalRecord>) -> Vec<GoalRecord> {
    walk_chain(start, |id| index.get(id).map(|g| (*g).clone()))
}
