//! Goal queue - the character types that must be on the ring.

use serde::Serialize;
use std::collections::{HashMap, VecDeque};

use circle_rules::CharacterType;

/// Bounded FIFO of required character types.
#[derive(Debug, Clone, Serialize)]
pub struct GoalQueue {
    capacity: usize,
    goals: VecDeque<CharacterType>,
}

impl GoalQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            goals: VecDeque::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterType> {
        self.goals.iter()
    }

    /// Push a goal, evicting and returning the oldest one when full.
    pub fn push(&mut self, kind: CharacterType) -> Option<CharacterType> {
        self.goals.push_back(kind);
        if self.goals.len() > self.capacity {
            self.goals.pop_front()
        } else {
            None
        }
    }

    /// Check whether `live` covers every goal.
    ///
    /// Counted as a multiset: a type queued twice needs two live characters.
    pub fn is_satisfied_by<'a>(&self, live: impl IntoIterator<Item = &'a CharacterType>) -> bool {
        let mut available: HashMap<&CharacterType, usize> = HashMap::new();
        for kind in live {
            *available.entry(kind).or_default() += 1;
        }
        self.goals.iter().all(|goal| match available.get_mut(goal) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        })
    }
}
