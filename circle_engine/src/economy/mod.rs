//! Round economy - the turn budget, the goal queue and round outcome.

mod goals;

pub use goals::*;

use serde::Serialize;

use circle_rules::{CharacterType, RoundConfig};
use tracing::info;

/// Where the round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RoundPhase {
    #[default]
    Playing,
    /// Goals were met; turns are being added and a new goal chosen.
    RoundSuccess,
    /// Terminal.
    GameOver,
}

/// Turns before and after a round-success gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnGain {
    pub before: u32,
    pub after: u32,
}

/// Turn budget and goal queue for a round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundEconomy {
    turns_remaining: u32,
    max_turns: u32,
    gain_per_round: u32,
    goals: GoalQueue,
    phase: RoundPhase,
}

impl RoundEconomy {
    pub fn new(config: &RoundConfig) -> Self {
        Self {
            turns_remaining: config.start_turns.min(config.max_turns),
            max_turns: config.max_turns,
            gain_per_round: config.gain_per_round,
            goals: GoalQueue::new(config.goal_count),
            phase: RoundPhase::Playing,
        }
    }

    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    pub fn goals(&self) -> &GoalQueue {
        &self.goals
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::GameOver
    }

    /// Charge one turn for a triggered move.
    pub fn spend_turn(&mut self) {
        self.turns_remaining = self.turns_remaining.saturating_sub(1);
    }

    /// Evaluate the round at a move opportunity.
    ///
    /// Success is checked before the turn budget, so meeting the goals with
    /// the last turn still counts.
    pub fn evaluate<'a>(&mut self, live: impl IntoIterator<Item = &'a CharacterType>) -> RoundPhase {
        if self.phase != RoundPhase::Playing {
            return self.phase;
        }
        if self.goals.is_satisfied_by(live) {
            self.phase = RoundPhase::RoundSuccess;
        } else if self.turns_remaining == 0 {
            self.phase = RoundPhase::GameOver;
        }
        self.phase
    }

    /// Add the per-round gain, capped at `max_turns`.
    pub fn gain_turns(&mut self) -> TurnGain {
        let before = self.turns_remaining;
        self.turns_remaining = before
            .saturating_add(self.gain_per_round)
            .min(self.max_turns);
        info!(before, after = self.turns_remaining, "Turns gained");
        TurnGain {
            before,
            after: self.turns_remaining,
        }
    }

    /// Push a new goal and resume play. Returns the evicted goal, if any.
    pub fn push_goal(&mut self, kind: CharacterType) -> Option<CharacterType> {
        info!(goal = %kind, "New goal");
        let evicted = self.goals.push(kind);
        if self.phase == RoundPhase::RoundSuccess {
            self.phase = RoundPhase::Playing;
        }
        evicted
    }

    /// End the round for a reason outside the turn budget.
    pub fn end_round(&mut self) {
        self.phase = RoundPhase::GameOver;
    }
}
