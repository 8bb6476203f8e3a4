//! Move executor - runs exactly one move at a time.
//!
//! A move goes `Idle -> Running(t: 0 -> 1) -> Committed`. The ring is left
//! untouched while the move runs; it changes in one step on commit.

mod transition;

pub use transition::*;

use circle_rules::{CharacterId, Move, MoveToken, MoveType, Ring};
use tracing::debug;

/// A move that has been applied to the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct CommittedMove {
    pub mv: Move,
    /// Everyone who travelled; the mover at `mv.from` comes first for swaps.
    pub participants: Vec<Participant>,
}

impl CommittedMove {
    /// The incantation token for `character`, if it took part in this move.
    ///
    /// Everyone in a shift steps in the move's direction; a swap partner's
    /// direction comes from its own path.
    pub fn token_for(&self, character: CharacterId, slots: usize) -> Option<MoveToken> {
        let path = self.participants.iter().find(|p| p.character == character)?;
        Some(match self.mv.move_type {
            MoveType::Shift => self.mv.token(),
            MoveType::Cross | MoveType::DoSiDo => {
                MoveToken::for_path(self.mv.move_type, path.from, path.to, slots)
            }
        })
    }
}

/// Holds the single running transition, if any.
#[derive(Debug, Clone, Default)]
pub struct MoveExecutor {
    running: Option<Transition>,
}

impl MoveExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn current(&self) -> Option<&Transition> {
        self.running.as_ref()
    }

    /// Start `mv`. Rejected while another move is running.
    pub fn begin(&mut self, ring: &Ring, mv: Move) -> Option<&Transition> {
        if self.running.is_some() {
            debug!(?mv, "Rejected move: another move is running");
            return None;
        }
        let transition = Transition::plan(ring, mv);
        debug!(
            ?mv,
            participants = transition.participants().len(),
            "Move started"
        );
        self.running = Some(transition);
        self.running.as_ref()
    }

    /// Advance the running move. Returns `true` once it has reached `t = 1`.
    pub fn advance(&mut self, dt: f32, duration: f32) -> bool {
        match self.running.as_mut() {
            Some(transition) => {
                transition.advance(dt, duration);
                transition.is_finished()
            }
            None => false,
        }
    }

    /// Commit a finished move to the ring and return to idle.
    ///
    /// Does nothing if no move is running or it has not reached `t = 1`.
    pub fn commit(&mut self, ring: &mut Ring) -> Option<CommittedMove> {
        if !self.running.as_ref().is_some_and(Transition::is_finished) {
            return None;
        }
        let transition = self.running.take()?;
        transition.apply(ring);
        debug!(mv = ?transition.mv(), "Move committed");

        Some(CommittedMove {
            mv: transition.mv(),
            participants: transition.participants().to_vec(),
        })
    }
}
