//! Read-only views of the engine for the presentation layer.

use rand::Rng;
use serde::Serialize;

use circle_rules::{CharacterId, CharacterType, MoveToken, Point, RingLayout};

use super::{CircleEngine, GameMode};
use crate::economy::RoundPhase;
use crate::executor::Transition;

/// A character as seen in a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccupantView {
    pub id: CharacterId,
    pub kind: CharacterType,
    pub is_lead: bool,
}

/// Everything presentation needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
pub struct RoundSnapshot {
    pub slots: Vec<Option<OccupantView>>,
    pub transition: Option<Transition>,
    pub turns_remaining: u32,
    pub max_turns: u32,
    pub goals: Vec<CharacterType>,
    pub phase: RoundPhase,
    pub mode: GameMode,
    pub recorded: Vec<MoveToken>,
    pub ready: Option<CharacterType>,
    /// A move, effect or feedback wait is in progress.
    pub busy: bool,
}

impl<R: Rng> CircleEngine<R> {
    /// Capture the current state.
    pub fn snapshot(&self) -> RoundSnapshot {
        let slots = self
            .ring
            .slots()
            .iter()
            .map(|occupant| {
                let character = self.roster.get((*occupant)?)?;
                Some(OccupantView {
                    id: character.id,
                    kind: character.kind.clone(),
                    is_lead: character.id == self.lead,
                })
            })
            .collect();

        RoundSnapshot {
            slots,
            transition: self.executor.current().cloned(),
            turns_remaining: self.economy.turns_remaining(),
            max_turns: self.economy.max_turns(),
            goals: self.economy.goals().iter().cloned().collect(),
            phase: self.economy.phase(),
            mode: self.mode(),
            recorded: self.incantation.recorded().to_vec(),
            ready: self.incantation.ready().cloned(),
            busy: self.is_busy(),
        }
    }

    /// Display position of every character on the ring.
    ///
    /// Characters taking part in a running move are placed along their path;
    /// everyone else sits on their slot.
    pub fn occupant_positions(&self, layout: &RingLayout) -> Vec<(CharacterId, Point)> {
        let transition = self.executor.current();
        self.ring
            .occupied()
            .map(|(slot, id)| {
                let position = transition
                    .and_then(|t| t.participant(id).map(|p| p.position(layout, t.progress())))
                    .unwrap_or_else(|| layout.slot_position(slot));
                (id, position)
            })
            .collect()
    }
}
