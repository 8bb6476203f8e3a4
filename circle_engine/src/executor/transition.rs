//! A single move in flight.

use serde::Serialize;

use circle_rules::{
    CharacterId, Direction, Move, MoveType, PathLaw, Point, Ring, RingLayout, SlotIndex,
};

/// One character travelling as part of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub character: CharacterId,
    pub from: SlotIndex,
    pub to: SlotIndex,
    pub law: PathLaw,
}

impl Participant {
    /// Display position at progress `t`.
    pub fn position(&self, layout: &RingLayout, t: f32) -> Point {
        self.law.evaluate(
            layout.slot_position(self.from),
            layout.slot_position(self.to),
            layout.center,
            t,
        )
    }
}

/// A running move: the move itself, its progress and who is travelling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    mv: Move,
    progress: f32,
    participants: Vec<Participant>,
}

impl Transition {
    /// Plan `mv` against the current ring.
    ///
    /// A shift rotates the whole ring, so every occupant participates. A
    /// cross or do-si-do swaps the two slots; an empty side has no
    /// participant.
    pub fn plan(ring: &Ring, mv: Move) -> Self {
        let law = PathLaw::for_move(mv.move_type);
        let participants = match mv.move_type {
            MoveType::Shift => {
                let step = mv.direction.unwrap_or(Direction::Clockwise).step();
                ring.occupied()
                    .map(|(slot, character)| Participant {
                        character,
                        from: slot,
                        to: ring.wrap(slot as isize + step),
                        law,
                    })
                    .collect()
            }
            MoveType::Cross | MoveType::DoSiDo => [(mv.from, mv.to), (mv.to, mv.from)]
                .into_iter()
                .filter_map(|(from, to)| {
                    ring.occupant(from).map(|character| Participant {
                        character,
                        from,
                        to,
                        law,
                    })
                })
                .collect(),
        };

        Self {
            mv,
            progress: 0.0,
            participants,
        }
    }

    pub fn mv(&self) -> Move {
        self.mv
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, character: CharacterId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.character == character)
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    /// Advance by `dt` seconds of a `duration`-second move.
    pub(crate) fn advance(&mut self, dt: f32, duration: f32) {
        let step = if duration > 0.0 { dt.max(0.0) / duration } else { 1.0 };
        self.progress = (self.progress + step).min(1.0);
    }

    /// Apply the move to the ring.
    pub(crate) fn apply(&self, ring: &mut Ring) {
        match self.mv.move_type {
            MoveType::Shift => ring.rotate(self.mv.direction.unwrap_or(Direction::Clockwise)),
            MoveType::Cross | MoveType::DoSiDo => ring.swap(self.mv.from, self.mv.to),
        }
    }
}
