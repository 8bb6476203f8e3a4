//! Game mechanics: move types, directions, moves and incantation tokens.

mod classify;

pub use classify::*;

use serde::{Deserialize, Serialize};

use crate::ring::SlotIndex;

/// The three kinds of move a player can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveType {
    /// One step to an adjacent slot; the whole ring rotates with it.
    Shift,
    /// Swap with the diametrically opposite slot, straight through the middle.
    Cross,
    /// Swap with a far slot, travelling the long way around the ring.
    #[serde(alias = "dosido")]
    DoSiDo,
}

/// Direction of travel around the ring.
///
/// Clockwise is the direction of increasing slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Direction for a signed distance; zero counts as clockwise.
    pub fn from_sign(distance: isize) -> Self {
        if distance >= 0 {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }

    /// Index offset of a single step in this direction.
    pub fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A classified move between two slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub move_type: MoveType,
    pub from: SlotIndex,
    pub to: SlotIndex,
    /// `None` for [`MoveType::Cross`].
    pub direction: Option<Direction>,
}

impl Move {
    /// The incantation token for whoever walks this move from `from` to `to`.
    pub fn token(&self) -> MoveToken {
        MoveToken {
            move_type: self.move_type,
            direction: match self.move_type {
                MoveType::Cross => None,
                MoveType::Shift | MoveType::DoSiDo => self.direction,
            },
        }
    }
}

/// One step of an incantation: a move type plus its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveToken {
    #[serde(rename = "move")]
    pub move_type: MoveType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

impl MoveToken {
    pub fn shift(direction: Direction) -> Self {
        Self {
            move_type: MoveType::Shift,
            direction: Some(direction),
        }
    }

    pub fn cross() -> Self {
        Self {
            move_type: MoveType::Cross,
            direction: None,
        }
    }

    pub fn do_si_do(direction: Direction) -> Self {
        Self {
            move_type: MoveType::DoSiDo,
            direction: Some(direction),
        }
    }

    /// Token for a character that travelled from `from` to `to` by `move_type`.
    ///
    /// The direction is the sign of the shortest cyclic distance, even for a
    /// do-si-do that physically takes the long arc.
    pub fn for_path(move_type: MoveType, from: SlotIndex, to: SlotIndex, slots: usize) -> Self {
        let direction = match move_type {
            MoveType::Cross => None,
            MoveType::Shift | MoveType::DoSiDo => {
                Some(Direction::from_sign(signed_distance(from, to, slots)))
            }
        };
        Self {
            move_type,
            direction,
        }
    }

    /// Check whether a recorded token satisfies this pattern token.
    ///
    /// Cross tokens ignore direction; the others must match it exactly.
    pub fn matches(&self, recorded: &MoveToken) -> bool {
        self.move_type == recorded.move_type
            && (self.move_type == MoveType::Cross || self.direction == recorded.direction)
    }
}

impl std::fmt::Display for MoveToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            Some(direction) => write!(f, "{:?}({:?})", self.move_type, direction),
            None => write!(f, "{:?}", self.move_type),
        }
    }
}
