//! Per-tick input from the input collaborator.

use circle_rules::SlotIndex;

/// What the player is doing this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Slot nearest the stick, if the stick is pushed far enough.
    pub highlighted: Option<SlotIndex>,
    pub confirm: bool,
    pub summon: bool,
}

impl TickInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn highlight(slot: SlotIndex) -> Self {
        Self {
            highlighted: Some(slot),
            ..Self::default()
        }
    }

    /// Confirm a move (or a summon, in summon mode) towards `slot`.
    pub fn confirm_at(slot: SlotIndex) -> Self {
        Self {
            highlighted: Some(slot),
            confirm: true,
            summon: false,
        }
    }

    pub fn summon_at(slot: Option<SlotIndex>) -> Self {
        Self {
            highlighted: slot,
            confirm: false,
            summon: true,
        }
    }

    /// Build from raw signals, where a negative index means nothing is
    /// highlighted.
    pub fn from_raw(highlighted: i32, confirm: bool, summon: bool) -> Self {
        Self {
            highlighted: usize::try_from(highlighted).ok(),
            confirm,
            summon,
        }
    }
}
