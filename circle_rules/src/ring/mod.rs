//! The ring - a fixed cycle of slots, each holding at most one character.

mod geometry;

pub use geometry::*;

use serde::{Deserialize, Serialize};

use crate::entities::CharacterId;
use crate::mechanics::Direction;

/// Stable index of a slot, in `[0, slot_count)`.
pub type SlotIndex = usize;

/// A fixed-size cyclic sequence of slots.
///
/// Each character appears in at most one slot, and the slot count never
/// changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ring {
    slots: Vec<Option<CharacterId>>,
}

impl Ring {
    /// Create a ring of empty slots.
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Raw view of every slot, in index order.
    pub fn slots(&self) -> &[Option<CharacterId>] {
        &self.slots
    }

    pub fn contains_slot(&self, slot: SlotIndex) -> bool {
        slot < self.slots.len()
    }

    /// Get the occupant of a slot. Out-of-range slots read as empty.
    pub fn occupant(&self, slot: SlotIndex) -> Option<CharacterId> {
        self.slots.get(slot).copied().flatten()
    }

    /// Check whether `slot` exists and is empty.
    pub fn is_vacant(&self, slot: SlotIndex) -> bool {
        matches!(self.slots.get(slot), Some(None))
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Find the slot a character stands on.
    pub fn slot_of(&self, id: CharacterId) -> Option<SlotIndex> {
        self.slots.iter().position(|s| *s == Some(id))
    }

    /// Wrap a signed index onto the ring.
    pub fn wrap(&self, index: isize) -> SlotIndex {
        index.rem_euclid(self.slots.len().max(1) as isize) as SlotIndex
    }

    /// The counterclockwise and clockwise neighbors of `slot`.
    pub fn neighbors(&self, slot: SlotIndex) -> (SlotIndex, SlotIndex) {
        let slot = slot as isize;
        (self.wrap(slot - 1), self.wrap(slot + 1))
    }

    /// Put a character on a vacant slot.
    ///
    /// Returns `false` without changing anything if the slot is taken or out
    /// of range, or if the character already stands somewhere else.
    pub fn place(&mut self, slot: SlotIndex, id: CharacterId) -> bool {
        if !self.is_vacant(slot) || self.slot_of(id).is_some() {
            return false;
        }
        self.slots[slot] = Some(id);
        true
    }

    /// Clear the slot holding `id`, returning where it stood.
    pub fn remove(&mut self, id: CharacterId) -> Option<SlotIndex> {
        let slot = self.slot_of(id)?;
        self.slots[slot] = None;
        Some(slot)
    }

    /// Exchange the contents of two slots. Either side may be empty.
    pub fn swap(&mut self, a: SlotIndex, b: SlotIndex) {
        if self.contains_slot(a) && self.contains_slot(b) {
            self.slots.swap(a, b);
        }
    }

    /// Move every slot's content one step in `direction`.
    pub fn rotate(&mut self, direction: Direction) {
        if self.slots.is_empty() {
            return;
        }
        match direction {
            Direction::Clockwise => self.slots.rotate_right(1),
            Direction::CounterClockwise => self.slots.rotate_left(1),
        }
    }

    /// Iterate over occupied slots in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (SlotIndex, CharacterId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, occupant)| occupant.map(|id| (slot, id)))
    }

    pub fn vacant_slots(&self) -> impl Iterator<Item = SlotIndex> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, occupant)| occupant.is_none())
            .map(|(slot, _)| slot)
    }
}
