//! Arena holding every character created during a round.

use serde::{Deserialize, Serialize};

use super::{Character, CharacterId, CharacterType};
use crate::catalog::CharacterDef;

/// Arena of characters indexed by [`CharacterId`].
///
/// Removed characters leave a tombstone behind so ids stay stable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    entries: Vec<Option<Character>>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a character from its catalog definition.
    pub fn spawn(&mut self, def: &CharacterDef) -> CharacterId {
        let id = CharacterId(self.entries.len());
        self.entries.push(Some(Character::new(
            id,
            def.kind.clone(),
            def.nemesis.clone(),
        )));
        id
    }

    /// Get a live character by ID.
    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.entries.get(id.0).and_then(Option::as_ref)
    }

    pub fn is_alive(&self, id: CharacterId) -> bool {
        self.get(id).is_some()
    }

    /// Remove a character. Removing twice is a no-op that returns `None`.
    pub fn remove(&mut self, id: CharacterId) -> Option<Character> {
        self.entries.get_mut(id.0).and_then(Option::take)
    }

    /// Iterate over live characters in creation order.
    pub fn live(&self) -> impl Iterator<Item = &Character> {
        self.entries.iter().filter_map(Option::as_ref)
    }

    /// Types of all live characters, one entry per character.
    pub fn live_types(&self) -> impl Iterator<Item = &CharacterType> {
        self.live().map(|c| &c.kind)
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }
}
