//! Character definitions.

use serde::{Deserialize, Serialize};

use super::{CharacterId, CharacterType};

/// A live character on (or recently removed from) the ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub kind: CharacterType,
    /// The type this character eliminates when it ends up next to it.
    /// The relation is one-way: the target does not beef back.
    pub nemesis: Option<CharacterType>,
}

impl Character {
    /// Create a new character.
    pub fn new(id: CharacterId, kind: CharacterType, nemesis: Option<CharacterType>) -> Self {
        Self { id, kind, nemesis }
    }

    /// Check whether this character eliminates `other` when adjacent.
    pub fn has_beef_with(&self, other: &Character) -> bool {
        self.id != other.id && self.nemesis.as_ref() == Some(&other.kind)
    }
}
