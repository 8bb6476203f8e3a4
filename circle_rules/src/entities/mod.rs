//! Entity definitions for characters standing on the ring.

mod character;
mod roster;

pub use character::*;
pub use roster::*;

use serde::{Deserialize, Serialize};

/// Index of a character in the [`Roster`] arena.
///
/// Ids are never reused within a round, so a stale id simply resolves to
/// nothing once its character is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub usize);

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A character-type tag such as "Ghost" or "Fire".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterType(pub String);

impl CharacterType {
    /// Create a new character type from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CharacterType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for CharacterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
