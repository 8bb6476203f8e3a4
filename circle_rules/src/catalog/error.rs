//! Errors raised while loading catalog and round configuration.

use thiserror::Error;

use crate::entities::CharacterType;

/// Malformed configuration, rejected before a round starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Incantation pattern {index} has no tokens")]
    EmptyPattern { index: usize },
    #[error("Incantation pattern {pattern} token {token} needs a direction")]
    MissingDirection { pattern: usize, token: usize },
    #[error("Goal count must be at least 1, got {0}")]
    InvalidGoalCount(usize),
    #[error("A ring needs at least 2 slots, got {0}")]
    RingTooSmall(usize),
    #[error("Unknown character type {kind} used as {context}")]
    UnknownCharacterType {
        context: &'static str,
        kind: CharacterType,
    },
    #[error("Character type {0} is defined twice")]
    DuplicateCharacterType(CharacterType),
    #[error("No character type other than the lead can be a goal")]
    NoGoalCandidates,
    #[error("Invalid turn budget: start {start}, max {max}")]
    InvalidTurnBudget { start: u32, max: u32 },
    #[error("Invalid {name} duration: {value}")]
    InvalidDuration { name: &'static str, value: f32 },
    #[error("Lead slot {slot} is outside a ring of {slots} slots")]
    LeadSlotOutOfRange { slot: usize, slots: usize },
}
