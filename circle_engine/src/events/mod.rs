//! Events emitted by the engine for the presentation layer.

use serde::Serialize;

use circle_rules::{CharacterId, CharacterType, Move, MoveToken, SlotIndex};

use crate::barrier::CompletionHandle;
use crate::executor::Participant;

/// Kinds of feedback the engine waits on before moving to its next phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    /// Turns were added after a round success.
    TurnsGained,
    /// The goal queue changed.
    GoalsChanged,
}

/// Everything the engine reports from a tick, in the order it happened.
///
/// Serializes with an `event` tag equal to [`GameEvent::name`]. Completion
/// handles stay in-process and are not serialized.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A move began; participants travel until `MoveCommitted`.
    MoveStarted {
        mv: Move,
        participants: Vec<Participant>,
        turns_remaining: u32,
    },

    /// The ring now reflects the finished move.
    MoveCommitted { mv: Move },

    /// An aggressor is about to eliminate its nemesis-type neighbors.
    BeefStarted {
        aggressor: CharacterId,
        targets: Vec<CharacterId>,
    },

    CharacterEliminated {
        id: CharacterId,
        kind: CharacterType,
        slot: SlotIndex,
    },

    /// The lead moved; `ready` names the summon its sequence now unlocks.
    IncantationRecorded {
        token: MoveToken,
        ready: Option<CharacterType>,
    },

    /// The recorded sequence was spent. `summon` is `None` for a failed attempt.
    SummonAttempted {
        target: Option<SlotIndex>,
        summon: Option<CharacterType>,
    },

    CharacterSummoned {
        id: CharacterId,
        kind: CharacterType,
        slot: SlotIndex,
    },

    /// Every goal is on the ring. Signal each handle once the turn gain
    /// has been shown.
    RoundSucceeded {
        turns_before: u32,
        turns_after: u32,
        #[serde(skip)]
        feedback: Vec<CompletionHandle>,
    },

    /// The goal queue changed. Signal each handle once it has been shown.
    GoalsChanged {
        goals: Vec<CharacterType>,
        evicted: Option<CharacterType>,
        #[serde(skip)]
        feedback: Vec<CompletionHandle>,
    },

    /// The round is over; nothing else will happen.
    GameOver { turns_remaining: u32 },
}

impl GameEvent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::MoveStarted { .. } => "move_started",
            GameEvent::MoveCommitted { .. } => "move_committed",
            GameEvent::BeefStarted { .. } => "beef_started",
            GameEvent::CharacterEliminated { .. } => "character_eliminated",
            GameEvent::IncantationRecorded { .. } => "incantation_recorded",
            GameEvent::SummonAttempted { .. } => "summon_attempted",
            GameEvent::CharacterSummoned { .. } => "character_summoned",
            GameEvent::RoundSucceeded { .. } => "round_succeeded",
            GameEvent::GoalsChanged { .. } => "goals_changed",
            GameEvent::GameOver { .. } => "game_over",
        }
    }

    /// Completion handles carried by this event, if it waits on feedback.
    pub fn feedback(&self) -> &[CompletionHandle] {
        match self {
            GameEvent::RoundSucceeded { feedback, .. } | GameEvent::GoalsChanged { feedback, .. } => {
                feedback
            }
            _ => &[],
        }
    }
}
