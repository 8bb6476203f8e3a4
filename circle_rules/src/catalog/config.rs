//! Round tuning and the top-level game configuration file.

use serde::{Deserialize, Serialize};

use super::{Catalog, ConfigError};

/// Tuning for a single round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Number of slots on the ring.
    pub slots: usize,
    pub start_turns: u32,
    /// Turns added on every round success.
    pub gain_per_round: u32,
    pub max_turns: u32,
    /// Capacity of the goal queue.
    pub goal_count: usize,

    /// Seconds for a move to travel from `t = 0` to `t = 1`.
    pub move_duration: f32,
    /// Seconds the elimination effect holds the engine.
    pub elimination_duration: f32,
    /// Seconds the incantation line glows on a summon attempt.
    pub summon_glow_duration: f32,
    /// Seconds a summoned character takes to fade in.
    pub summon_fade_duration: f32,

    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Starting slot of the lead; `None` picks one at random.
    pub lead_slot: Option<usize>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            slots: 8,
            start_turns: 5,
            gain_per_round: 3,
            max_turns: 15,
            goal_count: 3,
            move_duration: 1.0,
            elimination_duration: 2.5,
            summon_glow_duration: 1.0,
            summon_fade_duration: 0.4,
            seed: None,
            lead_slot: None,
        }
    }
}

impl RoundConfig {
    /// Tuning with every timed phase completing on the next tick.
    pub fn instant() -> Self {
        Self {
            move_duration: 0.0,
            elimination_duration: 0.0,
            summon_glow_duration: 0.0,
            summon_fade_duration: 0.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slots < 2 {
            return Err(ConfigError::RingTooSmall(self.slots));
        }
        if self.goal_count == 0 {
            return Err(ConfigError::InvalidGoalCount(self.goal_count));
        }
        if self.max_turns == 0 || self.start_turns > self.max_turns {
            return Err(ConfigError::InvalidTurnBudget {
                start: self.start_turns,
                max: self.max_turns,
            });
        }
        for (name, value) in [
            ("move", self.move_duration),
            ("elimination", self.elimination_duration),
            ("summon glow", self.summon_glow_duration),
            ("summon fade", self.summon_fade_duration),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDuration { name, value });
            }
        }
        if let Some(slot) = self.lead_slot {
            if slot >= self.slots {
                return Err(ConfigError::LeadSlotOutOfRange {
                    slot,
                    slots: self.slots,
                });
            }
        }
        Ok(())
    }
}

/// Everything needed to start a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub round: RoundConfig,
    pub catalog: Catalog,
}

impl GameConfig {
    pub fn new(round: RoundConfig, catalog: Catalog) -> Self {
        Self { round, catalog }
    }

    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.round.validate()?;
        self.catalog.validate()
    }
}
