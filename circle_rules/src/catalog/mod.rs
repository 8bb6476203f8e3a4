//! Catalog data: character types, their nemesis relation and the
//! incantation pattern library.
//!
//! The catalog is read-only once loaded. Use [`GameConfig`] to load it
//! together with the round tuning from TOML or JSON.

mod config;
mod error;

pub use config::*;
pub use error::*;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::entities::CharacterType;
use crate::mechanics::{MoveToken, MoveType};

/// Definition of a character type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDef {
    pub kind: CharacterType,
    /// The type this character eliminates when adjacent to it.
    #[serde(default)]
    pub nemesis: Option<CharacterType>,
}

impl CharacterDef {
    pub fn new(kind: impl Into<String>, nemesis: Option<&str>) -> Self {
        Self {
            kind: CharacterType::new(kind),
            nemesis: nemesis.map(CharacterType::from),
        }
    }
}

/// A sequence of move tokens that unlocks a summon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncantationPattern {
    pub summon: CharacterType,
    pub tokens: Vec<MoveToken>,
}

impl IncantationPattern {
    pub fn new(summon: impl Into<String>, tokens: Vec<MoveToken>) -> Self {
        Self {
            summon: CharacterType::new(summon),
            tokens,
        }
    }

    /// Check whether `recorded` spells out this pattern exactly.
    ///
    /// A prefix is not a match.
    pub fn matches(&self, recorded: &[MoveToken]) -> bool {
        self.tokens.len() == recorded.len()
            && self
                .tokens
                .iter()
                .zip(recorded)
                .all(|(expected, actual)| expected.matches(actual))
    }
}

/// Every character type plus the incantation library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Type of the lead character whose moves are recorded.
    pub lead: CharacterType,
    pub characters: Vec<CharacterDef>,
    #[serde(default)]
    pub patterns: Vec<IncantationPattern>,
}

impl Catalog {
    /// Look up a character definition by type.
    pub fn character(&self, kind: &CharacterType) -> Option<&CharacterDef> {
        self.characters.iter().find(|def| &def.kind == kind)
    }

    pub fn lead_def(&self) -> Option<&CharacterDef> {
        self.character(&self.lead)
    }

    /// Types that may be pushed onto the goal queue.
    pub fn goal_candidates(&self) -> Vec<&CharacterType> {
        self.characters
            .iter()
            .map(|def| &def.kind)
            .filter(|kind| **kind != self.lead)
            .collect()
    }

    /// First pattern in library order matching `recorded` exactly.
    pub fn find_pattern(&self, recorded: &[MoveToken]) -> Option<&IncantationPattern> {
        self.patterns.iter().find(|pattern| pattern.matches(recorded))
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for def in &self.characters {
            if !seen.insert(&def.kind) {
                return Err(ConfigError::DuplicateCharacterType(def.kind.clone()));
            }
        }

        self.require_known(&self.lead, "lead")?;
        for def in &self.characters {
            if let Some(nemesis) = &def.nemesis {
                self.require_known(nemesis, "nemesis")?;
            }
        }

        for (index, pattern) in self.patterns.iter().enumerate() {
            if pattern.tokens.is_empty() {
                return Err(ConfigError::EmptyPattern { index });
            }
            self.require_known(&pattern.summon, "summon")?;
            for (token_index, token) in pattern.tokens.iter().enumerate() {
                if token.move_type != MoveType::Cross && token.direction.is_none() {
                    return Err(ConfigError::MissingDirection {
                        pattern: index,
                        token: token_index,
                    });
                }
            }
        }

        if self.goal_candidates().is_empty() {
            return Err(ConfigError::NoGoalCandidates);
        }

        Ok(())
    }

    fn require_known(&self, kind: &CharacterType, context: &'static str) -> Result<(), ConfigError> {
        if self.character(kind).is_some() {
            Ok(())
        } else {
            Err(ConfigError::UnknownCharacterType {
                context,
                kind: kind.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanics::Direction;

    fn sample_catalog() -> Catalog {
        Catalog {
            lead: "Host".into(),
            characters: vec![
                CharacterDef::new("Host", None),
                CharacterDef::new("Ghost", Some("Fire")),
                CharacterDef::new("Fire", None),
            ],
            patterns: vec![
                IncantationPattern::new("Ghost", vec![MoveToken::shift(Direction::Clockwise)]),
                IncantationPattern::new(
                    "Fire",
                    vec![MoveToken::cross(), MoveToken::do_si_do(Direction::CounterClockwise)],
                ),
            ],
        }
    }

    #[test]
    fn test_pattern_requires_exact_length() {
        let catalog = sample_catalog();
        let pattern = &catalog.patterns[1];

        assert!(!pattern.matches(&[MoveToken::cross()]));
        assert!(pattern.matches(&[
            MoveToken::cross(),
            MoveToken::do_si_do(Direction::CounterClockwise)
        ]));
        assert!(!pattern.matches(&[
            MoveToken::cross(),
            MoveToken::do_si_do(Direction::CounterClockwise),
            MoveToken::cross(),
        ]));
    }

    #[test]
    fn test_find_pattern() {
        let catalog = sample_catalog();
        let found = catalog.find_pattern(&[MoveToken::shift(Direction::Clockwise)]);
        assert_eq!(found.map(|p| p.summon.as_str()), Some("Ghost"));
        assert!(catalog.find_pattern(&[]).is_none());
    }

    #[test]
    fn test_goal_candidates_exclude_lead() {
        let catalog = sample_catalog();
        let candidates = catalog.goal_candidates();
        assert_eq!(candidates.len(), 2);
        assert!(!candidates.contains(&&CharacterType::from("Host")));
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample_catalog().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_pattern() {
        let mut catalog = sample_catalog();
        catalog.patterns.push(IncantationPattern::new("Ghost", vec![]));
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::EmptyPattern { index: 2 })
        ));
    }

    #[test]
    fn test_validate_unknown_types() {
        let mut catalog = sample_catalog();
        catalog.characters[1].nemesis = Some("Water".into());
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::UnknownCharacterType { context: "nemesis", .. })
        ));

        let mut catalog = sample_catalog();
        catalog.lead = "Nobody".into();
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::UnknownCharacterType { context: "lead", .. })
        ));
    }

    #[test]
    fn test_validate_missing_direction() {
        let mut catalog = sample_catalog();
        catalog.patterns[0].tokens[0].direction = None;
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::MissingDirection { pattern: 0, token: 0 })
        ));
    }

    #[test]
    fn test_validate_needs_goal_candidates() {
        let catalog = Catalog {
            lead: "Host".into(),
            characters: vec![CharacterDef::new("Host", None)],
            patterns: vec![],
        };
        assert!(matches!(catalog.validate(), Err(ConfigError::NoGoalCandidates)));
    }

    #[test]
    fn test_validate_duplicate_type() {
        let mut catalog = sample_catalog();
        catalog.characters.push(CharacterDef::new("Fire", None));
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::DuplicateCharacterType(_))
        ));
    }
}
