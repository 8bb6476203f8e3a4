//! Incantation engine - records the lead's moves and matches them against
//! the pattern library.

use serde::Serialize;

use circle_rules::{Catalog, CharacterType, MoveToken};
use tracing::{debug, trace};

/// The lead's recorded sequence and whether it currently spells a summon.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IncantationEngine {
    recorded: Vec<MoveToken>,
    ready: Option<CharacterType>,
}

impl IncantationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token and re-match the whole sequence.
    ///
    /// Returns the summon type the sequence now unlocks, if any.
    pub fn record(&mut self, token: MoveToken, catalog: &Catalog) -> Option<&CharacterType> {
        self.recorded.push(token);
        self.refresh(catalog);
        self.ready.as_ref()
    }

    /// Re-match the recorded sequence against the library.
    pub fn refresh(&mut self, catalog: &Catalog) {
        trace!(recorded = ?self.recorded, "Matching incantation");
        self.ready = catalog
            .find_pattern(&self.recorded)
            .map(|pattern| pattern.summon.clone());
        if let Some(summon) = &self.ready {
            debug!(%summon, length = self.recorded.len(), "Incantation ready");
        }
    }

    pub fn recorded(&self) -> &[MoveToken] {
        &self.recorded
    }

    pub fn ready(&self) -> Option<&CharacterType> {
        self.ready.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.is_some()
    }

    /// Spend the recorded sequence on a summon attempt.
    ///
    /// Always clears the sequence. Returns the type to summon when the
    /// engine was ready, `None` for a failed attempt.
    pub fn attempt(&mut self) -> Option<CharacterType> {
        self.recorded.clear();
        let summon = self.ready.take();
        debug!(success = summon.is_some(), "Incantation spent");
        summon
    }
}
