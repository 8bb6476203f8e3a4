//! The beef rule: a character that just moved eliminates any immediate
//! neighbor of its nemesis type.

use circle_rules::{CharacterId, CharacterType, Ring, Roster, SlotIndex};
use tracing::debug;

/// A character removed by the beef rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elimination {
    pub id: CharacterId,
    pub kind: CharacterType,
    pub slot: SlotIndex,
}

/// Result of a beef check that eliminated at least one neighbor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeefOutcome {
    pub aggressor: CharacterId,
    pub eliminated: Vec<Elimination>,
}

impl BeefOutcome {
    pub fn targets(&self) -> Vec<CharacterId> {
        self.eliminated.iter().map(|e| e.id).collect()
    }
}

/// Neighbors of `aggressor` that it would eliminate, left first.
///
/// Empty when the aggressor is gone, off the ring or has no nemesis.
pub fn beef_targets(ring: &Ring, roster: &Roster, aggressor: CharacterId) -> Vec<CharacterId> {
    let Some(attacker) = roster.get(aggressor) else {
        return Vec::new();
    };
    let Some(slot) = ring.slot_of(aggressor) else {
        return Vec::new();
    };

    let (left, right) = ring.neighbors(slot);
    let mut targets = Vec::new();
    for neighbor_slot in [left, right] {
        let Some(neighbor) = ring.occupant(neighbor_slot) else {
            continue;
        };
        let is_nemesis = roster
            .get(neighbor)
            .is_some_and(|target| attacker.has_beef_with(target));
        if is_nemesis && !targets.contains(&neighbor) {
            targets.push(neighbor);
        }
    }
    targets
}

/// Run the beef check for `aggressor` and remove every target from the ring
/// and the roster.
///
/// Returns `None` when nobody was eliminated.
pub fn resolve_beef(
    ring: &mut Ring,
    roster: &mut Roster,
    aggressor: CharacterId,
) -> Option<BeefOutcome> {
    let targets = beef_targets(ring, roster, aggressor);
    if targets.is_empty() {
        return None;
    }

    let eliminated: Vec<Elimination> = targets
        .into_iter()
        .filter_map(|id| {
            let character = roster.remove(id)?;
            let slot = ring.remove(id)?;
            Some(Elimination {
                id,
                kind: character.kind,
                slot,
            })
        })
        .collect();

    debug!(
        %aggressor,
        eliminated = eliminated.len(),
        "Beef resolved"
    );

    Some(BeefOutcome {
        aggressor,
        eliminated,
    })
}
