//! The tick-driven engine.
//!
//! Each call to [`CircleEngine::tick`] does one of the following, depending
//! on what is in progress:
//! 1. **Idle**: evaluate the round, then act on the player's input
//! 2. **Moving**: advance the running move; on commit run beef and record
//!    the lead's token
//! 3. **Holding**: wait out an effect (elimination, summon glow or fade)
//! 4. **Awaiting feedback**: wait until every listener has signaled
//!
//! Only the idle step looks at input, so a move or effect always finishes
//! before the next one can start.

mod input;
mod snapshot;

pub use input::*;
pub use snapshot::*;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, warn};

use circle_rules::{
    classify, Catalog, CharacterId, CharacterType, ConfigError, GameConfig, Move, Ring, Roster,
    RoundConfig, SlotIndex,
};

use crate::barrier::CompletionBarrier;
use crate::beef::resolve_beef;
use crate::economy::{RoundEconomy, RoundPhase};
use crate::events::{FeedbackKind, GameEvent};
use crate::executor::{MoveExecutor, Transition};
use crate::incantation::IncantationEngine;

/// What the confirm button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameMode {
    /// Confirm moves the lead towards the highlighted slot.
    Move,
    /// An incantation is ready; confirm summons into the highlighted slot.
    Summon,
}

#[derive(Debug)]
enum Activity {
    /// Draw a new goal before play continues.
    AddGoal,
    Idle,
    Moving,
    Holding {
        remaining: f32,
        then: AfterHold,
    },
    AwaitingFeedback {
        barrier: CompletionBarrier,
        then: AfterFeedback,
    },
    Finished,
}

#[derive(Debug)]
enum AfterHold {
    Resume,
    PlaceSummon { kind: CharacterType, slot: SlotIndex },
    SummonBeef { id: CharacterId },
}

#[derive(Debug, Clone, Copy)]
enum AfterFeedback {
    AddGoal,
    Resume,
}

#[derive(Debug, Clone, Copy, Default)]
struct FeedbackListeners {
    turns_gained: usize,
    goals_changed: usize,
}

/// The rule engine for one round on the ring.
#[derive(Debug)]
pub struct CircleEngine<R = StdRng> {
    config: RoundConfig,
    catalog: Catalog,
    ring: Ring,
    roster: Roster,
    lead: CharacterId,
    executor: MoveExecutor,
    incantation: IncantationEngine,
    economy: RoundEconomy,
    activity: Activity,
    listeners: FeedbackListeners,
    rng: R,
}

impl CircleEngine<StdRng> {
    /// Create an engine seeded from the config, or from entropy when no
    /// seed is set.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.round.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> CircleEngine<R> {
    /// Create an engine drawing goals and the lead's slot from `rng`.
    ///
    /// The lead is placed on the ring straight away; the first goal is drawn
    /// on the first tick.
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let GameConfig { round, catalog } = config;

        let lead_def = catalog
            .lead_def()
            .ok_or_else(|| ConfigError::UnknownCharacterType {
                context: "lead",
                kind: catalog.lead.clone(),
            })?;
        let mut roster = Roster::new();
        let lead = roster.spawn(lead_def);

        let mut ring = Ring::new(round.slots);
        let lead_slot = round
            .lead_slot
            .unwrap_or_else(|| rng.gen_range(0..round.slots));
        if !ring.place(lead_slot, lead) {
            return Err(ConfigError::LeadSlotOutOfRange {
                slot: lead_slot,
                slots: round.slots,
            });
        }
        info!(slots = round.slots, lead_slot, "Round created");

        let economy = RoundEconomy::new(&round);
        Ok(Self {
            config: round,
            catalog,
            ring,
            roster,
            lead,
            executor: MoveExecutor::new(),
            incantation: IncantationEngine::new(),
            economy,
            activity: Activity::AddGoal,
            listeners: FeedbackListeners::default(),
            rng,
        })
    }

    /// Register a listener. Every later event of this kind carries one
    /// extra completion handle that must be signaled before play resumes.
    pub fn add_feedback_listener(&mut self, kind: FeedbackKind) {
        match kind {
            FeedbackKind::TurnsGained => self.listeners.turns_gained += 1,
            FeedbackKind::GoalsChanged => self.listeners.goals_changed += 1,
        }
    }

    /// Put a catalog character on a vacant slot without running the beef
    /// rule. Meant for setting up a puzzle before play.
    pub fn place_character(&mut self, kind: &CharacterType, slot: SlotIndex) -> Option<CharacterId> {
        let def = self.catalog.character(kind)?;
        if !self.ring.is_vacant(slot) {
            return None;
        }
        let id = self.roster.spawn(def);
        let placed = self.ring.place(slot, id);
        debug_assert!(placed, "fresh character placed on a vacant slot");
        Some(id)
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn lead(&self) -> CharacterId {
        self.lead
    }

    pub fn lead_slot(&self) -> Option<SlotIndex> {
        self.ring.slot_of(self.lead)
    }

    pub fn economy(&self) -> &RoundEconomy {
        &self.economy
    }

    pub fn incantation(&self) -> &IncantationEngine {
        &self.incantation
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.executor.current()
    }

    pub fn phase(&self) -> RoundPhase {
        self.economy.phase()
    }

    pub fn mode(&self) -> GameMode {
        if self.incantation.is_ready() {
            GameMode::Summon
        } else {
            GameMode::Move
        }
    }

    /// A move, effect or feedback wait is in progress; input is ignored.
    pub fn is_busy(&self) -> bool {
        !matches!(self.activity, Activity::Idle | Activity::Finished)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.activity, Activity::Finished)
    }

    /// The move the lead would make towards `highlighted`.
    ///
    /// Safe to call at any time, including while a move runs.
    pub fn preview(&self, highlighted: Option<SlotIndex>) -> Option<Move> {
        let from = self.lead_slot()?;
        classify(from, highlighted?, self.ring.len())
    }

    /// Advance the engine by `dt` seconds.
    ///
    /// Returns the events that happened during this tick, in order.
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();

        match std::mem::replace(&mut self.activity, Activity::Idle) {
            Activity::Finished => self.activity = Activity::Finished,
            Activity::AddGoal => self.add_goal(&mut events),
            Activity::Idle => self.handle_input(input, &mut events),
            Activity::Moving => self.advance_move(dt, &mut events),
            Activity::Holding { remaining, then } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.activity = Activity::Holding { remaining, then };
                } else {
                    self.after_hold(then, &mut events);
                }
            }
            Activity::AwaitingFeedback { barrier, then } => {
                self.await_feedback(barrier, then, &mut events)
            }
        }

        for event in &events {
            debug!(event = event.name(), "Emitted");
        }
        events
    }

    fn handle_input(&mut self, input: &TickInput, events: &mut Vec<GameEvent>) {
        match self.mode() {
            GameMode::Move => self.handle_move_mode(input, events),
            GameMode::Summon => self.handle_summon_mode(input, events),
        }
    }

    fn handle_move_mode(&mut self, input: &TickInput, events: &mut Vec<GameEvent>) {
        match self.economy.evaluate(self.roster.live_types()) {
            RoundPhase::RoundSuccess => {
                self.begin_round_success(events);
                return;
            }
            RoundPhase::GameOver => {
                self.finish(events);
                return;
            }
            RoundPhase::Playing => {}
        }

        if self.lead_slot().is_none() {
            warn!("Lead is off the ring; no move can be made");
            self.finish(events);
            return;
        }

        if input.confirm {
            if let Some(mv) = self.preview(input.highlighted) {
                self.start_move(mv, events);
            }
        } else if input.summon {
            self.attempt_summon(input.highlighted, events);
        }
    }

    fn handle_summon_mode(&mut self, input: &TickInput, events: &mut Vec<GameEvent>) {
        if self.ring.is_full() {
            info!("Ring is full; the summon cannot be placed");
            self.finish(events);
            return;
        }

        if input.confirm || input.summon {
            if let Some(slot) = input.highlighted.filter(|s| self.ring.is_vacant(*s)) {
                self.attempt_summon(Some(slot), events);
            }
        }
    }

    fn start_move(&mut self, mv: Move, events: &mut Vec<GameEvent>) {
        let Some(transition) = self.executor.begin(&self.ring, mv) else {
            return;
        };
        let participants = transition.participants().to_vec();
        self.economy.spend_turn();
        events.push(GameEvent::MoveStarted {
            mv,
            participants,
            turns_remaining: self.economy.turns_remaining(),
        });
        self.activity = Activity::Moving;
    }

    fn advance_move(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        if !self.executor.advance(dt, self.config.move_duration) {
            self.activity = Activity::Moving;
            return;
        }
        let Some(committed) = self.executor.commit(&mut self.ring) else {
            return;
        };
        events.push(GameEvent::MoveCommitted { mv: committed.mv });

        let mut eliminated = false;
        for participant in &committed.participants {
            eliminated |= self.run_beef(participant.character, events);
        }

        if let Some(token) = committed.token_for(self.lead, self.ring.len()) {
            let ready = self.incantation.record(token, &self.catalog).cloned();
            events.push(GameEvent::IncantationRecorded { token, ready });
        }

        let hold = if eliminated {
            self.config.elimination_duration
        } else {
            0.0
        };
        self.hold(hold, AfterHold::Resume, events);
    }

    /// Returns `true` if anyone was eliminated.
    fn run_beef(&mut self, aggressor: CharacterId, events: &mut Vec<GameEvent>) -> bool {
        let Some(outcome) = resolve_beef(&mut self.ring, &mut self.roster, aggressor) else {
            return false;
        };
        events.push(GameEvent::BeefStarted {
            aggressor,
            targets: outcome.targets(),
        });
        for elimination in outcome.eliminated {
            events.push(GameEvent::CharacterEliminated {
                id: elimination.id,
                kind: elimination.kind,
                slot: elimination.slot,
            });
        }
        true
    }

    fn attempt_summon(&mut self, target: Option<SlotIndex>, events: &mut Vec<GameEvent>) {
        let ready = self.incantation.is_ready();
        let accepted = match target {
            Some(slot) => self.ring.is_vacant(slot),
            None => !ready,
        };
        if !accepted {
            debug!(?target, ready, "Summon rejected");
            return;
        }

        let summon = self.incantation.attempt();
        events.push(GameEvent::SummonAttempted {
            target,
            summon: summon.clone(),
        });

        let then = match (summon, target) {
            (Some(kind), Some(slot)) => AfterHold::PlaceSummon { kind, slot },
            _ => AfterHold::Resume,
        };
        self.hold(self.config.summon_glow_duration, then, events);
    }

    fn place_summon(&mut self, kind: CharacterType, slot: SlotIndex, events: &mut Vec<GameEvent>) {
        let Some(def) = self.catalog.character(&kind) else {
            warn!(%kind, "Summon type missing from catalog");
            self.activity = Activity::Idle;
            return;
        };
        if !self.ring.is_vacant(slot) {
            warn!(slot, "Summon target no longer vacant");
            self.activity = Activity::Idle;
            return;
        }

        let id = self.roster.spawn(def);
        let placed = self.ring.place(slot, id);
        debug_assert!(placed, "fresh character placed on a vacant slot");
        info!(%kind, slot, "Character summoned");
        events.push(GameEvent::CharacterSummoned { id, kind, slot });
        self.hold(
            self.config.summon_fade_duration,
            AfterHold::SummonBeef { id },
            events,
        );
    }

    /// Hold for `seconds`, then continue with `then`. Zero continues at once.
    fn hold(&mut self, seconds: f32, then: AfterHold, events: &mut Vec<GameEvent>) {
        if seconds > 0.0 {
            self.activity = Activity::Holding {
                remaining: seconds,
                then,
            };
        } else {
            self.after_hold(then, events);
        }
    }

    fn after_hold(&mut self, then: AfterHold, events: &mut Vec<GameEvent>) {
        match then {
            AfterHold::Resume => self.activity = Activity::Idle,
            AfterHold::PlaceSummon { kind, slot } => self.place_summon(kind, slot, events),
            AfterHold::SummonBeef { id } => {
                let hold = if self.run_beef(id, events) {
                    self.config.elimination_duration
                } else {
                    0.0
                };
                self.hold(hold, AfterHold::Resume, events);
            }
        }
    }

    fn begin_round_success(&mut self, events: &mut Vec<GameEvent>) {
        let gain = self.economy.gain_turns();
        info!(turns = gain.after, "Round succeeded");

        let (barrier, feedback) = CompletionBarrier::join_all(self.listeners.turns_gained);
        events.push(GameEvent::RoundSucceeded {
            turns_before: gain.before,
            turns_after: gain.after,
            feedback,
        });
        self.await_feedback(barrier, AfterFeedback::AddGoal, events);
    }

    fn add_goal(&mut self, events: &mut Vec<GameEvent>) {
        let Some(kind) = self
            .catalog
            .goal_candidates()
            .choose(&mut self.rng)
            .map(|kind| (*kind).clone())
        else {
            warn!("No goal candidates in catalog");
            self.activity = Activity::Idle;
            return;
        };

        let evicted = self.economy.push_goal(kind);
        let goals = self.economy.goals().iter().cloned().collect();
        let (barrier, feedback) = CompletionBarrier::join_all(self.listeners.goals_changed);
        events.push(GameEvent::GoalsChanged {
            goals,
            evicted,
            feedback,
        });
        self.await_feedback(barrier, AfterFeedback::Resume, events);
    }

    fn await_feedback(
        &mut self,
        barrier: CompletionBarrier,
        then: AfterFeedback,
        events: &mut Vec<GameEvent>,
    ) {
        if !barrier.is_complete() {
            self.activity = Activity::AwaitingFeedback { barrier, then };
            return;
        }
        match then {
            AfterFeedback::AddGoal => self.add_goal(events),
            AfterFeedback::Resume => self.activity = Activity::Idle,
        }
    }

    fn finish(&mut self, events: &mut Vec<GameEvent>) {
        self.economy.end_round();
        let turns_remaining = self.economy.turns_remaining();
        info!(turns_remaining, "Game over");
        events.push(GameEvent::GameOver { turns_remaining });
        self.activity = Activity::Finished;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circle_rules::{CharacterDef, Direction, IncantationPattern, MoveToken, MoveType};
    use rand::rngs::mock::StepRng;

    // StepRng(0, 0) always picks the first goal candidate: "Unicorn".
    fn engine_with(round: RoundConfig) -> CircleEngine<StepRng> {
        let catalog = Catalog {
            lead: "Host".into(),
            characters: vec![
                CharacterDef::new("Host", None),
                CharacterDef::new("Unicorn", None),
                CharacterDef::new("Ghost", Some("Fire")),
                CharacterDef::new("Fire", None),
            ],
            patterns: vec![
                IncantationPattern::new("Ghost", vec![MoveToken::shift(Direction::Clockwise)]),
                IncantationPattern::new(
                    "Fire",
                    vec![MoveToken::cross(), MoveToken::cross()],
                ),
            ],
        };
        CircleEngine::with_rng(GameConfig::new(round, catalog), StepRng::new(0, 0)).unwrap()
    }

    fn started_engine() -> CircleEngine<StepRng> {
        let mut engine = engine_with(RoundConfig {
            lead_slot: Some(0),
            ..RoundConfig::instant()
        });
        engine.tick(&TickInput::idle(), 0.0);
        engine
    }

    #[test]
    fn test_first_tick_adds_goal() {
        let mut engine = engine_with(RoundConfig {
            lead_slot: Some(2),
            ..RoundConfig::instant()
        });
        assert!(engine.is_busy());
        assert_eq!(engine.lead_slot(), Some(2));

        let events = engine.tick(&TickInput::idle(), 0.0);

        assert!(matches!(
            events.as_slice(),
            [GameEvent::GoalsChanged { goals, evicted: None, .. }] if goals == &vec![CharacterType::from("Unicorn")]
        ));
        assert!(!engine.is_busy());
    }

    #[test]
    fn test_preview_classifies_from_lead() {
        let engine = started_engine();

        assert_eq!(engine.preview(Some(1)).map(|m| m.move_type), Some(MoveType::Shift));
        assert_eq!(engine.preview(Some(4)).map(|m| m.move_type), Some(MoveType::Cross));
        assert_eq!(engine.preview(Some(3)).map(|m| m.move_type), Some(MoveType::DoSiDo));
        assert!(engine.preview(Some(0)).is_none());
        assert!(engine.preview(None).is_none());
    }

    #[test]
    fn test_noop_confirm_costs_nothing() {
        let mut engine = started_engine();

        assert!(engine.tick(&TickInput::confirm_at(0), 0.1).is_empty());
        assert!(engine.tick(&TickInput::from_raw(-1, true, false), 0.1).is_empty());
        assert!(engine.tick(&TickInput::confirm_at(42), 0.1).is_empty());
        assert_eq!(engine.economy().turns_remaining(), 5);
    }

    #[test]
    fn test_input_ignored_while_move_runs() {
        let mut engine = engine_with(RoundConfig {
            lead_slot: Some(0),
            ..RoundConfig::default()
        });
        engine.tick(&TickInput::idle(), 0.0);

        // Highlighting alone only previews.
        assert!(engine.tick(&TickInput::highlight(4), 0.0).is_empty());
        assert!(!engine.is_busy());
        assert_eq!(engine.preview(TickInput::highlight(4).highlighted).map(|m| m.to), Some(4));

        let events = engine.tick(&TickInput::confirm_at(4), 0.0);
        assert!(matches!(events.as_slice(), [GameEvent::MoveStarted { turns_remaining: 4, .. }]));
        assert!(engine.tick(&TickInput::highlight(1), 0.0).is_empty());

        // Half way through, another confirm does nothing.
        assert!(engine.tick(&TickInput::confirm_at(1), 0.5).is_empty());
        assert!(engine.is_busy());
        assert!((engine.transition().unwrap().progress() - 0.5).abs() < 1e-6);
        assert_eq!(engine.economy().turns_remaining(), 4);

        let events = engine.tick(&TickInput::confirm_at(1), 0.5);
        assert!(matches!(events.first(), Some(GameEvent::MoveCommitted { .. })));
        assert_eq!(engine.lead_slot(), Some(4));
        assert_eq!(engine.economy().turns_remaining(), 4);
    }

    #[test]
    fn test_failed_summon_clears_sequence() {
        let mut engine = started_engine();

        engine.tick(&TickInput::confirm_at(4), 0.0);
        engine.tick(&TickInput::idle(), 0.0);
        assert_eq!(engine.incantation().recorded(), &[MoveToken::cross()]);
        assert_eq!(engine.mode(), GameMode::Move);

        let events = engine.tick(&TickInput::summon_at(Some(2)), 0.0);

        assert!(matches!(
            events.as_slice(),
            [GameEvent::SummonAttempted { target: Some(2), summon: None }]
        ));
        assert!(engine.incantation().recorded().is_empty());
        assert_eq!(engine.roster().live_count(), 1);
        assert_eq!(engine.economy().turns_remaining(), 4);
    }

    #[test]
    fn test_untargeted_summon_clears_sequence_when_not_ready() {
        let mut engine = started_engine();

        engine.tick(&TickInput::confirm_at(4), 0.0);
        engine.tick(&TickInput::idle(), 0.0);
        assert_eq!(engine.incantation().recorded().len(), 1);

        let events = engine.tick(&TickInput::summon_at(None), 0.0);

        assert!(matches!(
            events.as_slice(),
            [GameEvent::SummonAttempted { target: None, summon: None }]
        ));
        assert!(engine.incantation().recorded().is_empty());
        assert_eq!(engine.roster().live_count(), 1);
    }

    #[test]
    fn test_untargeted_summon_rejected_when_ready() {
        let mut engine = started_engine();

        engine.tick(&TickInput::confirm_at(1), 0.0);
        engine.tick(&TickInput::idle(), 0.0);
        assert_eq!(engine.mode(), GameMode::Summon);

        assert!(engine.tick(&TickInput::summon_at(None), 0.0).is_empty());
        assert!(engine.tick(&TickInput::from_raw(-1, true, false), 0.0).is_empty());

        assert_eq!(engine.mode(), GameMode::Summon);
        assert_eq!(
            engine.incantation().recorded(),
            &[MoveToken::shift(Direction::Clockwise)]
        );
        assert_eq!(engine.roster().live_count(), 1);
    }

    #[test]
    fn test_place_character_keeps_ring_and_roster_in_step() {
        let mut engine = started_engine();

        let ghost = engine.place_character(&"Ghost".into(), 3).unwrap();
        assert_eq!(engine.ring().slot_of(ghost), Some(3));

        assert!(engine.place_character(&"Fire".into(), 3).is_none());
        assert!(engine.place_character(&"Fire".into(), 0).is_none());
        assert!(engine.place_character(&"Fire".into(), 8).is_none());
        assert!(engine.place_character(&"Dragon".into(), 5).is_none());

        assert_eq!(engine.roster().live_count(), 2);
        assert_eq!(engine.ring().occupied().count(), 2);
    }

    #[test]
    fn test_lead_slot_outside_ring_rejected() {
        let catalog = Catalog {
            lead: "Host".into(),
            characters: vec![CharacterDef::new("Host", None), CharacterDef::new("Unicorn", None)],
            patterns: Vec::new(),
        };
        let round = RoundConfig {
            slots: 4,
            lead_slot: Some(4),
            ..RoundConfig::instant()
        };

        let result = CircleEngine::with_rng(GameConfig::new(round, catalog), StepRng::new(0, 0));

        assert!(matches!(
            result,
            Err(ConfigError::LeadSlotOutOfRange { slot: 4, slots: 4 })
        ));
    }

    #[test]
    fn test_summon_on_occupied_slot_rejected() {
        let mut engine = started_engine();
        engine.place_character(&"Fire".into(), 2).unwrap();

        engine.tick(&TickInput::confirm_at(4), 0.0);
        engine.tick(&TickInput::idle(), 0.0);

        assert!(engine.tick(&TickInput::summon_at(Some(2)), 0.0).is_empty());
        assert_eq!(engine.incantation().recorded().len(), 1);
    }

    #[test]
    fn test_summon_mode_places_character() {
        let mut engine = started_engine();

        engine.tick(&TickInput::confirm_at(1), 0.0);
        let events = engine.tick(&TickInput::idle(), 0.0);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::IncantationRecorded { ready: Some(kind), .. } if kind.as_str() == "Ghost"
        )));
        assert_eq!(engine.mode(), GameMode::Summon);

        // Moves are locked out and occupied targets ignored.
        assert!(engine.tick(&TickInput::confirm_at(1), 0.0).is_empty());
        let events = engine.tick(&TickInput::confirm_at(5), 0.0);
        assert!(matches!(
            events.as_slice(),
            [
                GameEvent::SummonAttempted { target: Some(5), summon: Some(_) },
                GameEvent::CharacterSummoned { slot: 5, .. },
            ]
        ));

        assert_eq!(engine.mode(), GameMode::Move);
        let ghost = engine.ring().occupant(5).unwrap();
        assert_eq!(engine.roster().get(ghost).unwrap().kind.as_str(), "Ghost");
        assert!(engine.incantation().recorded().is_empty());
    }

    #[test]
    fn test_summon_timing_holds_engine() {
        let mut engine = engine_with(RoundConfig {
            lead_slot: Some(0),
            move_duration: 0.0,
            ..RoundConfig::default()
        });
        engine.tick(&TickInput::idle(), 0.0);
        engine.tick(&TickInput::confirm_at(1), 0.0);
        engine.tick(&TickInput::idle(), 0.0);

        let events = engine.tick(&TickInput::confirm_at(5), 0.0);
        assert!(matches!(events.as_slice(), [GameEvent::SummonAttempted { .. }]));

        // Glow lasts a second before the character appears.
        assert!(engine.tick(&TickInput::idle(), 0.5).is_empty());
        let events = engine.tick(&TickInput::idle(), 0.5);
        assert!(matches!(events.as_slice(), [GameEvent::CharacterSummoned { slot: 5, .. }]));

        // Then the fade-in holds a little longer.
        assert!(engine.is_busy());
        engine.tick(&TickInput::idle(), 0.4);
        assert!(!engine.is_busy());
    }

    #[test]
    fn test_ring_full_in_summon_mode_ends_round() {
        let mut engine = engine_with(RoundConfig {
            slots: 2,
            lead_slot: Some(0),
            ..RoundConfig::instant()
        });
        engine.tick(&TickInput::idle(), 0.0);
        engine.place_character(&"Host".into(), 1).unwrap();

        engine.tick(&TickInput::confirm_at(1), 0.0);
        engine.tick(&TickInput::idle(), 0.0);
        assert_eq!(engine.mode(), GameMode::Summon);

        let events = engine.tick(&TickInput::idle(), 0.0);
        assert!(matches!(events.as_slice(), [GameEvent::GameOver { .. }]));
        assert!(engine.is_finished());
        assert!(engine.tick(&TickInput::confirm_at(0), 0.0).is_empty());
    }

    #[test]
    fn test_lead_eliminated_ends_round() {
        let mut engine = engine_with(RoundConfig {
            lead_slot: Some(0),
            ..RoundConfig::instant()
        });
        engine.tick(&TickInput::idle(), 0.0);
        let lead = engine.lead();
        engine.ring.remove(lead);
        engine.roster.remove(lead);

        let events = engine.tick(&TickInput::confirm_at(1), 0.0);
        assert!(matches!(events.as_slice(), [GameEvent::GameOver { turns_remaining: 5 }]));
    }

    #[test]
    fn test_snapshot_and_positions() {
        let mut engine = engine_with(RoundConfig {
            lead_slot: Some(0),
            ..RoundConfig::default()
        });
        engine.tick(&TickInput::idle(), 0.0);
        engine.tick(&TickInput::confirm_at(4), 0.0);
        engine.tick(&TickInput::idle(), 0.5);

        let snapshot = engine.snapshot();
        assert!(snapshot.busy);
        assert_eq!(snapshot.turns_remaining, 4);
        assert_eq!(snapshot.goals, vec![CharacterType::from("Unicorn")]);
        assert!(snapshot.slots[0].as_ref().is_some_and(|o| o.is_lead));
        assert_eq!(snapshot.transition.map(|t| t.mv().move_type), Some(MoveType::Cross));

        let layout = circle_rules::RingLayout::new(circle_rules::Point::default(), 1.0, 8);
        let positions = engine.occupant_positions(&layout);
        assert_eq!(positions.len(), 1);
        assert!(positions[0].1.distance(layout.center) < 1e-4);
    }
}
