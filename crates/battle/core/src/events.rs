//! Battle events and reporting sinks.
//!
//! The scheduler emits events in a fixed order per round:
//!
//! 1. `TurnStarted`
//! 2. `ItemTriggered` for each start-of-turn item action, in move order
//! 3. `MoveUsed` for each processed move, in move order
//! 4. `ItemTriggered` for each end-of-turn item action, in move order
//!
//! `BattleEnded` is emitted once, right after the step that decided the
//! battle. Sinks only observe; resolution never depends on them.

use crate::action::ActionResults;
use crate::character::ItemTrigger;
use crate::engine::{BattleOutcome, MoveUse};
use crate::roster::{CharacterId, Roster};

/// High-level occurrences during a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleEvent {
    /// A new round began.
    TurnStarted { round: u32 },

    /// A held item fired its turn-boundary action.
    ItemTriggered {
        holder: CharacterId,
        item_name: String,
        trigger: ItemTrigger,
        result: ActionResults,
    },

    /// A move was processed (its outcome and results are filled in).
    MoveUsed(MoveUse),

    /// The battle is over.
    BattleEnded { outcome: BattleOutcome },
}

/// Receives battle events in emission order.
///
/// `roster` reflects the state right after the event happened.
pub trait EventSink {
    fn handle(&mut self, event: &BattleEvent, roster: &Roster);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn handle(&mut self, event: &BattleEvent, roster: &Roster) {
        (**self).handle(event, roster);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn handle(&mut self, event: &BattleEvent, roster: &Roster) {
        (**self).handle(event, roster);
    }
}

/// Discards every event.
impl EventSink for () {
    fn handle(&mut self, _event: &BattleEvent, _roster: &Roster) {}
}

/// Keeps every event in memory.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<BattleEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    pub fn move_uses(&self) -> impl Iterator<Item = &MoveUse> {
        self.events.iter().filter_map(|event| match event {
            BattleEvent::MoveUsed(mu) => Some(mu),
            _ => None,
        })
    }

    pub fn rounds_started(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, BattleEvent::TurnStarted { .. }))
            .count()
    }

    pub fn outcome(&self) -> Option<&BattleOutcome> {
        self.events.iter().rev().find_map(|event| match event {
            BattleEvent::BattleEnded { outcome } => Some(outcome),
            _ => None,
        })
    }
}

impl EventSink for EventLog {
    fn handle(&mut self, event: &BattleEvent, _roster: &Roster) {
        self.events.push(event.clone());
    }
}

/// Logs events through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn handle(&mut self, event: &BattleEvent, roster: &Roster) {
        match event {
            BattleEvent::TurnStarted { round } => {
                tracing::info!(round, "turn started");
            }
            BattleEvent::ItemTriggered {
                holder,
                item_name,
                trigger,
                result,
            } => {
                tracing::debug!(
                    holder = %roster.name_of(*holder),
                    item = %item_name,
                    %trigger,
                    targets = result.results.len(),
                    "item triggered"
                );
            }
            BattleEvent::MoveUsed(mu) => {
                tracing::info!(
                    user = %roster.name_of(mu.user()),
                    mv = %mu.move_name(),
                    outcome = ?mu.outcome(),
                    damage = mu.results().iter().map(ActionResults::total_damage).sum::<u32>(),
                    "move used"
                );
            }
            BattleEvent::BattleEnded { outcome } => {
                tracing::info!(%outcome, "battle ended");
            }
        }
    }
}
