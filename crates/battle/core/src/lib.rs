//! Turn-based battle engine.
//!
//! `battle-core` resolves combat among characters split into teams: move
//! choice, ordering, accuracy, protection, history-dependent damage, items and
//! elimination. It does no I/O; presentation and input plug in through the
//! [`MoveChooser`], [`UserInput`] and [`EventSink`] traits, and all randomness
//! comes from an injected [`BattleRandom`].
pub mod action;
pub mod character;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod history;
pub mod moves;
pub mod rng;
pub mod roster;
pub mod stats;

#[cfg(test)]
mod test_support;

pub use action::{
    Action, ActionKind, ActionResults, ActionSource, BuffEffect, DamageEffect, DamagePower,
    Effect, EffectValue, HealAmount, HealEffect, PowerTransform, ProtectLimitChangeEffect,
    StatModifier, TargetResult, TargetStrategy,
};
pub use character::{
    Character, Health, Item, ItemTrigger, MoveChoice, MoveChooser, Protection, RandomMoveChooser,
    TargetSelector, UserInput, UserMoveChooser,
};
pub use config::BattleConfig;
pub use engine::{
    BattleError, BattleOutcome, BattleState, MoveProcessor, MoveUse, ProcessError,
    TurnBasedBattle,
};
pub use error::{EngineError, ErrorSeverity};
pub use events::{BattleEvent, EventLog, EventSink, TracingSink};
pub use history::{ActionHistory, ActionRecord, DamageReceived, HistoryEntry, MoveRecord};
pub use moves::{Move, MoveSet, MoveUseResult, SuccessRule};
pub use rng::{BattleRandom, PcgRng, RngOracle, ScriptedRandom, SeededRandom, compute_seed};
pub use roster::{CharacterId, Roster, Team};
pub use stats::{Stat, StatKind, StatSet};
