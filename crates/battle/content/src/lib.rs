//! Battle content: builders, the demo roster and data loaders.
//!
//! This crate assembles battle-core characters, moves and items:
//! - Fluent builders mirroring the engine types one setter at a time
//! - The built-in demo roster (Warrior, Bard, Mage, Rogue)
//! - Roster catalogs (data-driven via RON)
//! - Battle configuration (data-driven via TOML)
//!
//! Loaders deserialize battle-core types directly; only the character shell
//! has a file format of its own.

pub mod builders;
pub mod demo;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builders::{
    BuffActionBuilder, BuildError, CharacterBuilder, DamageActionBuilder, HealActionBuilder,
    ItemBuilder, MoveBuilder, MoveSetBuilder, ProtectActionBuilder,
    ProtectLimitChangeActionBuilder, TargetingBuilder,
};
pub use demo::{automated_demo_roster, demo_roster};

#[cfg(feature = "loaders")]
pub use loaders::{
    CharacterSpec, ConfigLoader, ControllerSpec, LoadResult, RosterFile, RosterLoader, StatsSpec,
};
