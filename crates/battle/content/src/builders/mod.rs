//! Fluent builders for battle content.
//!
//! Builders collect parts one call at a time and check at `build()` that
//! everything the engine type needs was supplied:
//!
//! ```ignore
//! let strike = MoveBuilder::default()
//!     .name("Sword Strike")
//!     .max_uses(15)
//!     .priority(1)
//!     .action(
//!         DamageActionBuilder::default()
//!             .base_power(20)
//!             .user_selects_single_enemy()
//!             .build()?,
//!     )
//!     .build()?;
//! ```

mod action;
mod character;
mod item;
mod moves;

pub use action::{
    BuffActionBuilder, DamageActionBuilder, HealActionBuilder, ProtectActionBuilder,
    ProtectLimitChangeActionBuilder, TargetingBuilder,
};
pub use character::CharacterBuilder;
pub use item::ItemBuilder;
pub use moves::{MoveBuilder, MoveSetBuilder};

use battle_core::{EngineError, ErrorSeverity};

/// Errors raised when a builder is asked to build before it is complete.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("{builder} requires `{field}` to be set")]
    MissingField {
        builder: &'static str,
        field: &'static str,
    },
}

impl BuildError {
    pub(crate) fn missing(builder: &'static str, field: &'static str) -> Self {
        Self::MissingField { builder, field }
    }
}

impl EngineError for BuildError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "BUILD_MISSING_FIELD",
        }
    }
}
