//! Move processing and scheduling errors.

use crate::error::{EngineError, ErrorSeverity};
use crate::roster::CharacterId;

// ============================================================================
// Move Processing Errors
// ============================================================================

/// Errors raised by [`MoveProcessor`](super::MoveProcessor).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProcessError {
    /// The move user is not in the roster.
    #[error("character {0} not found")]
    UnknownCharacter(CharacterId),

    /// The move index is past the end of the user's move set.
    #[error("character {user} has no move at index {move_index}")]
    UnknownMove {
        user: CharacterId,
        move_index: usize,
    },

    /// The move has no uses left.
    #[error("{move_name} has no uses left")]
    MoveExhausted {
        user: CharacterId,
        move_name: String,
    },
}

impl EngineError for ProcessError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownCharacter(_) => ErrorSeverity::Internal,
            Self::UnknownMove { .. } | Self::MoveExhausted { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCharacter(_) => "PROCESS_UNKNOWN_CHARACTER",
            Self::UnknownMove { .. } => "PROCESS_UNKNOWN_MOVE",
            Self::MoveExhausted { .. } => "PROCESS_MOVE_EXHAUSTED",
        }
    }
}

// ============================================================================
// Battle Errors
// ============================================================================

/// Errors that stop a [`TurnBasedBattle`](super::TurnBasedBattle).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    /// A battle needs at least one character.
    #[error("battle has no characters")]
    EmptyRoster,

    /// A living character's chooser returned no usable move.
    #[error("{name} has no usable move")]
    NoUsableMove { user: CharacterId, name: String },

    /// A committed move refers to a character the roster does not hold.
    #[error("character {0} not found")]
    UnknownCharacter(CharacterId),

    #[error(transparent)]
    Process(#[from] ProcessError),
}

impl EngineError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyRoster | Self::NoUsableMove { .. } => ErrorSeverity::Validation,
            Self::UnknownCharacter(_) => ErrorSeverity::Internal,
            Self::Process(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyRoster => "BATTLE_EMPTY_ROSTER",
            Self::NoUsableMove { .. } => "BATTLE_NO_USABLE_MOVE",
            Self::UnknownCharacter(_) => "BATTLE_UNKNOWN_CHARACTER",
            Self::Process(e) => e.error_code(),
        }
    }
}
