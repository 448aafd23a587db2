//! Move resolution and round scheduling.
//!
//! - [`MoveProcessor`] resolves one [`MoveUse`] against a [`BattleState`]
//! - [`TurnBasedBattle`] orders and runs rounds until a team is eliminated

mod battle;
mod errors;
mod move_use;
mod processor;

pub use battle::{BattleOutcome, TurnBasedBattle};
pub use errors::{BattleError, ProcessError};
pub use move_use::MoveUse;
pub use processor::{BattleState, MoveProcessor};
