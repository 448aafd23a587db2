//! Success rules deciding whether a move's actions run at all.

use crate::history::ActionHistory;
use crate::rng::BattleRandom;
use crate::roster::CharacterId;

use super::MoveUseResult;

/// How a move decides Success / Miss / Failure before any action runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SuccessRule {
    #[default]
    AlwaysSucceeds,

    /// `chance(percent)`; a failed roll is a Miss.
    Accuracy(u32),

    /// Success chance drops by `step` for each consecutive successful use of
    /// the move before this one, never below `floor`. A failed roll yields
    /// `on_fail`.
    DecreasesWithUses {
        start: u32,
        step: u32,
        floor: u32,
        on_fail: MoveUseResult,
    },
}

impl SuccessRule {
    /// Success chance for the next use, given the prior streak.
    pub fn chance(&self, streak: u32) -> u32 {
        match *self {
            Self::AlwaysSucceeds => 100,
            Self::Accuracy(percent) => percent,
            Self::DecreasesWithUses {
                start, step, floor, ..
            } => start.saturating_sub(step.saturating_mul(streak)).max(floor),
        }
    }

    pub(crate) fn evaluate(
        &self,
        user: CharacterId,
        move_index: usize,
        history: &ActionHistory,
        rng: &mut dyn BattleRandom,
    ) -> MoveUseResult {
        match *self {
            Self::AlwaysSucceeds => MoveUseResult::Success,
            Self::Accuracy(percent) => {
                if rng.chance(percent) {
                    MoveUseResult::Success
                } else {
                    MoveUseResult::Miss
                }
            }
            Self::DecreasesWithUses { on_fail, .. } => {
                let streak = history.consecutive_successes(user, move_index);
                if rng.chance(self.chance(streak)) {
                    MoveUseResult::Success
                } else {
                    on_fail
                }
            }
        }
    }
}
