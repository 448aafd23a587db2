//! Move and move set builders.

use battle_core::{Action, Move, MoveSet, MoveUseResult, SuccessRule};

use super::BuildError;

#[derive(Clone, Debug, Default)]
pub struct MoveBuilder {
    name: Option<String>,
    description: String,
    max_uses: Option<u32>,
    priority: i32,
    success: SuccessRule,
    actions: Vec<Action>,
}

impl MoveBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn max_uses(mut self, max_uses: u32) -> Self {
        self.max_uses = Some(max_uses);
        self
    }

    /// Higher priority moves go first in a round. Defaults to 0.
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn always_succeeds(mut self) -> Self {
        self.success = SuccessRule::AlwaysSucceeds;
        self
    }

    /// Succeeds with `percent` chance, missing otherwise.
    pub fn accuracy(mut self, percent: u32) -> Self {
        self.success = SuccessRule::Accuracy(percent);
        self
    }

    /// Chance starts at `start` and drops by `step` per consecutive success,
    /// never below `floor`; a failed roll reports `on_fail`.
    pub fn success_decreases_linearly_with_uses(
        mut self,
        start: u32,
        step: u32,
        floor: u32,
        on_fail: MoveUseResult,
    ) -> Self {
        self.success = SuccessRule::DecreasesWithUses {
            start,
            step,
            floor,
            on_fail,
        };
        self
    }

    /// Append an action. Actions run in the order they were added.
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn build(self) -> Result<Move, BuildError> {
        let name = self.name.ok_or(BuildError::missing("MoveBuilder", "name"))?;
        let max_uses = self
            .max_uses
            .ok_or(BuildError::missing("MoveBuilder", "max_uses"))?;
        if self.actions.is_empty() {
            return Err(BuildError::missing("MoveBuilder", "actions"));
        }

        Ok(Move::new(name, max_uses, self.actions)
            .with_description(self.description)
            .with_priority(self.priority)
            .with_success(self.success))
    }
}

#[derive(Clone, Debug, Default)]
pub struct MoveSetBuilder {
    moves: Vec<Move>,
}

impl MoveSetBuilder {
    pub fn with_move(mut self, mv: Move) -> Self {
        self.moves.push(mv);
        self
    }

    pub fn build(self) -> MoveSet {
        MoveSet::new(self.moves)
    }
}
