//! A character's committed move for one round, and its outcome.

use crate::action::ActionResults;
use crate::character::MoveChoice;
use crate::moves::{Move, MoveUseResult};
use crate::roster::CharacterId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveUse {
    user: CharacterId,
    move_index: usize,
    move_name: String,
    priority: i32,
    /// Characters present when the move was chosen.
    others: Vec<CharacterId>,
    /// One slot per action; `Some` for chosen-target actions.
    chosen_targets: Vec<Option<CharacterId>>,
    outcome: Option<MoveUseResult>,
    results: Vec<ActionResults>,
}

impl MoveUse {
    pub fn new(
        user: CharacterId,
        choice: MoveChoice,
        mv: &Move,
        others: Vec<CharacterId>,
    ) -> Self {
        Self {
            user,
            move_index: choice.move_index,
            move_name: mv.name.clone(),
            priority: mv.priority,
            others,
            chosen_targets: choice.targets,
            outcome: None,
            results: Vec::new(),
        }
    }

    pub fn user(&self) -> CharacterId {
        self.user
    }

    pub fn move_index(&self) -> usize {
        self.move_index
    }

    pub fn move_name(&self) -> &str {
        &self.move_name
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn others(&self) -> &[CharacterId] {
        &self.others
    }

    /// Chosen target for the action at `action_index`, if any.
    pub fn chosen_target(&self, action_index: usize) -> Option<CharacterId> {
        self.chosen_targets.get(action_index).copied().flatten()
    }

    /// `None` until processed.
    pub fn outcome(&self) -> Option<MoveUseResult> {
        self.outcome
    }

    pub fn has_outcome(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn results(&self) -> &[ActionResults] {
        &self.results
    }

    /// True if the move succeeded but every action found no living target.
    pub fn targets_all_dead(&self) -> bool {
        self.outcome == Some(MoveUseResult::Success)
            && !self.results.is_empty()
            && self
                .results
                .iter()
                .all(|r| r.success && r.results.is_empty())
    }

    pub(crate) fn set_outcome(&mut self, outcome: MoveUseResult) {
        self.outcome = Some(outcome);
    }

    pub(crate) fn push_result(&mut self, result: ActionResults) {
        self.results.push(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, ActionKind, DamagePower, TargetStrategy};

    fn strike_use() -> MoveUse {
        let mv = Move::new(
            "Strike",
            5,
            vec![Action::damage(TargetStrategy::ChosenEnemy, DamagePower::Base(20))],
        )
        .with_priority(1);
        MoveUse::new(
            CharacterId(0),
            MoveChoice {
                move_index: 0,
                targets: vec![Some(CharacterId(2))],
            },
            &mv,
            vec![CharacterId(1), CharacterId(2)],
        )
    }

    #[test]
    fn carries_choice_and_move_details() {
        let mu = strike_use();
        assert_eq!(mu.move_name(), "Strike");
        assert_eq!(mu.priority(), 1);
        assert_eq!(mu.chosen_target(0), Some(CharacterId(2)));
        assert_eq!(mu.chosen_target(5), None);
        assert!(!mu.has_outcome());
    }

    #[test]
    fn targets_all_dead_needs_a_successful_empty_resolution() {
        let mut mu = strike_use();
        mu.set_outcome(MoveUseResult::Success);
        mu.push_result(ActionResults {
            action_index: 0,
            kind: ActionKind::Damage,
            success: true,
            results: Vec::new(),
        });
        assert!(mu.targets_all_dead());

        let mut missed = strike_use();
        missed.set_outcome(MoveUseResult::Miss);
        assert!(!missed.targets_all_dead());
    }
}
