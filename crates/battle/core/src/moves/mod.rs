//! Moves: named, usage-limited bundles of actions.

mod success;

pub use success::SuccessRule;

use crate::action::{Action, ActionKind};

/// Outcome of a move's success rule.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MoveUseResult {
    Success,
    Miss,
    Failure,
}

/// A move a character can perform once per round.
///
/// Everything but the spent-uses counter is fixed once built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub max_uses: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    uses_spent: u32,
    /// Higher goes first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub success: SuccessRule,
    pub actions: Vec<Action>,
}

impl Move {
    pub fn new(name: impl Into<String>, max_uses: u32, actions: Vec<Action>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            max_uses,
            uses_spent: 0,
            priority: 0,
            success: SuccessRule::AlwaysSucceeds,
            actions,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_success(mut self, success: SuccessRule) -> Self {
        self.success = success;
        self
    }

    pub fn remaining_uses(&self) -> u32 {
        self.max_uses.saturating_sub(self.uses_spent)
    }

    pub fn can_use(&self) -> bool {
        self.remaining_uses() > 0
    }

    /// Spend one use. Returns false if none were left.
    pub(crate) fn spend_use(&mut self) -> bool {
        if !self.can_use() {
            return false;
        }
        self.uses_spent += 1;
        true
    }

    /// True if any action is a Protect (gated by the user's protect limit).
    pub fn has_protect(&self) -> bool {
        self.actions.iter().any(|a| a.kind() == ActionKind::Protect)
    }

    /// True if the chooser has to pick a target for this move.
    pub fn needs_chosen_target(&self) -> bool {
        self.actions.iter().any(Action::needs_chosen_target)
    }

    /// `Name (remaining/max uses): description`
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} ({}/{} uses)",
            self.name,
            self.remaining_uses(),
            self.max_uses
        );
        if !self.description.is_empty() {
            line.push_str(": ");
            line.push_str(&self.description);
        }
        line
    }
}

/// A character's moves, in menu order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MoveSet {
    moves: Vec<Move>,
}

impl MoveSet {
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Move> {
        self.moves.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// Numbered move list starting at 1, one move per line.
    pub fn summary(&self) -> String {
        self.moves
            .iter()
            .enumerate()
            .map(|(i, mv)| format!("{}. {}", i + 1, mv.summary()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{DamagePower, TargetStrategy};

    fn strike(max_uses: u32) -> Move {
        Move::new(
            "Strike",
            max_uses,
            vec![Action::damage(
                TargetStrategy::ChosenEnemy,
                DamagePower::Base(20),
            )],
        )
    }

    #[test]
    fn spending_uses_stops_at_zero() {
        let mut mv = strike(2);
        assert!(mv.spend_use());
        assert_eq!(mv.remaining_uses(), 1);
        assert!(mv.spend_use());
        assert!(!mv.can_use());
        assert!(!mv.spend_use());
        assert_eq!(mv.remaining_uses(), 0);
    }

    #[test]
    fn protect_moves_are_detected() {
        let protect = Move::new("Protect", 5, vec![Action::protect(TargetStrategy::User)]);
        assert!(protect.has_protect());
        assert!(!strike(1).has_protect());
        assert!(strike(1).needs_chosen_target());
    }

    #[test]
    fn summary_is_numbered() {
        let set: MoveSet = [
            strike(15).with_description("Swing a sword."),
            Move::new("Wait", 3, Vec::new()),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            set.summary(),
            "1. Strike (15/15 uses): Swing a sword.\n2. Wait (3/3 uses)"
        );
    }

    #[test]
    fn results_parse_case_insensitively() {
        assert_eq!("FAILURE".parse::<MoveUseResult>().unwrap(), MoveUseResult::Failure);
        assert_eq!(MoveUseResult::Miss.to_string(), "miss");
    }
}
