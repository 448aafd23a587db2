//! Target strategies and their resolution.
//!
//! Strategies are resolved against the live roster when the action executes,
//! not when the move is chosen, so earlier moves in the round (and earlier
//! actions of the same move) are already reflected. Only `ChosenEnemy` is
//! fixed at choice time, and it still drops the target if it has died.

use crate::history::ActionHistory;
use crate::rng::BattleRandom;
use crate::roster::{CharacterId, Roster};

/// Rule for picking the targets of an action.
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
pub enum TargetStrategy {
    /// One living enemy picked by the move chooser.
    ChosenEnemy,
    /// Every living enemy.
    AllEnemies,
    /// First living enemy in roster order.
    FirstEnemy,
    /// First living teammate in roster order (may be the user).
    FirstAlly,
    /// The user itself.
    User,
    /// Every living teammate, user included.
    Team,
    /// One living character other than the user, any team.
    RandomOther,
    /// Whoever last damaged the user, if still alive.
    LastAttacker,
}

impl TargetStrategy {
    /// True if the target is fixed by the chooser rather than resolved.
    pub fn is_chosen(&self) -> bool {
        matches!(self, Self::ChosenEnemy)
    }

    /// Resolve the strategy to concrete living targets.
    pub(crate) fn resolve(
        &self,
        user: CharacterId,
        chosen: Option<CharacterId>,
        roster: &Roster,
        history: &ActionHistory,
        rng: &mut dyn BattleRandom,
    ) -> Vec<CharacterId> {
        let alive = |id: &CharacterId| roster.is_alive(*id);

        match self {
            Self::ChosenEnemy => chosen.filter(alive).into_iter().collect(),
            Self::AllEnemies => roster.enemies_of(user).map(|c| c.id()).collect(),
            Self::FirstEnemy => roster.enemies_of(user).map(|c| c.id()).take(1).collect(),
            Self::FirstAlly => roster.team_of(user).map(|c| c.id()).take(1).collect(),
            Self::User => Some(user).filter(alive).into_iter().collect(),
            Self::Team => roster.team_of(user).map(|c| c.id()).collect(),
            Self::RandomOther => {
                let others: Vec<CharacterId> =
                    roster.living_others(user).map(|c| c.id()).collect();
                if others.is_empty() {
                    Vec::new()
                } else {
                    vec![others[rng.choose_index(others.len())]]
                }
            }
            Self::LastAttacker => history
                .last_damage_received(user)
                .map(|received| received.attacker)
                .filter(alive)
                .into_iter()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{ActionRecord, HistoryEntry};
    use crate::action::{ActionKind, ActionSource, EffectValue};
    use crate::rng::ScriptedRandom;
    use crate::test_support::fighter;

    fn roster() -> Roster {
        Roster::new(vec![
            fighter("Warrior", "a", 100),
            fighter("Bard", "a", 100),
            fighter("Mage", "a", 100),
            fighter("Rogue", "b", 80),
            fighter("Thief", "b", 60),
        ])
    }

    fn resolve(strategy: TargetStrategy, user: u32, roster: &Roster) -> Vec<CharacterId> {
        let history = ActionHistory::new();
        let mut rng = ScriptedRandom::new();
        strategy.resolve(CharacterId(user), None, roster, &history, &mut rng)
    }

    #[test]
    fn enemy_strategies_skip_teammates_and_the_dead() {
        let mut roster = roster();
        assert_eq!(
            resolve(TargetStrategy::AllEnemies, 0, &roster),
            vec![CharacterId(3), CharacterId(4)]
        );

        roster.get_mut(CharacterId(3)).unwrap().take_damage(80);
        assert_eq!(
            resolve(TargetStrategy::AllEnemies, 0, &roster),
            vec![CharacterId(4)]
        );
        assert_eq!(
            resolve(TargetStrategy::FirstEnemy, 0, &roster),
            vec![CharacterId(4)]
        );
    }

    #[test]
    fn team_strategies_include_the_user() {
        let roster = roster();
        assert_eq!(
            resolve(TargetStrategy::Team, 1, &roster),
            vec![CharacterId(0), CharacterId(1), CharacterId(2)]
        );
        assert_eq!(
            resolve(TargetStrategy::FirstAlly, 3, &roster),
            vec![CharacterId(3)]
        );
        assert_eq!(resolve(TargetStrategy::User, 2, &roster), vec![CharacterId(2)]);
    }

    #[test]
    fn chosen_enemy_is_dropped_once_dead() {
        let mut roster = roster();
        let history = ActionHistory::new();
        let mut rng = ScriptedRandom::new();
        let chosen = Some(CharacterId(4));

        let targets = TargetStrategy::ChosenEnemy.resolve(
            CharacterId(0),
            chosen,
            &roster,
            &history,
            &mut rng,
        );
        assert_eq!(targets, vec![CharacterId(4)]);

        roster.get_mut(CharacterId(4)).unwrap().take_damage(60);
        let targets = TargetStrategy::ChosenEnemy.resolve(
            CharacterId(0),
            chosen,
            &roster,
            &history,
            &mut rng,
        );
        assert!(targets.is_empty());
    }

    #[test]
    fn random_other_draws_from_everyone_but_the_user() {
        let roster = roster();
        let history = ActionHistory::new();
        // Others of Mage in roster order: Warrior, Bard, Rogue, Thief
        let mut rng = ScriptedRandom::new().with_indices([2]);

        let targets = TargetStrategy::RandomOther.resolve(
            CharacterId(2),
            None,
            &roster,
            &history,
            &mut rng,
        );
        assert_eq!(targets, vec![CharacterId(3)]);
    }

    #[test]
    fn last_attacker_follows_damage_history() {
        let roster = roster();
        let mut history = ActionHistory::new();
        let mut rng = ScriptedRandom::new();

        assert!(
            TargetStrategy::LastAttacker
                .resolve(CharacterId(0), None, &roster, &history, &mut rng)
                .is_empty()
        );

        history.record(HistoryEntry::Action(ActionRecord {
            round: 1,
            user: CharacterId(4),
            source: ActionSource::Move { move_index: 0 },
            kind: ActionKind::Damage,
            target: CharacterId(0),
            protected: false,
            value: EffectValue::Damage {
                power: 20,
                amount: 15,
                remaining_health: 85,
            },
        }));

        assert_eq!(
            TargetStrategy::LastAttacker.resolve(CharacterId(0), None, &roster, &history, &mut rng),
            vec![CharacterId(4)]
        );
    }

    #[test]
    fn strategies_parse_from_snake_case() {
        assert_eq!(
            "last_attacker".parse::<TargetStrategy>().unwrap(),
            TargetStrategy::LastAttacker
        );
        assert_eq!(TargetStrategy::AllEnemies.to_string(), "all_enemies");
    }
}
