//! Invariants checked after every step of randomly seeded battles.

use std::collections::HashMap;

use battle_core::{
    Action, BattleConfig, BattleEvent, Character, CharacterId, DamagePower, EventLog, EventSink,
    HealAmount, Item, Move, MoveSet, PowerTransform, RandomMoveChooser, Roster, SeededRandom,
    StatKind, StatModifier, StatSet, SuccessRule, TargetStrategy, TurnBasedBattle,
};
use proptest::prelude::*;

fn automated(name: &str, team: &str, health: u32, stats: StatSet, moves: Vec<Move>) -> Character {
    Character::new(
        name,
        team,
        health,
        stats,
        MoveSet::new(moves),
        Box::new(RandomMoveChooser),
    )
}

fn roster() -> Vec<Character> {
    let strike = Move::new(
        "Strike",
        99,
        vec![Action::damage(TargetStrategy::ChosenEnemy, DamagePower::Base(20))],
    )
    .with_success(SuccessRule::DecreasesWithUses {
        start: 100,
        step: 25,
        floor: 10,
        on_fail: battle_core::MoveUseResult::Failure,
    });
    let jab = Move::new(
        "Jab",
        3,
        vec![Action::damage(
            TargetStrategy::ChosenEnemy,
            DamagePower::Escalating { start: 10, step: 5 },
        )],
    )
    .with_success(SuccessRule::Accuracy(80));
    let retaliate = Move::new(
        "Retaliate",
        2,
        vec![Action::damage(
            TargetStrategy::LastAttacker,
            DamagePower::PercentageOfLastReceived(150),
        )],
    );
    let restore = Move::new(
        "Restore",
        4,
        vec![
            Action::heal(TargetStrategy::User, HealAmount::Absolute(20)),
            Action::protect_limit_change(TargetStrategy::User, 1),
        ],
    );
    let music = Move::new(
        "Play Music",
        99,
        vec![Action::damage(TargetStrategy::AllEnemies, DamagePower::Absolute(5))],
    );
    let bolt = Move::new(
        "Lightning Bolt",
        5,
        vec![Action::damage(
            TargetStrategy::FirstEnemy,
            DamagePower::PercentageOfTargetHealth(30),
        )],
    )
    .with_success(SuccessRule::Accuracy(70));
    let meditate = Move::new(
        "Meditate",
        5,
        vec![Action::buff(
            TargetStrategy::Team,
            vec![StatModifier::raise(StatKind::Defence, 10)],
        )],
    );
    let refresh = Move::new(
        "Refresh",
        5,
        vec![Action::heal(TargetStrategy::User, HealAmount::Percentage(30))],
    );
    let protect = Move::new("Protect", 5, vec![Action::protect(TargetStrategy::FirstAlly)])
        .with_priority(2);
    let stab = Move::new(
        "Stab",
        99,
        vec![Action::damage(TargetStrategy::RandomOther, DamagePower::Absolute(8))],
    );

    vec![
        automated(
            "Warrior",
            "a",
            100,
            StatSet::new(5, 4, 4),
            vec![strike, jab, retaliate, restore],
        )
        .with_item(Item::new("Might Relic").with_end_of_turn(Action::buff(
            TargetStrategy::User,
            vec![StatModifier::raise(StatKind::Attack, 5)],
        ))),
        automated("Bard", "a", 100, StatSet::new(4, 3, 4), vec![music])
            .with_item(Item::new("Capo").with_power_transform(PowerTransform::Add(1))),
        automated(
            "Mage",
            "b",
            100,
            StatSet::new(6, 3, 5),
            vec![bolt, meditate, refresh, stab.clone()],
        )
        .with_item(Item::new("Rolling Wave").with_start_of_turn(Action::damage(
            TargetStrategy::RandomOther,
            DamagePower::Absolute(6),
        ))),
        automated("Rogue", "b", 80, StatSet::new(3, 2, 3), vec![protect, stab]),
    ]
}

/// Records a violation whenever health or use counts misbehave.
#[derive(Default)]
struct InvariantSink {
    uses: HashMap<(CharacterId, usize), u32>,
    violations: Vec<String>,
}

impl InvariantSink {
    fn check(&mut self, event: &BattleEvent, roster: &Roster) {
        for character in roster.iter() {
            if character.current_health() > character.max_health() {
                self.violations
                    .push(format!("{} above max health", character.name()));
            }
            if character.is_dead() != (character.current_health() == 0) {
                self.violations
                    .push(format!("{} dead flag out of sync", character.name()));
            }

            for (index, mv) in character.moves().iter().enumerate() {
                let key = (character.id(), index);
                let remaining = mv.remaining_uses();
                let previous = self.uses.insert(key, remaining).unwrap_or(mv.max_uses);

                let used_now = matches!(
                    event,
                    BattleEvent::MoveUsed(mu) if mu.user() == character.id() && mu.move_index() == index
                );
                let expected = if used_now { previous - 1 } else { previous };
                if remaining != expected {
                    self.violations.push(format!(
                        "{} {}: expected {expected} uses left, found {remaining}",
                        character.name(),
                        mv.name
                    ));
                }
            }
        }
    }
}

impl EventSink for InvariantSink {
    fn handle(&mut self, event: &BattleEvent, roster: &Roster) {
        self.check(event, roster);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn health_and_uses_stay_consistent(seed in any::<u64>()) {
        let mut sink = InvariantSink::default();
        let mut battle = TurnBasedBattle::new(roster(), SeededRandom::new(seed), &mut sink)
            .expect("battle should build")
            .with_config(BattleConfig::new().with_round_limit(40));

        let outcome = battle.start();
        prop_assert!(outcome.is_ok(), "{:?}", outcome);
        drop(battle);

        prop_assert!(sink.violations.is_empty(), "{:?}", sink.violations);
    }

    #[test]
    fn same_seed_replays_identically(seed in any::<u64>()) {
        let run = |seed: u64| {
            let mut battle = TurnBasedBattle::new(roster(), SeededRandom::new(seed), EventLog::new())
                .expect("battle should build")
                .with_config(BattleConfig::new().with_round_limit(40));
            let outcome = battle.start().expect("battle should run");
            (outcome, battle.into_sink().into_events())
        };

        prop_assert_eq!(run(seed), run(seed));
    }
}
