//! Shared fixtures for unit tests.

use crate::action::{Action, DamagePower, TargetStrategy};
use crate::character::{Character, RandomMoveChooser};
use crate::moves::{Move, MoveSet};
use crate::stats::StatSet;

/// A 1/1/1 character whose only move jabs a chosen enemy for 1.
pub(crate) fn fighter(name: &str, team: &str, health: u32) -> Character {
    let jab = Move::new(
        "Jab",
        99,
        vec![Action::damage(
            TargetStrategy::ChosenEnemy,
            DamagePower::Absolute(1),
        )],
    );
    Character::new(
        name,
        team,
        health,
        StatSet::new(1, 1, 1),
        MoveSet::new(vec![jab]),
        Box::new(RandomMoveChooser),
    )
}
