#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use battle_core::{
    Action, Character, CharacterId, DamagePower, Move, MoveSet, StatSet, TargetSelector,
    TargetStrategy, UserInput, UserMoveChooser,
};

/// Replays queued move indices; targets are always the first candidate.
///
/// Once the queue is empty it keeps picking the first usable move.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    moves: RefCell<VecDeque<usize>>,
}

impl ScriptedInput {
    pub fn new(moves: impl IntoIterator<Item = usize>) -> Self {
        Self {
            moves: RefCell::new(moves.into_iter().collect()),
        }
    }
}

impl TargetSelector for ScriptedInput {
    fn select_target(&self, candidates: &[&Character]) -> Option<CharacterId> {
        candidates.first().map(|c| c.id())
    }
}

impl UserInput for ScriptedInput {
    fn select_move(&self, user: &Character, _others: &[&Character]) -> Option<usize> {
        self.moves
            .borrow_mut()
            .pop_front()
            .or_else(|| user.usable_move_indices().first().copied())
    }
}

/// Character driven by `ScriptedInput` with neutral 1/1/1 stats.
pub fn scripted(
    name: &str,
    team: &str,
    health: u32,
    moves: Vec<Move>,
    script: impl IntoIterator<Item = usize>,
) -> Character {
    Character::new(
        name,
        team,
        health,
        StatSet::new(1, 1, 1),
        MoveSet::new(moves),
        Box::new(UserMoveChooser::new(ScriptedInput::new(script))),
    )
}

/// Fixed damage to a chosen enemy.
pub fn blast(power: u32) -> Move {
    Move::new(
        "Blast",
        10,
        vec![Action::damage(
            TargetStrategy::ChosenEnemy,
            DamagePower::Absolute(power),
        )],
    )
}

/// A move that does nothing.
pub fn wait() -> Move {
    Move::new("Wait", 99, Vec::new())
}

/// Protect self, going first.
pub fn guard() -> Move {
    Move::new("Guard", 5, vec![Action::protect(TargetStrategy::User)]).with_priority(2)
}

/// Commit `user` to `move_index`, aiming chosen-target actions at `target`.
pub fn commit(
    state: &battle_core::BattleState,
    user: u32,
    move_index: usize,
    target: Option<u32>,
) -> battle_core::MoveUse {
    let character = state.roster.get(CharacterId(user)).expect("user in roster");
    let mv = character.moves().get(move_index).expect("move exists");
    battle_core::MoveUse::new(
        CharacterId(user),
        battle_core::MoveChoice {
            move_index,
            targets: vec![target.map(CharacterId); mv.actions.len()],
        },
        mv,
        state
            .roster
            .living_others(CharacterId(user))
            .map(|c| c.id())
            .collect(),
    )
}
