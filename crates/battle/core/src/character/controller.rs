//! Move-choice capabilities.
//!
//! A character delegates its per-round decision to a [`MoveChooser`]. The
//! engine ships a user-driven chooser (backed by a [`UserInput`]) and an
//! automated one; the scheduler only ever sees `Box<dyn MoveChooser>`.

use crate::rng::BattleRandom;
use crate::roster::CharacterId;

use super::Character;

/// A committed move plus its externally chosen targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveChoice {
    pub move_index: usize,
    /// One slot per action of the move. `Some` only for chosen-target actions.
    pub targets: Vec<Option<CharacterId>>,
}

impl MoveChoice {
    /// Build a choice for `move_index`, asking `pick` for each chosen-target
    /// action among the living enemies of `user`.
    ///
    /// `pick` is not called when no enemy is alive.
    pub fn resolve(
        user: &Character,
        move_index: usize,
        others: &[&Character],
        mut pick: impl FnMut(&[&Character]) -> Option<CharacterId>,
    ) -> Self {
        let enemies: Vec<&Character> = others
            .iter()
            .copied()
            .filter(|c| c.is_alive() && c.team() != user.team())
            .collect();

        let targets = user
            .moves()
            .get(move_index)
            .map(|mv| {
                mv.actions
                    .iter()
                    .map(|action| {
                        if action.needs_chosen_target() && !enemies.is_empty() {
                            pick(&enemies)
                        } else {
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            move_index,
            targets,
        }
    }
}

/// Picks one target among candidates.
pub trait TargetSelector {
    fn select_target(&self, candidates: &[&Character]) -> Option<CharacterId>;
}

/// Interactive source of move and target decisions.
pub trait UserInput: TargetSelector {
    /// Index into `user.moves()` of the move to use.
    ///
    /// Implementations keep asking until a usable move is picked.
    fn select_move(&self, user: &Character, others: &[&Character]) -> Option<usize>;
}

/// Per-character move-choice capability.
pub trait MoveChooser {
    /// Return a usable move for `user`, or `None` if it has none.
    fn choose_move(
        &self,
        user: &Character,
        others: &[&Character],
        rng: &mut dyn BattleRandom,
    ) -> Option<MoveChoice>;
}

/// Delegates every decision to a [`UserInput`].
#[derive(Debug)]
pub struct UserMoveChooser<I> {
    input: I,
}

impl<I: UserInput> UserMoveChooser<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &I {
        &self.input
    }
}

impl<I: UserInput> MoveChooser for UserMoveChooser<I> {
    fn choose_move(
        &self,
        user: &Character,
        others: &[&Character],
        _rng: &mut dyn BattleRandom,
    ) -> Option<MoveChoice> {
        let move_index = self.input.select_move(user, others)?;
        if !user.can_use_move(move_index) {
            tracing::warn!(user = %user.name(), move_index, "input selected an unusable move");
            return None;
        }

        Some(MoveChoice::resolve(user, move_index, others, |candidates| {
            self.input.select_target(candidates)
        }))
    }
}

/// Uniform over usable moves; chosen-target actions hit a random living enemy.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomMoveChooser;

impl MoveChooser for RandomMoveChooser {
    fn choose_move(
        &self,
        user: &Character,
        others: &[&Character],
        rng: &mut dyn BattleRandom,
    ) -> Option<MoveChoice> {
        let usable = user.usable_move_indices();
        if usable.is_empty() {
            return None;
        }
        let move_index = usable[rng.choose_index(usable.len())];

        Some(MoveChoice::resolve(user, move_index, others, |candidates| {
            Some(candidates[rng.choose_index(candidates.len())].id())
        }))
    }
}
