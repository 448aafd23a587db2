//! Battle participants.
//!
//! A [`Character`] carries identity, health, stats, moves, an optional item,
//! its transient protection state and its move-choice capability. State
//! changes during a battle go through the crate-private mutators used by the
//! action effects and the scheduler.

mod controller;
mod item;

pub use controller::{
    MoveChoice, MoveChooser, RandomMoveChooser, TargetSelector, UserInput, UserMoveChooser,
};
pub use item::{Item, ItemTrigger};

use std::fmt;

use crate::config::BattleConfig;
use crate::engine::MoveUse;
use crate::moves::MoveSet;
use crate::rng::BattleRandom;
use crate::roster::{CharacterId, Team};
use crate::stats::StatSet;

/// Current and max health. `current` never exceeds `max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Remove up to `amount`, returning what was actually removed.
    fn reduce(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.current);
        self.current -= dealt;
        dealt
    }

    /// Restore up to `amount`, returning what was actually restored.
    fn restore(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max - self.current);
        self.current += restored;
        restored
    }
}

/// Protection currently held by a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Protection {
    pub protector: CharacterId,
    pub granted_round: u32,
}

pub struct Character {
    id: CharacterId,
    name: String,
    team: Team,
    health: Health,
    stats: StatSet,
    moves: MoveSet,
    item: Option<Item>,
    protection: Option<Protection>,
    protect_limit: u32,
    controller: Box<dyn MoveChooser>,
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        team: impl Into<Team>,
        max_health: u32,
        stats: StatSet,
        moves: MoveSet,
        controller: Box<dyn MoveChooser>,
    ) -> Self {
        Self {
            id: CharacterId::default(),
            name: name.into(),
            team: team.into(),
            health: Health::new(max_health),
            stats,
            moves,
            item: None,
            protection: None,
            protect_limit: BattleConfig::DEFAULT_PROTECT_LIMIT,
            controller,
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.item = Some(item);
        self
    }

    pub fn with_protect_limit(mut self, limit: u32) -> Self {
        self.protect_limit = limit;
        self
    }

    // ===== identity =====

    /// Position in the roster. Only meaningful once the roster is built.
    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: CharacterId) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    // ===== health =====

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn current_health(&self) -> u32 {
        self.health.current()
    }

    pub fn max_health(&self) -> u32 {
        self.health.max()
    }

    pub fn is_alive(&self) -> bool {
        self.health.current() > 0
    }

    pub fn is_dead(&self) -> bool {
        !self.is_alive()
    }

    pub(crate) fn take_damage(&mut self, amount: u32) -> u32 {
        self.health.reduce(amount)
    }

    pub(crate) fn heal(&mut self, amount: u32) -> u32 {
        self.health.restore(amount)
    }

    // ===== stats, moves, item =====

    pub fn stats(&self) -> &StatSet {
        &self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut StatSet {
        &mut self.stats
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub(crate) fn moves_mut(&mut self) -> &mut MoveSet {
        &mut self.moves
    }

    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    /// Equip `item`, returning the previously held one.
    pub fn equip_item(&mut self, item: Item) -> Option<Item> {
        self.item.replace(item)
    }

    pub fn unequip_item(&mut self) -> Option<Item> {
        self.item.take()
    }

    // ===== protection =====

    pub fn protection(&self) -> Option<Protection> {
        self.protection
    }

    pub fn is_protected(&self) -> bool {
        self.protection.is_some()
    }

    pub fn protect_limit(&self) -> u32 {
        self.protect_limit
    }

    pub(crate) fn protect(&mut self, protection: Protection) {
        self.protection = Some(protection);
    }

    pub(crate) fn take_protection(&mut self) -> Option<Protection> {
        self.protection.take()
    }

    /// Clear protection granted before `round`.
    pub(crate) fn expire_protection(&mut self, round: u32) -> Option<Protection> {
        if self.protection.is_some_and(|p| p.granted_round < round) {
            self.protection.take()
        } else {
            None
        }
    }

    /// Spend one protect charge. Returns false if none are left.
    pub(crate) fn spend_protect_charge(&mut self) -> bool {
        if self.protect_limit == 0 {
            return false;
        }
        self.protect_limit -= 1;
        true
    }

    /// Add `amount` to the protect limit, floored at zero. Returns the change applied.
    pub(crate) fn adjust_protect_limit(&mut self, amount: i32) -> i32 {
        let before = self.protect_limit;
        self.protect_limit = before.saturating_add_signed(amount);
        self.protect_limit as i32 - before as i32
    }

    // ===== move choice =====

    /// True if the move exists, has uses left, and is not a Protect move
    /// while the protect limit is spent.
    pub fn can_use_move(&self, index: usize) -> bool {
        self.moves
            .get(index)
            .is_some_and(|mv| mv.can_use() && !(mv.has_protect() && self.protect_limit == 0))
    }

    pub fn usable_move_indices(&self) -> Vec<usize> {
        (0..self.moves.len())
            .filter(|&index| self.can_use_move(index))
            .collect()
    }

    pub fn has_usable_move(&self) -> bool {
        (0..self.moves.len()).any(|index| self.can_use_move(index))
    }

    /// Ask the controller for this round's move.
    ///
    /// Returns `None` if the controller yields nothing usable.
    pub fn choose_move(
        &self,
        others: &[&Character],
        rng: &mut dyn BattleRandom,
    ) -> Option<MoveUse> {
        let choice = self.controller.choose_move(self, others, rng)?;
        if !self.can_use_move(choice.move_index) {
            return None;
        }
        let mv = self.moves.get(choice.move_index)?;

        Some(MoveUse::new(
            self.id,
            choice,
            mv,
            others.iter().map(|c| c.id()).collect(),
        ))
    }

    /// `Name: current/max HP`
    pub fn summary(&self) -> String {
        format!(
            "{}: {}/{} HP",
            self.name,
            self.health.current(),
            self.health.max()
        )
    }
}

impl fmt::Debug for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Character")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("team", &self.team)
            .field("health", &self.health)
            .field("stats", &self.stats)
            .field("moves", &self.moves)
            .field("item", &self.item)
            .field("protection", &self.protection)
            .field("protect_limit", &self.protect_limit)
            .finish_non_exhaustive()
    }
}
