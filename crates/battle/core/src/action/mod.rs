//! Action taxonomy: the typed effects a move or an item is made of.
//!
//! An [`Action`] pairs a [`TargetStrategy`] (who it hits) with an [`Effect`]
//! (what it does). The five effect kinds form a closed set so the executor and
//! the presenters can match on them exhaustively.
//!
//! ## Modules
//!
//! - `targeting`: target strategies and their resolution against the live roster
//! - `effect`: effect computations (damage, heal, buff, protect, protect limit)
//! - `result`: per-action and per-target outcomes
//! - `execute`: the per-action pipeline shared by moves and items

mod effect;
mod execute;
mod result;
mod targeting;

pub use effect::{
    BuffEffect, DamageEffect, DamagePower, Effect, HealAmount, HealEffect, PowerTransform,
    ProtectLimitChangeEffect, StatModifier,
};
pub use result::{ActionResults, EffectValue, TargetResult};
pub use execute::ActionSource;
pub use targeting::TargetStrategy;

pub(crate) use execute::{ActionContext, execute_action};

/// Discriminant of an [`Effect`], used by history queries and reporting.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    Damage,
    Heal,
    Buff,
    Protect,
    ProtectLimitChange,
}

/// One typed effect aimed by a target strategy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub target: TargetStrategy,
    pub effect: Effect,
}

impl Action {
    pub fn new(target: TargetStrategy, effect: Effect) -> Self {
        Self { target, effect }
    }

    pub fn damage(target: TargetStrategy, power: DamagePower) -> Self {
        Self::new(target, Effect::Damage(DamageEffect::new(power)))
    }

    pub fn heal(target: TargetStrategy, amount: HealAmount) -> Self {
        Self::new(target, Effect::Heal(HealEffect::new(amount)))
    }

    pub fn buff(target: TargetStrategy, modifiers: Vec<StatModifier>) -> Self {
        Self::new(target, Effect::Buff(BuffEffect::new(modifiers)))
    }

    pub fn protect(target: TargetStrategy) -> Self {
        Self::new(target, Effect::Protect)
    }

    pub fn protect_limit_change(target: TargetStrategy, amount: i32) -> Self {
        Self::new(
            target,
            Effect::ProtectLimitChange(ProtectLimitChangeEffect::new(amount)),
        )
    }

    pub fn kind(&self) -> ActionKind {
        self.effect.kind()
    }

    /// True if the target has to be picked by the move chooser.
    pub fn needs_chosen_target(&self) -> bool {
        self.target.is_chosen()
    }
}
