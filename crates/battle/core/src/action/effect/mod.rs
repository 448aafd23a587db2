//! Effect kinds and dispatcher.
//!
//! [`Effect`] wraps the concrete effect structs. Each struct computes and
//! applies its own outcome against the target held in the effect context;
//! protection and target liveness are settled by the executor before an
//! effect ever runs.

mod buff;
mod damage;
mod heal;
mod protect;

pub use buff::{BuffEffect, StatModifier};
pub use damage::{DamageEffect, DamagePower, PowerTransform};
pub use heal::{HealAmount, HealEffect};
pub use protect::ProtectLimitChangeEffect;

use protect::ProtectEffect;

use super::ActionKind;
use super::execute::EffectContext;
use super::result::EffectValue;

/// The effect an action applies to each of its targets.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    Damage(DamageEffect),
    Heal(HealEffect),
    Buff(BuffEffect),
    /// Shield the target from the next opposing action aimed at it.
    Protect,
    ProtectLimitChange(ProtectLimitChangeEffect),
}

impl Effect {
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Damage(_) => ActionKind::Damage,
            Self::Heal(_) => ActionKind::Heal,
            Self::Buff(_) => ActionKind::Buff,
            Self::Protect => ActionKind::Protect,
            Self::ProtectLimitChange(_) => ActionKind::ProtectLimitChange,
        }
    }

    /// Apply the effect to `ctx.target` and return what happened.
    pub(crate) fn apply(&self, ctx: &mut EffectContext<'_>) -> EffectValue {
        match self {
            Self::Damage(e) => e.apply(ctx),
            Self::Heal(e) => e.apply(ctx),
            Self::Buff(e) => e.apply(ctx),
            Self::Protect => ProtectEffect.apply(ctx),
            Self::ProtectLimitChange(e) => e.apply(ctx),
        }
    }
}

/// `round(value × percent / 100)`, rounding halves up.
pub(crate) fn percent_of(value: u32, percent: u32) -> u32 {
    let scaled = (value as u64 * percent as u64 + 50) / 100;
    scaled.min(u32::MAX as u64) as u32
}
