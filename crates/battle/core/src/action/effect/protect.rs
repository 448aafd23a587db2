//! Protection and protect-limit effects.
//!
//! Spending the user's protect charge happens once per action in the
//! executor; these effects only touch the target.

use crate::action::execute::EffectContext;
use crate::action::result::EffectValue;
use crate::character::Protection;

/// Shield the target from the next opposing action aimed at it.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ProtectEffect;

impl ProtectEffect {
    pub(crate) fn apply(&self, ctx: &mut EffectContext<'_>) -> EffectValue {
        let Some(target) = ctx.roster.get_mut(ctx.target) else {
            return EffectValue::Suppressed;
        };

        target.protect(Protection {
            protector: ctx.user,
            granted_round: ctx.round,
        });

        EffectValue::Protect {
            protector: ctx.user,
        }
    }
}

/// Change how many more times the target may use Protect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProtectLimitChangeEffect {
    pub amount: i32,
}

impl ProtectLimitChangeEffect {
    pub fn new(amount: i32) -> Self {
        Self { amount }
    }

    pub(crate) fn apply(&self, ctx: &mut EffectContext<'_>) -> EffectValue {
        let Some(target) = ctx.roster.get_mut(ctx.target) else {
            return EffectValue::Suppressed;
        };

        let delta = target.adjust_protect_limit(self.amount);
        tracing::trace!(
            target_name = %target.name(),
            delta,
            limit = target.protect_limit(),
            "protect limit changed"
        );

        EffectValue::ProtectLimitChange {
            delta,
            limit: target.protect_limit(),
        }
    }
}
