//! Heal effect implementation.

use crate::action::execute::EffectContext;
use crate::action::result::EffectValue;

use super::percent_of;

/// How much a heal restores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealAmount {
    /// Fixed amount of health.
    Absolute(u32),
    /// Percentage of the target's max health.
    Percentage(u32),
}

/// Restore health to target, never above max health.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HealEffect {
    pub amount: HealAmount,
}

impl HealEffect {
    pub fn new(amount: HealAmount) -> Self {
        Self { amount }
    }

    pub(crate) fn apply(&self, ctx: &mut EffectContext<'_>) -> EffectValue {
        let Some(target) = ctx.roster.get_mut(ctx.target) else {
            return EffectValue::Suppressed;
        };

        let planned = match self.amount {
            HealAmount::Absolute(amount) => amount,
            HealAmount::Percentage(percent) => percent_of(target.max_health(), percent),
        };
        let amount = target.heal(planned);

        tracing::trace!(target_name = %target.name(), planned, amount, "heal applied");

        EffectValue::Heal {
            amount,
            health: target.current_health(),
        }
    }
}
