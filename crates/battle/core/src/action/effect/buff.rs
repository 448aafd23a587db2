//! Stat buff effect implementation.

use crate::action::execute::EffectContext;
use crate::action::result::EffectValue;
use crate::stats::StatKind;

/// Signed percentage change to one stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifier {
    pub stat: StatKind,
    pub percent: i32,
}

impl StatModifier {
    pub fn new(stat: StatKind, percent: i32) -> Self {
        Self { stat, percent }
    }

    pub fn raise(stat: StatKind, percent: u32) -> Self {
        Self::new(stat, percent as i32)
    }

    pub fn lower(stat: StatKind, percent: u32) -> Self {
        Self::new(stat, -(percent as i32))
    }
}

/// Add permanent percentage modifiers to the target's stats.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BuffEffect {
    pub modifiers: Vec<StatModifier>,
}

impl BuffEffect {
    pub fn new(modifiers: Vec<StatModifier>) -> Self {
        Self { modifiers }
    }

    pub(crate) fn apply(&self, ctx: &mut EffectContext<'_>) -> EffectValue {
        let Some(target) = ctx.roster.get_mut(ctx.target) else {
            return EffectValue::Suppressed;
        };

        for modifier in &self.modifiers {
            target
                .stats_mut()
                .get_mut(modifier.stat)
                .add_modifier(modifier.percent);
            tracing::trace!(
                target_name = %target.name(),
                stat = %modifier.stat,
                percent = modifier.percent,
                "stat modifier added"
            );
        }

        EffectValue::Buff {
            changes: self.modifiers.clone(),
        }
    }
}
