//! Damage effect implementation.

use crate::action::execute::{ActionSource, EffectContext};
use crate::action::result::EffectValue;
use crate::stats::StatKind;

use super::percent_of;

/// Where a damage action gets its power from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamagePower {
    /// Exactly this much health, stats ignored.
    Absolute(u32),

    /// Base power scaled by the user's attack against the target's defence.
    Base(u32),

    /// Base power that grows by `step` for every consecutive successful use
    /// of the move: `start + step × (k - 1)` on the k-th use in a row.
    Escalating { start: u32, step: u32 },

    /// Percentage of the target's current health.
    PercentageOfTargetHealth(u32),

    /// Percentage of the last damage the user received (retaliation).
    PercentageOfLastReceived(u32),
}

impl DamagePower {
    /// True if the power is converted through attack and defence.
    pub fn is_stat_scaled(&self) -> bool {
        matches!(self, Self::Base(_) | Self::Escalating { .. })
    }

    /// Raw power before any item transform.
    fn resolve(&self, ctx: &EffectContext<'_>) -> u32 {
        match *self {
            Self::Absolute(power) | Self::Base(power) => power,
            Self::Escalating { start, step } => {
                // The current use is already in history, so a fresh streak counts 1
                let streak = match ctx.source {
                    ActionSource::Move { move_index } => ctx
                        .history
                        .consecutive_successes(ctx.user, move_index)
                        .max(1),
                    ActionSource::Item(_) => 1,
                };
                start.saturating_add(step.saturating_mul(streak - 1))
            }
            Self::PercentageOfTargetHealth(percent) => ctx
                .roster
                .get(ctx.target)
                .map(|target| percent_of(target.current_health(), percent))
                .unwrap_or(0),
            Self::PercentageOfLastReceived(percent) => ctx
                .history
                .last_damage_received(ctx.user)
                .map(|received| percent_of(received.amount, percent))
                .unwrap_or(0),
        }
    }
}

/// Transform an item applies to its holder's outgoing damage power.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerTransform {
    /// Add a signed amount (floored at zero).
    Add(i32),
    /// Scale by a percentage (150 = ×1.5).
    Percent(u32),
}

impl PowerTransform {
    pub fn apply(&self, power: u32) -> u32 {
        match *self {
            Self::Add(amount) => (power as i64 + amount as i64).clamp(0, u32::MAX as i64) as u32,
            Self::Percent(percent) => percent_of(power, percent),
        }
    }
}

/// Deal damage to target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DamageEffect {
    pub power: DamagePower,
}

impl DamageEffect {
    pub fn new(power: DamagePower) -> Self {
        Self { power }
    }

    /// Apply damage to target.
    pub(crate) fn apply(&self, ctx: &mut EffectContext<'_>) -> EffectValue {
        // 1. Resolve raw power
        let raw = self.power.resolve(ctx);

        // 2. Let the user's item transform it, and read the user's attack
        let (power, attack) = match ctx.roster.get(ctx.user) {
            Some(user) => {
                let power = user
                    .item()
                    .and_then(|item| item.power_transform)
                    .map_or(raw, |transform| transform.apply(raw));
                (power, user.stats().effective(StatKind::Attack))
            }
            None => (raw, 0.0),
        };

        let Some(target) = ctx.roster.get_mut(ctx.target) else {
            return EffectValue::Suppressed;
        };

        // 3. Convert power to a health deduction
        let planned = if self.power.is_stat_scaled() {
            let defence = target.stats().effective(StatKind::Defence).max(1.0);
            let scaled = (power as f64 * attack / defence).round();
            (scaled.min(u32::MAX as f64) as u32).max(ctx.config.minimum_scaled_damage)
        } else {
            power
        };

        // 4. Apply, capped at current health
        let amount = target.take_damage(planned);

        tracing::trace!(
            defender = %target.name(),
            power,
            amount,
            remaining = target.current_health(),
            "damage applied"
        );

        EffectValue::Damage {
            power,
            amount,
            remaining_health: target.current_health(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_transform_floors_at_zero() {
        assert_eq!(PowerTransform::Add(1).apply(5), 6);
        assert_eq!(PowerTransform::Add(-10).apply(5), 0);
    }

    #[test]
    fn percent_transform_rounds() {
        assert_eq!(PowerTransform::Percent(150).apply(5), 8); // 7.5
        assert_eq!(PowerTransform::Percent(50).apply(20), 10);
    }

    #[test]
    fn only_base_and_escalating_are_stat_scaled() {
        assert!(DamagePower::Base(20).is_stat_scaled());
        assert!(DamagePower::Escalating { start: 20, step: 5 }.is_stat_scaled());
        assert!(!DamagePower::Absolute(20).is_stat_scaled());
        assert!(!DamagePower::PercentageOfTargetHealth(30).is_stat_scaled());
        assert!(!DamagePower::PercentageOfLastReceived(150).is_stat_scaled());
    }
}
