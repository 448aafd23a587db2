//! Action builders.
//!
//! Every action builder shares the targeting vocabulary of [`TargetingBuilder`]
//! and adds the setters of its own effect.

use battle_core::{Action, DamagePower, HealAmount, StatKind, StatModifier, TargetStrategy};

use super::BuildError;

/// Target strategy setters shared by every action builder.
pub trait TargetingBuilder: Sized {
    fn set_target(&mut self, target: TargetStrategy);

    fn targets(mut self, target: TargetStrategy) -> Self {
        self.set_target(target);
        self
    }

    /// The move chooser picks one living enemy.
    fn user_selects_single_enemy(self) -> Self {
        self.targets(TargetStrategy::ChosenEnemy)
    }

    fn targets_enemies(self) -> Self {
        self.targets(TargetStrategy::AllEnemies)
    }

    fn targets_first_enemy(self) -> Self {
        self.targets(TargetStrategy::FirstEnemy)
    }

    fn targets_first_ally(self) -> Self {
        self.targets(TargetStrategy::FirstAlly)
    }

    fn targets_user(self) -> Self {
        self.targets(TargetStrategy::User)
    }

    fn targets_team(self) -> Self {
        self.targets(TargetStrategy::Team)
    }

    fn targets_random_other(self) -> Self {
        self.targets(TargetStrategy::RandomOther)
    }

    /// Hits whoever last damaged the user.
    fn retaliates(self) -> Self {
        self.targets(TargetStrategy::LastAttacker)
    }
}

macro_rules! impl_targeting {
    ($($builder:ty),* $(,)?) => {
        $(
            impl TargetingBuilder for $builder {
                fn set_target(&mut self, target: TargetStrategy) {
                    self.target = Some(target);
                }
            }
        )*
    };
}

impl_targeting!(
    DamageActionBuilder,
    HealActionBuilder,
    BuffActionBuilder,
    ProtectActionBuilder,
    ProtectLimitChangeActionBuilder,
);

fn require<T>(value: Option<T>, builder: &'static str, field: &'static str) -> Result<T, BuildError> {
    value.ok_or(BuildError::missing(builder, field))
}

// ============================================================================
// Damage
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct DamageActionBuilder {
    target: Option<TargetStrategy>,
    power: Option<DamagePower>,
}

impl DamageActionBuilder {
    /// Fixed damage, stats ignored.
    pub fn absolute_damage(mut self, amount: u32) -> Self {
        self.power = Some(DamagePower::Absolute(amount));
        self
    }

    /// Base power scaled by attack against defence.
    pub fn base_power(mut self, power: u32) -> Self {
        self.power = Some(DamagePower::Base(power));
        self
    }

    pub fn base_power_increases_linearly_with_uses(mut self, start: u32, step: u32) -> Self {
        self.power = Some(DamagePower::Escalating { start, step });
        self
    }

    /// Percentage of the target's current health.
    pub fn percentage_damage(mut self, percent: u32) -> Self {
        self.power = Some(DamagePower::PercentageOfTargetHealth(percent));
        self
    }

    pub fn percentage_of_last_received_damage(mut self, percent: u32) -> Self {
        self.power = Some(DamagePower::PercentageOfLastReceived(percent));
        self
    }

    pub fn build(self) -> Result<Action, BuildError> {
        let target = require(self.target, "DamageActionBuilder", "target")?;
        let power = require(self.power, "DamageActionBuilder", "power")?;
        Ok(Action::damage(target, power))
    }
}

// ============================================================================
// Heal
// ============================================================================

#[derive(Clone, Copy, Debug)]
enum HealMode {
    Absolute,
    Percentage,
}

#[derive(Clone, Debug, Default)]
pub struct HealActionBuilder {
    target: Option<TargetStrategy>,
    amount: Option<u32>,
    mode: Option<HealMode>,
}

impl HealActionBuilder {
    pub fn amount(mut self, amount: u32) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Heal exactly `amount` health.
    pub fn absolute_healing(mut self) -> Self {
        self.mode = Some(HealMode::Absolute);
        self
    }

    /// Heal `amount` percent of the target's max health.
    pub fn percentage_healing(mut self) -> Self {
        self.mode = Some(HealMode::Percentage);
        self
    }

    pub fn build(self) -> Result<Action, BuildError> {
        let target = require(self.target, "HealActionBuilder", "target")?;
        let amount = require(self.amount, "HealActionBuilder", "amount")?;
        let amount = match require(self.mode, "HealActionBuilder", "healing mode")? {
            HealMode::Absolute => HealAmount::Absolute(amount),
            HealMode::Percentage => HealAmount::Percentage(amount),
        };
        Ok(Action::heal(target, amount))
    }
}

// ============================================================================
// Buff
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct BuffActionBuilder {
    target: Option<TargetStrategy>,
    modifiers: Vec<StatModifier>,
}

impl BuffActionBuilder {
    pub fn modifier(mut self, modifier: StatModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn raise(self, stat: StatKind, percent: u32) -> Self {
        self.modifier(StatModifier::raise(stat, percent))
    }

    pub fn lower(self, stat: StatKind, percent: u32) -> Self {
        self.modifier(StatModifier::lower(stat, percent))
    }

    pub fn raise_attack(self, percent: u32) -> Self {
        self.raise(StatKind::Attack, percent)
    }

    pub fn raise_defence(self, percent: u32) -> Self {
        self.raise(StatKind::Defence, percent)
    }

    pub fn raise_speed(self, percent: u32) -> Self {
        self.raise(StatKind::Speed, percent)
    }

    pub fn build(self) -> Result<Action, BuildError> {
        let target = require(self.target, "BuffActionBuilder", "target")?;
        if self.modifiers.is_empty() {
            return Err(BuildError::missing("BuffActionBuilder", "modifiers"));
        }
        Ok(Action::buff(target, self.modifiers))
    }
}

// ============================================================================
// Protect
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct ProtectActionBuilder {
    target: Option<TargetStrategy>,
}

impl ProtectActionBuilder {
    pub fn build(self) -> Result<Action, BuildError> {
        let target = require(self.target, "ProtectActionBuilder", "target")?;
        Ok(Action::protect(target))
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProtectLimitChangeActionBuilder {
    target: Option<TargetStrategy>,
    amount: Option<i32>,
}

impl ProtectLimitChangeActionBuilder {
    /// Signed change to the target's protect limit.
    pub fn amount(mut self, amount: i32) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn build(self) -> Result<Action, BuildError> {
        let target = require(self.target, "ProtectLimitChangeActionBuilder", "target")?;
        let amount = require(self.amount, "ProtectLimitChangeActionBuilder", "amount")?;
        Ok(Action::protect_limit_change(target, amount))
    }
}
