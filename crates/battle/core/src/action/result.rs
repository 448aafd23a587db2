//! Outcomes of executed actions.

use crate::roster::CharacterId;

use super::ActionKind;
use super::effect::StatModifier;

/// What an effect actually did to one target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectValue {
    /// `power` is the post-transform power, `amount` the health removed.
    Damage {
        power: u32,
        amount: u32,
        remaining_health: u32,
    },
    Heal {
        amount: u32,
        health: u32,
    },
    Buff {
        changes: Vec<StatModifier>,
    },
    Protect {
        protector: CharacterId,
    },
    /// `delta` is the change actually applied after flooring at zero.
    ProtectLimitChange {
        delta: i32,
        limit: u32,
    },
    /// Nothing was applied (blocked by protection, or the target left the roster).
    Suppressed,
}

impl EffectValue {
    /// Health removed, if this was damage.
    pub fn damage_dealt(&self) -> Option<u32> {
        match self {
            Self::Damage { amount, .. } => Some(*amount),
            _ => None,
        }
    }
}

/// Outcome of an action against one target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetResult {
    pub target: CharacterId,
    /// The target's protection absorbed the action.
    pub protected: bool,
    pub success: bool,
    pub value: EffectValue,
}

impl TargetResult {
    pub(crate) fn applied(target: CharacterId, value: EffectValue) -> Self {
        Self {
            target,
            protected: false,
            success: true,
            value,
        }
    }

    pub(crate) fn protected(target: CharacterId) -> Self {
        Self {
            target,
            protected: true,
            success: false,
            value: EffectValue::Suppressed,
        }
    }
}

/// Outcome of one action of a move (or an item).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionResults {
    /// Position of the action within its move or item.
    pub action_index: usize,
    pub kind: ActionKind,
    /// False when the action could not run at all (e.g. no protect charge left).
    pub success: bool,
    pub results: Vec<TargetResult>,
}

impl ActionResults {
    pub(crate) fn failed(action_index: usize, kind: ActionKind) -> Self {
        Self {
            action_index,
            kind,
            success: false,
            results: Vec::new(),
        }
    }

    /// Sum of health removed across all targets.
    pub fn total_damage(&self) -> u32 {
        self.results
            .iter()
            .filter_map(|r| r.value.damage_dealt())
            .sum()
    }

    pub fn any_protected(&self) -> bool {
        self.results.iter().any(|r| r.protected)
    }

    pub fn targets(&self) -> impl Iterator<Item = CharacterId> + '_ {
        self.results.iter().map(|r| r.target)
    }
}
