//! Append-only record of everything resolved during a battle.
//!
//! The history backs every rule that depends on the past:
//!
//! - retaliation reads the last damage a character received
//! - escalating power and decaying success read consecutive successful uses
//!
//! Two entry kinds are interleaved in chronological order. A [`MoveRecord`]
//! is written once per processor invocation right after the success rule is
//! evaluated; an [`ActionRecord`] is written once per resolved target,
//! including targets whose protection absorbed the action. A Protect that
//! finds no charges left is recorded once, against its user, as
//! [`EffectValue::Suppressed`].

use crate::action::{ActionKind, ActionSource, EffectValue};
use crate::moves::MoveUseResult;
use crate::roster::CharacterId;

/// A move invocation and its success-rule outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub round: u32,
    pub user: CharacterId,
    pub move_index: usize,
    pub move_name: String,
    pub result: MoveUseResult,
}

/// One action resolved against one target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRecord {
    pub round: u32,
    pub user: CharacterId,
    pub source: ActionSource,
    pub kind: ActionKind,
    pub target: CharacterId,
    pub protected: bool,
    pub value: EffectValue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HistoryEntry {
    Move(MoveRecord),
    Action(ActionRecord),
}

/// Result of [`ActionHistory::last_damage_received`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageReceived {
    pub attacker: CharacterId,
    pub amount: u32,
    pub round: u32,
}

#[derive(Clone, Debug, Default)]
pub struct ActionHistory {
    entries: Vec<HistoryEntry>,
}

impl ActionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move records of `user`, oldest first.
    pub fn moves_by(&self, user: CharacterId) -> impl DoubleEndedIterator<Item = &MoveRecord> {
        self.entries.iter().filter_map(move |entry| match entry {
            HistoryEntry::Move(record) if record.user == user => Some(record),
            _ => None,
        })
    }

    /// Action records aimed at `target`, oldest first.
    pub fn actions_against(
        &self,
        target: CharacterId,
    ) -> impl DoubleEndedIterator<Item = &ActionRecord> {
        self.entries.iter().filter_map(move |entry| match entry {
            HistoryEntry::Action(record) if record.target == target => Some(record),
            _ => None,
        })
    }

    /// Most recent damage `target` actually took, and who dealt it.
    ///
    /// Protected attempts dealt nothing and are ignored. Damage the character
    /// dealt to itself counts.
    pub fn last_damage_received(&self, target: CharacterId) -> Option<DamageReceived> {
        self.actions_against(target).rev().find_map(|record| {
            if record.protected || record.kind != ActionKind::Damage {
                return None;
            }
            record.value.damage_dealt().map(|amount| DamageReceived {
                attacker: record.user,
                amount,
                round: record.round,
            })
        })
    }

    /// Number of successful uses of the move at `move_index` by `user` in a
    /// row, counted back from the user's latest move record.
    ///
    /// The streak ends at the first record that is another move or a Miss or
    /// Failure.
    pub fn consecutive_successes(&self, user: CharacterId, move_index: usize) -> u32 {
        self.moves_by(user)
            .rev()
            .take_while(|record| {
                record.move_index == move_index && record.result == MoveUseResult::Success
            })
            .count() as u32
    }
}
