//! Held items.

use crate::action::{Action, PowerTransform};

/// Turn boundary at which an item's action fires.
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
pub enum ItemTrigger {
    StartOfTurn,
    EndOfTurn,
}

/// Equipment with optional turn-boundary actions and an outgoing damage transform.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Item {
    pub name: String,
    pub description: String,
    pub start_of_turn: Option<Action>,
    pub end_of_turn: Option<Action>,
    /// Applied to the holder's damage power before conversion to health.
    pub power_transform: Option<PowerTransform>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_start_of_turn(mut self, action: Action) -> Self {
        self.start_of_turn = Some(action);
        self
    }

    pub fn with_end_of_turn(mut self, action: Action) -> Self {
        self.end_of_turn = Some(action);
        self
    }

    pub fn with_power_transform(mut self, transform: PowerTransform) -> Self {
        self.power_transform = Some(transform);
        self
    }

    pub fn action(&self, trigger: ItemTrigger) -> Option<&Action> {
        match trigger {
            ItemTrigger::StartOfTurn => self.start_of_turn.as_ref(),
            ItemTrigger::EndOfTurn => self.end_of_turn.as_ref(),
        }
    }

    /// `Name: description`
    pub fn summary(&self) -> String {
        format!("{}: {}", self.name, self.description)
    }
}
