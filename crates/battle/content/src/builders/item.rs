//! Item builder.

use battle_core::{Action, Item, PowerTransform};

use super::BuildError;

#[derive(Clone, Debug, Default)]
pub struct ItemBuilder {
    name: Option<String>,
    description: String,
    start_of_turn: Option<Action>,
    end_of_turn: Option<Action>,
    power_transform: Option<PowerTransform>,
}

impl ItemBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Action run for the holder at the start of every round.
    pub fn start_turn_action(mut self, action: Action) -> Self {
        self.start_of_turn = Some(action);
        self
    }

    /// Action run for the holder at the end of every round.
    pub fn end_turn_action(mut self, action: Action) -> Self {
        self.end_of_turn = Some(action);
        self
    }

    /// Transform applied to the power of every damage action the holder uses.
    pub fn damage_power_transform(mut self, transform: PowerTransform) -> Self {
        self.power_transform = Some(transform);
        self
    }

    pub fn build(self) -> Result<Item, BuildError> {
        let name = self.name.ok_or(BuildError::missing("ItemBuilder", "name"))?;

        let mut item = Item::new(name).with_description(self.description);
        if let Some(action) = self.start_of_turn {
            item = item.with_start_of_turn(action);
        }
        if let Some(action) = self.end_of_turn {
            item = item.with_end_of_turn(action);
        }
        if let Some(transform) = self.power_transform {
            item = item.with_power_transform(transform);
        }
        Ok(item)
    }
}
