//! Character builder.

use battle_core::{
    Character, Item, MoveChooser, MoveSet, RandomMoveChooser, StatSet, Team, UserInput,
    UserMoveChooser,
};

use super::BuildError;

/// Builder for [`Character`].
///
/// Characters are automated unless a controller is set.
#[derive(Default)]
pub struct CharacterBuilder {
    name: Option<String>,
    team: Option<Team>,
    max_health: Option<u32>,
    stats: StatSet,
    moves: MoveSet,
    item: Option<Item>,
    protect_limit: Option<u32>,
    controller: Option<Box<dyn MoveChooser>>,
}

impl CharacterBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn team(mut self, team: impl Into<Team>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn max_health(mut self, max_health: u32) -> Self {
        self.max_health = Some(max_health);
        self
    }

    pub fn stats(mut self, attack: u32, defence: u32, speed: u32) -> Self {
        self.stats = StatSet::new(attack, defence, speed);
        self
    }

    pub fn moves(mut self, moves: MoveSet) -> Self {
        self.moves = moves;
        self
    }

    pub fn item(mut self, item: Item) -> Self {
        self.item = Some(item);
        self
    }

    /// Overrides the default number of Protect charges.
    pub fn protect_limit(mut self, limit: u32) -> Self {
        self.protect_limit = Some(limit);
        self
    }

    /// Moves and targets are asked of `input` every round.
    pub fn user_controlled(self, input: impl UserInput + 'static) -> Self {
        self.controller(UserMoveChooser::new(input))
    }

    pub fn automated(self) -> Self {
        self.controller(RandomMoveChooser)
    }

    pub fn controller(mut self, controller: impl MoveChooser + 'static) -> Self {
        self.controller = Some(Box::new(controller));
        self
    }

    pub fn build(self) -> Result<Character, BuildError> {
        let name = self
            .name
            .ok_or(BuildError::missing("CharacterBuilder", "name"))?;
        let team = self
            .team
            .ok_or(BuildError::missing("CharacterBuilder", "team"))?;
        let max_health = self
            .max_health
            .ok_or(BuildError::missing("CharacterBuilder", "max_health"))?;
        let controller: Box<dyn MoveChooser> = match self.controller {
            Some(controller) => controller,
            None => Box::new(RandomMoveChooser),
        };

        let mut character = Character::new(name, team, max_health, self.stats, self.moves, controller);
        if let Some(item) = self.item {
            character = character.with_item(item);
        }
        if let Some(limit) = self.protect_limit {
            character = character.with_protect_limit(limit);
        }
        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{BattleConfig, StatKind};

    #[test]
    fn builds_an_automated_character_by_default() {
        let rogue = CharacterBuilder::default()
            .name("Rogue")
            .team("b")
            .max_health(80)
            .stats(3, 2, 3)
            .build()
            .expect("rogue");

        assert_eq!(rogue.summary(), "Rogue: 80/80 HP");
        assert_eq!(rogue.team().as_str(), "b");
        assert_eq!(rogue.stats().effective(StatKind::Speed), 3.0);
        assert_eq!(rogue.protect_limit(), BattleConfig::DEFAULT_PROTECT_LIMIT);
        assert!(rogue.item().is_none());
    }

    #[test]
    fn protect_limit_override_is_applied() {
        let tank = CharacterBuilder::default()
            .name("Tank")
            .team("a")
            .max_health(200)
            .protect_limit(3)
            .automated()
            .build()
            .expect("tank");
        assert_eq!(tank.protect_limit(), 3);
    }

    #[test]
    fn missing_health_is_reported() {
        let err = CharacterBuilder::default()
            .name("Ghost")
            .team("a")
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::missing("CharacterBuilder", "max_health"));
    }
}
