//! Roster loader.
//!
//! A roster file lists the characters of one battle in roster order:
//!
//! ```text
//! (
//!     characters: [
//!         (
//!             name: "Warrior",
//!             team: "a",
//!             max_health: 100,
//!             stats: (attack: 5, defence: 4, speed: 4),
//!             controller: User,
//!             moves: [
//!                 (
//!                     name: "Sword Strike",
//!                     max_uses: 15,
//!                     priority: 1,
//!                     actions: [(target: ChosenEnemy, effect: Damage(Base(20)))],
//!                 ),
//!             ],
//!         ),
//!     ],
//! )
//! ```
//!
//! Moves and items use the battle-core types directly; only the character
//! shell has its own file format, since a character's controller is not data.

use std::path::Path;

use battle_core::{Character, Item, Move, UserInput};
use serde::{Deserialize, Serialize};

use crate::builders::{CharacterBuilder, MoveSetBuilder};
use crate::loaders::{LoadResult, read_file};

/// Who decides a character's moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerSpec {
    /// Asks the user input supplied to the loader.
    User,
    #[default]
    Automated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSpec {
    pub attack: u32,
    pub defence: u32,
    pub speed: u32,
}

/// One roster entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterSpec {
    pub name: String,
    pub team: String,
    pub max_health: u32,
    pub stats: StatsSpec,
    #[serde(default)]
    pub controller: ControllerSpec,
    pub moves: Vec<Move>,
    #[serde(default)]
    pub item: Option<Item>,
    #[serde(default)]
    pub protect_limit: Option<u32>,
}

impl CharacterSpec {
    /// Build the character, handing `input` to user-controlled entries.
    pub fn build<I>(self, input: &I) -> LoadResult<Character>
    where
        I: UserInput + Clone + 'static,
    {
        if self.max_health == 0 {
            return Err(anyhow::anyhow!(
                "Character '{}' must have positive max_health",
                self.name
            ));
        }

        let moves = self
            .moves
            .into_iter()
            .fold(MoveSetBuilder::default(), MoveSetBuilder::with_move)
            .build();

        let mut builder = CharacterBuilder::default()
            .name(self.name.as_str())
            .team(self.team.as_str())
            .max_health(self.max_health)
            .stats(self.stats.attack, self.stats.defence, self.stats.speed)
            .moves(moves);
        if let Some(item) = self.item {
            builder = builder.item(item);
        }
        if let Some(limit) = self.protect_limit {
            builder = builder.protect_limit(limit);
        }
        builder = match self.controller {
            ControllerSpec::User => builder.user_controlled(input.clone()),
            ControllerSpec::Automated => builder.automated(),
        };

        builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build character '{}': {}", self.name, e))
    }
}

/// Roster file structure for RON files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosterFile {
    pub characters: Vec<CharacterSpec>,
}

/// Loader for battle rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a RosterFile
    /// * `input` - User input cloned into every `User` controlled character
    ///
    /// # Returns
    ///
    /// Returns the characters in file order.
    pub fn load<I>(path: &Path, input: &I) -> LoadResult<Vec<Character>>
    where
        I: UserInput + Clone + 'static,
    {
        let content = read_file(path)?;
        Self::from_str(&content, input)
    }

    pub fn from_str<I>(content: &str, input: &I) -> LoadResult<Vec<Character>>
    where
        I: UserInput + Clone + 'static,
    {
        let file: RosterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        if file.characters.is_empty() {
            return Err(anyhow::anyhow!("Roster must contain at least one character"));
        }

        let characters = file
            .characters
            .into_iter()
            .map(|spec| spec.build(input))
            .collect::<LoadResult<Vec<_>>>()?;

        tracing::debug!(count = characters.len(), "roster loaded");
        Ok(characters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{
        Action, CharacterId, DamagePower, Effect, ScriptedRandom, StatKind,
        TargetSelector, TargetStrategy,
    };

    /// Always the first move and the first candidate.
    #[derive(Clone, Debug)]
    struct FirstChoice;

    impl TargetSelector for FirstChoice {
        fn select_target(&self, candidates: &[&Character]) -> Option<CharacterId> {
            candidates.first().map(|c| c.id())
        }
    }

    impl UserInput for FirstChoice {
        fn select_move(&self, _user: &Character, _others: &[&Character]) -> Option<usize> {
            Some(0)
        }
    }

    const ROSTER: &str = r#"
(
    characters: [
        (
            name: "Warrior",
            team: "a",
            max_health: 100,
            stats: (attack: 5, defence: 4, speed: 4),
            controller: User,
            moves: [
                (
                    name: "Insistent Jab",
                    max_uses: 15,
                    success: Accuracy(100),
                    actions: [
                        (target: ChosenEnemy, effect: Damage(Escalating(start: 20, step: 5))),
                    ],
                ),
            ],
            item: Some((
                name: "Might Relic",
                end_of_turn: Some((target: User, effect: Buff([(stat: Attack, percent: 5)]))),
            )),
        ),
        (
            name: "Rogue",
            team: "b",
            max_health: 80,
            stats: (attack: 3, defence: 2, speed: 3),
            protect_limit: Some(2),
            moves: [
                (
                    name: "Protect",
                    description: "The user protects themself from the next move.",
                    max_uses: 5,
                    priority: 2,
                    actions: [(target: FirstAlly, effect: Protect)],
                ),
            ],
        ),
    ],
)
"#;

    #[test]
    fn parses_characters_in_order() {
        let characters = RosterLoader::from_str(ROSTER, &FirstChoice).expect("roster");
        assert_eq!(characters.len(), 2);

        let warrior = &characters[0];
        assert_eq!(warrior.summary(), "Warrior: 100/100 HP");
        assert_eq!(warrior.stats().effective(StatKind::Attack), 5.0);
        assert_eq!(
            warrior.moves().get(0).expect("jab").actions[0],
            Action::damage(
                TargetStrategy::ChosenEnemy,
                DamagePower::Escalating { start: 20, step: 5 }
            )
        );
        assert_eq!(warrior.item().expect("relic").name, "Might Relic");

        let rogue = &characters[1];
        assert_eq!(rogue.protect_limit(), 2);
        assert_eq!(
            rogue.moves().get(0).expect("protect").actions[0].effect,
            Effect::Protect
        );
        assert!(rogue.item().is_none());
    }

    #[test]
    fn user_entries_are_driven_by_the_input() {
        let characters = RosterLoader::from_str(ROSTER, &FirstChoice).expect("roster");
        let others: Vec<&Character> = characters[1..].iter().collect();
        let mut rng = ScriptedRandom::new();

        let choice = characters[0]
            .choose_move(&others, &mut rng)
            .expect("warrior chooses");
        assert_eq!(choice.move_index(), 0);
        assert_eq!(choice.move_name(), "Insistent Jab");
    }

    #[test]
    fn zero_health_is_rejected() {
        let content = r#"(characters: [(
            name: "Ghost", team: "a", max_health: 0,
            stats: (attack: 1, defence: 1, speed: 1), moves: [],
        )])"#;
        let err = RosterLoader::from_str(content, &FirstChoice).unwrap_err();
        assert!(err.to_string().contains("Ghost"));
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert!(RosterLoader::from_str("(characters: [])", &FirstChoice).is_err());
    }

    #[test]
    fn malformed_roster_reports_parse_error() {
        let err = RosterLoader::from_str("(characters: [(name: 1)])", &FirstChoice).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse roster RON"));
    }
}
