//! Battle participants and their stable identities.
//!
//! The roster owns every character for the duration of a battle. Characters
//! are never removed; a character at zero health stays in place and is simply
//! skipped by every living-only query. Roster order is the order characters
//! were supplied in and is the tie-break for "first" target strategies.

use std::fmt;

use crate::character::Character;

/// Stable identifier of a character within one battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Team label. Characters sharing a label are allies.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team(String);

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Team {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// All characters of one battle, in supply order.
#[derive(Debug, Default)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// Take ownership of `characters`, assigning ids by position.
    pub fn new(characters: Vec<Character>) -> Self {
        let characters = characters
            .into_iter()
            .enumerate()
            .map(|(index, mut character)| {
                character.assign_id(CharacterId(index as u32));
                character
            })
            .collect();
        Self { characters }
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.get_mut(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = CharacterId> + '_ {
        self.characters.iter().map(Character::id)
    }

    /// Display name, or the id when unknown.
    pub fn name_of(&self, id: CharacterId) -> String {
        self.get(id)
            .map_or_else(|| id.to_string(), |c| c.name().to_owned())
    }

    pub fn is_alive(&self, id: CharacterId) -> bool {
        self.get(id).is_some_and(Character::is_alive)
    }

    pub fn living(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter().filter(|c| c.is_alive())
    }

    /// Living characters other than `id`, any team.
    pub fn living_others(&self, id: CharacterId) -> impl Iterator<Item = &Character> {
        self.living().filter(move |c| c.id() != id)
    }

    /// Living characters on a different team than `id`.
    pub fn enemies_of(&self, id: CharacterId) -> impl Iterator<Item = &Character> {
        let team = self.get(id).map(|c| c.team().clone());
        self.living()
            .filter(move |c| team.as_ref().is_some_and(|t| c.team() != t))
    }

    /// Living characters on the same team as `id`, `id` included.
    pub fn team_of(&self, id: CharacterId) -> impl Iterator<Item = &Character> {
        let team = self.get(id).map(|c| c.team().clone());
        self.living()
            .filter(move |c| team.as_ref().is_some_and(|t| c.team() == t))
    }

    /// True if both exist and sit on different teams.
    pub fn are_opponents(&self, a: CharacterId, b: CharacterId) -> bool {
        match (self.get(a), self.get(b)) {
            (Some(a), Some(b)) => a.team() != b.team(),
            _ => false,
        }
    }

    /// Distinct teams with at least one living member, in roster order.
    pub fn surviving_teams(&self) -> Vec<Team> {
        let mut teams: Vec<Team> = Vec::new();
        for character in self.living() {
            if !teams.contains(character.team()) {
                teams.push(character.team().clone());
            }
        }
        teams
    }

    /// One line per character: `Name: current/max HP`.
    pub fn summary(&self) -> String {
        self.characters
            .iter()
            .map(Character::summary)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
