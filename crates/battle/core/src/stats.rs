//! Character stats with permanent percentage modifiers.
//!
//! Each stat is a base value plus a stack of signed percentage modifiers
//! contributed by buff actions. Modifiers are summed, then applied once:
//!
//! ```text
//! effective = max(0, base × (1 + Σ modifiers / 100))
//! ```
//!
//! Modifiers never expire on their own.

/// Which stat a modifier targets.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Attack,
    Defence,
    Speed,
}

/// A single stat: base value plus accumulated percentage modifiers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stat {
    base: u32,
    /// Stored as integer percentages (e.g., 5 = +5%, -10 = -10%).
    #[cfg_attr(feature = "serde", serde(default))]
    modifiers: Vec<i32>,
}

impl Stat {
    pub fn new(base: u32) -> Self {
        Self {
            base,
            modifiers: Vec::new(),
        }
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn modifiers(&self) -> &[i32] {
        &self.modifiers
    }

    /// Adds a percentage modifier (20 = +20%).
    pub fn add_modifier(&mut self, percent: i32) {
        self.modifiers.push(percent);
    }

    /// Sum of all active modifiers, in percent, saturating at the `i32` bounds.
    pub fn total_modifier(&self) -> i32 {
        self.modifiers
            .iter()
            .fold(0i32, |total, &percent| total.saturating_add(percent))
    }

    /// Base value scaled by the summed modifiers, never negative.
    pub fn effective(&self) -> f64 {
        let multiplier = (100 + i64::from(self.total_modifier())) as f64 / 100.0;
        (self.base as f64 * multiplier).max(0.0)
    }
}

/// Attack, defence and speed of one character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatSet {
    pub attack: Stat,
    pub defence: Stat,
    pub speed: Stat,
}

impl StatSet {
    pub fn new(attack: u32, defence: u32, speed: u32) -> Self {
        Self {
            attack: Stat::new(attack),
            defence: Stat::new(defence),
            speed: Stat::new(speed),
        }
    }

    pub fn get(&self, kind: StatKind) -> &Stat {
        match kind {
            StatKind::Attack => &self.attack,
            StatKind::Defence => &self.defence,
            StatKind::Speed => &self.speed,
        }
    }

    pub fn get_mut(&mut self, kind: StatKind) -> &mut Stat {
        match kind {
            StatKind::Attack => &mut self.attack,
            StatKind::Defence => &mut self.defence,
            StatKind::Speed => &mut self.speed,
        }
    }

    pub fn effective(&self, kind: StatKind) -> f64 {
        self.get(kind).effective()
    }
}
