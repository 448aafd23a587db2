/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Maximum number of rounds before the battle is called off.
    /// `None` runs until a team is eliminated.
    pub round_limit: Option<u32>,

    /// Lower bound for stat-scaled damage against a living target.
    pub minimum_scaled_damage: u32,
}

impl BattleConfig {
    // ===== defaults applied at construction time =====
    /// Protect charges a freshly built character starts with.
    pub const DEFAULT_PROTECT_LIMIT: u32 = 1;
    pub const DEFAULT_MINIMUM_SCALED_DAMAGE: u32 = 1;

    pub fn new() -> Self {
        Self {
            round_limit: None,
            minimum_scaled_damage: Self::DEFAULT_MINIMUM_SCALED_DAMAGE,
        }
    }

    /// Caps the battle at `rounds` rounds.
    pub fn with_round_limit(mut self, rounds: u32) -> Self {
        self.round_limit = Some(rounds);
        self
    }

    pub fn with_minimum_scaled_damage(mut self, minimum: u32) -> Self {
        self.minimum_scaled_damage = minimum;
        self
    }

    /// Returns true once `round` has reached the configured limit.
    pub fn round_limit_reached(&self, round: u32) -> bool {
        self.round_limit.is_some_and(|limit| round >= limit)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
