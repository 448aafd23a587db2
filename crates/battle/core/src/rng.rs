//! Randomness capability for accuracy rolls, random targeting and tie-breaks.
//!
//! The engine never reaches for ambient randomness. Every draw goes through a
//! [`BattleRandom`] handed to the battle at construction, so a battle replays
//! identically under the same seed.
//!
//! # Determinism
//!
//! [`SeededRandom`] derives one seed per draw from the battle seed and a draw
//! counter and feeds it to a stateless [`RngOracle`]. Given the same seed and
//! the same sequence of calls it produces the same values.

use std::collections::VecDeque;

/// Random source consumed by the engine.
pub trait BattleRandom {
    /// Returns true with a `percent` in 100 chance.
    ///
    /// `percent >= 100` always succeeds and `0` always fails.
    fn chance(&mut self, percent: u32) -> bool;

    /// Picks a uniform index in `0..len`.
    ///
    /// Callers never pass `len == 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<R: BattleRandom + ?Sized> BattleRandom for Box<R> {
    fn chance(&mut self, percent: u32) -> bool {
        (**self).chance(percent)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}

/// Stateless source of pseudo-random words keyed by a seed.
pub trait RngOracle: Send + Sync {
    fn next_u32(&self, seed: u64) -> u32;

    /// A roll in `1..=100`.
    fn percentile(&self, seed: u64) -> u32 {
        self.next_u32(seed) % 100 + 1
    }

    /// A value in `0..bound`, or 0 when `bound` is 0.
    fn below(&self, seed: u64, bound: u32) -> u32 {
        match bound {
            0 => 0,
            _ => self.next_u32(seed) % bound,
        }
    }
}

/// PCG-XSH-RR: one LCG step on the seed, then an xorshift and a rotation.
///
/// See <https://www.pcg-random.org/>.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

const PCG_MULTIPLIER: u64 = 6364136223846793005;
const PCG_INCREMENT: u64 = 1442695040888963407;

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = seed
            .wrapping_mul(PCG_MULTIPLIER)
            .wrapping_add(PCG_INCREMENT);
        let shifted = (((state >> 18) ^ state) >> 27) as u32;
        shifted.rotate_right((state >> 59) as u32)
    }
}

/// Mix the battle seed, draw counter and stream into a per-draw seed.
///
/// Streams keep accuracy rolls and selections from sharing seeds.
pub fn compute_seed(battle_seed: u64, nonce: u64, stream: u32) -> u64 {
    let mut h = battle_seed
        ^ nonce.wrapping_mul(0x9e3779b97f4a7c15)
        ^ u64::from(stream).wrapping_mul(0x517cc1b727220a95);
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51afd7ed558ccd);
    h ^ (h >> 33)
}

/// Seedable [`BattleRandom`] backed by an [`RngOracle`].
#[derive(Clone, Debug)]
pub struct SeededRandom<R = PcgRng> {
    oracle: R,
    seed: u64,
    nonce: u64,
}

impl SeededRandom<PcgRng> {
    pub fn new(seed: u64) -> Self {
        Self::with_oracle(PcgRng, seed)
    }
}

impl<R: RngOracle> SeededRandom<R> {
    pub fn with_oracle(oracle: R, seed: u64) -> Self {
        Self {
            oracle,
            seed,
            nonce: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> u64 {
        self.nonce
    }

    fn next_seed(&mut self, stream: u32) -> u64 {
        let seed = compute_seed(self.seed, self.nonce, stream);
        self.nonce += 1;
        seed
    }
}

const STREAM_CHANCE: u32 = 0;
const STREAM_SELECT: u32 = 1;

impl<R: RngOracle> BattleRandom for SeededRandom<R> {
    fn chance(&mut self, percent: u32) -> bool {
        // Certain outcomes do not consume a draw
        if percent >= 100 {
            return true;
        }
        if percent == 0 {
            return false;
        }
        let seed = self.next_seed(STREAM_CHANCE);
        self.oracle.percentile(seed) <= percent
    }

    fn choose_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "choose_index called with an empty range");
        if len <= 1 {
            return 0;
        }
        let seed = self.next_seed(STREAM_SELECT);
        self.oracle.below(seed, len as u32) as usize
    }
}

/// Scripted [`BattleRandom`] that replays queued answers.
///
/// Once a queue runs dry, `chance` succeeds and `choose_index` picks the
/// first option. Useful for pinning down exact sequences in tests.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    chances: VecDeque<bool>,
    indices: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues answers for successive `chance` calls.
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    /// Queues answers for successive `choose_index` calls.
    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }
}

impl BattleRandom for ScriptedRandom {
    fn chance(&mut self, percent: u32) -> bool {
        if percent >= 100 {
            return true;
        }
        if percent == 0 {
            return false;
        }
        self.chances.pop_front().unwrap_or(true)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.indices
            .pop_front()
            .map(|index| index.min(len.saturating_sub(1)))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..32 {
            assert_eq!(a.choose_index(7), b.choose_index(7));
            assert_eq!(a.chance(50), b.chance(50));
        }
    }

    #[test]
    fn choose_index_stays_in_range() {
        let mut rng = SeededRandom::new(7);
        for len in 1..20 {
            assert!(rng.choose_index(len) < len);
        }
    }

    #[test]
    fn certain_chances_do_not_draw() {
        let mut rng = SeededRandom::new(1);
        assert!(rng.chance(100));
        assert!(!rng.chance(0));
        assert_eq!(rng.draws(), 0);
        rng.chance(50);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn percentile_covers_bounds() {
        let oracle = PcgRng;
        for seed in 0..500 {
            let roll = oracle.percentile(compute_seed(3, seed, 0));
            assert!((1..=100).contains(&roll));
        }
    }

    #[test]
    fn scripted_random_replays_then_defaults() {
        let mut rng = ScriptedRandom::new()
            .with_chances([false])
            .with_indices([2, 9]);
        assert!(!rng.chance(50));
        assert!(rng.chance(50));
        assert_eq!(rng.choose_index(3), 2);
        // out-of-range answers are clamped
        assert_eq!(rng.choose_index(3), 2);
        assert_eq!(rng.choose_index(3), 0);
    }
}
