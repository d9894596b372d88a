//! Injectable random sources for construction algorithms
//!
//! Every random choice made while building a maze goes through [`RandomSource`],
//! so a fixed seed or a scripted sequence of picks reproduces a maze exactly.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::DEFAULT_SEED;

/// Source of uniform index choices
pub trait RandomSource {
    /// Pick an index in `0..len`
    ///
    /// Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Seeded random selector for reproducible choices
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a selector seeded from the operating system
    ///
    /// Mazes built with it are not reproducible.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for RandomSelector {
    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of picks, wrapping each into the requested range
///
/// The list repeats once exhausted; an empty list always picks index 0.
#[derive(Debug, Clone, Default)]
pub struct SequenceSelector {
    picks: Vec<usize>,
    cursor: usize,
}

impl SequenceSelector {
    /// Create a selector replaying `picks`
    pub const fn new(picks: Vec<usize>) -> Self {
        Self { picks, cursor: 0 }
    }

    /// Selector that always takes the first candidate
    pub const fn first() -> Self {
        Self::new(Vec::new())
    }

    /// Number of picks served so far
    pub const fn served(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSelector {
    fn pick_index(&mut self, len: usize) -> usize {
        let raw = if self.picks.is_empty() {
            0
        } else {
            self.picks
                .get(self.cursor % self.picks.len())
                .copied()
                .unwrap_or(0)
        };
        self.cursor += 1;
        if len == 0 { 0 } else { raw % len }
    }
}
