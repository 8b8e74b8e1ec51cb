use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of card indices for random jumps.
///
/// Implementations must return a value in `0..len` for any `len >= 1`.
pub trait RandomIndex {
    fn next_index(&mut self, len: usize) -> usize;
}

/// Uniform picks from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomIndex for ThreadRandom {
    fn next_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len.max(1))
    }
}

/// Uniform picks from a seeded generator, reproducible across runs.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomIndex for SeededRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len.max(1))
    }
}

/// Replays a fixed list of picks, cycling when exhausted.
///
/// Picks are returned as given, so a script may hand out indices that are out
/// of range for the caller's sequence.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, cursor: 0 }
    }
}

impl RandomIndex for ScriptedRandom {
    fn next_index(&mut self, _len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let pick = self.picks[self.cursor % self.picks.len()];
        self.cursor = self.cursor.wrapping_add(1);
        pick
    }
}

/// Describes which random-index provider a session should use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RandomSource {
    #[default]
    Thread,
    Seeded(u64),
    Scripted(Vec<usize>),
}

impl RandomSource {
    /// Returns a source backed by the thread-local generator.
    #[must_use]
    pub fn thread() -> Self {
        Self::Thread
    }

    /// Returns a seeded source, or the thread source when no seed is given.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Self::Thread, Self::Seeded)
    }

    /// Builds a fresh provider for this source.
    #[must_use]
    pub fn provider(&self) -> Box<dyn RandomIndex + Send> {
        match self {
            RandomSource::Thread => Box::new(ThreadRandom),
            RandomSource::Seeded(seed) => Box::new(SeededRandom::new(*seed)),
            RandomSource::Scripted(picks) => Box::new(ScriptedRandom::new(picks.clone())),
        }
    }
}
