//! Injectable randomness
//!
//! Gameplay draws every random value through `RandomSource` so tests can
//! replace the seeded PCG stream with a fixed script.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform random values used by the simulation
pub trait RandomSource {
    /// Uniform float in `[0, 1)`
    fn next_unit(&mut self) -> f32;

    /// Uniform float in `[lo, hi)`
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_unit()
    }

    /// Uniform integer in `[lo, hi]` (both ends inclusive)
    fn int_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo + 1) as f32;
        lo + ((self.next_unit() * span).floor() as i32).min(hi - lo)
    }

    /// Uniform index in `0..len`; 0 for empty or single-element ranges
    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        ((self.next_unit() * len as f32).floor() as usize).min(len - 1)
    }
}

/// Seeded PCG stream, the default source for real sessions
#[derive(Debug, Clone)]
pub struct PcgSource {
    seed: u64,
    rng: Pcg32,
}

impl PcgSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for PcgSource {
    fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..hi)
    }

    fn int_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }
}

/// Replays a fixed list of unit values, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRng {
    /// Values are clamped into `[0, 1)`; an empty script always yields 0
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|v| v.clamp(0.0, 1.0 - f32::EPSILON))
                .collect(),
            cursor: 0,
        }
    }

    /// A source that always returns the same value
    pub fn constant(value: f32) -> Self {
        Self::new([value])
    }
}

impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcg_is_deterministic() {
        let mut a = PcgSource::new(42);
        let mut b = PcgSource::new(42);
        for _ in 0..16 {
            assert_eq!(a.uniform(0.8, 2.0), b.uniform(0.8, 2.0));
        }
    }

    #[test]
    fn test_pcg_ranges() {
        let mut rng = PcgSource::new(7);
        for _ in 0..1000 {
            let f = rng.uniform(2.0, 4.0);
            assert!((2.0..4.0).contains(&f));
            let i = rng.int_inclusive(50, 750);
            assert!((50..=750).contains(&i));
            assert!(rng.pick_index(5) < 5);
        }
    }

    #[test]
    fn test_scripted_cycles() {
        let mut rng = ScriptedRng::new([0.0, 0.5]);
        assert_eq!(rng.next_unit(), 0.0);
        assert_eq!(rng.next_unit(), 0.5);
        assert_eq!(rng.next_unit(), 0.0);
    }

    #[test]
    fn test_scripted_helpers() {
        let mut rng = ScriptedRng::constant(0.999);
        assert_eq!(rng.pick_index(5), 4);
        assert_eq!(rng.int_inclusive(50, 750), 750);

        let mut rng = ScriptedRng::constant(0.0);
        assert_eq!(rng.pick_index(5), 0);
        assert_eq!(rng.int_inclusive(50, 750), 50);
        assert_eq!(rng.uniform(0.8, 2.0), 0.8);
    }
}
