//! Random provider - a seeded LCG behind an injectable trait
//!
//! Piece selection is plain uniform IID draws (kind and color separately;
//! runs of equal kinds are normal), so the session only needs a bounded
//! draw. The trait keeps the provider swappable: the shell seeds a
//! [`SimpleRng`], tests script a [`SequenceRng`] with the exact values they
//! want.

/// A bounded uniform draw.
pub trait RandomSource {
    /// Next value in `[0, bound)`. `bound` must be nonzero.
    fn next_range(&mut self, bound: u32) -> u32;
}

/// LCG using the Numerical Recipes constants.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Remap 0 so a default-constructed seed still produces a live stream.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next raw u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}

/// Replays a fixed script of draws, for tests that need exact pieces.
///
/// Each scripted value is reduced modulo the requested bound; the script
/// wraps around when exhausted. An empty script draws all zeros.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for SequenceRng {
    fn next_range(&mut self, bound: u32) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(54321);
        assert_ne!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_sequence_replays_and_wraps() {
        let mut rng = SequenceRng::new([0, 3, 6]);
        assert_eq!(rng.next_range(7), 0);
        assert_eq!(rng.next_range(7), 3);
        assert_eq!(rng.next_range(7), 6);
        assert_eq!(rng.next_range(7), 0);
    }

    #[test]
    fn test_sequence_reduces_modulo_bound() {
        let mut rng = SequenceRng::new([9]);
        assert_eq!(rng.next_range(7), 2);
    }

    #[test]
    fn test_empty_sequence_draws_zero() {
        let mut rng = SequenceRng::new(Vec::new());
        assert_eq!(rng.next_range(7), 0);
    }
}
