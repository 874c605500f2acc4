//! Deterministic deal generator.
//!
//! The deal uses the classic 31-bit linear congruential generator that
//! numbered FreeCell deals have always used, so a seed maps to the same
//! layout players know by that number. It is not a quality RNG; the exact
//! arithmetic is the point.
//!
//! ```
//! use freecell_engine::core::DealRng;
//!
//! let a: Vec<u32> = DealRng::new(1).take(3).collect();
//! let b: Vec<u32> = DealRng::new(1).take(3).collect();
//! assert_eq!(a, b);
//! assert_eq!(a, vec![41, 18467, 6334]);
//! ```

use serde::{Deserialize, Serialize};

const MASK_31: u32 = 0x7FFF_FFFF;
const MULTIPLIER: u32 = 214_013;
const INCREMENT: u32 = 2_531_011;

/// Seeded LCG yielding 15-bit draws.
///
/// `state = (state * 214013 + 2531011) & 0x7FFFFFFF`, draw = `state >> 16`.
/// Computing modulo 2^32 and then masking is equal to the exact product
/// modulo 2^31.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealRng {
    state: u32,
}

impl DealRng {
    /// Seed the generator. Only the low 31 bits of the seed are used.
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self {
            state: (seed & MASK_31 as i64) as u32,
        }
    }

    /// Advance and return the next draw.
    pub fn draw(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & MASK_31;
        self.state >> 16
    }

    /// Current internal state.
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }
}

impl Iterator for DealRng {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.draw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = DealRng::new(11982);
        let mut rng2 = DealRng::new(11982);

        for _ in 0..100 {
            assert_eq!(rng1.draw(), rng2.draw());
        }
    }

    #[test]
    fn test_different_seeds() {
        let seq1: Vec<_> = DealRng::new(1).take(10).collect();
        let seq2: Vec<_> = DealRng::new(2).take(10).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_known_sequence() {
        let seq: Vec<_> = DealRng::new(1).take(5).collect();
        assert_eq!(seq, vec![41, 18467, 6334, 26500, 19169]);
    }

    #[test]
    fn test_draws_are_15_bit() {
        let mut rng = DealRng::new(-7);
        for _ in 0..1000 {
            assert!(rng.draw() < 0x8000);
        }
    }

    #[test]
    fn test_seed_is_masked_to_31_bits() {
        assert_eq!(DealRng::new(1 << 31).state(), 0);
        assert_eq!(DealRng::new((1 << 31) + 5).state(), 5);
        assert_eq!(DealRng::new(-1).state(), MASK_31);
    }

    #[test]
    fn test_state_serde() {
        let mut rng = DealRng::new(42);
        rng.draw();

        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: DealRng = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.draw(), rng.draw());
    }
}
