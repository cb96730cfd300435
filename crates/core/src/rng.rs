//! RNG module - deterministic randomness for the scene
//!
//! A small LCG is enough for star placement and blink timing, and it keeps
//! every run reproducible from a single seed. The scene owns one process-wide
//! generator and hands each star its own generator forked from it, so stars
//! never share hidden state.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Generate random value in the inclusive range [min, max]
    pub fn next_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        min + self.next_range(max - min + 1)
    }

    /// Pick one element of a non-empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(items.len() as u32) as usize)
    }

    /// Derive an independent generator seeded from this one.
    pub fn fork(&mut self) -> SimpleRng {
        SimpleRng::new(self.next_u32() ^ 0x9E37_79B9)
    }

    /// Current state (for reproducing a run)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_inclusive_range_hits_both_ends() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 3];
        for _ in 0..500 {
            let v = rng.next_inclusive(1, 3);
            assert!((1..=3).contains(&v));
            seen[(v - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = SimpleRng::new(9);
        assert_eq!(rng.next_range(0), 0);
        assert_eq!(rng.next_inclusive(4, 4), 4);
        assert_eq!(rng.next_inclusive(5, 2), 5);
    }

    #[test]
    fn test_choose() {
        let mut rng = SimpleRng::new(3);
        let symbols = ['+', '*', '.', ':'];
        for _ in 0..50 {
            assert!(symbols.contains(rng.choose(&symbols).unwrap()));
        }
        assert!(rng.choose::<char>(&[]).is_none());
    }

    #[test]
    fn test_fork_is_deterministic_and_independent() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        let mut fa = a.fork();
        let mut fb = b.fork();
        assert_eq!(fa.next_u32(), fb.next_u32());

        // Forking advances the parent.
        assert_ne!(a.seed(), SimpleRng::new(42).seed());
    }
}
