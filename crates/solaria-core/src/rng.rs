//! Seeded randomness for downhill tie-breaks. Not cryptographic.

/// Source of the tie-break stream. Agents are generic over it so tests can
/// script the picks.
pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    /// Uniform integer in `0..bound` (rejection sampled, no modulo bias).
    ///
    /// `bound` must be non-zero.
    fn next_below(&mut self, bound: u64) -> u64 {
        assert!(bound > 0, "empty range");
        let threshold = u64::MAX - (u64::MAX % bound);
        loop {
            let x = self.next_u64();
            if x < threshold {
                return x % bound;
            }
        }
    }

    /// Uniform pick from `items`, `None` when empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.next_below(items.len() as u64) as usize;
        items.get(idx)
    }
}

/// SplitMix64 generator; default stream of every agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn step(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        mix64(self.state)
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.step()
    }
}

pub fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Per-team seed so teams sharing a match seed still break ties independently.
pub fn derive_seed(global_seed: u64, team_id: u64, stream: u64) -> u64 {
    let x = global_seed ^ mix64(team_id.wrapping_add(0x9E3779B97F4A7C15)) ^ mix64(stream);
    mix64(x)
}
