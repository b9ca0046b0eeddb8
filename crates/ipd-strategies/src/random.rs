//! Seeded pseudo-random number generator
//!
//! Each randomized policy owns one of these; nothing draws from a
//! process-wide generator. Uses xorshift64* seeded through splitmix64.

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    seed: u64,
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a fixed seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { seed, state: scramble(seed) };
        // Warm up the generator
        for _ in 0..8 {
            rng.next_u64();
        }
        rng
    }

    /// Create a new RNG seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed when given, entropy otherwise
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Seed this generator was built from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewind to the start of the sequence
    pub fn reset(&mut self) {
        *self = Self::new(self.seed);
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Uniform value in [0, 1) with 53 bits of precision
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// splitmix64 finalizer; xorshift must never start from zero
fn scramble(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^= z >> 31;
    if z == 0 {
        0x517cc1b727220a95
    } else {
        z
    }
}
