//! Injected random sources for stochastic simulation.
//!
//! Monte Carlo is the one intentionally non-deterministic component of
//! the engine, so its randomness sits behind this trait: tests inject a
//! seeded source and assert tolerance bands, production uses an
//! entropy-seeded one. Sources are counter-based — a sample is a pure
//! function of (seed, trial, draw) — so parallel trial scheduling can
//! never change the numbers a given trial sees.

/// A source of uniform random samples addressed by trial and draw index.
pub trait RandomSource: Send + Sync {
    /// Uniform sample in [0, 1) for draw `draw` of trial `trial`.
    fn uniform(&self, trial: u64, draw: u32) -> f64;
}

/// Deterministic counter-based source using the splitmix64 mixer.
#[derive(Debug, Clone, Copy)]
pub struct SeededSource {
    seed: u64,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl RandomSource for SeededSource {
    fn uniform(&self, trial: u64, draw: u32) -> f64 {
        let h = splitmix64(self.seed ^ splitmix64(trial ^ splitmix64(draw as u64)));
        // Top 53 bits to mantissa, [0, 1).
        (h >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Production source seeded from the system clock at construction.
/// After seeding it behaves exactly like [`SeededSource`], so a single
/// run is internally consistent.
#[derive(Debug, Clone, Copy)]
pub struct EntropySource {
    inner: SeededSource,
}

impl EntropySource {
    pub fn new() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self {
            inner: SeededSource::new(splitmix64(nanos)),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn uniform(&self, trial: u64, draw: u32) -> f64 {
        self.inner.uniform(trial, draw)
    }
}

/// splitmix64 finalizer (Steele et al.).
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}
