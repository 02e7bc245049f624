//! Trait seams: cooperative cancellation and injected randomness.

pub mod cancellation;
pub mod random;

pub use cancellation::{Cancellable, CancellationToken};
pub use random::{EntropySource, RandomSource, SeededSource};
