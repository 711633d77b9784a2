//! Random number source consumed by the generator

use rand::Rng;

/// Uniform integer source over an inclusive range
pub trait RandomRange {
    /// Random integer in `min..=max`
    fn random_range(&mut self, min: usize, max: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomRange for R {
    fn random_range(&mut self, min: usize, max: usize) -> usize {
        self.gen_range(min..=max)
    }
}
