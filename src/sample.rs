//! Augmentation-count policy and index sampling.

use rand::seq::SliceRandom;
use rand::Rng;

/// Number of positions to select from a sequence of `size` tokens.
///
/// Policy, applied in order: round-half-up of `proportion * size`, raised to
/// at least one when `proportion` is positive, then clamped into
/// `[min, max]`. The upper bound wins if the caller passes `min > max`.
pub fn augmentation_count(size: usize, min: usize, max: usize, proportion: f64) -> usize {
    let mut count = (proportion * size as f64 + 0.5).floor() as usize;
    if proportion > 0.0 && count == 0 {
        count = 1;
    }
    count.max(min).min(max)
}

/// Uniformly sample `count` positions from `eligible` without replacement.
///
/// Asking for more positions than exist returns all of them; order of the
/// result is unspecified.
pub fn sample_indices<R: Rng + ?Sized>(
    eligible: &[usize],
    count: usize,
    rng: &mut R,
) -> Vec<usize> {
    eligible.choose_multiple(rng, count).copied().collect()
}
