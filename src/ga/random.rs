//! Percentage-band draws.
//!
//! Every random choice in the engine is made the same way: map each option
//! to a band of the percentage range `[0, 100]`, draw one integer percentage,
//! and take the first option whose cumulative upper bound reaches the draw.
//! Quantity draws, crossover points, and mutation targets use equal bands;
//! parent selection uses bands proportional to chromosome value.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper end of the percentage range.
pub const PERCENT: u32 = 100;

/// Creates a seeded random number generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a uniformly distributed integer percentage in `[0, 100]`.
pub fn random_percentage<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(0..=PERCENT)
}

/// Maps `percentage` onto `count` equal consecutive bands.
///
/// Band `i` covers percentages up to `(i + 1) * 100 / count`, so the answer
/// is `ceil(percentage * count / 100) - 1`, computed in exact integer
/// arithmetic. Draws above 100 land in the last band; the result is always
/// in `0..count`.
///
/// # Panics
/// Panics if `count == 0`.
pub fn equal_band_index(count: usize, percentage: u32) -> usize {
    assert!(count > 0, "cannot draw from zero options");

    let scaled = (percentage as u128 * count as u128).div_ceil(PERCENT as u128);
    let index = usize::try_from(scaled.saturating_sub(1)).unwrap_or(usize::MAX);
    index.min(count - 1)
}

/// Maps `percentage` onto consecutive bands of the given widths.
///
/// `shares` should sum to 100; the last band absorbs any shortfall.
///
/// # Panics
/// Panics if `shares` is empty.
pub fn cumulative_band_index(shares: &[f64], percentage: u32) -> usize {
    assert!(!shares.is_empty(), "cannot draw from zero options");

    let draw = percentage as f64;
    let mut cumulative = 0.0;
    for (i, &share) in shares.iter().enumerate() {
        cumulative += share;
        if draw <= cumulative {
            return i;
        }
    }
    shares.len() - 1
}

/// Draws one of `count` options with equal probability.
pub fn draw_uniform_index<R: Rng>(count: usize, rng: &mut R) -> usize {
    equal_band_index(count, random_percentage(rng))
}
