//! Parent selection.
//!
//! The population is ranked by value into a better half and a worse half,
//! and one parent is drawn from each half by value-proportional roulette.
//! Drawing from both halves keeps a strong parent in every generation
//! while still giving weaker chromosomes a say.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)

use super::random::{cumulative_band_index, random_percentage, PERCENT};
use super::types::Chromosome;
use rand::Rng;
use std::cmp::Ordering;

/// The two parents of a generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Parents {
    /// Drawn from the higher-valued half of the population.
    pub better: Chromosome,

    /// Drawn from the lower-valued half of the population.
    pub worse: Chromosome,
}

/// Splits the population into its better and worse halves by value.
///
/// Ranks a copy of the population (descending value, ties keep their
/// relative order); the population itself is left untouched.
pub fn split_pools(population: &[Chromosome]) -> (Vec<&Chromosome>, Vec<&Chromosome>) {
    let mut ranked: Vec<&Chromosome> = population.iter().collect();
    ranked.sort_by(|a, b| {
        b.total_value()
            .partial_cmp(&a.total_value())
            .unwrap_or(Ordering::Equal)
    });

    let worse = ranked.split_off(population.len() / 2);
    (ranked, worse)
}

/// Percentage share of each pool member: `value × 100 / pool total`.
///
/// A pool whose total value is zero gets equal shares.
pub fn roulette_shares(pool: &[&Chromosome]) -> Vec<f64> {
    let total: f64 = pool.iter().map(|c| c.total_value()).sum();
    if total <= 0.0 {
        let share = PERCENT as f64 / pool.len() as f64;
        return vec![share; pool.len()];
    }
    pool.iter()
        .map(|c| c.total_value() * PERCENT as f64 / total)
        .collect()
}

/// Picks one pool member by value-proportional roulette.
///
/// # Panics
/// Panics if `pool` is empty.
pub fn roulette_select<'a, R: Rng>(pool: &[&'a Chromosome], rng: &mut R) -> &'a Chromosome {
    assert!(!pool.is_empty(), "cannot select from empty pool");

    let shares = roulette_shares(pool);
    let index = cumulative_band_index(&shares, random_percentage(rng));
    pool[index]
}

/// Chooses one parent from each half of the population.
///
/// # Panics
/// Panics if the population has fewer than two chromosomes.
pub fn select_parents<R: Rng>(population: &[Chromosome], rng: &mut R) -> Parents {
    assert!(
        population.len() >= 2,
        "parent selection needs at least two chromosomes"
    );

    let (better_pool, worse_pool) = split_pools(population);
    let better = roulette_select(&better_pool, rng).clone();
    let worse = roulette_select(&worse_pool, rng).clone();
    Parents { better, worse }
}
