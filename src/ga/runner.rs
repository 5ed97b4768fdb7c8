//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives an [`Evolution`] from initialization to the final
//! generation and reports a snapshot of the population after each one.

use super::config::GaConfig;
use super::evolution::{Evolution, RunState};
use super::random::create_rng;
use super::types::{BestOf, Chromosome};
use crate::catalog::Catalog;
use crate::error::GaError;
use rand::Rng;

/// Result of a GA optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// The best chromosome of the run and the generation that first produced it.
    pub best: BestOf,

    /// Total number of generations executed.
    pub generations: usize,

    /// Population after the final generation.
    pub population: Vec<Chromosome>,

    /// Best value after initialization, then after each generation.
    pub value_history: Vec<f64>,
}

/// Read-only view of the population at the end of a generation.
#[derive(Debug, Clone, Copy)]
pub struct GenerationSnapshot<'a> {
    /// Generation that just finished (1-based).
    pub generation: usize,

    /// The item catalog, for resolving gene names.
    pub catalog: &'a Catalog,

    /// Population in replacement order.
    pub population: &'a [Chromosome],

    /// Best chromosome so far.
    pub best: &'a BestOf,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use knapsack_ga::catalog::Catalog;
/// use knapsack_ga::ga::{GaConfig, GaRunner};
///
/// let catalog = Catalog::electronics();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&catalog, &config).unwrap();
/// assert!(result.best.total_weight() <= config.capacity);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    pub fn run(catalog: &Catalog, config: &GaConfig) -> Result<GaResult, GaError> {
        Self::run_with_observer(catalog, config, |_| {})
    }

    /// Runs the GA, calling `observer` after every generation.
    ///
    /// Uses `config.seed` when set, otherwise a random seed.
    pub fn run_with_observer<F>(
        catalog: &Catalog,
        config: &GaConfig,
        observer: F,
    ) -> Result<GaResult, GaError>
    where
        F: FnMut(&GenerationSnapshot<'_>),
    {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::run_with_rng(catalog, config, create_rng(seed), observer)
    }

    /// Runs the GA with an explicit random number generator.
    pub fn run_with_rng<R, F>(
        catalog: &Catalog,
        config: &GaConfig,
        rng: R,
        mut observer: F,
    ) -> Result<GaResult, GaError>
    where
        R: Rng,
        F: FnMut(&GenerationSnapshot<'_>),
    {
        tracing::info!(
            gene_types = catalog.len(),
            population_size = config.population_size,
            max_generations = config.max_generations,
            capacity = config.capacity,
            "starting knapsack optimization"
        );

        let mut evolution = Evolution::new(catalog, config, rng)?;

        while evolution.state() == RunState::Running {
            let Some(report) = evolution.step()? else {
                break;
            };
            observer(&GenerationSnapshot {
                generation: report.generation,
                catalog,
                population: evolution.population(),
                best: evolution.best(),
            });
        }

        let generations = evolution.generation();
        let (population, best, value_history) = evolution.into_parts();

        tracing::info!(
            best_value = best.total_value(),
            best_weight = best.total_weight(),
            first_reached = best.generation,
            "optimization finished"
        );

        Ok(GaResult {
            best,
            generations,
            population,
            value_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
