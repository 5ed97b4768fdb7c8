//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::GaError;
use crate::ga::random::PERCENT;

/// Configuration for the knapsack genetic algorithm.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 4);
/// assert_eq!(config.max_generations, 200);
/// assert_eq!(config.mutation_probability_percent, 10);
/// assert_eq!(config.capacity, 8.0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_capacity(15.0)
///     .with_mutation_probability_percent(25)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of chromosomes in the population.
    ///
    /// Must be even: every generation replaces exactly two chromosomes and
    /// selection splits the population into two equal pools.
    pub population_size: usize,

    /// Number of generations to run. The run always executes all of them.
    pub max_generations: usize,

    /// Chance, in whole percent, that a generation mutates one child gene.
    pub mutation_probability_percent: u32,

    /// Knapsack weight limit.
    pub capacity: f64,

    /// Attempts allowed per rejection loop before the run is declared
    /// infeasible.
    ///
    /// Applies separately to each initial population slot, each crossover,
    /// and each mutated gene.
    pub max_retries: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 4,
            max_generations: 200,
            mutation_probability_percent: 10,
            capacity: 8.0,
            max_retries: 10_000,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation probability, clamped to 100.
    pub fn with_mutation_probability_percent(mut self, percent: u32) -> Self {
        self.mutation_probability_percent = percent.min(PERCENT);
        self
    }

    /// Sets the knapsack capacity.
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the retry cap for rejection loops.
    pub fn with_max_retries(mut self, n: usize) -> Self {
        self.max_retries = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`GaError::InvalidConfig`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 2 {
            return Err(GaError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(GaError::InvalidConfig(format!(
                "population_size must be even, got {}",
                self.population_size
            )));
        }
        if self.max_generations == 0 {
            return Err(GaError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.mutation_probability_percent > PERCENT {
            return Err(GaError::InvalidConfig(format!(
                "mutation_probability_percent must be at most 100, got {}",
                self.mutation_probability_percent
            )));
        }
        if !(self.capacity.is_finite() && self.capacity > 0.0) {
            return Err(GaError::InvalidConfig(format!(
                "capacity must be positive and finite, got {}",
                self.capacity
            )));
        }
        if self.max_retries == 0 {
            return Err(GaError::InvalidConfig(
                "max_retries must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
