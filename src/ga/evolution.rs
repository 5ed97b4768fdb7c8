//! Stepwise generation loop.
//!
//! [`Evolution`] owns the population and the best-of-run record and
//! advances them one generation per [`step`](Evolution::step):
//! selection → crossover → mutation → replacement → best-tracking.

use super::config::GaConfig;
use super::initializer::initial_population;
use super::operators::{crossover, mutate, Mutation};
use super::selection::select_parents;
use super::types::{BestOf, Chromosome};
use crate::catalog::Catalog;
use crate::error::GaError;
use rand::Rng;

/// Run state of an [`Evolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// More generations remain.
    Running,
    /// The configured number of generations has been processed.
    Done,
}

/// Summary of one processed generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// Index of the generation that was processed (1-based).
    pub generation: usize,

    /// Exchanged gene positions.
    pub crossover_points: Vec<usize>,

    /// The mutation applied to a child, if one was triggered.
    pub mutation: Option<Mutation>,

    /// Whether a child beat the best-of-run record.
    pub improved: bool,

    /// Run state after this generation.
    pub state: RunState,
}

/// Evolutionary state: population, best-of-run record and generation counter.
///
/// # Usage
///
/// ```
/// use knapsack_ga::catalog::Catalog;
/// use knapsack_ga::ga::{Evolution, GaConfig, RunState};
/// use knapsack_ga::ga::random::create_rng;
///
/// let catalog = Catalog::electronics();
/// let config = GaConfig::default().with_max_generations(10);
/// let mut evolution = Evolution::new(&catalog, &config, create_rng(42)).unwrap();
/// while evolution.state() == RunState::Running {
///     evolution.step().unwrap();
/// }
/// assert!(evolution.best().total_weight() <= config.capacity);
/// ```
#[derive(Debug, Clone)]
pub struct Evolution<'a, R: Rng> {
    catalog: &'a Catalog,
    config: GaConfig,
    rng: R,
    population: Vec<Chromosome>,
    best: BestOf,
    generation: usize,
    state: RunState,
    value_history: Vec<f64>,
}

impl<'a, R: Rng> Evolution<'a, R> {
    /// Validates `config` and builds the starting population.
    ///
    /// Every initial chromosome is offered to the best-of-run record as
    /// generation 1.
    pub fn new(catalog: &'a Catalog, config: &GaConfig, mut rng: R) -> Result<Self, GaError> {
        config.validate()?;

        let population = initial_population(
            catalog,
            config.population_size,
            config.capacity,
            config.max_retries,
            &mut rng,
        )?;

        let generation = 1;
        let mut best = None;
        for chromosome in &population {
            BestOf::offer(&mut best, chromosome, generation);
        }
        let best = best.ok_or_else(|| {
            GaError::InvalidConfig("population_size must be at least 2".into())
        })?;

        let value_history = vec![best.total_value()];

        Ok(Self {
            catalog,
            config: config.clone(),
            rng,
            population,
            best,
            generation,
            state: RunState::Running,
            value_history,
        })
    }

    /// Processes the current generation.
    ///
    /// Once the run is [`RunState::Done`] this is a no-op that returns
    /// `Ok(None)`; population and best record are never touched again.
    pub fn step(&mut self) -> Result<Option<GenerationReport>, GaError> {
        if self.state == RunState::Done {
            return Ok(None);
        }

        let generation = self.generation;
        let parents = select_parents(&self.population, &mut self.rng);
        let mut offspring = crossover(
            &parents,
            self.config.capacity,
            self.config.max_retries,
            &mut self.rng,
        )?;
        let mutation = mutate(
            &mut offspring,
            self.catalog,
            self.config.mutation_probability_percent,
            self.config.capacity,
            self.config.max_retries,
            &mut self.rng,
        )?;

        let mut improved = false;
        for child in offspring.children() {
            improved |= self.best.consider(child, generation);
        }

        let crossover_points = offspring.points.clone();
        self.replace(offspring.into_children());
        self.value_history.push(self.best.total_value());

        tracing::debug!(
            generation,
            best_value = self.best.total_value(),
            ?crossover_points,
            mutated = mutation.is_some(),
            "generation processed"
        );

        if generation >= self.config.max_generations {
            self.state = RunState::Done;
        } else {
            self.generation += 1;
        }

        Ok(Some(GenerationReport {
            generation,
            crossover_points,
            mutation,
            improved,
            state: self.state,
        }))
    }

    /// Drops the two front chromosomes and appends the children.
    fn replace(&mut self, children: [Chromosome; 2]) {
        self.population.drain(..2);
        self.population.extend(children);
    }

    /// Current population in replacement order.
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Best feasible chromosome seen so far.
    pub fn best(&self) -> &BestOf {
        &self.best
    }

    /// Generation counter: the generation processed by the next
    /// [`step`](Self::step), or the last one once done.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Best value after initialization followed by the best value after
    /// each processed generation.
    pub fn value_history(&self) -> &[f64] {
        &self.value_history
    }

    /// The configuration this run was built with.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Consumes the run, returning the final population, best record and
    /// value history.
    pub fn into_parts(self) -> (Vec<Chromosome>, BestOf, Vec<f64>) {
        (self.population, self.best, self.value_history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GeneType;
    use crate::ga::random::create_rng;

    fn two_items() -> Catalog {
        Catalog::new(vec![
            GeneType::new("Notebook", 3.5, 6000.0, 2),
            GeneType::new("Smartphone", 0.7, 1500.0, 4),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let catalog = two_items();
        let config = GaConfig::default().with_population_size(3);
        assert!(matches!(
            Evolution::new(&catalog, &config, create_rng(42)),
            Err(GaError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_initial_state() {
        let catalog = two_items();
        let config = GaConfig::default();
        let evolution = Evolution::new(&catalog, &config, create_rng(42)).unwrap();

        assert_eq!(evolution.state(), RunState::Running);
        assert_eq!(evolution.generation(), 1);
        assert_eq!(evolution.population().len(), 4);
        assert_eq!(evolution.best().generation, 1);
        assert_eq!(evolution.value_history().len(), 1);

        let max = evolution
            .population()
            .iter()
            .map(|c| c.total_value())
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(evolution.best().total_value(), max);
    }

    #[test]
    fn test_replacement_is_positional() {
        let catalog = two_items();
        let config = GaConfig::default().with_population_size(6);
        let mut evolution = Evolution::new(&catalog, &config, create_rng(42)).unwrap();

        let before = evolution.population().to_vec();
        evolution.step().unwrap();
        let after = evolution.population();

        assert_eq!(after.len(), 6);
        // Positions 2.. of the old population move to the front unchanged.
        assert_eq!(&after[..4], &before[2..]);
    }

    #[test]
    fn test_children_appended_at_end() {
        let catalog = two_items();
        let config = GaConfig::default().with_mutation_probability_percent(0);
        let mut evolution = Evolution::new(&catalog, &config, create_rng(9)).unwrap();

        let report = evolution.step().unwrap().unwrap();
        let tail = &evolution.population()[2..];
        assert!(tail.iter().all(|c| c.is_feasible(config.capacity)));
        assert_eq!(report.generation, 1);
        assert!(!report.crossover_points.is_empty());
    }

    #[test]
    fn test_stops_after_max_generations() {
        let catalog = two_items();
        let config = GaConfig::default().with_max_generations(5);
        let mut evolution = Evolution::new(&catalog, &config, create_rng(42)).unwrap();

        let mut processed = 0;
        while evolution.state() == RunState::Running {
            let report = evolution.step().unwrap().unwrap();
            processed += 1;
            assert_eq!(report.generation, processed);
        }
        assert_eq!(processed, 5);
        assert_eq!(evolution.generation(), 5);
        assert_eq!(evolution.value_history().len(), 6);
    }

    #[test]
    fn test_done_is_terminal() {
        let catalog = two_items();
        let config = GaConfig::default().with_max_generations(1);
        let mut evolution = Evolution::new(&catalog, &config, create_rng(42)).unwrap();

        let report = evolution.step().unwrap().unwrap();
        assert_eq!(report.state, RunState::Done);

        let population = evolution.population().to_vec();
        let best = evolution.best().clone();
        assert_eq!(evolution.step().unwrap(), None);
        assert_eq!(evolution.population(), population.as_slice());
        assert_eq!(evolution.best(), &best);
    }

    #[test]
    fn test_best_value_monotonic_and_feasible() {
        let catalog = Catalog::electronics();
        let config = GaConfig::default().with_mutation_probability_percent(50);
        let mut evolution = Evolution::new(&catalog, &config, create_rng(3)).unwrap();

        while evolution.state() == RunState::Running {
            evolution.step().unwrap();
            assert!(evolution
                .population()
                .iter()
                .all(|c| c.is_feasible(config.capacity) && c.len() == catalog.len()));
            assert!(evolution.best().chromosome.is_feasible(config.capacity));
            let population_max = evolution
                .population()
                .iter()
                .map(|c| c.total_value())
                .fold(f64::NEG_INFINITY, f64::max);
            assert!(evolution.best().total_value() >= population_max);
        }
        for window in evolution.value_history().windows(2) {
            assert!(window[1] >= window[0]);
        }
    }

    #[test]
    fn test_mutated_children_offered_to_best() {
        // With a single gene type crossover only swaps the parents, so any
        // new best value has to come from the mutated child.
        let catalog = Catalog::new(vec![GeneType::new("Gold", 1.0, 100.0, 50)]).unwrap();
        let config = GaConfig::default()
            .with_population_size(2)
            .with_capacity(100.0)
            .with_mutation_probability_percent(100)
            .with_max_generations(2000);
        let mut evolution = Evolution::new(&catalog, &config, create_rng(11)).unwrap();
        let initial_best = evolution.best().total_value();

        let mut improvements = 0;
        loop {
            let previous_best = evolution.best().total_value();
            let Some(report) = evolution.step().unwrap() else {
                break;
            };
            let mutation = report.mutation.expect("mutation at 100% always triggers");
            let children = evolution.population();

            for child in children {
                assert!(evolution.best().total_value() >= child.total_value());
            }
            if report.improved {
                improvements += 1;
                assert!(evolution.best().total_value() > previous_best);
                assert_eq!(evolution.best().generation, report.generation);
                assert_eq!(&evolution.best().chromosome, &children[mutation.child]);
            } else {
                assert_eq!(evolution.best().total_value(), previous_best);
            }
        }

        if initial_best < 5000.0 {
            assert!(improvements > 0, "mutated children never reached the best record");
        }
        assert_eq!(evolution.best().total_value(), 5000.0);
    }

    #[test]
    fn test_improvement_records_generation() {
        let catalog = two_items();
        let config = GaConfig::default();
        let mut evolution = Evolution::new(&catalog, &config, create_rng(42)).unwrap();

        while let Some(report) = evolution.step().unwrap() {
            if report.improved {
                assert_eq!(evolution.best().generation, report.generation);
            }
        }
        assert!(evolution.best().generation <= config.max_generations);
    }
}
