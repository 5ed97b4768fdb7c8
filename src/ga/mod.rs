//! Genetic algorithm for the bounded multi-item knapsack problem.
//!
//! A single fixed pipeline: the population is initialized by rejection
//! sampling, then every generation draws one parent from each value-ranked
//! half of the population, exchanges one or two genes between them,
//! occasionally redraws one child gene, and replaces the two front
//! chromosomes with the children.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, capacity)
//! - [`Evolution`]: Stepwise generation loop with explicit run state
//! - [`GaRunner`]: Runs an [`Evolution`] to completion
//! - [`GaResult`]: Final optimization result with value history
//!
//! # Submodules
//!
//! - [`random`]: Percentage-band draws shared by every operator
//! - [`initializer`]: Chromosome factory and starting population
//! - [`selection`]: Split-pool roulette parent selection
//! - [`operators`]: Feasibility-gated crossover and mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Martello & Toth (1990), *Knapsack Problems: Algorithms and Computer Implementations*

mod config;
mod evolution;
pub mod initializer;
pub mod operators;
pub mod random;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use evolution::{Evolution, GenerationReport, RunState};
pub use operators::{Mutation, Offspring};
pub use runner::{GaResult, GaRunner, GenerationSnapshot};
pub use selection::Parents;
pub use types::{BestOf, Chromosome, Gene};
