//! Genetic-algorithm optimizer for the bounded multi-item knapsack problem.
//!
//! Given a catalog of item types, each with a unit weight, a unit value and
//! a maximum available quantity, finds the quantities that maximize total
//! value without exceeding the knapsack capacity.
//!
//! - [`catalog`]: Item types the engine optimizes over
//! - [`ga`]: The evolutionary engine
//! - [`report`]: Plain-text rendering of generations and results
//! - [`error`]: Configuration and infeasibility errors
//!
//! # Example
//!
//! ```
//! use knapsack_ga::catalog::{Catalog, GeneType};
//! use knapsack_ga::ga::{GaConfig, GaRunner};
//!
//! let catalog = Catalog::new(vec![
//!     GeneType::new("Notebook", 3.5, 6000.0, 2),
//!     GeneType::new("Smartphone", 0.7, 1500.0, 4),
//! ])?;
//! let config = GaConfig::default().with_capacity(8.0).with_seed(42);
//! let result = GaRunner::run(&catalog, &config)?;
//! assert!(result.best.total_weight() <= 8.0);
//! # Ok::<(), knapsack_ga::error::GaError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod ga;
pub mod report;
