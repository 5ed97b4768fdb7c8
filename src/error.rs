//! Error types shared by the catalog, configuration and engine.

use std::fmt;

/// The rejection loop that ran out of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfeasibleStage {
    /// Drawing a feasible chromosome for the starting population.
    Initialization,
    /// Exchanging genes between two parents.
    Crossover,
    /// Redrawing the quantity of a mutated gene.
    Mutation,
}

impl fmt::Display for InfeasibleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InfeasibleStage::Initialization => "initialization",
            InfeasibleStage::Crossover => "crossover",
            InfeasibleStage::Mutation => "mutation",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while configuring or running the optimizer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    /// A configuration parameter or catalog entry is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A rejection loop exhausted its retry cap without producing a feasible candidate.
    ///
    /// Signals that the catalog and capacity admit no solution of the required shape.
    #[error("configuration infeasible: {stage} found no feasible candidate after {attempts} attempts")]
    ConfigurationInfeasible {
        stage: InfeasibleStage,
        attempts: usize,
    },
}
