//! Plain-text rendering of generations and final results.
//!
//! Read-only consumers of engine state: nothing here affects a run.

use crate::catalog::Catalog;
use crate::error::GaError;
use crate::ga::{BestOf, Chromosome, GenerationSnapshot};
use std::fmt;

/// Writes one line per packed item, skipping items with quantity 0.
fn write_items(
    f: &mut fmt::Formatter<'_>,
    catalog: &Catalog,
    chromosome: &Chromosome,
    indent: &str,
) -> fmt::Result {
    for gene in chromosome.genes().iter().filter(|g| g.quantity > 0) {
        let name = catalog
            .get(gene.type_index)
            .map(|t| t.name.as_str())
            .unwrap_or("?");
        writeln!(f, "{indent}{} x {name}", gene.quantity)?;
    }
    Ok(())
}

impl fmt::Display for GenerationSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---------------------------")?;
        writeln!(f, "Generation: {}", self.generation)?;
        writeln!(f)?;
        for (i, chromosome) in self.population.iter().enumerate() {
            writeln!(f, "- Chromosome {}", i + 1)?;
            write_items(f, self.catalog, chromosome, "  * ")?;
            writeln!(f, "  * Total weight: {}", chromosome.total_weight())?;
            writeln!(f, "  * Total value: {}", chromosome.total_value())?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Final summary of a run's best chromosome.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    /// The item catalog, for resolving gene names.
    pub catalog: &'a Catalog,

    /// The best record to describe.
    pub best: &'a BestOf,
}

impl<'a> Summary<'a> {
    /// Creates a summary of `best` against `catalog`.
    pub fn new(catalog: &'a Catalog, best: &'a BestOf) -> Self {
        Self { catalog, best }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Best value: {} (weight {}), first reached in generation {}. Items:",
            self.best.total_value(),
            self.best.total_weight(),
            self.best.generation
        )?;
        write_items(f, self.catalog, &self.best.chromosome, "")
    }
}

/// Description of a run that stopped with an error.
#[derive(Debug, Clone, Copy)]
pub struct Failure<'a> {
    /// The item catalog, for resolving gene names.
    pub catalog: &'a Catalog,

    /// Why the run stopped.
    pub error: &'a GaError,

    /// Best record observed before the run stopped, if any generation finished.
    pub best: Option<&'a BestOf>,
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.error)?;
        if let Some(best) = self.best {
            writeln!(f, "Run aborted; best result so far:")?;
            write!(f, "{}", Summary::new(self.catalog, best))?;
        }
        Ok(())
    }
}
