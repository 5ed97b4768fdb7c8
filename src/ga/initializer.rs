//! Chromosome factory and starting population.

use super::random::draw_uniform_index;
use super::types::{Chromosome, Gene};
use crate::catalog::{Catalog, GeneType};
use crate::error::{GaError, InfeasibleStage};
use rand::Rng;

/// Draws a quantity in `0..=max_quantity`, each outcome equally likely.
pub fn draw_quantity<R: Rng>(gene_type: &GeneType, rng: &mut R) -> u32 {
    let outcomes = gene_type.max_quantity as usize + 1;
    draw_uniform_index(outcomes, rng) as u32
}

/// Draws a fresh gene for the catalog entry at `type_index`.
pub fn random_gene<R: Rng>(catalog: &Catalog, type_index: usize, rng: &mut R) -> Gene {
    let gene_type = &catalog[type_index];
    Gene::new(type_index, gene_type, draw_quantity(gene_type, rng))
}

/// Builds a chromosome with an independent quantity draw per gene type.
///
/// The result is not checked against any capacity.
pub fn random_chromosome<R: Rng>(catalog: &Catalog, rng: &mut R) -> Chromosome {
    let genes = (0..catalog.len())
        .map(|i| random_gene(catalog, i, rng))
        .collect();
    Chromosome::from_genes(genes)
}

/// Collects `size` feasible chromosomes by rejection sampling.
///
/// Each slot gets at most `max_retries` draws; if none of them fits within
/// `capacity` the catalog cannot be packed and
/// [`GaError::ConfigurationInfeasible`] is returned.
pub fn initial_population<R: Rng>(
    catalog: &Catalog,
    size: usize,
    capacity: f64,
    max_retries: usize,
    rng: &mut R,
) -> Result<Vec<Chromosome>, GaError> {
    let mut population = Vec::with_capacity(size);
    while population.len() < size {
        population.push(feasible_chromosome(catalog, capacity, max_retries, rng)?);
    }
    Ok(population)
}

fn feasible_chromosome<R: Rng>(
    catalog: &Catalog,
    capacity: f64,
    max_retries: usize,
    rng: &mut R,
) -> Result<Chromosome, GaError> {
    for attempt in 1..=max_retries {
        let candidate = random_chromosome(catalog, rng);
        if candidate.is_feasible(capacity) {
            return Ok(candidate);
        }
        tracing::trace!(
            attempt,
            weight = candidate.total_weight(),
            "discarding infeasible initial chromosome"
        );
    }
    tracing::warn!(max_retries, capacity, "no feasible initial chromosome found");
    Err(GaError::ConfigurationInfeasible {
        stage: InfeasibleStage::Initialization,
        attempts: max_retries,
    })
}
