//! Knapsack crossover and mutation operators.
//!
//! Both operators work on whole genes: crossover exchanges one or two gene
//! positions between the parents, mutation redraws the quantity of a single
//! gene. Each is gated on feasibility and retries until the result fits in
//! the knapsack or the retry cap is hit.
//!
//! # Crossover
//!
//! - [`crossover_points`]: one or two distinct gene positions
//! - [`exchange_genes`]: swap those positions between two chromosomes
//! - [`crossover`]: the feasibility-gated operator
//!
//! # Mutation
//!
//! - [`mutate`]: probabilistic single-gene redraw on one of the two children

use super::initializer::random_gene;
use super::random::{draw_uniform_index, random_percentage};
use super::selection::Parents;
use super::types::Chromosome;
use crate::catalog::Catalog;
use crate::error::{GaError, InfeasibleStage};
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// The two children of a generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Offspring {
    /// Better parent with the exchanged positions taken from the worse parent.
    pub from_better: Chromosome,

    /// Worse parent with the exchanged positions taken from the better parent.
    pub from_worse: Chromosome,

    /// Gene positions that were exchanged (one or two, distinct).
    pub points: Vec<usize>,
}

impl Offspring {
    /// Children in order: `[from_better, from_worse]`.
    pub fn children(&self) -> [&Chromosome; 2] {
        [&self.from_better, &self.from_worse]
    }

    fn child_mut(&mut self, index: usize) -> &mut Chromosome {
        match index {
            0 => &mut self.from_better,
            _ => &mut self.from_worse,
        }
    }

    /// Consumes the offspring, returning `[from_better, from_worse]`.
    pub fn into_children(self) -> [Chromosome; 2] {
        [self.from_better, self.from_worse]
    }
}

/// Draws the gene positions to exchange.
///
/// Two positions are drawn with equal probability; if they coincide only
/// one is kept, so the result always has one or two distinct entries.
pub fn crossover_points<R: Rng>(gene_count: usize, rng: &mut R) -> Vec<usize> {
    let first = draw_uniform_index(gene_count, rng);
    let second = draw_uniform_index(gene_count, rng);
    if first == second {
        vec![first]
    } else {
        vec![first, second]
    }
}

/// Swaps the genes at `points` between `a` and `b`.
///
/// Returns `(a with b's genes at points, b with a's genes at points)`.
pub fn exchange_genes(a: &Chromosome, b: &Chromosome, points: &[usize]) -> (Chromosome, Chromosome) {
    let mut child_a = a.clone();
    let mut child_b = b.clone();
    for &i in points {
        child_a.replace_gene(i, b.genes()[i].clone());
        child_b.replace_gene(i, a.genes()[i].clone());
    }
    (child_a, child_b)
}

/// Produces two feasible children from `parents`.
///
/// When either child exceeds `capacity`, both are discarded and the whole
/// operator is repeated with new exchange points, up to `max_retries` times.
pub fn crossover<R: Rng>(
    parents: &Parents,
    capacity: f64,
    max_retries: usize,
    rng: &mut R,
) -> Result<Offspring, GaError> {
    let gene_count = parents.better.len();

    for attempt in 1..=max_retries {
        let points = crossover_points(gene_count, rng);
        let (from_better, from_worse) = exchange_genes(&parents.better, &parents.worse, &points);

        if from_better.is_feasible(capacity) && from_worse.is_feasible(capacity) {
            return Ok(Offspring {
                from_better,
                from_worse,
                points,
            });
        }
        tracing::trace!(attempt, ?points, "discarding infeasible crossover");
    }

    tracing::warn!(max_retries, capacity, "crossover found no feasible children");
    Err(GaError::ConfigurationInfeasible {
        stage: InfeasibleStage::Crossover,
        attempts: max_retries,
    })
}

// ============================================================================
// Mutation
// ============================================================================

/// Record of an applied mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    /// Which child was mutated (0 = from better parent, 1 = from worse parent).
    pub child: usize,

    /// Gene position that was redrawn.
    pub gene: usize,

    /// Quantity before the redraw.
    pub from_quantity: u32,

    /// Quantity after the redraw.
    pub to_quantity: u32,
}

/// Mutates one gene of one child with probability `probability_percent`.
///
/// The mutation triggers when a drawn percentage is at most
/// `probability_percent`. A child and a gene position are then picked with
/// equal probability, and the gene's quantity is redrawn until the child
/// fits in `capacity` again. Only that one gene ever changes.
///
/// Returns `Ok(None)` when no mutation was triggered.
pub fn mutate<R: Rng>(
    offspring: &mut Offspring,
    catalog: &Catalog,
    probability_percent: u32,
    capacity: f64,
    max_retries: usize,
    rng: &mut R,
) -> Result<Option<Mutation>, GaError> {
    if random_percentage(rng) > probability_percent {
        return Ok(None);
    }

    let child_index = draw_uniform_index(2, rng);
    let gene_index = draw_uniform_index(catalog.len(), rng);
    let child = offspring.child_mut(child_index);
    let from_quantity = child.genes()[gene_index].quantity;

    for attempt in 1..=max_retries {
        let gene = random_gene(catalog, gene_index, rng);
        let to_quantity = gene.quantity;
        let mut candidate = child.clone();
        candidate.replace_gene(gene_index, gene);
        if candidate.is_feasible(capacity) {
            *child = candidate;
            return Ok(Some(Mutation {
                child: child_index,
                gene: gene_index,
                from_quantity,
                to_quantity,
            }));
        }
        tracing::trace!(
            attempt,
            gene = gene_index,
            quantity = to_quantity,
            "discarding infeasible mutation"
        );
    }

    tracing::warn!(max_retries, gene = gene_index, "mutation found no feasible quantity");
    Err(GaError::ConfigurationInfeasible {
        stage: InfeasibleStage::Mutation,
        attempts: max_retries,
    })
}

// ============================================================================
// Tests
// ============================================================================
