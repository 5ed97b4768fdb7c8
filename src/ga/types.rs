//! Chromosome model.
//!
//! A [`Chromosome`] holds one [`Gene`] per catalog entry. Genes cache their
//! weight and value so totals are cheap to recompute after crossover or
//! mutation replaces a gene.

use crate::catalog::{Catalog, GeneType};

/// A chosen quantity of one gene type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gene {
    /// Position of the gene type in the catalog.
    pub type_index: usize,

    /// Number of units packed, `0..=max_quantity`.
    pub quantity: u32,

    /// `quantity × unit_weight`.
    pub weight: f64,

    /// `quantity × unit_value`.
    pub value: f64,
}

impl Gene {
    /// Creates a gene for `gene_type` (at catalog position `type_index`)
    /// with derived weight and value.
    pub fn new(type_index: usize, gene_type: &GeneType, quantity: u32) -> Self {
        Self {
            type_index,
            quantity,
            weight: quantity as f64 * gene_type.unit_weight,
            value: quantity as f64 * gene_type.unit_value,
        }
    }
}

/// One complete knapsack loading candidate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<Gene>,
}

impl Chromosome {
    /// Assembles a chromosome from genes in catalog order.
    pub fn from_genes(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    /// Builds a chromosome with the given quantity per catalog entry.
    ///
    /// # Panics
    /// Panics if `quantities` does not have one entry per gene type.
    pub fn from_quantities(catalog: &Catalog, quantities: &[u32]) -> Self {
        assert_eq!(
            quantities.len(),
            catalog.len(),
            "one quantity per gene type is required"
        );
        let genes = catalog
            .iter()
            .zip(quantities)
            .enumerate()
            .map(|(i, (gene_type, &q))| Gene::new(i, gene_type, q))
            .collect();
        Self { genes }
    }

    /// Genes in catalog order.
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Quantity per gene, in catalog order.
    pub fn quantities(&self) -> Vec<u32> {
        self.genes.iter().map(|g| g.quantity).collect()
    }

    /// Sum of gene weights.
    pub fn total_weight(&self) -> f64 {
        self.genes.iter().map(|g| g.weight).sum()
    }

    /// Sum of gene values.
    pub fn total_value(&self) -> f64 {
        self.genes.iter().map(|g| g.value).sum()
    }

    /// `total_weight() <= capacity`.
    pub fn is_feasible(&self, capacity: f64) -> bool {
        self.total_weight() <= capacity
    }

    /// Replaces the gene at `index`, returning the previous one.
    pub(crate) fn replace_gene(&mut self, index: usize, gene: Gene) -> Gene {
        std::mem::replace(&mut self.genes[index], gene)
    }
}

/// Best feasible chromosome of a run and the generation that first produced it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestOf {
    /// The chromosome itself.
    pub chromosome: Chromosome,

    /// Generation index (1-based) at which this value was first reached.
    pub generation: usize,
}

impl BestOf {
    /// Value of the best chromosome.
    pub fn total_value(&self) -> f64 {
        self.chromosome.total_value()
    }

    /// Weight of the best chromosome.
    pub fn total_weight(&self) -> f64 {
        self.chromosome.total_weight()
    }

    /// Replaces the record with `candidate` if it is strictly more valuable.
    ///
    /// Returns `true` when the record changed.
    pub fn consider(&mut self, candidate: &Chromosome, generation: usize) -> bool {
        if candidate.total_value() > self.total_value() {
            self.chromosome = candidate.clone();
            self.generation = generation;
            true
        } else {
            false
        }
    }

    /// Offers `candidate` to an optional record.
    ///
    /// The record is created on the first offer and afterwards only replaced
    /// by a strictly greater value. Returns `true` when `best` changed.
    pub fn offer(best: &mut Option<BestOf>, candidate: &Chromosome, generation: usize) -> bool {
        match best {
            Some(current) => current.consider(candidate, generation),
            None => {
                *best = Some(BestOf {
                    chromosome: candidate.clone(),
                    generation,
                });
                true
            }
        }
    }
}
