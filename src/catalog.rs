//! Item catalog.
//!
//! A [`Catalog`] is the fixed, ordered list of [`GeneType`] records the
//! engine optimizes over. Every chromosome carries exactly one gene per
//! catalog entry, in catalog order.

use crate::error::GaError;

/// One item category: how much a unit weighs, what it is worth, and how
/// many units are available.
///
/// Plain data with no behavior; the engine only ever reads these fields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneType {
    /// Display name of the item.
    pub name: String,

    /// Weight of a single unit. Must be positive.
    pub unit_weight: f64,

    /// Value of a single unit. Must be non-negative.
    pub unit_value: f64,

    /// Maximum number of units that can be packed (0 means never packed).
    pub max_quantity: u32,
}

impl GeneType {
    /// Creates a gene type record.
    pub fn new(name: impl Into<String>, unit_weight: f64, unit_value: f64, max_quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_weight,
            unit_value,
            max_quantity,
        }
    }

    fn validate(&self) -> Result<(), GaError> {
        if !(self.unit_weight.is_finite() && self.unit_weight > 0.0) {
            return Err(GaError::InvalidConfig(format!(
                "gene type '{}' must have a positive unit_weight, got {}",
                self.name, self.unit_weight
            )));
        }
        if !(self.unit_value.is_finite() && self.unit_value >= 0.0) {
            return Err(GaError::InvalidConfig(format!(
                "gene type '{}' must have a non-negative unit_value, got {}",
                self.name, self.unit_value
            )));
        }
        Ok(())
    }
}

/// Validated, ordered, non-empty list of gene types.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    gene_types: Vec<GeneType>,
}

impl Catalog {
    /// Builds a catalog, rejecting an empty list or out-of-range records.
    pub fn new(gene_types: Vec<GeneType>) -> Result<Self, GaError> {
        if gene_types.is_empty() {
            return Err(GaError::InvalidConfig(
                "catalog must contain at least one gene type".into(),
            ));
        }
        for gene_type in &gene_types {
            gene_type.validate()?;
        }
        Ok(Self { gene_types })
    }

    /// The four electronics items of the classic backpack example.
    pub fn electronics() -> Self {
        Self {
            gene_types: vec![
                GeneType::new("Notebook", 3.5, 6000.0, 2),
                GeneType::new("Smartphone", 0.7, 1500.0, 4),
                GeneType::new("Mouse", 0.3, 300.0, 3),
                GeneType::new("Headphones", 0.4, 400.0, 5),
            ],
        }
    }

    /// Number of gene types (the chromosome length).
    pub fn len(&self) -> usize {
        self.gene_types.len()
    }

    /// Always `false`; construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        self.gene_types.is_empty()
    }

    /// Returns the gene type at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&GeneType> {
        self.gene_types.get(index)
    }

    /// Iterates gene types in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, GeneType> {
        self.gene_types.iter()
    }

    /// Catalog entries as a slice.
    pub fn gene_types(&self) -> &[GeneType] {
        &self.gene_types
    }
}

impl std::ops::Index<usize> for Catalog {
    type Output = GeneType;

    fn index(&self, index: usize) -> &GeneType {
        &self.gene_types[index]
    }
}
