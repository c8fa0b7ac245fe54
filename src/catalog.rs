//! Read-only deal catalog and the query contract the store reads it through.

#[cfg(test)]
use mockall::automock;

use std::{collections::HashSet, fs, path::Path};

use itertools::Itertools;
use serde::Deserialize;

pub mod deal;
pub mod error;
pub mod price;
mod seed;

pub use deal::{Category, Deal, DealId};
pub use error::CatalogError;
pub use price::Price;

/// Queries over the deal catalog. Results are always ordered by deal id.
#[cfg_attr(test, automock)]
pub trait Catalog {
    /// Every deal in the catalog
    fn all(&self) -> Vec<Deal>;
    /// Deals in the given category, or every deal when `None`
    fn by_category(&self, category: Option<Category>) -> Vec<Deal>;
    /// The deal with the given id, if any
    fn by_id(&self, id: DealId) -> Option<Deal>;
}

#[derive(Deserialize)]
struct CatalogFile {
    deals: Vec<Deal>,
}

/// In-memory catalog fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    deals: Vec<Deal>,
}

impl StaticCatalog {
    /// Validates and wraps the given deals.
    pub fn new(deals: Vec<Deal>) -> Result<Self, CatalogError> {
        if deals.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: HashSet<DealId> = HashSet::new();

        for deal in deals.iter() {
            if !seen.insert(deal.id) {
                return Err(CatalogError::DuplicateId(deal.id));
            }

            if deal.discounted_price > deal.original_price {
                return Err(CatalogError::InvertedPrice(deal.id));
            }
        }

        Ok(Self {
            deals: deals.into_iter().sorted_by_key(|d| d.id).collect(),
        })
    }

    /// The compiled-in sample deals.
    pub fn seeded() -> Self {
        Self {
            deals: seed::deals(),
        }
    }

    /// Parses a yaml catalog of the form `deals: [...]`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::new(file.deals)
    }

    /// Reads and parses a yaml catalog file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, CatalogError> {
        let yaml = fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&yaml)?;
        log::info!(
            "loaded {} deals from {}",
            catalog.deals.len(),
            path.display()
        );
        Ok(catalog)
    }
}

impl Catalog for StaticCatalog {
    fn all(&self) -> Vec<Deal> {
        self.deals.clone()
    }

    fn by_category(&self, category: Option<Category>) -> Vec<Deal> {
        self.deals
            .iter()
            .filter(|d| category.is_none_or(|c| d.category == c))
            .cloned()
            .collect()
    }

    fn by_id(&self, id: DealId) -> Option<Deal> {
        self.deals.iter().find(|d| d.id == id).cloned()
    }
}

#[cfg(test)]
#[path = "./catalog_tests.rs"]
mod tests;
