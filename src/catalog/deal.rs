//! Deal and category definitions.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::price::Price;

/// Unique deal identifier.
pub type DealId = u32;

/// Closed set of deal classifications used for filtering.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Food,
    Fitness,
    Beauty,
}

/// A discounted offer from a local business. Never mutated once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub id: DealId,
    pub business: String,
    pub category: Category,
    pub description: String,
    pub details: String,
    pub original_price: Price,
    pub discounted_price: Price,
    /// Display only, e.g. "45 mins"
    pub time_remaining: String,
    /// Display only, e.g. "0.3 mi"
    pub distance: String,
}

impl Deal {
    /// Returns true if the query appears in any of the deal's searchable
    /// text, ignoring case. An empty query matches every deal.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();

        if query.is_empty() {
            return true;
        }

        let category = self.category.to_string();

        [
            self.business.as_str(),
            self.description.as_str(),
            self.details.as_str(),
            category.as_str(),
        ]
        .iter()
        .any(|text| text.to_lowercase().contains(&query))
    }
}
