//! Values computed from state and the catalog rather than stored directly.

use crate::catalog::{Catalog, Category, Deal};

use super::state::State;

/// Keeps the deals matching the free-text query. An empty query keeps all.
pub fn search(query: &str, deals: Vec<Deal>) -> Vec<Deal> {
    deals.into_iter().filter(|d| d.matches(query)).collect()
}

/// Deals passing both the category filter and the search query.
pub fn visible_deals(
    catalog: &dyn Catalog,
    category: Option<Category>,
    query: &str,
) -> Vec<Deal> {
    search(query, catalog.by_category(category))
}

/// The deal under the list cursor.
pub fn highlighted_deal(state: &State) -> Option<&Deal> {
    state.deals.get(state.cursor)
}

/// Label for the confirm action, e.g. "Reserve 1 Item" / "Reserve 3 Items".
pub fn reserve_label(quantity: u32) -> String {
    if quantity > 1 {
        format!("Reserve {quantity} Items")
    } else {
        format!("Reserve {quantity} Item")
    }
}

#[cfg(test)]
#[path = "./derived_tests.rs"]
mod tests;
