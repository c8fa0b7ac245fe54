//! Deal list reducers: category filter, search and cursor.

use crate::{
    catalog::{Catalog, Category},
    store::{
        derived,
        state::{Screen, State},
    },
};

/// Recomputes the visible deals and keeps the cursor on the list.
pub fn refresh(state: &mut State, catalog: &dyn Catalog) {
    state.deals = derived::visible_deals(catalog, state.category, &state.query);
    state.cursor = state.cursor.min(state.deals.len().saturating_sub(1));
}

/// Selecting the active category clears the filter, any other category
/// replaces it. Ignored outside the listing.
pub fn toggle_category(state: &mut State, catalog: &dyn Catalog, category: Category) {
    if state.screen != Screen::Listing {
        return;
    }

    state.category = if state.category == Some(category) {
        None
    } else {
        Some(category)
    };

    refresh(state, catalog);
}

/// Replaces the search query. Ignored outside the listing.
pub fn update_query(state: &mut State, catalog: &dyn Catalog, query: String) {
    if state.screen != Screen::Listing {
        return;
    }

    state.query = query;
    refresh(state, catalog);
}

pub fn set_search_editing(state: &mut State, value: bool) {
    state.search_editing = value && state.screen == Screen::Listing;
}

/// Moves the cursor down without wrapping.
pub fn select_next(state: &mut State) {
    if state.cursor + 1 < state.deals.len() {
        state.cursor += 1;
    }
}

/// Moves the cursor up without wrapping.
pub fn select_previous(state: &mut State) {
    state.cursor = state.cursor.saturating_sub(1);
}
