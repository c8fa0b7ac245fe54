//! Screen transitions for the reserve flow.

use crate::{
    catalog::{Catalog, DealId},
    store::state::{Reservation, Screen, State},
};

use super::listing;

/// List -> detail. Only from the listing; quantity starts at 1.
pub fn open_deal(state: &mut State, catalog: &dyn Catalog, id: DealId) {
    if state.screen != Screen::Listing {
        return;
    }

    match catalog.by_id(id) {
        Some(deal) => {
            state.search_editing = false;
            state.screen = Screen::Viewing { deal, quantity: 1 };
        }
        None => log::warn!("ignoring request to open unknown deal {id}"),
    }
}

/// Detail -> list, keeping filter, query and cursor. From the confirmation
/// screen this behaves like returning to deals.
pub fn close_deal(state: &mut State, catalog: &dyn Catalog) {
    if let Some(deal) = state.screen.deal() {
        log::debug!("closing deal {}", deal.id);
    }

    match state.screen {
        Screen::Viewing { .. } => state.screen = Screen::Listing,
        Screen::Confirmed(_) => return_to_deals(state, catalog),
        Screen::Listing => {}
    }
}

pub fn increment_quantity(state: &mut State) {
    if let Screen::Viewing { quantity, .. } = &mut state.screen {
        *quantity = quantity.saturating_add(1);
    }
}

/// Floors at 1.
pub fn decrement_quantity(state: &mut State) {
    if let Screen::Viewing { quantity, .. } = &mut state.screen {
        *quantity = quantity.saturating_sub(1).max(1);
    }
}

/// Detail -> confirmation. Unconditional when a deal is being viewed.
pub fn confirm_reservation(state: &mut State) {
    if let Screen::Viewing { deal, quantity } = &state.screen {
        let reservation = Reservation::new(deal.clone(), *quantity);
        log::info!(
            "reserved {} x deal {} for {}",
            reservation.quantity,
            reservation.deal.id,
            reservation.total
        );
        state.reservations.push(reservation.clone());
        state.screen = Screen::Confirmed(reservation);
    }
}

/// Confirmation -> unfiltered list with nothing selected.
pub fn return_to_deals(state: &mut State, catalog: &dyn Catalog) {
    if !state.screen.is_confirmed() {
        return;
    }

    state.screen = Screen::Listing;
    state.category = None;
    state.query.clear();
    state.cursor = 0;
    listing::refresh(state, catalog);
}
