//! Pure reducer functions that compute new state from actions.

use std::{fmt::Debug, rc::Rc};

use crate::{catalog::Catalog, store::Reducer};

use super::{action::Action, state::State};

mod reducers;

/// Applies actions to state, reading deals through the catalog.
pub struct StoreReducer {
    catalog: Rc<dyn Catalog>,
}

impl StoreReducer {
    pub fn new(catalog: Rc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    pub fn boxed(catalog: Rc<dyn Catalog>) -> Box<Self> {
        Box::new(Self::new(catalog))
    }

    fn log_action<D: Debug>(&self, name: &str, data: &D) {
        log::debug!("processing action: {name}({:?})", data);
    }
}

impl Reducer for StoreReducer {
    /// Applies an action to the state, mutating it in place.
    fn reduce(&self, state: &mut State, action: Action) {
        let catalog = self.catalog.as_ref();

        // status messages last until the next unrelated action
        if !matches!(action, Action::SetTheme(_) | Action::UpdateMessage(_)) {
            reducers::ui::update_message(state, None);
        }

        match action {
            // Listing actions
            Action::ToggleCategory(category) => {
                self.log_action("ToggleCategory", &category);
                reducers::listing::toggle_category(state, catalog, category);
            }
            Action::UpdateQuery(query) => {
                self.log_action("UpdateQuery", &query);
                reducers::listing::update_query(state, catalog, query);
            }
            Action::SetSearchEditing(value) => {
                self.log_action("SetSearchEditing", &value);
                reducers::listing::set_search_editing(state, value);
            }
            Action::SelectNext => {
                self.log_action("SelectNext", &state.cursor);
                reducers::listing::select_next(state);
            }
            Action::SelectPrevious => {
                self.log_action("SelectPrevious", &state.cursor);
                reducers::listing::select_previous(state);
            }

            // Reservation actions
            Action::OpenDeal(id) => {
                self.log_action("OpenDeal", &id);
                reducers::reservation::open_deal(state, catalog, id);
            }
            Action::CloseDeal => {
                self.log_action("CloseDeal", &"");
                reducers::reservation::close_deal(state, catalog);
            }
            Action::IncrementQuantity => {
                self.log_action("IncrementQuantity", &"");
                reducers::reservation::increment_quantity(state);
            }
            Action::DecrementQuantity => {
                self.log_action("DecrementQuantity", &"");
                reducers::reservation::decrement_quantity(state);
            }
            Action::ConfirmReservation => {
                self.log_action("ConfirmReservation", &"");
                reducers::reservation::confirm_reservation(state);
            }
            Action::ReturnToDeals => {
                self.log_action("ReturnToDeals", &"");
                reducers::reservation::return_to_deals(state, catalog);
            }

            // UI actions
            Action::SetTheme(theme) => {
                self.log_action("SetTheme", &theme);
                reducers::ui::set_theme(state, theme);
            }
            Action::UpdateMessage(message) => {
                self.log_action("UpdateMessage", &message);
                reducers::ui::update_message(state, message);
            }
        }
    }
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
