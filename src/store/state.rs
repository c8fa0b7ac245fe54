//! Application state definitions.

use strum::Display;

use crate::{
    catalog::{Category, Deal, Price},
    ui::colors::{Colors, Theme},
};

/// Identifies which of the mutually exclusive screens is rendered.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Display)]
pub enum ViewID {
    Deals,
    Reservation,
    Confirmation,
}

/// A committed reservation of a deal for some quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub deal: Deal,
    pub quantity: u32,
    pub total: Price,
}

impl Reservation {
    /// Creates a reservation, pricing it at the deal's discounted price times
    /// the quantity.
    pub fn new(deal: Deal, quantity: u32) -> Self {
        let total = deal.discounted_price.times(quantity);
        Self {
            deal,
            quantity,
            total,
        }
    }
}

/// Where the user is in the browse / reserve / confirm flow.
///
/// A confirmed reservation always carries the deal it was made for, so
/// "confirmed with nothing selected" cannot be represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Listing,
    Viewing {
        deal: Deal,
        /// Always >= 1, reset whenever a deal is opened
        quantity: u32,
    },
    Confirmed(Reservation),
}

impl Screen {
    pub fn view_id(&self) -> ViewID {
        match self {
            Screen::Confirmed(_) => ViewID::Confirmation,
            Screen::Viewing { .. } => ViewID::Reservation,
            Screen::Listing => ViewID::Deals,
        }
    }

    /// The selected deal, if any screen other than the listing is active.
    pub fn deal(&self) -> Option<&Deal> {
        match self {
            Screen::Confirmed(reservation) => Some(&reservation.deal),
            Screen::Viewing { deal, .. } => Some(deal),
            Screen::Listing => None,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Screen::Confirmed(_))
    }
}

/// Complete application state for the terminal UI.
#[derive(Debug, Clone)]
pub struct State {
    pub true_color_enabled: bool,
    pub theme: Theme,
    pub colors: Colors,
    pub category: Option<Category>,
    pub query: String,
    pub search_editing: bool,
    /// Deals passing the current category filter and search query
    pub deals: Vec<Deal>,
    /// Highlighted index into `deals`
    pub cursor: usize,
    pub screen: Screen,
    /// Reservations confirmed during this session
    pub reservations: Vec<Reservation>,
    pub message: Option<String>,
}

impl State {
    /// Creates the initial listing state for the given catalog deals.
    pub fn new(deals: Vec<Deal>, theme: Theme, true_color_enabled: bool) -> Self {
        Self {
            true_color_enabled,
            theme,
            colors: Colors::new(theme.to_palette(true_color_enabled), true_color_enabled),
            category: None,
            query: String::new(),
            search_editing: false,
            deals,
            cursor: 0,
            screen: Screen::Listing,
            reservations: Vec::new(),
            message: None,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Vec::new(), Theme::default(), false)
    }
}

#[cfg(test)]
#[path = "./state_tests.rs"]
mod tests;
