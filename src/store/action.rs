//! Action types for state transitions.

use crate::{
    catalog::{Category, DealId},
    ui::colors::Theme,
};

/// Commands that trigger state changes via the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // listing
    ToggleCategory(Category),
    UpdateQuery(String),
    SetSearchEditing(bool),
    SelectNext,
    SelectPrevious,

    // reservation flow
    OpenDeal(DealId),
    CloseDeal,
    IncrementQuantity,
    DecrementQuantity,
    ConfirmReservation,
    ReturnToDeals,

    // ui
    SetTheme(Theme),
    UpdateMessage(Option<String>),
}
