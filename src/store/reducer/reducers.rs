pub mod listing;
pub mod reservation;
pub mod ui;
