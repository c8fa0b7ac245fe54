//! View implementations for the three screens of the reserve flow.

pub mod confirmation;
pub mod deals;
pub mod reservation;
pub mod traits;
