//! Reusable UI components (header, footer, input, cards, etc.).

pub mod category_bar;
pub mod deal_card;
pub mod field;
pub mod footer;
pub mod header;
pub mod input;
