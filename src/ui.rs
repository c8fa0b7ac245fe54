//! Terminal UI components, views, and the top level app.

pub mod app;
pub mod colors;
pub mod components;
pub mod views;
