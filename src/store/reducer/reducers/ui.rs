//! Pure UI state reducers.

use crate::{
    store::state::State,
    ui::colors::{Colors, Theme},
};

/// Switches the theme and recomputes the palette.
pub fn set_theme(state: &mut State, theme: Theme) {
    state.theme = theme;
    state.colors = Colors::new(
        theme.to_palette(state.true_color_enabled),
        state.true_color_enabled,
    );
}

/// Sets or clears the status line message.
pub fn update_message(state: &mut State, message: Option<String>) {
    state.message = message;
}
