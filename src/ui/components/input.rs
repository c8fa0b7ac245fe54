//! Editable text input component.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

/// State for an input field (editing mode and current value).
#[derive(Debug, Clone)]
pub struct InputState {
    pub editing: bool,
    pub value: String,
}

/// Labeled text input that highlights when in edit mode and shows a
/// placeholder while empty.
pub struct Input {
    label: String,
    placeholder: String,
}

impl Input {
    /// Creates a new input with the given label.
    pub fn new(label: &str) -> Self {
        Self {
            label: String::from(label),
            placeholder: String::new(),
        }
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = String::from(placeholder);
        self
    }
}

impl CustomStatefulWidget for Input {
    type State = InputState;

    fn render(
        self,
        area: Rect,
        buf: &mut Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let label = Span::from(format!("{0}: ", self.label));

        let value = if state.value.is_empty() && !state.editing {
            Span::from(self.placeholder).style(Style::default().fg(ctx.state.colors.gray))
        } else {
            let mut style = Style::default().fg(ctx.state.colors.text);
            if state.editing {
                style = style.fg(ctx.state.colors.input_editing);
            }
            let cursor = if state.editing { "_" } else { "" };
            Span::from(format!("{}{cursor}", state.value)).style(style)
        };

        let line = Line::from(vec![label, value]);
        line.render(area, buf);
    }
}

#[cfg(test)]
#[path = "./input_tests.rs"]
mod tests;
