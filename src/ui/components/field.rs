//! Label / value row used on detail screens.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// A muted label on the left and its value right aligned.
pub struct Field {
    label: String,
    value: String,
}

impl Field {
    pub fn new(label: &str, value: String) -> Self {
        Self {
            label: String::from(label),
            value,
        }
    }
}

impl CustomWidget for Field {
    fn render(self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext) {
        let [label_area, value_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        Paragraph::new(self.label)
            .style(Style::new().fg(ctx.state.colors.gray))
            .render(label_area, buf);

        Paragraph::new(self.value)
            .style(Style::new().fg(ctx.state.colors.text))
            .right_aligned()
            .render(value_area, buf);
    }
}
