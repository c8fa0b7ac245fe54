//! Section header with an optional tag chip on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::{
    components::deal_card::truncate,
    views::traits::{CustomWidget, CustomWidgetContext},
};

/// Bold section title. A tag, e.g. the deal category, is drawn as a chip
/// flush right and wins over the title when space runs out.
pub struct Header {
    title: String,
    tag: Option<String>,
}

impl Header {
    pub fn new(title: String) -> Self {
        Self { title, tag: None }
    }

    pub fn tag(mut self, tag: String) -> Self {
        self.tag = Some(tag);
        self
    }
}

impl CustomWidget for Header {
    fn render(self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext) {
        let colors = &ctx.state.colors;

        let chip = self.tag.map(|t| format!(" {t} "));
        let chip_width = chip.as_deref().map_or(0, |c| c.width() as u16);

        let [title_area, tag_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(chip_width)]).areas(area);

        Line::from(truncate(&self.title, title_area.width as usize))
            .style(
                Style::new()
                    .fg(colors.border_color)
                    .add_modifier(Modifier::BOLD),
            )
            .render(title_area, buf);

        if let Some(chip) = chip {
            Line::from(chip)
                .style(Style::new().fg(colors.text).bg(colors.chip_bg))
                .render(tag_area, buf);
        }
    }
}

#[cfg(test)]
#[path = "./header_tests.rs"]
mod tests;
