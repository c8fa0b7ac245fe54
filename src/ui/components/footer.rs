//! Footer listing the key bindings for the current screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

const SEPARATOR: &str = " | ";

/// Centered legend of `(key) action` entries inside a double border. The
/// key part of each entry is highlighted.
pub struct InfoFooter {
    entries: Vec<String>,
}

impl InfoFooter {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Splits a `"(a) one | (b) two"` legend into its entries.
    pub fn from_legend(legend: &str) -> Self {
        Self::new(
            legend
                .split(SEPARATOR)
                .filter(|e| !e.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    fn entry_spans<'a>(entry: &'a str, ctx: &CustomWidgetContext) -> Vec<Span<'a>> {
        let colors = &ctx.state.colors;
        let key_style = Style::new()
            .fg(colors.border_color)
            .add_modifier(Modifier::BOLD);

        match entry.split_once(") ") {
            Some((key, action)) if key.starts_with('(') => vec![
                Span::styled(format!("{key})"), key_style),
                Span::raw(format!(" {action}")),
            ],
            _ => vec![Span::raw(entry)],
        }
    }
}

impl CustomWidget for InfoFooter {
    fn render(self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext) {
        let colors = &ctx.state.colors;
        let mut spans: Vec<Span> = Vec::new();

        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, Style::new().fg(colors.gray)));
            }
            spans.extend(Self::entry_spans(entry, ctx));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::new().fg(colors.text).bg(colors.buffer_bg))
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(Style::new().fg(colors.border_color)),
            )
            .render(area, buf)
    }
}

#[cfg(test)]
#[path = "./footer_tests.rs"]
mod tests;
