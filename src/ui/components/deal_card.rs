//! Card summarising a single deal in the list.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    catalog::Deal,
    ui::views::traits::{CustomWidget, CustomWidgetContext},
};

/// Rows occupied by a card including its border.
pub const CARD_HEIGHT: u16 = 5;
/// Used for overflow when text exceeds the available width
const ELLIPSIS: &str = "…";

/// Shortens text to fit the given display width, ending with an ellipsis
/// when truncated.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;

    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        used += w;
        out.push(c);
    }

    out + ELLIPSIS
}

pub struct DealCard<'a> {
    deal: &'a Deal,
    selected: bool,
}

impl<'a> DealCard<'a> {
    pub fn new(deal: &'a Deal, selected: bool) -> Self {
        Self { deal, selected }
    }
}

impl CustomWidget for DealCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext) {
        let colors = &ctx.state.colors;

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(colors.gray));

        if self.selected {
            block = block
                .border_type(BorderType::Thick)
                .border_style(Style::new().fg(colors.selected_fg))
                .title_bottom(Line::from(" (enter) Reserve Deal ").right_aligned());
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let [top, middle, bottom] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let price = self.deal.discounted_price.to_string();
        let [name_area, price_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(price.width() as u16)])
                .areas(top);

        Paragraph::new(truncate(&self.deal.business, name_area.width as usize))
            .style(
                Style::new()
                    .fg(colors.text)
                    .add_modifier(Modifier::BOLD),
            )
            .render(name_area, buf);

        Paragraph::new(price)
            .style(
                Style::new()
                    .fg(colors.price)
                    .add_modifier(Modifier::BOLD),
            )
            .right_aligned()
            .render(price_area, buf);

        Paragraph::new(truncate(&self.deal.description, middle.width as usize))
            .style(Style::new().fg(colors.gray))
            .render(middle, buf);

        let distance = self.deal.distance.as_str();
        let [time_area, distance_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(distance.width() as u16)])
                .areas(bottom);

        Paragraph::new(format!("{} left", self.deal.time_remaining))
            .style(Style::new().fg(colors.gray))
            .render(time_area, buf);

        Paragraph::new(distance)
            .style(Style::new().fg(colors.gray))
            .right_aligned()
            .render(distance_area, buf);
    }
}

#[cfg(test)]
#[path = "./deal_card_tests.rs"]
mod tests;
