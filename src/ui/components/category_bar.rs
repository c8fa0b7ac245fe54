//! Row of category toggles for the deal list.

use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use strum::IntoEnumIterator;

use crate::{
    catalog::Category,
    ui::views::traits::{CustomWidget, CustomWidgetContext},
};

/// Returns the category toggled by the given number key, if any. Keys are
/// numbered from 1 in category order.
pub fn category_for_key(key: char) -> Option<Category> {
    let idx = key.to_digit(10)?.checked_sub(1)?;
    Category::iter().nth(idx as usize)
}

/// Renders every category as a chip, highlighting the active one.
pub struct CategoryBar {
    active: Option<Category>,
}

impl CategoryBar {
    pub fn new(active: Option<Category>) -> Self {
        Self { active }
    }
}

impl CustomWidget for CategoryBar {
    fn render(self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext) {
        let colors = &ctx.state.colors;

        let chips = Category::iter()
            .enumerate()
            .map(|(i, category)| {
                let style = if self.active == Some(category) {
                    Style::default()
                        .fg(colors.header_text)
                        .bg(colors.chip_active_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors.text).bg(colors.chip_bg)
                };
                Span::from(format!(" ({}) {category} ", i + 1)).style(style)
            })
            .interleave_shortest(std::iter::repeat_n(Span::from(" "), 2))
            .collect_vec();

        Line::from(chips).render(area, buf);
    }
}

#[cfg(test)]
#[path = "./category_bar_tests.rs"]
mod tests;
