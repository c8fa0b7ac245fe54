//! Deal list with search and category filters.

use color_eyre::eyre::Result;
use ratatui::{
    buffer::Buffer,
    crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers},
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::{
    store::{
        action::Action,
        derived,
        state::{State, ViewID},
    },
    ui::components::{
        category_bar::{CategoryBar, category_for_key},
        deal_card::{CARD_HEIGHT, DealCard},
        input::{Input, InputState},
    },
};

use super::traits::{
    CustomEventContext, CustomStatefulWidget, CustomWidget, CustomWidgetContext,
    CustomWidgetRef, EventHandler, View,
};

/// Searchable, filterable list of deals.
#[derive(Default)]
pub struct DealsView;

impl DealsView {
    pub fn new() -> Self {
        Self
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext) {
        let mut input_state = InputState {
            editing: ctx.state.search_editing,
            value: ctx.state.query.clone(),
        };

        Input::new("Search")
            .placeholder("Find deals near you")
            .render(area, buf, &mut input_state, ctx);
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext) {
        let state = ctx.state;

        if state.deals.is_empty() {
            Paragraph::new("No deals found")
                .style(Style::new().fg(state.colors.gray))
                .centered()
                .render(area, buf);
            return;
        }

        let capacity = usize::from((area.height / CARD_HEIGHT).max(1));
        // keep the cursor on screen
        let offset = state.cursor.saturating_sub(capacity - 1);

        let mut card_area = Rect {
            height: CARD_HEIGHT.min(area.height),
            ..area
        };

        for (i, deal) in state.deals.iter().enumerate().skip(offset).take(capacity) {
            DealCard::new(deal, i == state.cursor).render(card_area, buf, ctx);
            card_area.y += CARD_HEIGHT;
        }
    }

    fn process_search_key(&self, code: KeyCode, ctx: &CustomEventContext) -> bool {
        let dispatcher = &ctx.dispatcher;

        match code {
            KeyCode::Char(c) => {
                let mut query = ctx.state.query.clone();
                query.push(c);
                dispatcher.dispatch(Action::UpdateQuery(query));
                true
            }
            KeyCode::Backspace => {
                let mut query = ctx.state.query.clone();
                query.pop();
                dispatcher.dispatch(Action::UpdateQuery(query));
                true
            }
            KeyCode::Enter | KeyCode::Esc => {
                dispatcher.dispatch(Action::SetSearchEditing(false));
                true
            }
            _ => false,
        }
    }

    fn process_list_key(&self, code: KeyCode, ctx: &CustomEventContext) -> bool {
        let dispatcher = &ctx.dispatcher;

        match code {
            KeyCode::Char('/') => {
                dispatcher.dispatch(Action::SetSearchEditing(true));
                true
            }
            KeyCode::Char('j') | KeyCode::Down => {
                dispatcher.dispatch(Action::SelectNext);
                true
            }
            KeyCode::Char('k') | KeyCode::Up => {
                dispatcher.dispatch(Action::SelectPrevious);
                true
            }
            KeyCode::Char(c) => match category_for_key(c) {
                Some(category) => {
                    dispatcher.dispatch(Action::ToggleCategory(category));
                    true
                }
                None => false,
            },
            KeyCode::Enter => match derived::highlighted_deal(ctx.state) {
                Some(deal) => {
                    dispatcher.dispatch(Action::OpenDeal(deal.id));
                    true
                }
                None => false,
            },
            KeyCode::Esc if !ctx.state.query.is_empty() => {
                dispatcher.dispatch(Action::UpdateQuery(String::new()));
                true
            }
            _ => false,
        }
    }
}

impl View for DealsView {
    fn id(&self) -> ViewID {
        ViewID::Deals
    }

    fn legend(&self, state: &State) -> &str {
        if state.search_editing {
            "(enter/esc) done searching"
        } else {
            "(/) search | (1-3) category | (j/k) move | (enter) reserve"
        }
    }

    fn override_main_legend(&self, state: &State) -> bool {
        // q and t are typed into the query while editing
        state.search_editing
    }
}

impl CustomWidgetRef for DealsView {
    fn render_ref(&self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext) -> Result<()> {
        let [search_area, _, categories_area, _, list_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(CARD_HEIGHT),
        ])
        .areas(area);

        self.render_search(search_area, buf, ctx);
        CategoryBar::new(ctx.state.category).render(categories_area, buf, ctx);
        self.render_list(list_area, buf, ctx);

        Ok(())
    }
}

impl EventHandler for DealsView {
    fn process_event(&self, evt: &Event, ctx: &CustomEventContext) -> Result<bool> {
        let Event::Key(key) = evt else {
            return Ok(false);
        };

        if key.kind != KeyEventKind::Press || key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(false);
        }

        let handled = if ctx.state.search_editing {
            self.process_search_key(key.code, ctx)
        } else {
            self.process_list_key(key.code, ctx)
        };

        Ok(handled)
    }
}

#[cfg(test)]
#[path = "./deals_tests.rs"]
mod tests;
