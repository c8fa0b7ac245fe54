//! Reservation confirmation dialog.

use color_eyre::eyre::Result;
use ratatui::{
    buffer::Buffer,
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Clear, Padding, Paragraph, Widget, Wrap},
};

use crate::store::{
    action::Action,
    state::{Screen, State, ViewID},
};

use super::traits::{
    CustomEventContext, CustomWidgetContext, CustomWidgetRef, EventHandler, View,
};

const DIALOG_WIDTH: u16 = 80;
const DIALOG_HEIGHT: u16 = 11;

/// Centers the fixed size dialog, shrinking it to fit small terminals.
fn dialog_area(area: Rect) -> Rect {
    let [area] = Layout::vertical([Constraint::Length(DIALOG_HEIGHT)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Length(DIALOG_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[derive(Default)]
pub struct ConfirmationView;

impl ConfirmationView {
    pub fn new() -> Self {
        Self
    }
}

impl View for ConfirmationView {
    fn id(&self) -> ViewID {
        ViewID::Confirmation
    }

    fn legend(&self, _state: &State) -> &str {
        "(enter/esc) back to deals"
    }
}

impl CustomWidgetRef for ConfirmationView {
    fn render_ref(&self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext) -> Result<()> {
        let Screen::Confirmed(reservation) = &ctx.state.screen else {
            return Ok(());
        };

        let colors = &ctx.state.colors;
        let dialog = dialog_area(area);

        Clear.render(dialog, buf);

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(colors.border_color))
            .padding(Padding::uniform(1))
            .style(Style::new().bg(colors.buffer_bg));
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        let [title_area, _, message_area, _, summary_area, _, button_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        Paragraph::new("Reservation Confirmed!")
            .style(
                Style::new()
                    .fg(colors.price)
                    .add_modifier(Modifier::BOLD),
            )
            .centered()
            .render(title_area, buf);

        Paragraph::new(format!(
            "Your deal is reserved. Show this screen at {} to redeem.",
            reservation.deal.business
        ))
        .style(Style::new().fg(colors.text))
        .centered()
        .wrap(Wrap { trim: true })
        .render(message_area, buf);

        Paragraph::new(Line::from(format!(
            "{} x {} | Total: {}",
            reservation.quantity, reservation.deal.description, reservation.total
        )))
        .style(Style::new().fg(colors.gray))
        .centered()
        .render(summary_area, buf);

        Paragraph::new("Back to Deals (enter)")
            .style(
                Style::new()
                    .fg(colors.header_text)
                    .bg(colors.header_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .centered()
            .render(button_area, buf);

        Ok(())
    }
}

impl EventHandler for ConfirmationView {
    fn process_event(&self, evt: &Event, ctx: &CustomEventContext) -> Result<bool> {
        let Event::Key(key) = evt else {
            return Ok(false);
        };

        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                ctx.dispatcher.dispatch(Action::ReturnToDeals);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
#[path = "./confirmation_tests.rs"]
mod tests;
