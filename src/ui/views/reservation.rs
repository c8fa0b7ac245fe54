//! Deal detail screen with the quantity picker.

use color_eyre::eyre::Result;
use ratatui::{
    buffer::Buffer,
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::{
    catalog::Deal,
    store::{
        action::Action,
        derived,
        state::{Screen, State, ViewID},
    },
    ui::components::{field::Field, header::Header},
};

use super::traits::{
    CustomEventContext, CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View,
};

/// Detail screen for the selected deal with a quantity picker.
#[derive(Default)]
pub struct ReservationView;

impl ReservationView {
    pub fn new() -> Self {
        Self
    }

    fn render_pricing(
        &self,
        deal: &Deal,
        quantity: u32,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let colors = &ctx.state.colors;

        let [prices_area, quantity_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(13)]).areas(area);

        Line::from(vec![
            Span::from(deal.original_price.to_string()).style(
                Style::new()
                    .fg(colors.gray)
                    .add_modifier(Modifier::CROSSED_OUT),
            ),
            Span::from("  "),
            Span::from(deal.discounted_price.to_string()).style(
                Style::new()
                    .fg(colors.price)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .render(prices_area, buf);

        Line::from(vec![
            Span::from("(-) ").style(Style::new().fg(colors.gray)),
            Span::from(quantity.to_string()).style(
                Style::new()
                    .fg(colors.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" (+)").style(Style::new().fg(colors.gray)),
        ])
        .right_aligned()
        .render(quantity_area, buf);
    }

    fn render_reserve_button(
        &self,
        deal: &Deal,
        quantity: u32,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let colors = &ctx.state.colors;
        let total = deal.discounted_price.times(quantity);

        Paragraph::new(format!(
            "{} (enter) | Total: {total}",
            derived::reserve_label(quantity)
        ))
        .style(
            Style::new()
                .fg(colors.header_text)
                .bg(colors.header_bg)
                .add_modifier(Modifier::BOLD),
        )
        .centered()
        .render(area, buf);
    }
}

impl View for ReservationView {
    fn id(&self) -> ViewID {
        ViewID::Reservation
    }

    fn legend(&self, _state: &State) -> &str {
        "(esc) back | (+/-) quantity | (enter) reserve"
    }
}

impl CustomWidgetRef for ReservationView {
    fn render_ref(&self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext) -> Result<()> {
        let Screen::Viewing { deal, quantity } = &ctx.state.screen else {
            return Ok(());
        };

        let [
            header_area,
            _,
            description_area,
            details_area,
            _,
            pricing_area,
            _,
            button_area,
            _,
            info_header_area,
            available_area,
            location_area,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Header::new(deal.business.clone())
            .tag(deal.category.to_string())
            .render(header_area, buf, ctx);

        Paragraph::new(deal.description.as_str())
            .style(
                Style::new()
                    .fg(ctx.state.colors.text)
                    .add_modifier(Modifier::BOLD),
            )
            .render(description_area, buf);

        Paragraph::new(deal.details.as_str())
            .style(Style::new().fg(ctx.state.colors.gray))
            .wrap(Wrap { trim: true })
            .render(details_area, buf);

        self.render_pricing(deal, *quantity, pricing_area, buf, ctx);
        self.render_reserve_button(deal, *quantity, button_area, buf, ctx);

        Header::new(String::from("Reservation Details")).render(info_header_area, buf, ctx);
        Field::new("Available Until:", deal.time_remaining.clone()).render(
            available_area,
            buf,
            ctx,
        );
        Field::new("Location:", format!("{} away", deal.distance)).render(
            location_area,
            buf,
            ctx,
        );

        Ok(())
    }
}

impl EventHandler for ReservationView {
    fn process_event(&self, evt: &Event, ctx: &CustomEventContext) -> Result<bool> {
        let Event::Key(key) = evt else {
            return Ok(false);
        };

        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        let action = match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => Action::IncrementQuantity,
            KeyCode::Char('-') | KeyCode::Left => Action::DecrementQuantity,
            KeyCode::Enter => Action::ConfirmReservation,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => Action::CloseDeal,
            _ => return Ok(false),
        };

        ctx.dispatcher.dispatch(action);

        Ok(true)
    }
}

#[cfg(test)]
#[path = "./reservation_tests.rs"]
mod tests;
