//! Top level layout and global key handling.

use color_eyre::eyre::{Result, eyre};
use ratatui::{
    buffer::Buffer,
    crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Padding, Paragraph, Widget},
};
use std::collections::HashMap;

use crate::store::{
    action::Action,
    state::{State, ViewID},
};

use super::{
    components::{footer::InfoFooter, header::Header},
    views::{
        confirmation::ConfirmationView,
        deals::DealsView,
        reservation::ReservationView,
        traits::{
            CustomEventContext, CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler,
            View,
        },
    },
};

const DEFAULT_PADDING: Padding = Padding::horizontal(2);

/// What the renderer drives: draws the whole screen and handles input.
pub trait Application: EventHandler + CustomWidgetRef {}

pub struct App {
    views: HashMap<ViewID, Box<dyn View>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let mut views: HashMap<ViewID, Box<dyn View>> = HashMap::new();

        let deals = Box::new(DealsView::new());
        let reservation = Box::new(ReservationView::new());
        let confirmation = Box::new(ConfirmationView::new());

        views.insert(deals.id(), deals);
        views.insert(reservation.id(), reservation);
        views.insert(confirmation.id(), confirmation);

        Self { views }
    }

    fn current_view(&self, state: &State) -> Result<&dyn View> {
        let id = state.screen.view_id();
        self.views
            .get(&id)
            .map(|v| v.as_ref())
            .ok_or_else(|| eyre!("no view registered for {id}"))
    }

    fn render_buffer_bg(&self, area: Rect, buf: &mut Buffer, state: &State) {
        Block::new()
            .style(Style::new().bg(state.colors.buffer_bg))
            .render(area, buf);
    }

    fn status_line(state: &State) -> Option<String> {
        if let Some(message) = &state.message {
            return Some(message.clone());
        }

        match state.reservations.len() {
            0 => None,
            1 => Some(String::from("1 reservation this session")),
            n => Some(format!("{n} reservations this session")),
        }
    }

    fn render_top(&self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext) {
        let colors = &ctx.state.colors;
        let [logo_area, message_area, theme_area] = Layout::horizontal([
            Constraint::Length(14),
            Constraint::Min(0),
            Constraint::Length(20),
        ])
        .areas(area);

        let block = || {
            Block::bordered()
                .border_style(Style::new().fg(colors.border_color))
                .border_type(BorderType::Double)
                .padding(DEFAULT_PADDING)
        };

        let logo_block = block();
        let logo_inner = logo_block.inner(logo_area);
        logo_block.render(logo_area, buf);
        Paragraph::new("LastCall")
            .style(
                Style::new()
                    .fg(colors.border_color)
                    .add_modifier(Modifier::BOLD),
            )
            .render(logo_inner, buf);

        if let Some(message) = Self::status_line(ctx.state) {
            let message_block = Block::default().padding(Padding::new(2, 2, 1, 0));
            let message_inner = message_block.inner(message_area);
            message_block.render(message_area, buf);
            Header::new(message).render(message_inner, buf, ctx);
        }

        let theme_block = block();
        let theme_inner = theme_block.inner(theme_area);
        theme_block.render(theme_area, buf);
        Paragraph::new(format!("Theme: {}", ctx.state.theme))
            .style(Style::new().fg(colors.border_color))
            .render(theme_inner, buf);
    }

    fn render_middle_view(
        &self,
        view: &dyn View,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let block = Block::bordered()
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .border_type(BorderType::Plain)
            .padding(DEFAULT_PADDING);
        let inner_area = block.inner(area);
        block.render(area, buf);
        view.render_ref(inner_area, buf, ctx)
    }

    fn render_footer(
        &self,
        legend: &str,
        override_legend: bool,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let info = if override_legend {
            legend.to_string()
        } else if legend.is_empty() {
            String::from("(q) quit | (t) theme")
        } else {
            format!("(q) quit | (t) theme | {legend}")
        };

        InfoFooter::from_legend(&info).render(area, buf, ctx);
    }

    fn cycle_theme(&self, ctx: &CustomEventContext) {
        let next = ctx.state.theme.next();
        ctx.dispatcher.dispatch(Action::SetTheme(next));
        ctx.dispatcher
            .dispatch(Action::UpdateMessage(Some(format!("Theme set to {next}"))));
    }
}

impl Application for App {}

impl CustomWidgetRef for App {
    fn render_ref(&self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext) -> Result<()> {
        // top, middle, footer
        let [top_area, middle_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .areas(area);

        let view = self.current_view(ctx.state)?;
        let legend = view.legend(ctx.state);
        let override_legend = view.override_main_legend(ctx.state);

        self.render_buffer_bg(area, buf, ctx.state);
        self.render_top(top_area, buf, ctx);
        self.render_middle_view(view, middle_area, buf, ctx)?;
        self.render_footer(legend, override_legend, footer_area, buf, ctx);

        Ok(())
    }
}

impl EventHandler for App {
    fn process_event(&self, evt: &Event, ctx: &CustomEventContext) -> Result<bool> {
        let view = self.current_view(ctx.state)?;

        if view.process_event(evt, ctx)? {
            return Ok(true);
        }

        match evt {
            Event::Key(key)
                if key.kind == KeyEventKind::Press
                    && key.code == KeyCode::Char('t')
                    && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.cycle_theme(ctx);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
#[path = "./app_tests.rs"]
mod tests;
