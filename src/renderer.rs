//! Main application loop and terminal management.

use color_eyre::eyre::{Context, Result, eyre};
use core::time;
use log::*;
use ratatui::{
    Terminal,
    crossterm::{
        event::{self, Event as CrossTermEvent, KeyCode, KeyEventKind, KeyModifiers},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    prelude::Backend,
};
use std::{cell::RefCell, io, rc::Rc};

use crate::{
    store::{Dispatcher, StateGetter, Store, state::State},
    ui::{
        app::{App, Application},
        views::traits::{CustomEventContext, CustomWidgetContext},
    },
};

/// Owns the terminal and runs the draw / input loop.
///
/// Manages the terminal lifecycle (raw mode, alternate screen) and redraws
/// after every input event.
pub struct Renderer<B: Backend + io::Write> {
    terminal: RefCell<Terminal<B>>,
    store: Rc<Store>,
    app: Box<dyn Application>,
}

impl<B: Backend + io::Write> Renderer<B> {
    pub fn new(terminal: Terminal<B>, store: Rc<Store>) -> Self {
        Self {
            terminal: RefCell::new(terminal),
            store,
            app: Box::new(App::new()),
        }
    }

    /// Initializes the terminal and starts the render loop. Returns when the
    /// user quits.
    pub fn start_render_loop(&self) -> Result<()> {
        self.enable_terminal_raw_mode()?;
        let res = self.start_loop();
        // always restore the terminal, even when the loop failed
        self.exit()?;
        res
    }

    fn start_loop(&self) -> Result<()> {
        self.render_frame(&self.store.get_state())?;

        loop {
            let state = self.store.get_state();

            if let Ok(has_event) = event::poll(time::Duration::from_millis(16))
                && has_event
            {
                let evt = event::read()?;

                let ctx = CustomEventContext {
                    state: &state,
                    dispatcher: Rc::clone(&self.store) as Rc<dyn Dispatcher>,
                };

                let handled = self.app.process_event(&evt, &ctx)?;

                if let CrossTermEvent::Key(key) = evt
                    && key.kind == KeyEventKind::Press
                {
                    match key.code {
                        // do not allow overriding ctrl-c
                        KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => {
                            info!("received ctrl-c, exiting");
                            return Ok(());
                        }
                        // views may claim q, e.g. while typing a search
                        KeyCode::Char('q') if !handled => {
                            info!("quitting");
                            return Ok(());
                        }
                        _ => {}
                    }
                }

                self.render_frame(&self.store.get_state())?;
            }
        }
    }

    fn render_frame(&self, state: &State) -> Result<()> {
        let mut res = Ok(());

        self.terminal
            .borrow_mut()
            .draw(|f| {
                let ctx = CustomWidgetContext {
                    state,
                    app_area: f.area(),
                };

                if let Err(err) = self.app.render_ref(f.area(), f.buffer_mut(), &ctx) {
                    res = Err(err);
                }
            })
            .map_err(|e| eyre!("failed to render: {}", e))?;

        res
    }

    fn enable_terminal_raw_mode(&self) -> Result<()> {
        enable_raw_mode().wrap_err("failed to enter raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen)
            .wrap_err("failed to enter alternate screen")?;
        Ok(())
    }

    fn exit(&self) -> Result<()> {
        let mut terminal = self.terminal.borrow_mut();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal
            .show_cursor()
            .map_err(|e| eyre!("failed to show terminal cursor: {}", e))?;
        Ok(())
    }
}
