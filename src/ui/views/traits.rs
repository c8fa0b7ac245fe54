//! Traits implemented by views and components.

use std::rc::Rc;

use color_eyre::eyre::Result;
use ratatui::{buffer::Buffer, crossterm::event::Event as CrossTermEvent, layout::Rect};

use crate::store::{
    Dispatcher,
    state::{State, ViewID},
};

/// Context handed to views while processing input.
pub struct CustomEventContext<'a> {
    // app state at the time the event was read
    pub state: &'a State,
    // how views report user intent back to the store
    pub dispatcher: Rc<dyn Dispatcher>,
}

/// Context handed to views and components while rendering.
pub struct CustomWidgetContext<'a> {
    // app state
    pub state: &'a State,
    // total area for the entire application - useful for calculating
    // dialog areas
    pub app_area: Rect,
}

pub trait EventHandler {
    /// Returns true if the event was consumed.
    fn process_event(&self, evt: &CrossTermEvent, ctx: &CustomEventContext) -> Result<bool>;
}

pub trait CustomWidget {
    fn render(self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext);
}

pub trait CustomWidgetRef {
    fn render_ref(&self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext) -> Result<()>;
}

pub trait CustomStatefulWidget {
    type State;

    fn render(
        self,
        area: Rect,
        buf: &mut Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    );
}

pub trait View: EventHandler + CustomWidgetRef {
    fn id(&self) -> ViewID;
    fn legend(&self, _state: &State) -> &str {
        ""
    }
    /// When true the footer shows only this view's legend.
    fn override_main_legend(&self, _state: &State) -> bool {
        false
    }
}
