//! Redux-like state container for the terminal UI.

#[cfg(test)]
use mockall::automock;

use std::{cell::RefCell, rc::Rc};

use crate::store::{action::Action, state::State};

pub mod action;
pub mod derived;
pub mod reducer;
pub mod state;

/// Gets application state
#[cfg_attr(test, automock)]
pub trait StateGetter {
    fn get_state(&self) -> Rc<State>;
}

/// Dispatches actions to update application state
#[cfg_attr(test, automock)]
pub trait Dispatcher {
    fn dispatch(&self, action: Action);
}

/// Handles mutating store state based on provided action
#[cfg_attr(test, automock)]
pub trait Reducer {
    fn reduce(&self, state: &mut State, action: Action);
}

type Effect = Box<dyn Fn(&Action, &State)>;

/// Centralized state container
pub struct Store {
    state: RefCell<Rc<State>>,
    reducer: Box<dyn Reducer>,
    effect: Option<Effect>,
}

impl Store {
    /// Creates a new store with the given initial state and reducer.
    pub fn new(initial_state: State, reducer: Box<dyn Reducer>) -> Self {
        Self {
            reducer,
            state: RefCell::new(Rc::new(initial_state)),
            effect: None,
        }
    }

    /// Registers a callback invoked with every action after it has been
    /// reduced, along with the resulting state. Used for side effects such as
    /// persisting the selected theme.
    pub fn set_effect_fn<F: Fn(&Action, &State) + 'static>(&mut self, f: F) {
        self.effect = Some(Box::new(f))
    }
}

impl StateGetter for Store {
    fn get_state(&self) -> Rc<State> {
        self.state.borrow().clone()
    }
}

impl Dispatcher for Store {
    fn dispatch(&self, action: Action) {
        {
            let mut rc = self.state.borrow_mut();
            let state = Rc::make_mut(&mut rc);
            self.reducer.reduce(state, action.clone());
        }

        if let Some(f) = self.effect.as_ref() {
            let state = self.get_state();
            f(&action, &state)
        }
    }
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;
