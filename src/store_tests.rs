use std::{cell::Cell, rc::Rc};

use crate::{
    catalog::{Catalog, StaticCatalog},
    store::{reducer::StoreReducer, state::Screen},
    ui::colors::Theme,
};

use super::*;

fn seeded_store() -> Store {
    let catalog = Rc::new(StaticCatalog::seeded());
    let state = State::new(catalog.all(), Theme::Blue, false);
    Store::new(state, StoreReducer::boxed(catalog))
}

#[test]
fn dispatch_runs_reducer() {
    let mut reducer = MockReducer::new();
    reducer
        .expect_reduce()
        .withf(|_, action| *action == Action::SelectNext)
        .times(1)
        .returning(|state, _| state.cursor = 7);

    let store = Store::new(State::default(), Box::new(reducer));
    store.dispatch(Action::SelectNext);

    assert_eq!(store.get_state().cursor, 7);
}

#[test]
fn previously_fetched_state_is_not_mutated() {
    let store = seeded_store();
    let before = store.get_state();

    store.dispatch(Action::OpenDeal(1));

    assert_eq!(before.screen, Screen::Listing);
    assert_eq!(store.get_state().screen.deal().map(|d| d.id), Some(1));
}

#[test]
fn effect_fn_sees_action_and_new_state() {
    let mut store = seeded_store();
    let seen = Rc::new(Cell::new(None));
    let seen_clone = Rc::clone(&seen);

    store.set_effect_fn(move |action, state| {
        if let Action::SetTheme(theme) = action {
            assert_eq!(state.theme, *theme);
            seen_clone.set(Some(*theme));
        }
    });

    store.dispatch(Action::SelectNext);
    assert_eq!(seen.get(), None);

    store.dispatch(Action::SetTheme(Theme::Red));
    assert_eq!(seen.get(), Some(Theme::Red));
}
