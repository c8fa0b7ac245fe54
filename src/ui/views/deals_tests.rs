use mockall::predicate::eq;
use ratatui::{
    Terminal,
    backend::TestBackend,
    crossterm::event::{KeyEvent, KeyEventState},
};
use std::rc::Rc;

use crate::{
    catalog::{Catalog, Category, StaticCatalog},
    store::{Dispatcher, MockDispatcher},
    ui::colors::Theme,
};

use super::*;

fn seeded_state() -> State {
    State::new(StaticCatalog::seeded().all(), Theme::Blue, false)
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn render(state: &State, width: u16, height: u16) -> Terminal<TestBackend> {
    let view = DealsView::new();
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state,
                app_area: frame.area(),
            };

            view.render_ref(frame.area(), frame.buffer_mut(), &ctx)
                .unwrap()
        })
        .unwrap();

    terminal
}

fn expect_action(action: Action) -> Rc<dyn Dispatcher> {
    let mut dispatcher = MockDispatcher::new();
    dispatcher
        .expect_dispatch()
        .with(eq(action))
        .times(1)
        .return_const(());
    Rc::new(dispatcher)
}

fn expect_nothing() -> Rc<dyn Dispatcher> {
    let mut dispatcher = MockDispatcher::new();
    dispatcher.expect_dispatch().never();
    Rc::new(dispatcher)
}

#[test]
fn renders_search_categories_and_cards() {
    let state = seeded_state();
    let terminal = render(&state, 80, 20);
    let output = terminal.backend().to_string();

    assert!(output.contains("Search: Find deals near you"));
    assert!(output.contains("(1) Food"));
    assert!(output.contains("Sweet Treats Bakery"));
    assert!(output.contains("Yoga Studio"));
    assert!(output.contains("(enter) Reserve Deal"));
}

#[test]
fn scrolls_to_keep_cursor_visible() {
    let mut state = seeded_state();
    state.cursor = 2;

    // room for a single card
    let terminal = render(&state, 80, 9);
    let output = terminal.backend().to_string();

    assert!(output.contains("Curl Up Salon"));
    assert!(!output.contains("Sweet Treats Bakery"));
}

#[test]
fn renders_empty_message() {
    let mut state = seeded_state();
    state.deals.clear();

    let terminal = render(&state, 80, 12);
    assert!(terminal.backend().to_string().contains("No deals found"));
}

#[test]
fn slash_starts_searching() {
    let state = seeded_state();
    let ctx = CustomEventContext {
        state: &state,
        dispatcher: expect_action(Action::SetSearchEditing(true)),
    };

    let handled = DealsView::new()
        .process_event(&key(KeyCode::Char('/')), &ctx)
        .unwrap();
    assert!(handled);
}

#[test]
fn typing_appends_to_query_while_editing() {
    let mut state = seeded_state();
    state.search_editing = true;
    state.query = "yo".to_string();

    let ctx = CustomEventContext {
        state: &state,
        dispatcher: expect_action(Action::UpdateQuery("yog".to_string())),
    };

    let handled = DealsView::new()
        .process_event(&key(KeyCode::Char('g')), &ctx)
        .unwrap();
    assert!(handled);
}

#[test]
fn q_is_captured_while_editing() {
    let mut state = seeded_state();
    state.search_editing = true;

    let ctx = CustomEventContext {
        state: &state,
        dispatcher: expect_action(Action::UpdateQuery("q".to_string())),
    };

    let handled = DealsView::new()
        .process_event(&key(KeyCode::Char('q')), &ctx)
        .unwrap();
    assert!(handled);
}

#[test]
fn backspace_removes_last_char_while_editing() {
    let mut state = seeded_state();
    state.search_editing = true;
    state.query = "yoga".to_string();

    let ctx = CustomEventContext {
        state: &state,
        dispatcher: expect_action(Action::UpdateQuery("yog".to_string())),
    };

    assert!(
        DealsView::new()
            .process_event(&key(KeyCode::Backspace), &ctx)
            .unwrap()
    );
}

#[test]
fn escape_stops_editing() {
    let mut state = seeded_state();
    state.search_editing = true;

    let ctx = CustomEventContext {
        state: &state,
        dispatcher: expect_action(Action::SetSearchEditing(false)),
    };

    assert!(
        DealsView::new()
            .process_event(&key(KeyCode::Esc), &ctx)
            .unwrap()
    );
}

#[test]
fn number_keys_toggle_categories() {
    let state = seeded_state();
    let ctx = CustomEventContext {
        state: &state,
        dispatcher: expect_action(Action::ToggleCategory(Category::Fitness)),
    };

    assert!(
        DealsView::new()
            .process_event(&key(KeyCode::Char('2')), &ctx)
            .unwrap()
    );
}

#[test]
fn arrow_keys_move_cursor() {
    let state = seeded_state();
    let view = DealsView::new();

    let ctx = CustomEventContext {
        state: &state,
        dispatcher: expect_action(Action::SelectNext),
    };
    assert!(view.process_event(&key(KeyCode::Down), &ctx).unwrap());

    let ctx = CustomEventContext {
        state: &state,
        dispatcher: expect_action(Action::SelectPrevious),
    };
    assert!(view.process_event(&key(KeyCode::Char('k')), &ctx).unwrap());
}

#[test]
fn enter_opens_highlighted_deal() {
    let mut state = seeded_state();
    state.cursor = 1;

    let ctx = CustomEventContext {
        state: &state,
        dispatcher: expect_action(Action::OpenDeal(2)),
    };

    assert!(
        DealsView::new()
            .process_event(&key(KeyCode::Enter), &ctx)
            .unwrap()
    );
}

#[test]
fn enter_on_empty_list_is_not_handled() {
    let mut state = seeded_state();
    state.deals.clear();

    let ctx = CustomEventContext {
        state: &state,
        dispatcher: expect_nothing(),
    };

    assert!(
        !DealsView::new()
            .process_event(&key(KeyCode::Enter), &ctx)
            .unwrap()
    );
}

#[test]
fn unbound_keys_fall_through() {
    let state = seeded_state();
    let ctx = CustomEventContext {
        state: &state,
        dispatcher: expect_nothing(),
    };
    let view = DealsView::new();

    assert!(!view.process_event(&key(KeyCode::Char('q')), &ctx).unwrap());
    assert!(!view.process_event(&key(KeyCode::Char('t')), &ctx).unwrap());
}

#[test]
fn ignores_key_release() {
    let state = seeded_state();
    let ctx = CustomEventContext {
        state: &state,
        dispatcher: expect_nothing(),
    };

    let release = Event::Key(KeyEvent {
        code: KeyCode::Char('/'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });

    assert!(!DealsView::new().process_event(&release, &ctx).unwrap());
}
