use ratatui::{Terminal, backend::TestBackend};

use crate::store::state::State;

use super::*;

fn render(footer: InfoFooter, width: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
    let state = State::default();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state: &state,
                app_area: frame.area(),
            };

            footer.render(frame.area(), frame.buffer_mut(), &ctx);
        })
        .unwrap();

    terminal
}

#[test]
fn renders_entries_inside_double_border() {
    let footer = InfoFooter::new(vec!["(q) quit".to_string(), "(t) theme".to_string()]);
    let terminal = render(footer, 30);

    let output = terminal.backend().to_string();
    assert!(output.contains("(q) quit | (t) theme"));
    assert!(output.contains("╔"));
}

#[test]
fn highlights_keys() {
    let terminal = render(InfoFooter::new(vec!["(q) quit".to_string()]), 12);
    let state = State::default();
    let buffer = terminal.backend().buffer();

    // "(q) quit" starts at column 2 of the 10 inner columns
    assert_eq!(buffer[(2, 1)].symbol(), "(");
    assert!(buffer[(2, 1)].modifier.contains(Modifier::BOLD));
    assert_eq!(buffer[(2, 1)].fg, state.colors.border_color);
    assert!(!buffer[(6, 1)].modifier.contains(Modifier::BOLD));
}

#[test]
fn splits_legend_into_entries() {
    let footer = InfoFooter::from_legend("(esc) back | (enter) reserve");
    assert_eq!(footer.entries, vec!["(esc) back", "(enter) reserve"]);

    assert!(InfoFooter::from_legend("").entries.is_empty());
}
