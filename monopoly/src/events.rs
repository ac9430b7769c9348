//! Event handling for the Monopoly TUI

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::app::App;
use crate::ui::{FocusedPanel, Overlay};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a mouse event
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> EventResult {
    // An open dialog holds all input
    if app.has_overlay() {
        return EventResult::Continue;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.scroll_costs_up(3);
            EventResult::NeedsRedraw
        }
        MouseEventKind::ScrollDown => {
            app.scroll_costs_down(3);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    // Handle overlay keys first
    if app.has_overlay() {
        return handle_overlay_key(app, key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => EventResult::Quit,

        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }

        // Panel focus cycling
        KeyCode::Tab => {
            app.cycle_focus();
            EventResult::NeedsRedraw
        }
        KeyCode::BackTab => {
            app.cycle_focus_reverse();
            EventResult::NeedsRedraw
        }

        KeyCode::Enter => {
            app.submit();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('r') => {
            app.roll_random();
            EventResult::NeedsRedraw
        }

        _ => match app.focused_panel {
            FocusedPanel::Dice1 | FocusedPanel::Dice2 => handle_form_key(app, key),
            FocusedPanel::Costs => handle_costs_key(app, key),
        },
    }
}

/// Handle keys while a dice field is focused
fn handle_form_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char(c) => {
            app.type_char(c);
            EventResult::NeedsRedraw
        }
        KeyCode::Backspace => {
            app.backspace();
            EventResult::NeedsRedraw
        }
        KeyCode::Delete => {
            app.clear_field();
            EventResult::NeedsRedraw
        }
        KeyCode::Down => {
            app.cycle_focus();
            EventResult::NeedsRedraw
        }
        KeyCode::Up => {
            app.cycle_focus_reverse();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle keys while the cost table is focused
fn handle_costs_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_costs_down(1);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_costs_up(1);
            EventResult::NeedsRedraw
        }
        KeyCode::PageDown => {
            app.scroll_costs_down(10);
            EventResult::NeedsRedraw
        }
        KeyCode::PageUp => {
            app.scroll_costs_up(10);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('g') => {
            app.cost_scroll = 0;
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle keys when an overlay is open
fn handle_overlay_key(app: &mut App, key: KeyEvent) -> EventResult {
    match app.overlay() {
        // The warning must be acknowledged before anything else happens
        Some(Overlay::Warning(_)) => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                app.close_overlay();
                EventResult::NeedsRedraw
            }
            _ => EventResult::Continue,
        },
        Some(Overlay::Help) => match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                app.close_overlay();
                EventResult::NeedsRedraw
            }
            _ => EventResult::Continue,
        },
        None => EventResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::app::tests::app_over;
    use monopoly_core::MockTable;

    fn press(app: &mut App, code: KeyCode) -> EventResult {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_quit_keys() {
        let table = Arc::new(MockTable::new());
        let mut app = app_over(&table);

        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), EventResult::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_event(&mut app, Event::Key(ctrl_c)), EventResult::Quit);
    }

    #[test]
    fn test_digits_fill_focused_field() {
        let table = Arc::new(MockTable::new());
        let mut app = app_over(&table);

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('6'));

        assert_eq!(app.dice1_input(), "3");
        assert_eq!(app.dice2_input(), "6");
        assert_eq!((app.board.dice1(), app.board.dice2()), (3, 6));
    }

    #[tokio::test]
    async fn test_warning_blocks_until_acknowledged() {
        let table = Arc::new(MockTable::new());
        let mut app = app_over(&table);

        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.overlay(), Some(Overlay::Warning(_))));

        // Typing and quitting are swallowed by the dialog
        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Continue);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.dice1_input(), "9");

        press(&mut app, KeyCode::Enter);
        assert!(!app.has_overlay());
        assert_eq!(table.call_count(), 0);
    }

    fn scroll_down(app: &mut App) -> EventResult {
        handle_event(
            app,
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            }),
        )
    }

    #[tokio::test]
    async fn test_mouse_scroll_ignored_under_dialog() {
        let table = Arc::new(MockTable::new());
        let mut app = app_over(&table);

        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Enter);
        assert!(app.has_overlay());

        assert_eq!(scroll_down(&mut app), EventResult::Continue);
        assert_eq!(app.cost_scroll, 0);

        press(&mut app, KeyCode::Enter);
        assert_eq!(scroll_down(&mut app), EventResult::NeedsRedraw);
        assert_eq!(app.cost_scroll, 3);
    }

    #[test]
    fn test_costs_scroll_when_focused() {
        let table = Arc::new(MockTable::new());
        let mut app = app_over(&table);

        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.cost_scroll, 1);

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.cost_scroll, 0);
    }
}
