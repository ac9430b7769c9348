//! Render orchestration for the Monopoly TUI

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::layout::{centered_rect_fixed, AppLayout};
use crate::ui::widgets::{
    CostTableWidget, DiceFormWidget, FormField, HotkeyBarWidget, JournalWidget, StatusBarWidget,
};

/// Which panel is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Dice1,
    Dice2,
    Costs,
}

/// Overlay types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Help,
    /// Blocking dialog shown when a roll is rejected
    Warning(String),
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);

    render_title_bar(frame, app, layout.title_area);

    let active_field = match app.focused_panel {
        FocusedPanel::Dice1 => Some(FormField::First),
        FocusedPanel::Dice2 => Some(FormField::Second),
        FocusedPanel::Costs => None,
    };
    let form = DiceFormWidget::new(app.dice1_input(), app.dice2_input(), &app.theme)
        .active_field(active_field)
        .pending(app.pending_rolls());
    frame.render_widget(form, layout.form_area);

    let journal = JournalWidget::new(app.board.journal(), app.board.current_player(), &app.theme);
    frame.render_widget(journal, layout.journal_area);

    let costs = CostTableWidget::new(&app.theme)
        .scroll(app.cost_scroll)
        .focused(matches!(app.focused_panel, FocusedPanel::Costs));
    frame.render_widget(costs, layout.costs_area);

    let status = StatusBarWidget::new(&app.theme)
        .message(app.status_message())
        .pending(app.pending_rolls(), app.animation_frame);
    frame.render_widget(status, layout.status_bar);

    frame.render_widget(
        HotkeyBarWidget::new(app.focused_panel, &app.theme),
        layout.hotkey_bar,
    );

    // Render overlay if present
    if let Some(overlay) = app.overlay() {
        render_overlay(frame, app, overlay, area);
    }
}

/// Render the title bar
fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let server = app.session.server_url().unwrap_or("offline table");
    let (indicator, label) = match app.board.server_reachable() {
        Some(true) => ("●", "online"),
        Some(false) => ("●", "unreachable"),
        None => ("○", "checking"),
    };

    let line = Line::from(vec![
        Span::styled(
            " Monopoly ",
            app.theme.text_style().add_modifier(Modifier::BOLD),
        ),
        Span::raw("| "),
        Span::styled(server.to_string(), app.theme.system_style()),
        Span::raw(" "),
        Span::styled(
            format!("{indicator} {label}"),
            app.theme.connectivity_style(app.board.server_reachable()),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render overlay
fn render_overlay(frame: &mut Frame, app: &App, overlay: &Overlay, area: Rect) {
    match overlay {
        Overlay::Help => render_help_overlay(frame, app, area),
        Overlay::Warning(message) => render_warning_overlay(frame, app, message, area),
    }
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(46, 17, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let heading = Style::default().add_modifier(Modifier::UNDERLINED);
    let help_text = vec![
        Line::from(Span::styled(
            " Monopoly Table - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Dice:", heading)),
        Line::from("  0-9, -        Type into the focused die"),
        Line::from("  Backspace     Delete a digit"),
        Line::from("  Del           Clear the field"),
        Line::from("  Enter         Go! (send the roll)"),
        Line::from("  r             Fill in a random roll"),
        Line::from(""),
        Line::from(Span::styled("Navigation:", heading)),
        Line::from("  Tab/Shift+Tab Cycle focus"),
        Line::from("  j/k or ↑/↓    Scroll costs (when focused)"),
        Line::from("  q, Esc        Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or ? to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}

/// Render the blocking dice warning
fn render_warning_overlay(frame: &mut Frame, app: &App, message: &str, area: Rect) {
    let popup_area = centered_rect_fixed(40, 6, area);
    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), app.theme.warning_style())),
        Line::from(""),
        Line::from(Span::styled("Press Enter to continue", app.theme.system_style())),
    ];

    let block = Block::default()
        .title(" Warning ")
        .borders(Borders::ALL)
        .border_style(app.theme.warning_style());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::app::tests::app_over;
    use monopoly_core::{GameResponse, MockTable, SessionEvent, Ticket, RANGE_WARNING};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_initial_screen() {
        let table = Arc::new(MockTable::new());
        let app = app_over(&table);
        let text = screen_text(&app);

        assert!(text.contains("Roll Dice"));
        assert!(text.contains("Enter value of second dice"));
        assert!(text.contains("Roll the dice to start."));
        assert!(text.contains("Mediterranean Avenue"));
        assert!(text.contains("checking"));
    }

    #[test]
    fn test_reply_is_rendered() {
        let table = Arc::new(MockTable::new());
        let mut app = app_over(&table);

        app.handle_session_event(SessionEvent::Resolved {
            ticket: Ticket(1),
            response: GameResponse::new("Rolled 4 and 5", "Alice"),
        });
        let text = screen_text(&app);

        assert!(text.contains("Rolled 4 and 5"));
        assert!(text.contains("Current player: Alice"));
        assert!(!text.contains("Roll the dice to start."));
    }

    #[tokio::test]
    async fn test_warning_dialog_is_rendered() {
        let table = Arc::new(MockTable::new());
        let mut app = app_over(&table);

        app.submit();
        let text = screen_text(&app);

        assert!(text.contains("Warning"));
        assert!(text.contains(RANGE_WARNING));
    }
}
