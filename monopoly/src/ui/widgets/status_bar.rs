//! Status bar and hotkey bar widgets

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::theme::GameTheme;
use crate::ui::FocusedPanel;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Status line: latest message and rolls waiting for the server
pub struct StatusBarWidget<'a> {
    theme: &'a GameTheme,
    message: Option<&'a str>,
    pending: usize,
    frame: u8,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(theme: &'a GameTheme) -> Self {
        Self {
            theme,
            message: None,
            pending: 0,
            frame: 0,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    pub fn pending(mut self, pending: usize, frame: u8) -> Self {
        self.pending = pending;
        self.frame = frame;
        self
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        if self.pending > 0 {
            let spinner = SPINNER[usize::from(self.frame) % SPINNER.len()];
            spans.push(Span::styled(
                format!(" {spinner} {} in flight ", self.pending),
                self.theme.player_style(),
            ));
            spans.push(Span::raw("| "));
        } else {
            spans.push(Span::raw(" "));
        }

        if let Some(message) = self.message {
            spans.push(Span::styled(message, self.theme.text_style()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Key hints for the focused panel
pub struct HotkeyBarWidget<'a> {
    focused: FocusedPanel,
    theme: &'a GameTheme,
}

impl<'a> HotkeyBarWidget<'a> {
    pub fn new(focused: FocusedPanel, theme: &'a GameTheme) -> Self {
        Self { focused, theme }
    }
}

impl Widget for HotkeyBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints: &[(&str, &str)] = match self.focused {
            FocusedPanel::Dice1 | FocusedPanel::Dice2 => &[
                ("1-6", "die"),
                ("Enter", "Go!"),
                ("r", "random"),
                ("Tab", "next"),
                ("?", "help"),
                ("q", "quit"),
            ],
            FocusedPanel::Costs => &[
                ("j/k", "scroll"),
                ("Tab", "next"),
                ("?", "help"),
                ("q", "quit"),
            ],
        };

        let mut spans = Vec::new();
        for (key, action) in hints {
            spans.push(Span::styled(format!(" {key} "), self.theme.player_style()));
            spans.push(Span::styled(format!("{action} "), self.theme.system_style()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
