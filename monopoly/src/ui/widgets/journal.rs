//! Journal widget: the server's latest message and whose turn it is

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::theme::GameTheme;

pub struct JournalWidget<'a> {
    message: &'a str,
    current_player: &'a str,
    theme: &'a GameTheme,
}

impl<'a> JournalWidget<'a> {
    pub fn new(message: &'a str, current_player: &'a str, theme: &'a GameTheme) -> Self {
        Self {
            message,
            current_player,
            theme,
        }
    }
}

impl Widget for JournalWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Journal ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let inner = block.inner(area);
        block.render(area, buf);

        let player = if self.current_player.is_empty() {
            Span::styled("-", self.theme.system_style())
        } else {
            Span::styled(self.current_player, self.theme.player_style())
        };
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Current player: ", self.theme.text_style()),
                player,
            ]),
            Line::from(""),
        ];

        if self.message.is_empty() {
            lines.push(Line::from(Span::styled(
                "Roll the dice to start.",
                self.theme.system_style(),
            )));
        } else {
            for line in self.message.lines() {
                lines.push(Line::from(Span::styled(line, self.theme.journal_style())));
            }
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        paragraph.render(inner, buf);
    }
}
