//! Dice entry form widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::GameTheme;

/// Which field of the form has the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    First,
    Second,
}

/// Two dice fields and the Go! button
pub struct DiceFormWidget<'a> {
    dice1: &'a str,
    dice2: &'a str,
    theme: &'a GameTheme,
    active_field: Option<FormField>,
    pending: usize,
}

impl<'a> DiceFormWidget<'a> {
    pub fn new(dice1: &'a str, dice2: &'a str, theme: &'a GameTheme) -> Self {
        Self {
            dice1,
            dice2,
            theme,
            active_field: None,
            pending: 0,
        }
    }

    pub fn active_field(mut self, field: Option<FormField>) -> Self {
        self.active_field = field;
        self
    }

    /// Number of rolls still waiting for the server
    pub fn pending(mut self, pending: usize) -> Self {
        self.pending = pending;
        self
    }

    fn field_line(
        &self,
        label: &'a str,
        content: &'a str,
        placeholder: &'a str,
        active: bool,
    ) -> Line<'a> {
        let label_style = if active {
            self.theme.player_style()
        } else {
            self.theme.text_style()
        };
        let mut spans = vec![Span::styled(label, label_style)];

        if content.is_empty() && !active {
            spans.push(Span::styled(placeholder, self.theme.system_style()));
        } else {
            spans.push(Span::raw(content));
        }

        if active {
            spans.push(Span::styled(
                " ",
                Style::default()
                    .add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
                    .fg(self.theme.player_text),
            ));
        }

        Line::from(spans)
    }
}

impl Widget for DiceFormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Roll Dice ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.active_field.is_some()));

        let inner = block.inner(area);
        block.render(area, buf);

        let first = self.field_line(
            "Die 1: ",
            self.dice1,
            "Enter value of first dice",
            self.active_field == Some(FormField::First),
        );
        let second = self.field_line(
            "Die 2: ",
            self.dice2,
            "Enter value of second dice",
            self.active_field == Some(FormField::Second),
        );

        let mut button = vec![
            Span::styled(
                "[ Go! ]",
                self.theme.player_style().add_modifier(Modifier::REVERSED),
            ),
            Span::styled("  Enter", self.theme.system_style()),
        ];
        if self.pending > 0 {
            button.push(Span::styled(
                format!("  {} waiting", self.pending),
                self.theme.system_style(),
            ));
        }

        let lines = vec![first, second, Line::from(""), Line::from(button)];
        Paragraph::new(lines).render(inner, buf);
    }
}
