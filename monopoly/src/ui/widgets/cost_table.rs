//! Property cost reference panel

use monopoly_core::costs::{streets_in_group, ColorGroup, OTHER_PROPERTIES};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::scrollbar,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Widget,
    },
};

use crate::ui::theme::GameTheme;

/// Static table of street, railroad and utility costs
pub struct CostTableWidget<'a> {
    scroll: usize,
    theme: &'a GameTheme,
    focused: bool,
}

impl<'a> CostTableWidget<'a> {
    pub fn new(theme: &'a GameTheme) -> Self {
        Self {
            scroll: 0,
            theme,
            focused: false,
        }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Number of lines in the table before scrolling
    pub fn line_count(&self) -> usize {
        self.lines().len()
    }

    fn cost_row(&self, label: &str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {label:<20}"), self.theme.system_style()),
            Span::styled(format!("{value:>6}"), self.theme.text_style()),
        ])
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for group in ColorGroup::ALL {
            let color = self.theme.group_color(group);
            lines.push(Line::from(Span::styled(
                format!("-- {group} --"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));

            for street in streets_in_group(group) {
                lines.push(Line::from(Span::styled(
                    street.name,
                    Style::default().fg(color),
                )));
                for (label, value) in street.cost_lines() {
                    lines.push(self.cost_row(label, value));
                }
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "-- Railroads & Utilities --",
            self.theme.text_style().add_modifier(Modifier::BOLD),
        )));
        for property in &OTHER_PROPERTIES {
            lines.push(Line::from(Span::styled(property.name, self.theme.text_style())));
            lines.push(self.cost_row("Price", format!("${}", property.price)));
            lines.push(self.cost_row("Mortgage", property.mortgage.to_string()));
            lines.push(self.cost_row(
                "Mortgage Repayment",
                property.unmortgage_amount().to_string(),
            ));
            lines.push(Line::from(Span::styled(
                format!("  {}", property.rent_rule()),
                self.theme.system_style(),
            )));
        }

        lines
    }
}

impl Widget for CostTableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.focused {
            " Costs [j/k scroll] "
        } else {
            " Costs "
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let lines = self.lines();

        let visible_height = inner.height as usize;
        let total_lines = lines.len();
        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll = self.scroll.min(max_scroll);

        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .render(inner, buf);

        if total_lines > visible_height {
            let scrollbar_area = Rect {
                x: inner.x + inner.width.saturating_sub(1),
                y: inner.y,
                width: 1,
                height: inner.height,
            };

            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .symbols(scrollbar::VERTICAL)
                .thumb_style(Style::default().fg(Color::DarkGray))
                .track_style(Style::default().fg(Color::Black))
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(scroll);
            scrollbar.render(scrollbar_area, buf, &mut scrollbar_state);
        }
    }
}
