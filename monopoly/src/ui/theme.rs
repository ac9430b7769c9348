//! Color theme and styling for the table TUI

use monopoly_core::costs::ColorGroup;
use ratatui::style::{Color, Modifier, Style};

/// Table UI color theme
#[derive(Debug, Clone)]
pub struct GameTheme {
    // Base colors
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Text colors
    pub player_text: Color,
    pub journal_text: Color,
    pub system_text: Color,
    pub warning_text: Color,

    // Connectivity
    pub online: Color,
    pub offline: Color,
}

impl Default for GameTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            player_text: Color::Cyan,
            journal_text: Color::White,
            system_text: Color::DarkGray,
            warning_text: Color::Yellow,

            online: Color::Green,
            offline: Color::Red,
        }
    }
}

impl GameTheme {
    /// Get style for normal text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    /// Get style for the journal message
    pub fn journal_style(&self) -> Style {
        Style::default().fg(self.journal_text)
    }

    /// Get style for the current player's name
    pub fn player_style(&self) -> Style {
        Style::default()
            .fg(self.player_text)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for hints and placeholders
    pub fn system_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::DIM)
    }

    /// Get style for the blocking warning
    pub fn warning_style(&self) -> Style {
        Style::default()
            .fg(self.warning_text)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Get style for the server indicator
    pub fn connectivity_style(&self, reachable: Option<bool>) -> Style {
        match reachable {
            Some(true) => Style::default().fg(self.online),
            Some(false) => Style::default().fg(self.offline),
            None => self.system_style(),
        }
    }

    /// Heading color for a street's color group
    pub fn group_color(&self, group: ColorGroup) -> Color {
        match group {
            ColorGroup::Brown => Color::Rgb(150, 90, 50),
            ColorGroup::Blue => Color::LightCyan,
            ColorGroup::Pink => Color::LightMagenta,
            ColorGroup::Orange => Color::Rgb(255, 165, 0),
            ColorGroup::Red => Color::LightRed,
            ColorGroup::Yellow => Color::Yellow,
            ColorGroup::Green => Color::Green,
            ColorGroup::Indigo => Color::Blue,
        }
    }
}
