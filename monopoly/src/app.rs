//! Main application state and logic

use monopoly_core::dice::{parse_die_input, roll_random};
use monopoly_core::{BoardView, DiceError, RollSession, SessionEvent};
use tokio::sync::mpsc;

use crate::ui::theme::GameTheme;
use crate::ui::widgets::CostTableWidget;
use crate::ui::{FocusedPanel, Overlay};

/// Longest text accepted in a dice field.
const MAX_FIELD_LEN: usize = 4;

/// Main application state
pub struct App {
    pub session: RollSession,
    events_rx: mpsc::Receiver<SessionEvent>,

    // What the table shows
    pub board: BoardView,

    // UI state
    pub theme: GameTheme,
    pub focused_panel: FocusedPanel,
    overlay: Option<Overlay>,
    pub cost_scroll: usize,

    // Form text, one buffer per die
    dice1_input: String,
    dice2_input: String,

    // Status
    status_message: Option<String>,

    // Animation
    pub animation_frame: u8,
}

impl App {
    /// Create a new application around a session and its event channel
    pub fn new(session: RollSession, events_rx: mpsc::Receiver<SessionEvent>) -> Self {
        Self {
            session,
            events_rx,
            board: BoardView::new(),
            theme: GameTheme::default(),
            focused_panel: FocusedPanel::default(),
            overlay: None,
            cost_scroll: 0,
            dice1_input: String::new(),
            dice2_input: String::new(),
            status_message: Some("Enter both dice and press Enter. '?' for help".to_string()),
            animation_frame: 0,
        }
    }

    // =========================================================================
    // Dice form
    // =========================================================================

    /// Text buffer of the focused dice field, if a field is focused
    fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.focused_panel {
            FocusedPanel::Dice1 => Some(&mut self.dice1_input),
            FocusedPanel::Dice2 => Some(&mut self.dice2_input),
            FocusedPanel::Costs => None,
        }
    }

    /// Type a character into the focused dice field.
    ///
    /// Only digits and a leading minus sign are accepted.
    pub fn type_char(&mut self, c: char) {
        let Some(input) = self.focused_input_mut() else {
            return;
        };
        let accepted = c.is_ascii_digit() || (c == '-' && input.is_empty());
        if accepted && input.len() < MAX_FIELD_LEN {
            input.push(c);
            self.sync_board();
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_input_mut() {
            input.pop();
            self.sync_board();
        }
    }

    /// Clear the focused field
    pub fn clear_field(&mut self) {
        if let Some(input) = self.focused_input_mut() {
            input.clear();
            self.sync_board();
        }
    }

    /// Mirror the form text into the board's dice values.
    ///
    /// Text that is not a number yet (a lone `-`) keeps the previous value.
    fn sync_board(&mut self) {
        if let Ok(value) = parse_die_input(&self.dice1_input) {
            self.board.set_dice1(value);
        }
        if let Ok(value) = parse_die_input(&self.dice2_input) {
            self.board.set_dice2(value);
        }
    }

    /// Fill both fields with a random roll without submitting it
    pub fn roll_random(&mut self) {
        let roll = roll_random(&mut rand::thread_rng());
        self.dice1_input = roll.dice1.to_string();
        self.dice2_input = roll.dice2.to_string();
        self.sync_board();
        self.set_status(format!(
            "Rolled {} and {}, press Enter to send",
            roll.dice1, roll.dice2
        ));
    }

    /// Validate the form and send the roll.
    ///
    /// Invalid input opens the warning dialog and nothing is sent.
    pub fn submit(&mut self) {
        let parsed = parse_die_input(&self.dice1_input)
            .and_then(|a| parse_die_input(&self.dice2_input).map(|b| (a, b)));

        let result = parsed.and_then(|(dice1, dice2)| {
            self.board.set_dice1(dice1);
            self.board.set_dice2(dice2);
            self.session.submit(dice1, dice2)
        });

        match result {
            Ok(ticket) => {
                self.set_status(format!(
                    "Roll {ticket} sent: {} and {}",
                    self.board.dice1(),
                    self.board.dice2()
                ));
            }
            Err(e) => self.show_warning(&e),
        }
    }

    fn show_warning(&mut self, error: &DiceError) {
        tracing::debug!(detail = %error.detail(), "showing dice warning");
        self.overlay = Some(Overlay::Warning(error.to_string()));
    }

    // =========================================================================
    // Session events
    // =========================================================================

    /// Apply every event that has arrived since the last frame
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_session_event(event);
        }
    }

    /// Apply one event from the session channel
    pub fn handle_session_event(&mut self, event: SessionEvent) {
        self.board.apply(&event);
        match event {
            SessionEvent::Resolved { ticket, .. } => {
                self.set_status(format!("Roll {ticket} answered"));
            }
            SessionEvent::Failed { ticket, error } => {
                self.set_status(format!("Roll {ticket} failed: {error}"));
            }
            SessionEvent::Connectivity { reachable: false } => {
                self.set_status("Game server did not answer, rolls may fail");
            }
            SessionEvent::Connectivity { reachable: true } => {}
        }
    }

    /// Rolls sent but not yet answered
    pub fn pending_rolls(&self) -> usize {
        self.session.in_flight()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn scroll_costs_up(&mut self, lines: usize) {
        self.cost_scroll = self.cost_scroll.saturating_sub(lines);
    }

    pub fn scroll_costs_down(&mut self, lines: usize) {
        // Clamped again at render time against the visible height
        let last_line = CostTableWidget::new(&self.theme).line_count().saturating_sub(1);
        self.cost_scroll = self.cost_scroll.saturating_add(lines).min(last_line);
    }

    /// Cycle to next focused panel
    pub fn cycle_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Dice1 => FocusedPanel::Dice2,
            FocusedPanel::Dice2 => FocusedPanel::Costs,
            FocusedPanel::Costs => FocusedPanel::Dice1,
        };
    }

    /// Cycle to previous focused panel
    pub fn cycle_focus_reverse(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Dice1 => FocusedPanel::Costs,
            FocusedPanel::Costs => FocusedPanel::Dice2,
            FocusedPanel::Dice2 => FocusedPanel::Dice1,
        };
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            Some(Overlay::Help) => None,
            _ => Some(Overlay::Help),
        };
    }

    /// Close any overlay
    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Tick for animations
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// Set status message (always overwrites)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    // =========================================================================
    // Getters for private fields
    // =========================================================================

    /// Get the current overlay
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Check if an overlay is currently open
    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Get the current status message
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn dice1_input(&self) -> &str {
        &self.dice1_input
    }

    pub fn dice2_input(&self) -> &str {
        &self.dice2_input
    }
}
