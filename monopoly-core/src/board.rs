//! In-memory state of the table screen.

use monopoly_client::GameResponse;

use crate::session::SessionEvent;

/// What the table screen shows.
///
/// The dice fields mirror the form; the journal and current player only ever
/// change through [`BoardView::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    dice1: i64,
    dice2: i64,
    journal: String,
    current_player: String,
    /// `None` until the first connectivity probe reports back.
    server_reachable: Option<bool>,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dice1(&self) -> i64 {
        self.dice1
    }

    pub fn dice2(&self) -> i64 {
        self.dice2
    }

    pub fn set_dice1(&mut self, value: i64) {
        self.dice1 = value;
    }

    pub fn set_dice2(&mut self, value: i64) {
        self.dice2 = value;
    }

    /// Latest message from the server.
    pub fn journal(&self) -> &str {
        &self.journal
    }

    /// Player whose turn it is, as last reported by the server.
    pub fn current_player(&self) -> &str {
        &self.current_player
    }

    pub fn server_reachable(&self) -> Option<bool> {
        self.server_reachable
    }

    /// Project a server reply onto the screen.
    pub fn apply_response(&mut self, response: &GameResponse) {
        self.journal.clone_from(&response.message);
        self.current_player.clone_from(&response.next_player);
    }

    /// Apply an event from the session channel.
    ///
    /// Returns true if anything visible changed. Failed rolls leave the
    /// journal and player untouched.
    pub fn apply(&mut self, event: &SessionEvent) -> bool {
        match event {
            SessionEvent::Resolved { response, .. } => {
                let changed = self.journal != response.message
                    || self.current_player != response.next_player;
                self.apply_response(response);
                changed
            }
            SessionEvent::Failed { .. } => false,
            SessionEvent::Connectivity { reachable } => {
                let changed = self.server_reachable != Some(*reachable);
                self.server_reachable = Some(*reachable);
                changed
            }
        }
    }
}
