//! Monopoly table client core.
//!
//! This crate provides:
//! - Dice validation for hand-entered rolls
//! - The table screen state (`BoardView`)
//! - `RollSession`, which submits rolls and reports replies on one channel
//! - The static property cost reference
//! - Tracing setup and test doubles
//!
//! # Quick Start
//!
//! ```ignore
//! use monopoly_core::{BoardView, RollSession, SessionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (mut session, mut events) = RollSession::connect(SessionConfig::from_env())?;
//!     let mut view = BoardView::new();
//!
//!     session.submit(3, 4)?;
//!     if let Some(event) = events.recv().await {
//!         view.apply(&event);
//!     }
//!     println!("{} is up: {}", view.current_player(), view.journal());
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod costs;
pub mod dice;
pub mod logging;
pub mod session;
pub mod testing;

// Primary public API
pub use board::BoardView;
pub use dice::{DiceError, RANGE_WARNING};
pub use monopoly_client::{DiceRoll, GameResponse, DEFAULT_SERVER_URL, SERVER_URL_ENV};
pub use session::{RollService, RollSession, SessionConfig, SessionError, SessionEvent, Ticket};
pub use testing::{Gate, MockTable};
