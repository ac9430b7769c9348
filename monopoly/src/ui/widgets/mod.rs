//! TUI widgets for the Monopoly table

pub mod cost_table;
pub mod dice_form;
pub mod journal;
pub mod status_bar;

pub use cost_table::CostTableWidget;
pub use dice_form::{DiceFormWidget, FormField};
pub use journal::JournalWidget;
pub use status_bar::{HotkeyBarWidget, StatusBarWidget};
