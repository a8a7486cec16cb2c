//! Reusable UI components

pub mod dialogs;
pub mod help_panel;
pub mod status_bar;
pub mod tickets_table;

// Component exports
pub use help_panel::HelpPanel;
pub use status_bar::StatusBar;
pub use tickets_table::TicketsTable;
