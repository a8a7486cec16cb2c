//! Application state and dialog drafts

use chrono::{DateTime, Utc};
use ratatui::widgets::TableState;

use crate::collection::TicketCollection;
use crate::config::Config;
use crate::model::Ticket;

/// Draft collected by the create dialog before it submits.
#[derive(Clone, Debug)]
pub struct CreateDraft {
    pub description: String,
    pub status: bool,
    /// Validation or service error shown inside the dialog.
    pub error: Option<String>,
}

impl CreateDraft {
    /// New tickets default to open.
    pub fn new() -> Self {
        Self {
            description: String::new(),
            status: true,
            error: None,
        }
    }
}

impl Default for CreateDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Draft for the edit dialog, seeded from the selected ticket.
///
/// The creation date is carried along untouched so the update preserves it.
#[derive(Clone, Debug)]
pub struct EditDraft {
    pub id: i64,
    pub description: String,
    pub status: bool,
    pub date: DateTime<Utc>,
    pub error: Option<String>,
}

impl EditDraft {
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id,
            description: ticket.description.clone(),
            status: ticket.status,
            date: ticket.date,
            error: None,
        }
    }
}

/// Application state
pub struct App {
    pub should_quit: bool,
    pub collection: TicketCollection,
    pub selected_row: usize,
    pub table_state: TableState,
    /// Search input mode: keystrokes edit the search term live.
    pub searching: bool,
    pub create_dialog: Option<CreateDraft>,
    pub edit_dialog: Option<EditDraft>,
    pub show_help: bool,
    pub loading: bool,
    pub date_format: String,
}

impl App {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            should_quit: false,
            collection: TicketCollection::new(config.service.page_size),
            selected_row: 0,
            table_state,
            searching: false,
            create_dialog: None,
            edit_dialog: None,
            show_help: false,
            loading: true,
            date_format: config.ui.date_format.clone(),
        }
    }

    /// The ticket under the cursor, in derived-row order.
    #[must_use]
    pub fn selected_ticket(&self) -> Option<&Ticket> {
        let rows = self.collection.derived_rows();
        if rows.is_empty() {
            return None;
        }
        rows.get(self.selected_row.min(rows.len() - 1)).copied()
    }

    pub fn next_row(&mut self) {
        let len = self.collection.derived_rows().len();
        if len > 0 {
            self.selected_row = (self.selected_row + 1) % len;
            self.table_state.select(Some(self.selected_row));
        }
    }

    pub fn previous_row(&mut self) {
        let len = self.collection.derived_rows().len();
        if len > 0 {
            self.selected_row = if self.selected_row == 0 {
                len - 1
            } else {
                self.selected_row - 1
            };
            self.table_state.select(Some(self.selected_row));
        }
    }

    /// Keep the cursor inside the derived rows after a reload or a criteria
    /// change shrinks them.
    pub fn clamp_selection(&mut self) {
        let len = self.collection.derived_rows().len();
        if len == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= len {
            self.selected_row = len - 1;
        }
        self.table_state.select(Some(self.selected_row));
    }

    pub fn open_create_dialog(&mut self) {
        self.create_dialog = Some(CreateDraft::new());
    }

    pub fn cancel_create_dialog(&mut self) {
        self.create_dialog = None;
    }

    /// Open the edit dialog for the selected ticket, if any.
    pub fn open_edit_dialog(&mut self) {
        let draft = self.selected_ticket().map(EditDraft::from_ticket);
        if draft.is_some() {
            self.edit_dialog = draft;
        }
    }

    pub fn cancel_edit_dialog(&mut self) {
        self.edit_dialog = None;
    }
}
