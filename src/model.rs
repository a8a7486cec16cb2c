//! Data model shared between the ticket service client and the UI.
//!
//! The server owns every ticket; the client only ever holds the page it most
//! recently fetched. All of these types mirror the service's JSON wire shape,
//! where a ticket is `{ idTicket, description, status, date }`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single support ticket as returned by the ticket service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Server-assigned identifier, immutable once created.
    #[serde(rename = "idTicket")]
    pub id: i64,
    pub description: String,
    /// `true` means open, `false` means closed.
    pub status: bool,
    /// Creation timestamp, set once when the ticket is created.
    pub date: DateTime<Utc>,
}

impl Ticket {
    pub fn status_label(&self) -> &'static str {
        if self.status {
            "Open"
        } else {
            "Closed"
        }
    }
}

/// One server-paginated slice of the ticket collection.
///
/// Page numbers are 1-based and `current_page` stays within
/// `[1, total_pages]` for any well-formed response.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPage {
    pub tickets: Vec<Ticket>,
    pub total_pages: u32,
    pub current_page: u32,
}

/// Body of a create request. The server assigns the id.
#[derive(Clone, Debug, Serialize)]
pub struct TicketDraft {
    pub description: String,
    pub status: bool,
    /// Set to the submission instant; immutable afterwards.
    pub date: DateTime<Utc>,
}

/// Body of an update request.
///
/// Carries the ticket's original creation date, which is never edited on the
/// client side.
#[derive(Clone, Debug, Serialize)]
pub struct TicketUpdate {
    #[serde(rename = "idTicket")]
    pub id: i64,
    pub description: String,
    pub status: bool,
    pub date: DateTime<Utc>,
}
