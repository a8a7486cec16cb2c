use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use ticketist::model::{Ticket, TicketDraft, TicketPage, TicketUpdate};

#[test]
fn test_ticket_deserialization() {
    let value = json!({
        "idTicket": 3,
        "description": "Broken printer",
        "status": true,
        "date": "2024-10-05T12:30:00Z"
    });

    let ticket: Ticket = serde_json::from_value(value).unwrap();
    assert_eq!(ticket.id, 3);
    assert_eq!(ticket.description, "Broken printer");
    assert!(ticket.status);
    assert_eq!(ticket.date, Utc.with_ymd_and_hms(2024, 10, 5, 12, 30, 0).unwrap());
    assert_eq!(ticket.status_label(), "Open");
}

#[test]
fn test_ticket_date_accepts_fractional_seconds() {
    // The service serializes timestamps with fractional seconds
    let value = json!({
        "idTicket": 1,
        "description": "x",
        "status": false,
        "date": "2024-10-05T12:30:00.1234567Z"
    });

    let ticket: Ticket = serde_json::from_value(value).unwrap();
    assert_eq!(ticket.status_label(), "Closed");
}

#[test]
fn test_page_envelope_deserialization() {
    let value = json!({
        "tickets": [
            { "idTicket": 1, "description": "a", "status": true, "date": "2024-01-01T00:00:00Z" },
            { "idTicket": 2, "description": "b", "status": false, "date": "2024-01-02T00:00:00Z" }
        ],
        "totalPages": 4,
        "currentPage": 2
    });

    let page: TicketPage = serde_json::from_value(value).unwrap();
    assert_eq!(page.tickets.len(), 2);
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.tickets[0].id, 1);
}

#[test]
fn test_draft_serialization_has_no_id() {
    let draft = TicketDraft {
        description: "New ticket".to_string(),
        status: true,
        date: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
    };

    let value = serde_json::to_value(&draft).unwrap();
    let object = value.as_object().unwrap();
    assert!(object.contains_key("description"));
    assert!(object.contains_key("status"));
    assert!(object.contains_key("date"));
    assert!(!object.contains_key("idTicket"));
}

#[test]
fn test_update_serialization_uses_wire_names() {
    let date = Utc.with_ymd_and_hms(2024, 10, 5, 12, 30, 0).unwrap();
    let update = TicketUpdate {
        id: 7,
        description: "fixed".to_string(),
        status: false,
        date,
    };

    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value["idTicket"], 7);
    assert_eq!(value["description"], "fixed");
    assert_eq!(value["status"], false);
    // Date survives the round-trip unchanged
    let echoed: DateTime<Utc> = serde_json::from_value(value["date"].clone()).unwrap();
    assert_eq!(echoed, date);
}
