use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use ticketist::collection::{CommandError, TicketCollection};
use ticketist::model::{Ticket, TicketDraft, TicketPage, TicketUpdate};
use ticketist::service::{ServiceError, TicketService};

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Fetch { page: u32, size: u32 },
    Create { description: String },
    Update { id: i64, date: DateTime<Utc> },
    Delete { id: i64 },
}

/// In-memory stand-in for the remote service, recording every call.
struct FakeService {
    calls: Mutex<Vec<Call>>,
    pages: HashMap<u32, TicketPage>,
    fail_fetch: bool,
    fail_mutations: bool,
}

impl FakeService {
    fn new(pages: Vec<(u32, TicketPage)>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            pages: pages.into_iter().collect(),
            fail_fetch: false,
            fail_mutations: false,
        }
    }

    fn failing_fetch() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            pages: HashMap::new(),
            fail_fetch: true,
            fail_mutations: false,
        }
    }

    fn failing_mutations(pages: Vec<(u32, TicketPage)>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            pages: pages.into_iter().collect(),
            fail_fetch: false,
            fail_mutations: true,
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn fetch_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Fetch { .. }))
            .count()
    }
}

fn error() -> ServiceError {
    ServiceError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
}

#[async_trait]
impl TicketService for FakeService {
    async fn fetch_page(&self, page_number: u32, page_size: u32) -> Result<TicketPage, ServiceError> {
        self.calls.lock().unwrap().push(Call::Fetch {
            page: page_number,
            size: page_size,
        });
        if self.fail_fetch {
            return Err(error());
        }
        Ok(self.pages.get(&page_number).expect("page not configured").clone())
    }

    async fn create_ticket(&self, draft: &TicketDraft) -> Result<Ticket, ServiceError> {
        self.calls.lock().unwrap().push(Call::Create {
            description: draft.description.clone(),
        });
        if self.fail_mutations {
            return Err(error());
        }
        Ok(Ticket {
            id: 99,
            description: draft.description.clone(),
            status: draft.status,
            date: draft.date,
        })
    }

    async fn update_ticket(&self, update: &TicketUpdate) -> Result<Ticket, ServiceError> {
        self.calls.lock().unwrap().push(Call::Update {
            id: update.id,
            date: update.date,
        });
        if self.fail_mutations {
            return Err(error());
        }
        Ok(Ticket {
            id: update.id,
            description: update.description.clone(),
            status: update.status,
            date: update.date,
        })
    }

    async fn delete_ticket(&self, id: i64) -> Result<(), ServiceError> {
        self.calls.lock().unwrap().push(Call::Delete { id });
        if self.fail_mutations {
            return Err(error());
        }
        Ok(())
    }
}

fn ticket(id: i64, description: &str, status: bool, secs: i64) -> Ticket {
    Ticket {
        id,
        description: description.to_string(),
        status,
        date: DateTime::from_timestamp(secs, 0).unwrap(),
    }
}

fn page(tickets: Vec<Ticket>, current: u32, total: u32) -> TicketPage {
    TicketPage {
        tickets,
        total_pages: total,
        current_page: current,
    }
}

fn page_ids(collection: &TicketCollection) -> Vec<i64> {
    collection.tickets().iter().map(|t| t.id).collect()
}

#[tokio::test]
async fn test_load_page_applies_valid_response() {
    let service = FakeService::new(vec![(1, page(vec![ticket(1, "a", true, 100)], 1, 3))]);
    let mut collection = TicketCollection::new(7);

    assert!(collection.load_page(&service, 1).await);
    assert_eq!(page_ids(&collection), vec![1]);
    assert_eq!(collection.current_page(), 1);
    assert_eq!(collection.total_pages(), 3);
    assert_eq!(collection.page_size(), 7);
    assert!(collection.current_page() >= 1);
    assert!(collection.current_page() <= collection.total_pages());
    assert_eq!(service.calls(), vec![Call::Fetch { page: 1, size: 7 }]);
}

#[tokio::test]
async fn test_load_page_failure_keeps_previous_page() {
    let good = FakeService::new(vec![(1, page(vec![ticket(1, "a", true, 100)], 1, 2))]);
    let mut collection = TicketCollection::new(7);
    assert!(collection.load_page(&good, 1).await);

    let bad = FakeService::failing_fetch();
    assert!(!collection.load_page(&bad, 2).await);

    // The last good page stays displayed and the failure is recoverable
    assert_eq!(page_ids(&collection), vec![1]);
    assert_eq!(collection.current_page(), 1);
    assert!(collection.last_error().is_some());

    // A later successful load clears the error
    assert!(collection.load_page(&good, 1).await);
    assert!(collection.last_error().is_none());
}

#[tokio::test]
async fn test_stale_fetch_completion_is_discarded() {
    let mut collection = TicketCollection::new(7);

    // Two fetches in flight: the older completion must lose, whatever the
    // arrival order.
    let first = collection.begin_load(2);
    let second = collection.begin_load(3);

    let applied = collection.finish_load(first, Ok(page(vec![ticket(2, "old", true, 100)], 2, 5)));
    assert!(!applied);
    assert!(collection.tickets().is_empty());

    let applied = collection.finish_load(second, Ok(page(vec![ticket(3, "new", true, 100)], 3, 5)));
    assert!(applied);
    assert_eq!(page_ids(&collection), vec![3]);
    assert_eq!(collection.current_page(), 3);
}

#[tokio::test]
async fn test_pagination_guards() {
    let mut collection = TicketCollection::new(7);
    assert!(!collection.has_previous_page());
    assert!(!collection.has_next_page());

    let service = FakeService::new(vec![
        (1, page(vec![ticket(1, "a", true, 100)], 1, 3)),
        (3, page(vec![ticket(9, "z", false, 900)], 3, 3)),
    ]);

    collection.load_page(&service, 1).await;
    assert!(!collection.has_previous_page());
    assert!(collection.has_next_page());

    collection.load_page(&service, 3).await;
    assert!(collection.has_previous_page());
    assert!(!collection.has_next_page());
}

#[tokio::test]
async fn test_create_with_empty_description_makes_no_call() {
    let service = FakeService::new(vec![(1, page(vec![ticket(1, "a", true, 100)], 1, 1))]);
    let mut collection = TicketCollection::new(7);
    collection.load_page(&service, 1).await;
    let calls_before = service.calls().len();

    let result = collection.create_ticket(&service, "   ", true).await;
    assert!(matches!(result, Err(CommandError::EmptyDescription)));

    // No network call was made and the page is unchanged
    assert_eq!(service.calls().len(), calls_before);
    assert_eq!(page_ids(&collection), vec![1]);
}

#[tokio::test]
async fn test_create_reloads_current_page() {
    let service = FakeService::new(vec![
        (2, page(vec![ticket(8, "h", true, 800)], 2, 3)),
    ]);
    let mut collection = TicketCollection::new(7);
    collection.load_page(&service, 2).await;

    let result = collection.create_ticket(&service, "  New ticket  ", true).await;
    assert!(result.is_ok());

    let calls = service.calls();
    assert_eq!(
        calls,
        vec![
            Call::Fetch { page: 2, size: 7 },
            Call::Create {
                description: "New ticket".to_string()
            },
            Call::Fetch { page: 2, size: 7 },
        ]
    );
}

#[tokio::test]
async fn test_create_failure_leaves_page_and_skips_reload() {
    let service = FakeService::failing_mutations(vec![(1, page(vec![ticket(1, "a", true, 100)], 1, 1))]);
    let mut collection = TicketCollection::new(7);
    collection.load_page(&service, 1).await;

    let result = collection.create_ticket(&service, "New ticket", true).await;
    assert!(matches!(result, Err(CommandError::Service(_))));

    // Exactly one create attempt, no reload afterwards
    assert_eq!(service.fetch_count(), 1);
    assert_eq!(page_ids(&collection), vec![1]);
}

#[tokio::test(start_paused = true)]
async fn test_update_reloads_once_and_notice_expires() {
    let original_date = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let service = FakeService::new(vec![(1, page(vec![ticket(3, "broken", true, 1_700_000_000)], 1, 1))]);
    let mut collection = TicketCollection::new(7);
    collection.load_page(&service, 1).await;

    let result = collection
        .update_ticket(&service, 3, "fixed", false, original_date)
        .await;
    assert!(result.is_ok());

    // Exactly one reload of the current page after the update
    assert_eq!(service.fetch_count(), 2);
    let calls = service.calls();
    assert_eq!(
        calls[1],
        Call::Update {
            id: 3,
            date: original_date
        }
    );
    assert_eq!(calls[2], Call::Fetch { page: 1, size: 7 });

    // The success notice is visible, then clears itself after 3 seconds
    assert!(collection.notice().is_some());
    collection.tick();
    assert!(collection.notice().is_some());

    tokio::time::advance(std::time::Duration::from_millis(3_100)).await;
    collection.tick();
    assert!(collection.notice().is_none());
}

#[tokio::test]
async fn test_update_failure_keeps_dialog_error_local() {
    let service = FakeService::failing_mutations(vec![(1, page(vec![ticket(3, "broken", true, 100)], 1, 1))]);
    let mut collection = TicketCollection::new(7);
    collection.load_page(&service, 1).await;

    let result = collection
        .update_ticket(&service, 3, "fixed", false, Utc::now())
        .await;
    assert!(matches!(result, Err(CommandError::Service(_))));

    // The failure belongs to the dialog, not the page-level error overlay
    assert!(collection.last_error().is_none());
    assert!(collection.notice().is_none());
    assert_eq!(service.fetch_count(), 1);
}

#[tokio::test]
async fn test_delete_is_two_phase() {
    let service = FakeService::new(vec![(1, page(vec![ticket(5, "e", true, 500)], 1, 1))]);
    let mut collection = TicketCollection::new(7);
    collection.load_page(&service, 1).await;

    // First call only arms the marker; nothing goes out
    collection.request_delete(5);
    assert_eq!(collection.pending_delete(), Some(5));
    assert_eq!(service.fetch_count(), 1);
    assert_eq!(service.calls().len(), 1);

    // Confirming issues exactly one delete followed by exactly one reload
    let result = collection.confirm_delete(&service).await;
    assert!(result.is_ok());
    assert_eq!(collection.pending_delete(), None);

    let calls = service.calls();
    assert_eq!(calls[1], Call::Delete { id: 5 });
    assert_eq!(calls[2], Call::Fetch { page: 1, size: 7 });
    assert_eq!(calls.len(), 3);
}

#[tokio::test]
async fn test_cancel_delete_clears_marker_without_network() {
    let service = FakeService::new(vec![(1, page(vec![ticket(5, "e", true, 500)], 1, 1))]);
    let mut collection = TicketCollection::new(7);
    collection.load_page(&service, 1).await;

    collection.request_delete(5);
    collection.cancel_delete();
    assert_eq!(collection.pending_delete(), None);

    // Only the initial page fetch happened
    assert_eq!(service.calls().len(), 1);
}

#[tokio::test]
async fn test_rearming_delete_replaces_prior_marker() {
    let mut collection = TicketCollection::new(7);

    collection.request_delete(5);
    collection.request_delete(6);
    assert_eq!(collection.pending_delete(), Some(6));
}

#[tokio::test]
async fn test_confirm_without_marker_is_a_noop() {
    let service = FakeService::new(vec![]);
    let mut collection = TicketCollection::new(7);

    let result = collection.confirm_delete(&service).await;
    assert!(result.is_ok());
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn test_delete_failure_clears_marker_and_surfaces_error() {
    let service = FakeService::failing_mutations(vec![(1, page(vec![ticket(5, "e", true, 500)], 1, 1))]);
    let mut collection = TicketCollection::new(7);
    collection.load_page(&service, 1).await;

    collection.request_delete(5);
    let result = collection.confirm_delete(&service).await;
    assert!(result.is_err());

    // The marker never survives a confirmation attempt
    assert_eq!(collection.pending_delete(), None);
    assert!(collection.last_error().is_some());

    // No reload after a failed delete
    assert_eq!(service.fetch_count(), 1);
}
