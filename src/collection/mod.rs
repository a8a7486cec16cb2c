//! Ticket collection controller.
//!
//! Owns the cached page of tickets, the pagination cursor, the filter and
//! sort criteria and the mutation lifecycle. The UI renders whatever
//! [`TicketCollection::derived_rows`] yields and funnels every command
//! through here; nothing below this layer holds cross-request state.
//!
//! Failure semantics: mutation failures are returned to the caller that
//! issued the command (the dialog stays open and shows them), while fetch and
//! reload failures are recorded as a recoverable error on the controller and
//! the last good page stays in place. Nothing is retried automatically.

pub mod criteria;

use chrono::{DateTime, Utc};
use log::{error, info};
use tokio::time::Instant;

use crate::constants::{NOTICE_DURATION, TICKET_UPDATED_NOTICE};
use crate::model::{Ticket, TicketDraft, TicketPage, TicketUpdate};
use crate::service::{ServiceError, TicketService};

pub use criteria::{FilterCriteria, SortDirection, SortSpec, StatusFilter};

/// Errors surfaced to whichever dialog or caller issued a command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Description cannot be empty.")]
    EmptyDescription,

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Token for one dispatched page fetch.
///
/// A completion carrying a token that is no longer current is discarded, so
/// the most recently requested page always wins no matter in which order the
/// responses arrive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadToken {
    generation: u64,
    page: u32,
}

/// Transient success banner, cleared by [`TicketCollection::tick`] once its
/// deadline passes.
#[derive(Clone, Debug)]
pub struct Notice {
    pub text: String,
    expires_at: Instant,
}

impl Notice {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            expires_at: Instant::now() + NOTICE_DURATION,
        }
    }
}

/// The collection controller. See the module docs for the contract.
pub struct TicketCollection {
    tickets: Vec<Ticket>,
    current_page: u32,
    total_pages: u32,
    page_size: u32,
    filter: FilterCriteria,
    sort: SortSpec,
    pending_delete: Option<i64>,
    notice: Option<Notice>,
    last_error: Option<String>,
    generation: u64,
}

impl TicketCollection {
    pub fn new(page_size: u32) -> Self {
        Self {
            tickets: Vec::new(),
            current_page: 1,
            total_pages: 1,
            page_size,
            filter: FilterCriteria::default(),
            sort: SortSpec::default(),
            pending_delete: None,
            notice: None,
            last_error: None,
            generation: 0,
        }
    }

    // --- read side -------------------------------------------------------

    /// The cached page, in server order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn ticket_by_id(&self, id: i64) -> Option<&Ticket> {
        self.tickets.iter().find(|ticket| ticket.id == id)
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Compute the rendered row sequence: filter the cached page, then apply
    /// the sort spec as a stable sort. Read-only; the cached page is never
    /// reordered.
    pub fn derived_rows(&self) -> Vec<&Ticket> {
        let mut rows: Vec<&Ticket> = self
            .tickets
            .iter()
            .filter(|ticket| self.filter.matches(ticket))
            .collect();
        rows.sort_by(|a, b| self.sort.compare(a, b));
        rows
    }

    // --- filter and sort state -------------------------------------------

    pub fn set_filter(&mut self, filter: FilterCriteria) {
        self.filter = filter;
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    pub fn cycle_status_filter(&mut self) {
        self.filter.status = self.filter.status.next();
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.cycle();
    }

    pub fn search_term(&self) -> &str {
        &self.filter.search_term
    }

    pub fn push_search_char(&mut self, c: char) {
        self.filter.search_term.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.filter.search_term.pop();
    }

    // --- pagination ------------------------------------------------------

    /// Register a page fetch about to be dispatched. Any fetch begun earlier
    /// becomes stale from this point on.
    pub fn begin_load(&mut self, page: u32) -> LoadToken {
        self.generation += 1;
        LoadToken {
            generation: self.generation,
            page,
        }
    }

    /// Apply the outcome of a page fetch. Returns `true` when the page was
    /// applied; stale completions and failures leave the cached page
    /// untouched.
    pub fn finish_load(&mut self, token: LoadToken, result: Result<TicketPage, ServiceError>) -> bool {
        if token.generation != self.generation {
            info!("discarding stale response for page {}", token.page);
            return false;
        }
        match result {
            Ok(page) => {
                self.tickets = page.tickets;
                self.total_pages = page.total_pages;
                self.current_page = page.current_page;
                self.last_error = None;
                true
            }
            Err(err) => {
                error!("failed to load page {}: {err}", token.page);
                self.last_error = Some(format!("Error fetching tickets: {err}"));
                false
            }
        }
    }

    /// Fetch page `page` and replace the cached page wholesale on success.
    ///
    /// `page` must be at least 1; requesting a page beyond `total_pages` is
    /// the caller's responsibility to avoid (the pagination keys check
    /// [`has_next_page`](Self::has_next_page) first). On failure the prior
    /// page stays displayed and the error is recorded on the controller.
    pub async fn load_page(&mut self, service: &dyn TicketService, page: u32) -> bool {
        let token = self.begin_load(page);
        let result = service.fetch_page(page, self.page_size).await;
        self.finish_load(token, result)
    }

    /// Re-fetch the page currently displayed.
    pub async fn reload(&mut self, service: &dyn TicketService) -> bool {
        let page = self.current_page;
        self.load_page(service, page).await
    }

    // --- mutations -------------------------------------------------------

    /// Create a ticket with `date` set to the submission instant, then
    /// re-fetch the current page.
    ///
    /// An empty or whitespace-only description fails before any network call.
    /// A create failure is returned to the caller; a reload failure after a
    /// successful create is recorded on the controller instead, because the
    /// mutation itself went through.
    pub async fn create_ticket(
        &mut self,
        service: &dyn TicketService,
        description: &str,
        status: bool,
    ) -> Result<(), CommandError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(CommandError::EmptyDescription);
        }
        let draft = TicketDraft {
            description: description.to_string(),
            status,
            date: Utc::now(),
        };
        let created = service.create_ticket(&draft).await.map_err(|err| {
            error!("failed to create ticket: {err}");
            err
        })?;
        info!("created ticket {}", created.id);
        self.reload(service).await;
        Ok(())
    }

    /// Update a ticket, preserving its original creation `date`, then
    /// re-fetch the current page and show the success notice for a few
    /// seconds.
    pub async fn update_ticket(
        &mut self,
        service: &dyn TicketService,
        id: i64,
        description: &str,
        status: bool,
        date: DateTime<Utc>,
    ) -> Result<(), CommandError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(CommandError::EmptyDescription);
        }
        let update = TicketUpdate {
            id,
            description: description.to_string(),
            status,
            date,
        };
        service.update_ticket(&update).await.map_err(|err| {
            error!("failed to update ticket {id}: {err}");
            err
        })?;
        info!("updated ticket {id}");
        self.reload(service).await;
        self.notice = Some(Notice::new(TICKET_UPDATED_NOTICE));
        Ok(())
    }

    /// Arm the pending-delete marker for `id`. The marker is exclusive:
    /// arming a new one replaces any prior marker that was never confirmed.
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    /// Disarm the pending-delete marker without any network call.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Issue the delete for the armed ticket and re-fetch the current page.
    ///
    /// The marker is cleared on every exit path; there is no undo once the
    /// delete request has been sent. Without an armed marker this is a no-op.
    pub async fn confirm_delete(&mut self, service: &dyn TicketService) -> Result<(), CommandError> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(());
        };
        if let Err(err) = service.delete_ticket(id).await {
            error!("failed to delete ticket {id}: {err}");
            self.last_error = Some(format!("Error deleting ticket: {err}"));
            return Err(err.into());
        }
        info!("deleted ticket {id}");
        self.reload(service).await;
        Ok(())
    }

    // --- transient state -------------------------------------------------

    /// Expire the success notice once its deadline passes. Driven by the
    /// event loop on every iteration so the banner clears without input.
    pub fn tick(&mut self) {
        if let Some(notice) = &self.notice {
            if Instant::now() >= notice.expires_at {
                self.notice = None;
            }
        }
    }
}
