//! Ticket service abstraction layer.
//!
//! This module defines the interface the rest of the application uses to talk
//! to the remote ticket store, along with the error type shared by every
//! operation. The production implementation lives in [`http`]; tests provide
//! their own implementations of [`TicketService`].

use async_trait::async_trait;

use crate::model::{Ticket, TicketDraft, TicketPage, TicketUpdate};

pub mod http;

pub use http::HttpTicketService;

/// Errors produced by ticket service operations.
///
/// Every non-2xx response is reported as [`ServiceError::Status`] without any
/// per-status branching; transport problems (connection refused, timeout,
/// malformed body) surface as [`ServiceError::Transport`].
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with {0}")]
    Status(reqwest::StatusCode),
}

/// Remote ticket store contract.
///
/// The server is the source of truth: every mutation round-trips to it, and
/// the client re-fetches rather than patching its cache.
#[async_trait]
pub trait TicketService: Send + Sync {
    /// Fetch one page of tickets. `page_number` is 1-based.
    async fn fetch_page(&self, page_number: u32, page_size: u32) -> Result<TicketPage, ServiceError>;

    /// Create a new ticket; the returned ticket carries the server-assigned id.
    async fn create_ticket(&self, draft: &TicketDraft) -> Result<Ticket, ServiceError>;

    /// Update an existing ticket in place.
    async fn update_ticket(&self, update: &TicketUpdate) -> Result<Ticket, ServiceError>;

    /// Delete a ticket. Success has no body.
    async fn delete_ticket(&self, id: i64) -> Result<(), ServiceError>;
}
