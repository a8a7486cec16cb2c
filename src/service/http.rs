//! HTTP/JSON implementation of the ticket service contract.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::{ServiceError, TicketService};
use crate::model::{Ticket, TicketDraft, TicketPage, TicketUpdate};

/// reqwest-backed client for the remote ticket service.
#[derive(Clone)]
pub struct HttpTicketService {
    client: Client,
    base_url: String,
}

impl HttpTicketService {
    /// Create a client against the given base path, e.g.
    /// `http://localhost:5064/api`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ServiceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/Ticket{}", self.base_url, path)
    }

    /// Any non-2xx status is one uniform failure kind.
    fn check(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ServiceError::Status(response.status()))
        }
    }
}

#[async_trait]
impl TicketService for HttpTicketService {
    async fn fetch_page(&self, page_number: u32, page_size: u32) -> Result<TicketPage, ServiceError> {
        debug!("GET page {page_number} (size {page_size})");
        let response = self
            .client
            .get(self.endpoint(""))
            .query(&[("pageNumber", page_number), ("pageSize", page_size)])
            .send()
            .await?;
        Ok(Self::check(response)?.json().await?)
    }

    async fn create_ticket(&self, draft: &TicketDraft) -> Result<Ticket, ServiceError> {
        debug!("POST new ticket");
        let response = self.client.post(self.endpoint("")).json(draft).send().await?;
        Ok(Self::check(response)?.json().await?)
    }

    async fn update_ticket(&self, update: &TicketUpdate) -> Result<Ticket, ServiceError> {
        debug!("PUT ticket {}", update.id);
        let response = self
            .client
            .put(self.endpoint(&format!("/{}", update.id)))
            .json(update)
            .send()
            .await?;
        Ok(Self::check(response)?.json().await?)
    }

    async fn delete_ticket(&self, id: i64) -> Result<(), ServiceError> {
        debug!("DELETE ticket {id}");
        let response = self
            .client
            .delete(self.endpoint(&format!("/{id}")))
            .send()
            .await?;
        Self::check(response)?;
        Ok(())
    }
}
