//! Constants used throughout the application
//!
//! This module centralizes magic strings, defaults, and other constant values
//! to improve maintainability and consistency.

use tokio::time::Duration;

// Service defaults
/// Default base path of the ticket service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5064/api";
/// Page size requested from the ticket service.
pub const DEFAULT_PAGE_SIZE: u32 = 7;
/// Request timeout for ticket service calls, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Transient notices
/// How long the success banner stays visible.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);
pub const TICKET_UPDATED_NOTICE: &str = "Ticket updated successfully!";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Display defaults
/// Default format for ticket dates in the table.
pub const DEFAULT_DATE_FORMAT: &str = "%b %e, %Y %H:%M";
