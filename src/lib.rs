//! Ticketist - A Terminal User Interface (TUI) for a remote ticket service
//!
//! This library provides a terminal-based interface for browsing and managing
//! support tickets held by a remote HTTP service. Tickets are fetched one
//! page at a time; searching, filtering and sorting apply to the currently
//! loaded page, and create/update/delete commands round-trip to the service
//! through modal dialogs.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`collection`] - The ticket collection controller (pagination, derived rows, mutations)
//! * [`config`] - Application configuration management
//! * [`logger`] - File logging for the TUI session
//! * [`model`] - Ticket data model and wire types
//! * [`service`] - Ticket service contract and HTTP client
//! * [`ui`] - Terminal user interface components

/// Ticket collection controller owning pagination, criteria, and mutations
pub mod collection;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Ticket data model shared by the service client and the UI
pub mod model;

/// Ticket service contract and reqwest-backed client
pub mod service;

/// Terminal user interface components and rendering
pub mod ui;
