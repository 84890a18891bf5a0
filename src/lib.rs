//! Client-side interaction layer for a clinic-management web application.
//!
//! The server owns all business logic and data; this crate is the thin,
//! event-driven layer between user input and the server's JSON
//! endpoints: live patient search, appointment availability checks,
//! status transitions, the detail modal, and calendar navigation.
//!
//! Each page behavior is a self-contained controller that captures its
//! view-state regions once at construction and reacts to the events the
//! shell forwards to it. Regions are plain structs the shell reads to
//! paint; nothing is persisted client-side.

pub mod api;
pub mod config;
pub mod controllers;
pub mod error;
pub mod nav;
pub mod ui;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for an embedding shell.
///
/// Respects `RUST_LOG`; falls back to the crate default filter.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
