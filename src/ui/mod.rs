//! Typed view-state for the page regions the controllers own.
//!
//! Each region stands in for one DOM subtree of a server-rendered page:
//! the controller captures its regions once at construction and is their
//! only writer; the embedding shell reads them to paint. No region
//! outlives a page load and nothing here is persisted.

pub mod alert;
pub mod availability_notice;
pub mod detail_modal;
pub mod search_panel;
pub mod status_board;

pub use alert::AlertSlot;
pub use availability_notice::AvailabilityNotice;
pub use detail_modal::DetailModal;
pub use search_panel::{SearchPanel, SearchState};
pub use status_board::{ActionButton, ButtonId, Notice, NoticePhase, StatusBadge, StatusBoard};
