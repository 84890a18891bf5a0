//! Event-driven page controllers.
//!
//! One controller per page behavior, each owning its regions and
//! nothing else. No controller depends on another; each is attached by
//! the shell at page bind and reacts to the events it registered for.

pub mod availability;
pub mod detail;
pub mod search;
pub mod status;

pub use availability::AvailabilityController;
pub use detail::DetailController;
pub use search::SearchController;
pub use status::StatusController;
