//! Observability for the ledger
//!
//! - Structured logging (one JSON object per line)
//! - Typed ledger and lifecycle events
//! - Atomic counters exported at `/metrics`
//! - Timed scopes for multi-step operations
//!
//! Logging is synchronous and never affects chain state.
//!
//! # Usage
//!
//! ```ignore
//! use pulseledger::observability::{log_event_with_fields, Event, ObservationScope};
//!
//! log_event_with_fields(Event::RecordAppended, &[("index", "1")]);
//!
//! let scope = ObservationScope::new("BOOT");
//! // ... do work ...
//! scope.complete();
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::ObservationScope;

/// Log a ledger or lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a ledger or lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
