//! Timed observation scopes
//!
//! - `{name}_BEGIN` on creation
//! - `{name}_COMPLETE` with `duration_ms` on `complete()`
//! - `{name}_FAILED` with `reason` and `duration_ms` on `fail()`
//! - `{name}_INCOMPLETE` if dropped without either

use std::time::Instant;

use super::logger::{Logger, Severity};

/// A scope that logs its start, outcome and duration
pub struct ObservationScope<'a> {
    name: &'a str,
    started: Instant,
    finished: bool,
}

impl<'a> ObservationScope<'a> {
    /// Create a new observation scope, logging `{name}_BEGIN`
    pub fn new(name: &'a str) -> Self {
        Logger::info(&format!("{}_BEGIN", name), &[]);
        Self {
            name,
            started: Instant::now(),
            finished: false,
        }
    }

    /// Milliseconds since the scope began
    pub fn elapsed_ms(&self) -> u128 {
        self.started.elapsed().as_millis()
    }

    /// Mark the scope as successfully completed
    pub fn complete(self) {
        self.complete_with_fields(&[]);
    }

    /// Mark the scope as successfully completed with additional fields
    pub fn complete_with_fields(mut self, extra: &[(&str, &str)]) {
        self.finish(Severity::Info, "COMPLETE", extra);
    }

    /// Mark the scope as failed
    pub fn fail(mut self, reason: &str) {
        self.finish(Severity::Error, "FAILED", &[("reason", reason)]);
    }

    fn finish(&mut self, severity: Severity, suffix: &str, extra: &[(&str, &str)]) {
        self.finished = true;
        let duration = self.elapsed_ms().to_string();
        let mut fields: Vec<(&str, &str)> = vec![("duration_ms", duration.as_str())];
        fields.extend_from_slice(extra);
        Logger::log(severity, &format!("{}_{}", self.name, suffix), &fields);
    }
}

impl Drop for ObservationScope<'_> {
    fn drop(&mut self) {
        if !self.finished {
            Logger::warn(
                &format!("{}_INCOMPLETE", self.name),
                &[("reason", "scope dropped without completion")],
            );
        }
    }
}
