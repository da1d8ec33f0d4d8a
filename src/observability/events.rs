//! Observable events
//!
//! Every log line the ledger emits names one of these events.

use std::fmt;

use super::logger::Severity;

/// Observable events in the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Configuration resolved
    ConfigLoaded,
    /// Genesis record created
    GenesisCreated,
    /// HTTP listener bound, ready for requests
    Serving,
    /// HTTP server stopped with an error
    ServerFailed,

    // Write path
    /// Record accepted onto the chain
    RecordAppended,
    /// Candidate record rejected
    RecordRejected,
    /// Full chain printed for inspection
    ChainDump,

    // Resolution
    /// Candidate chain replaced the held chain
    ChainAdopted,
    /// Held chain kept over a candidate
    ChainKept,

    // Verification
    /// Held chain passed full validation
    ChainVerified,
    /// Held chain failed full validation
    ChainCorruption,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::GenesisCreated => "GENESIS_CREATED",
            Event::Serving => "SERVING",
            Event::ServerFailed => "SERVER_FAILED",

            Event::RecordAppended => "RECORD_APPENDED",
            Event::RecordRejected => "RECORD_REJECTED",
            Event::ChainDump => "CHAIN_DUMP",

            Event::ChainAdopted => "CHAIN_ADOPTED",
            Event::ChainKept => "CHAIN_KEPT",

            Event::ChainVerified => "CHAIN_VERIFIED",
            Event::ChainCorruption => "CHAIN_CORRUPTION",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ChainDump => Severity::Trace,
            Event::RecordRejected | Event::ChainKept => Severity::Warn,
            Event::ChainCorruption => Severity::Error,
            Event::ServerFailed => Severity::Fatal,
            _ => Severity::Info,
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self.severity(), Severity::Fatal)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::ConfigLoaded,
            Event::GenesisCreated,
            Event::Serving,
            Event::ServerFailed,
            Event::RecordAppended,
            Event::RecordRejected,
            Event::ChainDump,
            Event::ChainAdopted,
            Event::ChainKept,
            Event::ChainVerified,
            Event::ChainCorruption,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_severities() {
        assert_eq!(Event::ChainDump.severity(), Severity::Trace);
        assert_eq!(Event::RecordAppended.severity(), Severity::Info);
        assert_eq!(Event::RecordRejected.severity(), Severity::Warn);
        assert_eq!(Event::ChainCorruption.severity(), Severity::Error);
        assert!(Event::ServerFailed.is_fatal());
        assert!(!Event::GenesisCreated.is_fatal());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::RecordAppended), "RECORD_APPENDED");
    }

    #[test]
    fn test_lifecycle_event_names() {
        assert_eq!(Event::ConfigLoaded.as_str(), "CONFIG_LOADED");
        assert_eq!(Event::GenesisCreated.as_str(), "GENESIS_CREATED");
        assert_eq!(Event::Serving.as_str(), "SERVING");
        assert_eq!(Event::ServerFailed.as_str(), "SERVER_FAILED");
    }

    #[test]
    fn test_no_event_shadows_scope_lines() {
        // BOOT_BEGIN and friends come from ObservationScope only
        for event in [
            Event::ConfigLoaded,
            Event::GenesisCreated,
            Event::Serving,
            Event::ServerFailed,
        ] {
            let s = event.as_str();
            assert!(!s.ends_with("_BEGIN") && !s.contains("STARTUP"), "{}", s);
        }
    }
}
