//! Event System
//!
//! Messages flowing from background workers to the UI loop, and the
//! activity-log entries derived from them.

use crate::logging::{LogLevel, should_log_with_env};
use crate::scan::ScanOutcome;
use crate::snapshot::{DocumentRecord, Statistics};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Worker {
    /// Periodic `/api/stats` refresh.
    StatsPoller,
    /// Periodic `/api/documents` refresh.
    DocumentPoller,
    /// One-shot scan location bootstrap.
    LocationLoader,
    /// Scan submission.
    ScanSubmitter,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

/// Data carried by an event, applied to the dashboard by the UI loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Stats(Statistics),
    Documents(Vec<DocumentRecord>),
    /// `Err` holds the failure description.
    Locations(Result<Vec<String>, String>),
    ScanSettled(ScanOutcome),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    pub payload: Option<Payload>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            payload: None,
        }
    }

    pub fn with_level(
        worker: Worker,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(worker, msg, event_type, log_level)
    }

    pub fn stats_received(stats: Statistics) -> Self {
        let mut event = Self::new(
            Worker::StatsPoller,
            format!("Stats refreshed: {} documents", stats.total_documents),
            EventType::Refresh,
            LogLevel::Debug,
        );
        event.payload = Some(Payload::Stats(stats));
        event
    }

    pub fn documents_received(documents: Vec<DocumentRecord>) -> Self {
        let mut event = Self::new(
            Worker::DocumentPoller,
            format!("Document list refreshed: {} rows", documents.len()),
            EventType::Refresh,
            LogLevel::Debug,
        );
        event.payload = Some(Payload::Documents(documents));
        event
    }

    pub fn locations_loaded(result: Result<Vec<String>, String>) -> Self {
        let (msg, event_type, log_level) = match &result {
            Ok(locations) => (
                format!("Loaded {} scan locations", locations.len()),
                EventType::Success,
                LogLevel::Info,
            ),
            Err(e) => (
                format!("Failed to load scan locations: {}", e),
                EventType::Error,
                LogLevel::Error,
            ),
        };
        let mut event = Self::new(Worker::LocationLoader, msg, event_type, log_level);
        event.payload = Some(Payload::Locations(result));
        event
    }

    pub fn scan_settled(path: &str, outcome: ScanOutcome) -> Self {
        let (msg, event_type, log_level) = match &outcome {
            ScanOutcome::Accepted { message } => (
                format!("Scan accepted for {}: {}", path, message),
                EventType::Success,
                LogLevel::Info,
            ),
            ScanOutcome::Rejected { .. } => (
                format!("Scan failed for {}: {}", path, outcome.status_text()),
                EventType::Error,
                LogLevel::Error,
            ),
        };
        let mut event = Self::new(Worker::ScanSubmitter, msg, event_type, log_level);
        event.payload = Some(Payload::ScanSettled(outcome));
        event
    }

    /// A copy without the payload, for the activity log.
    pub fn summary(&self) -> Self {
        Self {
            payload: None,
            ..self.clone()
        }
    }

    /// Whether the activity log keeps this event.
    ///
    /// Refreshes are reflected by the last-refresh times instead, so they
    /// never take a slot in the bounded log.
    pub fn is_loggable(&self) -> bool {
        self.event_type != EventType::Refresh && self.should_display()
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_refreshes_are_quiet_by_default() {
        let event = Event::stats_received(Statistics::default());
        assert_eq!(event.event_type, EventType::Refresh);
        assert_eq!(event.log_level, LogLevel::Debug);
        assert!(event.payload.is_some());
        assert!(event.summary().payload.is_none());
        assert!(!event.is_loggable());
    }

    #[test]
    fn scan_outcomes_are_always_displayed() {
        let ok = Event::scan_settled(
            "/data/a",
            ScanOutcome::Accepted {
                message: "Scanned 12 files".to_string(),
            },
        );
        assert!(ok.should_display());
        assert!(ok.msg.contains("Scanned 12 files"));

        let failed = Event::scan_settled("/data/a", ScanOutcome::Rejected { detail: None });
        assert!(failed.should_display());
        assert!(failed.msg.contains("Unknown error occurred."));
    }
}
