//! Scan job initiation

pub mod orchestrator;
pub mod state;

pub use orchestrator::{ScanOrchestrator, submit_scan};
pub use state::{ScanOutcome, ScanState, StatusTone};
