//! Dashboard state management
//!
//! Holds every view region plus the scan orchestrator that drives the scan panel.

use super::views::{DocumentTable, ScanPanel, StatsPanel};
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event as WorkerEvent;
use crate::gateway::Gateway;
use crate::scan::ScanOrchestrator;
use crate::ui::app::UIConfig;
use crate::workers::EventSender;

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug)]
pub struct DashboardState {
    /// Base URL of the service being watched.
    pub server_url: String,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Refresh interval, for display.
    pub poll_interval_ms: u64,
    /// Whether to enable background colors
    pub with_background_color: bool,

    /// Total count and category chart.
    pub stats: StatsPanel,
    /// Classified documents.
    pub documents: DocumentTable,
    /// Location selector, trigger and status line.
    pub scan: ScanPanel,

    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Local time of the last applied statistics snapshot.
    pub last_stats_at: Option<String>,
    /// Local time of the last applied document snapshot.
    pub last_documents_at: Option<String>,
    /// Animation tick counter
    pub tick: usize,

    orchestrator: ScanOrchestrator,
}

impl DashboardState {
    pub fn new(gateway: Arc<dyn Gateway>, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            server_url: gateway.server_url().to_string(),
            start_time,
            poll_interval_ms: ui_config.poll_interval_ms,
            with_background_color: ui_config.with_background_color,
            stats: StatsPanel::default(),
            documents: DocumentTable::default(),
            scan: ScanPanel::default(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            last_stats_at: None,
            last_documents_at: None,
            tick: 0,
            orchestrator: ScanOrchestrator::new(gateway),
        }
    }

    pub fn orchestrator(&self) -> &ScanOrchestrator {
        &self.orchestrator
    }

    /// Activates the scan trigger, if it is enabled, and starts the submission.
    pub fn start_scan(&mut self, events: &EventSender) {
        if !self.scan.trigger.enabled {
            return;
        }
        if let Some(path) = self.orchestrator.activate(&mut self.scan) {
            self.orchestrator.spawn_submission(path, events.clone());
        }
    }

    pub(super) fn orchestrator_mut(&mut self) -> (&mut ScanOrchestrator, &mut ScanPanel) {
        (&mut self.orchestrator, &mut self.scan)
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
