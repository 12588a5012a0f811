//! Dashboard state update logic
//!
//! Applies worker events to the view regions. Events are applied in arrival
//! order; a late snapshot replaces a newer one already on screen.

use super::state::DashboardState;
use super::views::{render_documents, render_stats};
use crate::events::{Event as WorkerEvent, Payload};

impl DashboardState {
    /// Advance the animation tick and apply all queued events.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        while let Some(event) = self.pending_events.pop_front() {
            if event.is_loggable() {
                self.add_to_activity_log(event.summary());
            }
            self.process_event(event);
        }
    }

    /// Apply a single event's payload to the region that owns it.
    fn process_event(&mut self, event: WorkerEvent) {
        let Some(payload) = event.payload else {
            return;
        };
        match payload {
            Payload::Stats(stats) => {
                render_stats(&mut self.stats, &stats);
                self.last_stats_at = Some(event.timestamp);
            }
            Payload::Documents(documents) => {
                render_documents(&mut self.documents, &documents);
                self.last_documents_at = Some(event.timestamp);
            }
            Payload::Locations(result) => self.scan.apply_locations(&result),
            Payload::ScanSettled(outcome) => {
                let (orchestrator, panel) = self.orchestrator_mut();
                orchestrator.settle(outcome, panel);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::events::{Event, EventType, Worker};
    use crate::logging::{LogLevel, should_log};
    use crate::gateway::MockGateway;
    use crate::scan::{ScanOutcome, ScanState};
    use crate::snapshot::{CategoryCount, DocumentRecord, Statistics};
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::DashboardState;
    use crate::ui::dashboard::views::TableRow;
    use std::sync::Arc;
    use std::time::Instant;

    fn test_state() -> DashboardState {
        let mut gateway = MockGateway::new();
        gateway
            .expect_server_url()
            .return_const("http://localhost:5000".to_string());
        DashboardState::new(
            Arc::new(gateway),
            Instant::now(),
            UIConfig::new(false, 5000),
        )
    }

    fn stats(total: u64) -> Statistics {
        Statistics {
            total_documents: total,
            by_category: vec![CategoryCount::new("Invoice", total)],
        }
    }

    #[test]
    fn snapshots_are_applied_in_arrival_order() {
        let mut state = test_state();
        // A slow response for an older cycle arriving last wins.
        state.add_event(Event::stats_received(stats(10)));
        state.add_event(Event::stats_received(stats(7)));
        state.update();

        assert_eq!(state.stats.total_documents, Some(7));
        assert_eq!(state.stats.chart.as_ref().unwrap().revision(), 1);
        assert!(state.last_stats_at.is_some());
        assert!(state.pending_events.is_empty());
        // Refreshes only move the last-refresh time.
        assert!(state.activity_logs.is_empty());
    }

    #[test]
    fn documents_and_locations_reach_their_regions() {
        let mut state = test_state();
        state.add_event(Event::documents_received(vec![DocumentRecord {
            filename: "/x/y.pdf".to_string(),
            predicted_category: "Memo".to_string(),
            confidence_score: 0.55,
            language: "fr".to_string(),
            modified_date: "2024-01-02T03:04:05".to_string(),
        }]));
        state.add_event(Event::locations_loaded(Ok(vec!["/data/a".to_string()])));
        state.update();

        assert!(matches!(state.documents.rows()[0], TableRow::Document(_)));
        assert!(state.scan.trigger.enabled);
        // The stats panel is untouched by other regions' events.
        assert_eq!(state.stats.total_documents, None);
    }

    #[test]
    fn scan_settlement_restores_trigger() {
        let mut state = test_state();
        state.add_event(Event::locations_loaded(Ok(vec!["/data/a".to_string()])));
        state.update();

        let (orchestrator, panel) = state.orchestrator_mut();
        assert!(orchestrator.activate(panel).is_some());
        assert!(!state.scan.trigger.enabled);

        state.add_event(Event::scan_settled(
            "/data/a",
            ScanOutcome::Rejected {
                detail: Some("permission denied".to_string()),
            },
        ));
        state.update();

        assert!(state.scan.trigger.enabled);
        assert_eq!(state.scan.status.text, "Error: permission denied");
        assert_eq!(state.orchestrator().state(), &ScanState::Idle);
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut state = test_state();
        for i in 0..150 {
            state.add_event(Event::locations_loaded(Ok(vec![format!("/data/{}", i)])));
        }
        state.update();
        assert_eq!(
            state.activity_logs.len(),
            crate::consts::cli_consts::MAX_ACTIVITY_LOGS
        );
        assert!(state.activity_logs.iter().all(|e| e.payload.is_none()));
    }

    #[test]
    fn refreshes_do_not_evict_visible_entries() {
        let mut state = test_state();
        state.add_event(Event::locations_loaded(Ok(vec!["/data/a".to_string()])));
        for i in 0..150 {
            state.add_event(Event::stats_received(stats(i)));
            state.add_event(Event::documents_received(Vec::new()));
        }
        state.update();

        assert_eq!(state.activity_logs.len(), 1);
        assert_eq!(state.activity_logs[0].msg, "Loaded 1 scan locations");
    }

    #[test]
    fn failed_poll_keeps_previous_render() {
        let mut state = test_state();
        state.add_event(Event::stats_received(stats(4)));
        state.add_event(Event::documents_received(vec![DocumentRecord {
            filename: "/x/kept.pdf".to_string(),
            predicted_category: "Memo".to_string(),
            confidence_score: 0.9,
            language: "en".to_string(),
            modified_date: "2024-01-02T03:04:05".to_string(),
        }]));
        state.update();

        let stats_before = state.stats.clone();
        let documents_before = state.documents.clone();
        let stats_at = state.last_stats_at.clone();
        let documents_at = state.last_documents_at.clone();

        let failure = Event::with_level(
            Worker::StatsPoller,
            "Stats refresh failed: Reqwest error: connection refused".to_string(),
            EventType::Error,
            LogLevel::Debug,
        );
        // Hidden at the default `info` threshold.
        assert!(!should_log(failure.log_level, LogLevel::Info));
        state.add_event(failure);
        state.update();

        assert_eq!(state.stats, stats_before);
        assert_eq!(state.stats.chart.as_ref().unwrap().revision(), 0);
        assert_eq!(state.documents, documents_before);
        assert_eq!(state.last_stats_at, stats_at);
        assert_eq!(state.last_documents_at, documents_at);
        assert!(state.activity_logs.iter().all(|e| e.should_display()));
    }
}
