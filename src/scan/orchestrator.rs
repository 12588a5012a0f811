//! Drives the scan state machine against the scan panel

use super::state::{Effect, ScanInput, ScanOutcome, ScanState, Transition, transition};
use crate::events::Event;
use crate::gateway::Gateway;
use crate::ui::dashboard::views::ScanPanel;
use crate::workers::EventSender;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Owns the scan state and applies its effects to the trigger and status line.
pub struct ScanOrchestrator {
    state: ScanState,
    gateway: Arc<dyn Gateway>,
}

impl std::fmt::Debug for ScanOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanOrchestrator")
            .field("state", &self.state)
            .field("server", &self.gateway.server_url())
            .finish()
    }
}

impl ScanOrchestrator {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            state: ScanState::Idle,
            gateway,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Handles a trigger activation.
    ///
    /// Returns the path to submit when the selection passed validation. The
    /// caller decides how to run the submission and must report it back
    /// through [`ScanOrchestrator::settle`].
    pub fn activate(&mut self, panel: &mut ScanPanel) -> Option<String> {
        let selection = panel.selector.selected_value();
        self.step(ScanInput::Activate { selection }, panel);
        self.step(ScanInput::Validate, panel)
    }

    /// Applies the result of a submission.
    pub fn settle(&mut self, outcome: ScanOutcome, panel: &mut ScanPanel) {
        self.step(ScanInput::Settled(outcome), panel);
    }

    /// Runs the submission on the runtime and reports it as an event.
    pub fn spawn_submission(&self, path: String, events: EventSender) -> JoinHandle<()> {
        let gateway = Arc::clone(&self.gateway);
        tokio::spawn(async move {
            let outcome = submit_scan(gateway.as_ref(), &path).await;
            events.send_event(Event::scan_settled(&path, outcome)).await;
        })
    }

    fn step(&mut self, input: ScanInput, panel: &mut ScanPanel) -> Option<String> {
        let Transition { state, effects } = transition(&self.state, input);
        self.state = state;

        let mut submit = None;
        for effect in effects {
            match effect {
                Effect::ShowStatus { text, tone } => panel.status.show(text, tone),
                Effect::SetTriggerBusy => panel.trigger.set_busy(),
                Effect::RestoreTrigger => panel.trigger.restore(),
                Effect::Submit { path } => submit = Some(path),
            }
        }
        submit
    }
}

/// Submits a scan and folds the reply into an outcome.
pub async fn submit_scan(gateway: &dyn Gateway, path: &str) -> ScanOutcome {
    let result = gateway.submit_scan(path).await;
    if let Err(e) = &result {
        match e.status() {
            Some(status) => log::warn!("scan submission for {} failed ({}): {}", path, status, e),
            None => log::warn!("scan submission for {} failed: {}", path, e),
        }
    }
    ScanOutcome::from_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Payload;
    use crate::gateway::MockGateway;
    use crate::gateway::error::GatewayError;
    use crate::scan::StatusTone;
    use crate::snapshot::ScanAccepted;
    use tokio::sync::mpsc;

    fn armed_panel() -> ScanPanel {
        let mut panel = ScanPanel::default();
        panel.apply_locations(&Ok(vec!["/data/a".to_string(), "/data/b".to_string()]));
        panel
    }

    async fn run_cycle(gateway: MockGateway, panel: &mut ScanPanel) -> ScanOrchestrator {
        let mut orchestrator = ScanOrchestrator::new(Arc::new(gateway));
        let path = orchestrator.activate(panel).expect("selection is valid");
        assert!(!panel.trigger.enabled);
        assert!(panel.trigger.busy);
        assert_eq!(
            panel.status.text,
            "Scan initiated for /data/a. This may take a while..."
        );
        assert_eq!(panel.status.tone, StatusTone::Neutral);

        let (tx, mut rx) = mpsc::channel(4);
        orchestrator
            .spawn_submission(path, EventSender::new(tx))
            .await
            .unwrap();
        let event = rx.recv().await.unwrap();
        match event.payload {
            Some(Payload::ScanSettled(outcome)) => orchestrator.settle(outcome, panel),
            other => panic!("unexpected payload: {:?}", other),
        }
        orchestrator
    }

    #[tokio::test]
    async fn unselected_path_never_reaches_the_network() {
        let mut gateway = MockGateway::new();
        gateway.expect_submit_scan().never();
        let mut orchestrator = ScanOrchestrator::new(Arc::new(gateway));

        // Nothing loaded yet: the selector only holds a placeholder.
        let mut panel = ScanPanel::default();
        panel.trigger.enable();
        assert_eq!(orchestrator.activate(&mut panel), None);

        assert_eq!(panel.status.text, "Please select a directory to scan.");
        assert_eq!(panel.status.tone, StatusTone::Error);
        assert!(panel.trigger.enabled, "validation must not disable controls");
        assert_eq!(orchestrator.state(), &ScanState::Idle);
    }

    #[tokio::test]
    async fn successful_scan_shows_server_message() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_submit_scan()
            .withf(|path| path == "/data/a")
            .times(1)
            .returning(|_| {
                Ok(ScanAccepted {
                    message: "Scanned 12 files".to_string(),
                })
            });

        let mut panel = armed_panel();
        let orchestrator = run_cycle(gateway, &mut panel).await;

        assert_eq!(panel.status.text, "Scanned 12 files");
        assert_eq!(panel.status.tone, StatusTone::Neutral);
        assert!(panel.trigger.enabled);
        assert!(!panel.trigger.busy);
        assert_eq!(orchestrator.state(), &ScanState::Idle);
    }

    #[tokio::test]
    async fn rejection_with_detail_is_shown_as_error() {
        let mut gateway = MockGateway::new();
        gateway.expect_submit_scan().times(1).returning(|_| {
            Err(GatewayError::Remote {
                status: 403,
                error: "permission denied".to_string(),
            })
        });

        let mut panel = armed_panel();
        run_cycle(gateway, &mut panel).await;

        assert_eq!(panel.status.text, "Error: permission denied");
        assert_eq!(panel.status.tone, StatusTone::Error);
        assert!(panel.trigger.enabled);
    }

    #[tokio::test]
    async fn rejection_without_body_uses_fallback() {
        let mut gateway = MockGateway::new();
        gateway.expect_submit_scan().times(1).returning(|_| {
            Err(GatewayError::Http {
                status: 500,
                message: String::new(),
            })
        });

        let mut panel = armed_panel();
        run_cycle(gateway, &mut panel).await;

        assert_eq!(panel.status.text, "Error: Unknown error occurred.");
        assert_eq!(panel.status.tone, StatusTone::Error);
        assert!(panel.trigger.enabled);
        assert!(!panel.trigger.busy);
    }

    #[tokio::test]
    async fn second_activation_while_scanning_is_ignored() {
        let mut gateway = MockGateway::new();
        gateway.expect_submit_scan().never();
        let mut orchestrator = ScanOrchestrator::new(Arc::new(gateway));

        let mut panel = armed_panel();
        assert!(orchestrator.activate(&mut panel).is_some());
        assert_eq!(orchestrator.activate(&mut panel), None);
        assert!(matches!(orchestrator.state(), ScanState::Scanning { .. }));
        assert!(panel.trigger.busy);
    }

    #[tokio::test]
    async fn machine_is_reentrant_after_settling() {
        let mut gateway = MockGateway::new();
        gateway.expect_submit_scan().never();
        let mut orchestrator = ScanOrchestrator::new(Arc::new(gateway));
        let mut panel = armed_panel();

        for _ in 0..2 {
            assert!(orchestrator.activate(&mut panel).is_some());
            orchestrator.settle(
                ScanOutcome::Accepted {
                    message: "ok".to_string(),
                },
                &mut panel,
            );
            assert!(panel.trigger.enabled);
        }
    }
}
