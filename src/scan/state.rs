//! Scan control state machine
//!
//! `Idle -> Validating -> Scanning -> Idle`, expressed as a pure transition
//! function. The driver in [`super::orchestrator`] applies the effects.

use crate::consts::cli_consts::messages;
use crate::gateway::error::GatewayError;
use crate::snapshot::ScanAccepted;

/// How a status line should be styled.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, strum::Display)]
pub enum StatusTone {
    #[default]
    Neutral,
    Error,
}

#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    /// The trigger was activated; the selection has not been checked yet.
    Validating { selection: Option<String> },
    /// A submission is in flight for `path`.
    Scanning { path: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanInput {
    /// The user activated the trigger with the given selector value.
    Activate { selection: Option<String> },
    /// Check the selection captured by `Activate`.
    Validate,
    /// The submission finished, one way or another.
    Settled(ScanOutcome),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Effect {
    ShowStatus { text: String, tone: StatusTone },
    /// Disable the trigger and show the busy indicator.
    SetTriggerBusy,
    /// Re-enable the trigger with its default label.
    RestoreTrigger,
    /// Issue `POST /api/scan` for this path.
    Submit { path: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ScanState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(state: ScanState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn with(state: ScanState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }
}

/// Result of a settled submission.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ScanOutcome {
    Accepted { message: String },
    /// `detail` is the service's `{error}` text when it sent one.
    Rejected { detail: Option<String> },
}

impl ScanOutcome {
    pub fn from_result(result: Result<ScanAccepted, GatewayError>) -> Self {
        match result {
            Ok(accepted) => ScanOutcome::Accepted {
                message: accepted.message,
            },
            Err(e) => ScanOutcome::Rejected {
                detail: e.remote_detail().map(str::to_string),
            },
        }
    }

    /// Text for the status line.
    pub fn status_text(&self) -> String {
        match self {
            ScanOutcome::Accepted { message } => message.clone(),
            ScanOutcome::Rejected { detail } => format!(
                "Error: {}",
                detail.as_deref().unwrap_or(messages::UNKNOWN_ERROR)
            ),
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            ScanOutcome::Accepted { .. } => StatusTone::Neutral,
            ScanOutcome::Rejected { .. } => StatusTone::Error,
        }
    }
}

/// Status text announcing a submission.
pub fn initiated_message(path: &str) -> String {
    format!("Scan initiated for {}. This may take a while...", path)
}

/// Computes the next state and the effects to apply. Never performs I/O.
pub fn transition(state: &ScanState, input: ScanInput) -> Transition {
    match (state, input) {
        (ScanState::Idle, ScanInput::Activate { selection }) => {
            Transition::to(ScanState::Validating { selection })
        }

        (ScanState::Validating { selection }, ScanInput::Validate) => {
            match selection.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
                None => Transition::with(
                    ScanState::Idle,
                    vec![Effect::ShowStatus {
                        text: messages::SELECT_DIRECTORY.to_string(),
                        tone: StatusTone::Error,
                    }],
                ),
                Some(path) => Transition::with(
                    ScanState::Scanning {
                        path: path.to_string(),
                    },
                    vec![
                        Effect::SetTriggerBusy,
                        Effect::ShowStatus {
                            text: initiated_message(path),
                            tone: StatusTone::Neutral,
                        },
                        Effect::Submit {
                            path: path.to_string(),
                        },
                    ],
                ),
            }
        }

        (ScanState::Scanning { .. }, ScanInput::Settled(outcome)) => Transition::with(
            ScanState::Idle,
            vec![
                Effect::ShowStatus {
                    text: outcome.status_text(),
                    tone: outcome.tone(),
                },
                Effect::RestoreTrigger,
            ],
        ),

        // Anything else is a no-op: a second activation while scanning (the
        // trigger is disabled), or a settlement nobody is waiting for.
        (state, _) => Transition::to(state.clone()),
    }
}
