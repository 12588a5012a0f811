//! Session setup and initialization

use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::environment::Environment;
use crate::events::Event;
use crate::gateway::{Gateway, GatewayClient};
use crate::workers::{EventSender, start_location_loader, start_poller};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Client shared by the workers and the scan orchestrator
    pub gateway: Arc<dyn Gateway>,
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Sender cloned into scan submissions
    pub event_sender: EventSender,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// Refresh interval the poller runs at
    pub poll_interval: Duration,
}

impl std::fmt::Debug for SessionData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionData")
            .field("server", &self.gateway.server_url())
            .field("workers", &self.join_handles.len())
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

/// Sets up a dashboard session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Creates the HTTP client for the service
/// 2. Sets up the event and shutdown channels
/// 3. Starts the snapshot poller and the one-shot location loader
///
/// # Arguments
/// * `env` - Environment to connect to
/// * `poll_interval` - Time between snapshot refreshes
pub fn setup_session(
    env: &Environment,
    poll_interval: Duration,
) -> Result<SessionData, Box<dyn Error>> {
    let gateway: Arc<dyn Gateway> = Arc::new(GatewayClient::new(env)?);

    let (sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let event_sender = EventSender::new(sender);

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let join_handles = vec![
        start_location_loader(Arc::clone(&gateway), event_sender.clone()),
        start_poller(
            Arc::clone(&gateway),
            event_sender.clone(),
            poll_interval,
            shutdown_sender.subscribe(),
        ),
    ];

    Ok(SessionData {
        gateway,
        event_receiver,
        event_sender,
        join_handles,
        shutdown_sender,
        poll_interval,
    })
}
