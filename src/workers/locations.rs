//! One-shot scan location bootstrap

use super::core::EventSender;
use crate::events::Event;
use crate::gateway::Gateway;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Fetches the scannable roots once and reports the result. No retry.
pub async fn load_scan_locations(gateway: Arc<dyn Gateway>, events: EventSender) {
    let result = gateway
        .fetch_scan_locations()
        .await
        .map_err(|e| e.to_string());
    if let Err(e) = &result {
        log::warn!("failed to load scan locations: {}", e);
    }
    events.send_event(Event::locations_loaded(result)).await;
}

pub fn start_location_loader(gateway: Arc<dyn Gateway>, events: EventSender) -> JoinHandle<()> {
    tokio::spawn(load_scan_locations(gateway, events))
}
