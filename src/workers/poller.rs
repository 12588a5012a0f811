//! Periodic dashboard refresh
//!
//! Fetches statistics and documents right away, then again on every tick of a
//! fixed interval until shutdown. The two fetches of a cycle run as separate
//! tasks and report independently; nothing orders them against each other or
//! against earlier cycles still in flight.

use super::core::EventSender;
use crate::events::{Event, EventType, Worker};
use crate::gateway::Gateway;
use crate::logging::LogLevel;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

pub struct Poller {
    gateway: Arc<dyn Gateway>,
    events: EventSender,
    interval: Duration,
}

impl Poller {
    pub fn new(gateway: Arc<dyn Gateway>, events: EventSender, interval: Duration) -> Self {
        Self {
            gateway,
            events,
            interval,
        }
    }

    /// Polls until `shutdown` fires. The first cycle starts immediately.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.recv() => break,
                _ = ticker.tick() => {
                    self.spawn_cycle();
                }
            }
        }
    }

    /// Starts one refresh cycle without waiting for it.
    pub fn spawn_cycle(&self) -> [JoinHandle<()>; 2] {
        let stats = {
            let gateway = Arc::clone(&self.gateway);
            let events = self.events.clone();
            tokio::spawn(async move {
                match gateway.fetch_stats().await {
                    Ok(stats) => events.send_event(Event::stats_received(stats)).await,
                    Err(e) => {
                        log::debug!("stats refresh failed: {}", e);
                        events
                            .send_worker_event(
                                Worker::StatsPoller,
                                format!("Stats refresh failed: {}", e),
                                EventType::Error,
                                LogLevel::Debug,
                            )
                            .await;
                    }
                }
            })
        };

        let documents = {
            let gateway = Arc::clone(&self.gateway);
            let events = self.events.clone();
            tokio::spawn(async move {
                match gateway.fetch_documents().await {
                    Ok(documents) => {
                        events
                            .send_event(Event::documents_received(documents))
                            .await
                    }
                    Err(e) => {
                        log::debug!("document refresh failed: {}", e);
                        events
                            .send_worker_event(
                                Worker::DocumentPoller,
                                format!("Document refresh failed: {}", e),
                                EventType::Error,
                                LogLevel::Debug,
                            )
                            .await;
                    }
                }
            })
        };

        [stats, documents]
    }
}

/// Spawns the poller on the runtime.
pub fn start_poller(
    gateway: Arc<dyn Gateway>,
    events: EventSender,
    interval: Duration,
    shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    let poller = Poller::new(gateway, events, interval);
    tokio::spawn(poller.run(shutdown))
}
