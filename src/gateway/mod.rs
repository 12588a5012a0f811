use crate::gateway::error::GatewayError;
use crate::snapshot::{DocumentRecord, ScanAccepted, Statistics};

pub(crate) mod client;
pub use client::GatewayClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// The remote calls the console depends on.
///
/// Every method is a single request/response: no retries, no caching.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    /// Base URL of the service, for display.
    fn server_url(&self) -> &str;

    /// Current document totals and per-category counts.
    async fn fetch_stats(&self) -> Result<Statistics, GatewayError>;

    /// Every processed document.
    async fn fetch_documents(&self) -> Result<Vec<DocumentRecord>, GatewayError>;

    /// Root paths the service is able to scan.
    async fn fetch_scan_locations(&self) -> Result<Vec<String>, GatewayError>;

    /// Starts a scan job on `path`. Only rejects an empty path locally.
    async fn submit_scan(&self, path: &str) -> Result<ScanAccepted, GatewayError>;

    /// The full document table as CSV.
    async fn export_csv(&self) -> Result<String, GatewayError>;
}
