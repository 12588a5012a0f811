//! Classification Service Client
//!
//! JSON-over-HTTP client for the dashboard endpoints of the classification service.

use crate::consts::cli_consts::http;
use crate::environment::Environment;
use crate::gateway::Gateway;
use crate::gateway::error::GatewayError;
use crate::snapshot::{DocumentRecord, ScanAccepted, ScanRequest, Statistics};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// Build timestamp in milliseconds since epoch
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP", "Build timestamp not available");

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("docclass/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(environment: &Environment) -> Result<Self, GatewayError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: environment.server_url(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, GatewayError> {
        if !response.status().is_success() {
            return Err(GatewayError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, GatewayError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("X-Build-Timestamp", BUILD_TIMESTAMP)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl Gateway for GatewayClient {
    fn server_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_stats(&self) -> Result<Statistics, GatewayError> {
        self.get_json("api/stats").await
    }

    async fn fetch_documents(&self) -> Result<Vec<DocumentRecord>, GatewayError> {
        self.get_json("api/documents").await
    }

    async fn fetch_scan_locations(&self) -> Result<Vec<String>, GatewayError> {
        self.get_json("api/scan_locations").await
    }

    async fn submit_scan(&self, path: &str) -> Result<ScanAccepted, GatewayError> {
        if path.trim().is_empty() {
            return Err(GatewayError::EmptyPath);
        }

        let url = self.build_url("api/scan");
        let response = self
            .client
            .post(&url)
            .header("X-Build-Timestamp", BUILD_TIMESTAMP)
            .json(&ScanRequest { path })
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.json::<ScanAccepted>().await?)
    }

    async fn export_csv(&self) -> Result<String, GatewayError> {
        let url = self.build_url("download_csv");
        let response = self
            .client
            .get(&url)
            .header("X-Build-Timestamp", BUILD_TIMESTAMP)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.text().await?)
    }
}
