//! Error handling for the gateway module

use crate::snapshot::ErrorBody;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Reqwest error, typically related to network issues or undecodable bodies.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The service rejected the request and explained why.
    #[error("{error}")]
    Remote { status: u16, error: String },

    /// The service rejected the request without a structured explanation.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// A scan was requested without a path.
    #[error("A scan path is required")]
    EmptyPath,
}

impl GatewayError {
    pub async fn from_response(response: reqwest::Response) -> GatewayError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        Self::from_body(status, message)
    }

    /// Builds the error for a non-2xx response from its status and raw body.
    pub fn from_body(status: u16, body: String) -> GatewayError {
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(ErrorBody { error }) => GatewayError::Remote { status, error },
            Err(_) => GatewayError::Http {
                status,
                message: body,
            },
        }
    }

    /// The server-supplied explanation, when the response carried one.
    pub fn remote_detail(&self) -> Option<&str> {
        match self {
            GatewayError::Remote { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Remote { status, .. } | GatewayError::Http { status, .. } => {
                Some(*status)
            }
            GatewayError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            GatewayError::EmptyPath => None,
        }
    }
}
