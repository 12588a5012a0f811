use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use crate::consts::cli_consts::DEFAULT_SERVER_URL;

/// The classification service the console talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Service running on this machine (the docker-compose default).
    #[default]
    Local,
    /// Any other deployment, addressed by its base URL.
    Custom { server_url: String },
}

impl Environment {
    /// Returns the base URL of the classification service.
    pub fn server_url(&self) -> String {
        match self {
            Environment::Local => DEFAULT_SERVER_URL.to_string(),
            Environment::Custom { server_url } => server_url.trim_end_matches('/').to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Ok(Environment::Custom {
                server_url: trimmed.trim_end_matches('/').to_string(),
            });
        }
        Err(format!(
            "Invalid server '{}': expected 'local' or an http(s) URL",
            trimmed
        ))
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.server_url())
    }
}
