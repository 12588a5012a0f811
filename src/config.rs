//! Application configuration.

use crate::consts::cli_consts::{SERVER_ENV_VAR, polling};
use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};

/// Returns the path of the console's configuration file (`~/.docclass/config.json`).
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Unable to determine home directory",
        )
    })?;
    Ok(home.join(".docclass").join("config.json"))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Base URL of the classification service. Empty means local.
    #[serde(default)]
    pub server_url: String,
    /// Dashboard refresh interval in milliseconds. Zero means the default.
    #[serde(default)]
    pub poll_interval_ms: u64,
}

impl Config {
    /// Create Config with the given server URL.
    pub fn new(server_url: String) -> Self {
        Config {
            server_url,
            poll_interval_ms: 0,
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration if the file exists, falling back to defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file, if present.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Resolves the server to talk to.
    ///
    /// Precedence: command-line flag, then `DOCCLASS_SERVER`, then this file.
    pub fn resolve_environment(
        &self,
        flag: Option<&str>,
        env_value: Option<&str>,
    ) -> Result<Environment, String> {
        let chosen = flag
            .filter(|s| !s.trim().is_empty())
            .or(env_value.filter(|s| !s.trim().is_empty()))
            .unwrap_or(self.server_url.as_str());
        chosen.parse::<Environment>()
    }

    /// Same as [`Config::resolve_environment`], reading the variable from the process environment.
    pub fn environment_from(&self, flag: Option<&str>) -> Result<Environment, String> {
        let env_value = std::env::var(SERVER_ENV_VAR).ok();
        self.resolve_environment(flag, env_value.as_deref())
    }

    /// Resolves the refresh interval, clamping it to a sane minimum.
    pub fn poll_interval(&self, flag_ms: Option<u64>) -> Duration {
        match flag_ms.unwrap_or(self.poll_interval_ms) {
            0 => polling::poll_interval(),
            ms => Duration::from_millis(ms.max(polling::MIN_POLL_INTERVAL_MS)),
        }
    }
}
