use anyhow::{anyhow, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::constants::{
    BROKER_SENDER_DOMAIN, DEFAULT_INBOX_DIR, DEFAULT_OUTPUT_DIR, FILL_SUBJECT_MARKER,
};

/// Top-level configuration structure containing all config sections
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub broker: BrokerConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub app: AppInfo,
    // Add more sections as needed
}

/// Broker recognition settings for the source filter
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerConfig {
    #[serde(default = "default_sender_domain")]
    pub sender_domain: String,

    #[serde(default = "default_subject_marker")]
    pub subject_marker: String,
}

fn default_sender_domain() -> String {
    BROKER_SENDER_DOMAIN.to_string()
}

fn default_subject_marker() -> String {
    FILL_SUBJECT_MARKER.to_string()
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            sender_domain: default_sender_domain(),
            subject_marker: default_subject_marker(),
        }
    }
}

/// Where message files come from and where trade records go
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_inbox_dir")]
    pub inbox_dir: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_inbox_dir() -> String {
    DEFAULT_INBOX_DIR.to_string()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            inbox_dir: default_inbox_dir(),
            output_dir: default_output_dir(),
        }
    }
}

/// Application behavior switches
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppInfo {
    /// Stop the sweep at the first failed message instead of log-and-skip
    #[serde(default)]
    pub halt_on_error: bool,
    // Add more app settings as needed
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Read the file
        let config_str = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

        // Parse the TOML
        let config: AppConfig = toml::from_str(&config_str)
            .map_err(|e| anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;

        info!("Loaded configuration from {}", path.display());
        debug!("Watching for mail from: {}", config.broker.sender_domain);

        Ok(config)
    }

    /// Helper to get the directory saved message files are read from
    pub fn inbox_dir(&self) -> &Path {
        Path::new(&self.paths.inbox_dir)
    }

    /// Helper to get the directory trade records are written to
    pub fn output_dir(&self) -> &Path {
        Path::new(&self.paths.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_section() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.broker.sender_domain, BROKER_SENDER_DOMAIN);
        assert_eq!(config.broker.subject_marker, FILL_SUBJECT_MARKER);
        assert_eq!(config.paths.inbox_dir, DEFAULT_INBOX_DIR);
        assert_eq!(config.paths.output_dir, DEFAULT_OUTPUT_DIR);
        assert!(!config.app.halt_on_error);
    }

    #[test]
    fn test_partial_sections_keep_their_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [paths]
            inbox_dir = "mail/incoming"

            [app]
            halt_on_error = true
            "#,
        )
        .unwrap();

        assert_eq!(config.paths.inbox_dir, "mail/incoming");
        assert_eq!(config.paths.output_dir, DEFAULT_OUTPUT_DIR);
        assert_eq!(config.broker.sender_domain, BROKER_SENDER_DOMAIN);
        assert!(config.app.halt_on_error);
    }
}
