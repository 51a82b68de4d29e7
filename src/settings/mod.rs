//! Process-wide client settings.
//!
//! Settings are read once at startup and handed to the gateway and the
//! presentation adapters by reference. Nothing mutates them afterwards.

mod categories;
mod io;

pub use categories::CategoryTable;
pub use io::{BASE_URL_ENV, CONFIG_FILE_NAME, config_path, load_from_path, load_or_default, save_to_path};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Service endpoint used when no config file or override is present.
pub const DEFAULT_BASE_URL: &str = "https://aed.zal.digital";

/// Settings persisted in `config.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,
}

/// Remote service connection settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ServiceSettings {
    /// Parse and validate the configured base URL.
    pub fn endpoint(&self) -> Result<Url, SettingsError> {
        parse_base_url(&self.base_url)
    }
}

/// Parse a base URL, accepting only absolute http(s) URLs.
pub fn parse_base_url(raw: &str) -> Result<Url, SettingsError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|source| SettingsError::InvalidBaseUrl {
        value: trimmed.to_string(),
        reason: source.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(SettingsError::InvalidBaseUrl {
            value: trimmed.to_string(),
            reason: "expected an http or https URL".to_string(),
        });
    }
    Ok(url)
}

/// Errors that may occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The app directory could not be resolved.
    #[error("Settings directory unavailable: {0}")]
    Directory(#[from] crate::app_dirs::AppDirError),
    /// Failed to read the settings file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the settings file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The settings file is not valid TOML for [`Settings`].
    #[error("Invalid settings at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Settings could not be serialized.
    #[error("Failed to serialize settings for {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    /// The configured base URL is unusable.
    #[error("Invalid service base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}
