use std::path::{Path, PathBuf};

use crate::app_dirs;

use super::{Settings, SettingsError};

/// Filename of the settings file inside the app directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that overrides `service.base_url`.
pub const BASE_URL_ENV: &str = "AED_CLIENT_BASE_URL";

/// Resolve the settings file path, ensuring the app directory exists.
pub fn config_path() -> Result<PathBuf, SettingsError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings from the app directory, falling back to defaults.
///
/// A default file is written on first launch so users have something to edit.
/// `AED_CLIENT_BASE_URL` wins over the file value. The resulting base URL is
/// validated before returning.
pub fn load_or_default() -> Result<Settings, SettingsError> {
    let path = config_path()?;
    let mut settings = load_from_path(&path)?;
    if !path.exists() {
        if let Err(err) = save_to_path(&settings, &path) {
            tracing::warn!("Could not seed default settings file: {err}");
        }
    }
    if let Ok(value) = std::env::var(BASE_URL_ENV)
        && !value.trim().is_empty()
    {
        settings.service.base_url = value.trim().to_string();
    }
    settings.service.endpoint()?;
    Ok(settings)
}

/// Load settings from a specific path; a missing file yields defaults.
pub fn load_from_path(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| SettingsError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Write settings to a path through a temp file and rename.
pub fn save_to_path(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    let data = toml::to_string_pretty(settings).map_err(|source| SettingsError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    let write_err = |source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let temp = path.with_extension(format!("toml.{}.tmp", uuid::Uuid::new_v4().simple()));
    std::fs::write(&temp, data.as_bytes()).map_err(write_err)?;
    if let Err(source) = std::fs::rename(&temp, path) {
        let _ = std::fs::remove_file(&temp);
        return Err(write_err(source));
    }
    Ok(())
}
