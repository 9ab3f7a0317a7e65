//! Persisted application preferences.
//!
//! A small TOML file under the `.gridpad` root: the last directory used by a
//! file dialog, whether closing the window asks for confirmation, and the
//! editor's word-wrap preference.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No suitable config directory could be resolved.
    #[error("No suitable config directory available")]
    NoConfigDir,
    /// Failed to create a directory on the config path.
    #[error("Failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read the config file.
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the config file as TOML.
    #[error("Failed to parse config {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to serialize the config to TOML.
    #[error("Failed to serialize config {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Persisted preferences.
///
/// Config keys (TOML): `last_dialog_dir`, `confirm_on_close`, `word_wrap`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory the next file dialog opens in.
    #[serde(default)]
    pub last_dialog_dir: Option<PathBuf>,
    /// Ask Yes/No before closing the window.
    #[serde(default = "default_true")]
    pub confirm_on_close: bool,
    /// Wrap long lines in the text editor.
    #[serde(default = "default_true")]
    pub word_wrap: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            last_dialog_dir: None,
            confirm_on_close: true,
            word_wrap: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning defaults if missing.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    load_from_path(&config_path()?)
}

/// Load configuration from a specific path, returning defaults if missing.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist configuration to disk, overwriting any previous contents.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    save_to_path(config, &config_path()?)
}

/// Save configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    atomic_write(path, data.as_bytes())
}

/// Write the TOML file atomically to prevent partial contents on crash.
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), ConfigError> {
    use rand::TryRngCore;
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = path.parent().ok_or_else(|| {
        write_err(std::io::Error::other("config path has no parent directory"))
    })?;
    let file_name = path
        .file_name()
        .ok_or_else(|| write_err(std::io::Error::other("config path has no file name")))?;

    let mut last_err = None;
    for _ in 0..5 {
        let mut bytes = [0u8; 6];
        rand::rngs::OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|source| {
                write_err(std::io::Error::other(format!(
                    "failed to generate temporary file suffix: {source}"
                )))
            })?;
        let suffix: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        let tmp_path = dir.join(format!("{}.tmp-{}", file_name.to_string_lossy(), suffix));

        let file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path);
        let mut file = match file {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                last_err = Some(err);
                continue;
            }
            Err(err) => return Err(write_err(err)),
        };

        if let Err(err) = file.write_all(data).and_then(|()| file.sync_all()) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(write_err(err));
        }
        drop(file);
        if let Err(err) = std::fs::rename(&tmp_path, path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(write_err(err));
        }
        return Ok(());
    }
    Err(write_err(last_err.unwrap_or_else(|| {
        std::io::Error::other("could not create temporary config file")
    })))
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => ConfigError::CreateDir { path, source },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = load_from_path(&dir.path().join("config.toml")).unwrap();
        assert!(config.last_dialog_dir.is_none());
        assert!(config.confirm_on_close);
        assert!(config.word_wrap);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            last_dialog_dir: Some(PathBuf::from("/tmp/somewhere")),
            confirm_on_close: false,
            word_wrap: false,
        };
        save_to_path(&config, &path).unwrap();
        let reloaded = load_from_path(&path).unwrap();
        assert_eq!(reloaded.last_dialog_dir, config.last_dialog_dir);
        assert!(!reloaded.confirm_on_close);
        assert!(!reloaded.word_wrap);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "word_wrap = false\nfuture_key = 3\n").unwrap();
        let config = load_from_path(&path).unwrap();
        assert!(!config.word_wrap);
        assert!(config.confirm_on_close);
    }
}
