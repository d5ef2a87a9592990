//! Configuration file store

use crate::domain::Settings;
use crate::error::{JournalerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk mirror of journaler.toml.
///
/// Every key is optional so a partial file still loads; missing keys are
/// filled from the defaults when resolved into `Settings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub date_file_format: Option<String>,
    pub file_extension: Option<String>,
    pub editor: Option<String>,
    pub journal_directory: Option<String>,
}

impl ConfigFile {
    fn from_settings(settings: &Settings) -> Self {
        ConfigFile {
            date_file_format: Some(settings.date_format.clone()),
            file_extension: Some(settings.file_extension.clone()),
            editor: Some(settings.editor.clone()),
            journal_directory: Some(settings.journal_directory.clone()),
        }
    }

    fn into_settings(self, defaults: Settings) -> Settings {
        Settings {
            date_format: self.date_file_format.unwrap_or(defaults.date_format),
            file_extension: self.file_extension.unwrap_or(defaults.file_extension),
            editor: self.editor.unwrap_or(defaults.editor),
            journal_directory: self.journal_directory.unwrap_or(defaults.journal_directory),
        }
    }
}

/// Store for the per-user config file
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store backed by an explicit file path
    pub fn new(path: PathBuf) -> Self {
        ConfigStore { path }
    }

    /// Resolve `${XDG_CONFIG_HOME:-~/.config}/journaler/journaler.toml`.
    ///
    /// An empty `XDG_CONFIG_HOME` counts as unset.
    pub fn default_location() -> Result<Self> {
        let base = match std::env::var("XDG_CONFIG_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::home_dir()
                .ok_or(JournalerError::HomeDirectory)?
                .join(".config"),
        };

        Ok(ConfigStore::new(base.join("journaler").join("journaler.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config file, or create it with default values if absent.
    ///
    /// This is the one read operation with a write side effect: on first run
    /// the full default config is written to disk. That write is a
    /// convenience only — if it fails, a warning is printed and the run
    /// continues with the in-memory defaults. A malformed existing file is
    /// fatal; no partial config is ever used.
    pub fn load_or_create(&self) -> Result<Settings> {
        let defaults = Settings::defaults();

        if self.path.exists() {
            let contents = fs::read_to_string(&self.path)?;
            let parsed: ConfigFile =
                toml::from_str(&contents).map_err(|e| JournalerError::ConfigParse {
                    path: self.path.clone(),
                    source: e,
                })?;
            return Ok(parsed.into_settings(defaults));
        }

        println!(
            "No config file found, creating default config at {}",
            self.path.display()
        );
        if let Err(e) = self.write_defaults(&defaults) {
            eprintln!("Warning: {}", e);
        }

        Ok(defaults)
    }

    fn write_defaults(&self, defaults: &Settings) -> Result<()> {
        let write_err = |message: String| JournalerError::ConfigWrite {
            path: self.path.clone(),
            message,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
        }

        let body = toml::to_string_pretty(&ConfigFile::from_settings(defaults))
            .map_err(|e| write_err(e.to_string()))?;
        let contents = format!("# Default configuration generated by journaler.\n\n{}", body);

        fs::write(&self.path, contents).map_err(|e| write_err(e.to_string()))?;
        Ok(())
    }
}
