//! Error types for journaler

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the journaler application
#[derive(Debug, Error)]
pub enum JournalerError {
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file {path}: {message}")]
    ConfigWrite { path: PathBuf, message: String },

    #[error("Invalid date format pattern: '{0}'")]
    DateFormat(String),

    #[error("Failed to create journal directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create entry file {path}: {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to launch editor '{editor}': {source}")]
    EditorLaunch {
        editor: String,
        source: std::io::Error,
    },

    #[error("Editor '{editor}' exited with status {status}")]
    EditorExit { editor: String, status: i32 },

    #[error("Could not determine the user home directory")]
    HomeDirectory,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JournalerError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournalerError::ConfigParse { .. } => 2,
            JournalerError::DateFormat(_) => 3,
            JournalerError::EditorLaunch { .. } => 4,
            JournalerError::EditorExit { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournalerError::ConfigParse { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Fix the TOML syntax in {}\n\
                    • Valid keys: date_file_format, file_extension, editor, journal_directory\n\
                    • Delete the file to regenerate it with default values on the next run",
                    self,
                    path.display()
                )
            }
            JournalerError::DateFormat(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Use strftime specifiers, e.g. %Y-%m-%d_%H-%M-%S\n\
                    • Check date_file_format in your config file, or the -d/--date-format flag",
                    self
                )
            }
            JournalerError::EditorLaunch { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set the EDITOR environment variable (e.g. export EDITOR=nano)\n\
                    • Set editor in your config file, or pass -e/--editor for this run",
                    self
                )
            }
            JournalerError::EditorExit { .. } => {
                format!(
                    "{}\n\n\
                    The journal entry file was still created and is left in place.",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JournalerError
pub type Result<T> = std::result::Result<T, JournalerError>;
