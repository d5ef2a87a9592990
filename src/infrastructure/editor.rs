//! Editor integration for opening entry files

use crate::error::{JournalerError, Result};
use std::path::Path;
use std::process::Command;

/// Session for opening a file in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open a file in the editor and block until the editor exits.
    ///
    /// Stdio is inherited, so the editor reads and writes the terminal
    /// directly. A spawn failure names the configured command; a non-zero
    /// exit is reported with the editor's exit code.
    pub fn open(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command();

        let status = Command::new(&program)
            .args(&args)
            .arg(file_path)
            .status()
            .map_err(|e| JournalerError::EditorLaunch {
                editor: self.command.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(JournalerError::EditorExit {
                editor: self.command.clone(),
                status: status.code().unwrap_or(-1),
            });
        }

        Ok(())
    }

    /// Parse command into program and fixed leading arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            // Fall back to nano if the configured command is blank
            return ("nano".to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}
