//! Effective configuration and option resolution

use std::env;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
pub const DEFAULT_FILE_EXTENSION: &str = ".md";
pub const DEFAULT_EDITOR: &str = "nano";
pub const DEFAULT_JOURNAL_DIRECTORY: &str = "~/journal";

/// The merged option set used for one invocation.
///
/// Every field is always populated: a value missing at one layer falls
/// through to the next, terminating at the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// strftime-style pattern used when no explicit title is given
    pub date_format: String,
    /// Extension appended to every generated filename
    pub file_extension: String,
    /// External command line used to open the entry
    pub editor: String,
    /// Directory entries are created in; may start with `~`
    pub journal_directory: String,
}

/// CLI-supplied overrides. `None` means the flag was not passed.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub date_format: Option<String>,
    pub file_extension: Option<String>,
    pub editor: Option<String>,
    pub journal_directory: Option<String>,
}

impl Settings {
    /// Built-in default values for every option. Always succeeds.
    ///
    /// The editor falls back through `EDITOR`, then `VISUAL`, then "nano".
    /// Empty environment values count as unset.
    pub fn defaults() -> Self {
        Settings {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            editor: default_editor(),
            journal_directory: DEFAULT_JOURNAL_DIRECTORY.to_string(),
        }
    }

    /// Merge CLI overrides over base values from the config store.
    ///
    /// An explicitly supplied flag strictly wins, field by field. No
    /// semantic validation happens here; malformed values surface where
    /// they are used.
    pub fn resolve(overrides: Overrides, base: Settings) -> Self {
        Settings {
            date_format: overrides.date_format.unwrap_or(base.date_format),
            file_extension: overrides.file_extension.unwrap_or(base.file_extension),
            editor: overrides.editor.unwrap_or(base.editor),
            journal_directory: overrides
                .journal_directory
                .unwrap_or(base.journal_directory),
        }
    }
}

fn default_editor() -> String {
    env::var("EDITOR")
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| env::var("VISUAL").ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}
