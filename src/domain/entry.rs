//! Journal entry created and opened per invocation

use std::path::PathBuf;

/// Where the entry's base filename came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    /// A title supplied on the command line
    Explicit,
    /// The current timestamp, formatted with the configured date format
    Timestamp,
}

/// The single file created or reopened for one invocation.
///
/// The record is discarded when the run ends; only the file on disk persists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub title_source: TitleSource,
    pub existed_before: bool,
}

impl Entry {
    pub fn new(path: PathBuf, title_source: TitleSource, existed_before: bool) -> Self {
        Entry {
            path,
            title_source,
            existed_before,
        }
    }
}
