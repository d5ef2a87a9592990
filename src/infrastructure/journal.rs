//! Entry materialization in the journal directory

use crate::domain::{Entry, TitleSource};
use crate::error::{JournalerError, Result};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Expand a leading `~` in the configured journal directory.
///
/// Absolute and cwd-relative paths pass through unchanged.
pub fn expand_journal_dir(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

/// Resolve the journal directory, create it if missing, and create the
/// entry file if absent.
///
/// An existing entry file is never truncated or modified; running twice
/// with the same filename reopens the first run's file.
pub fn materialize_entry(
    journal_directory: &str,
    filename: &str,
    source: TitleSource,
) -> Result<Entry> {
    let dir = expand_journal_dir(journal_directory);

    fs::create_dir_all(&dir).map_err(|e| JournalerError::DirectoryCreate {
        path: dir.clone(),
        source: e,
    })?;

    let path = dir.join(filename);
    let existed_before = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(_) => false,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => true,
        Err(e) => return Err(JournalerError::FileCreate { path, source: e }),
    };

    Ok(Entry::new(path, source, existed_before))
}
