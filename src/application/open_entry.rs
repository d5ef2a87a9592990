//! Open entry use case

use crate::domain::{derive_filename, Entry, Overrides, Settings};
use crate::error::Result;
use crate::infrastructure::{materialize_entry, ConfigStore, EditorSession};
use chrono::Local;

/// Service running the full open-entry pipeline
pub struct OpenEntryService {
    store: ConfigStore,
}

impl OpenEntryService {
    /// Create a new open entry service backed by the given config store
    pub fn new(store: ConfigStore) -> Self {
        OpenEntryService { store }
    }

    /// Create (if needed) and open the journal entry for this invocation.
    pub fn execute(&self, overrides: Overrides, title: Option<&str>) -> Result<Entry> {
        // 1. Load config, generating the default file on first run
        let stored = self.store.load_or_create()?;

        // 2. CLI flags win over config file values
        let settings = Settings::resolve(overrides, stored);

        // 3. Derive the filename from the title or the current time
        let (filename, source) = derive_filename(&settings, title, Local::now())?;

        // 4. Ensure the journal directory and entry file exist
        let entry = materialize_entry(&settings.journal_directory, &filename, source)?;

        // 5. Hand the entry to the editor and wait for it to exit
        let editor = EditorSession::new(settings.editor);
        editor.open(&entry.path)?;

        Ok(entry)
    }
}
