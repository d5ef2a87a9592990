//! Filename derivation from settings and an optional title

use crate::domain::{Settings, TitleSource};
use crate::error::{JournalerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

/// Derive the entry filename for this run.
///
/// A non-empty explicit title is used verbatim as the base name; otherwise
/// `now` is formatted with the configured date format. The configured
/// extension is appended, with a leading dot inserted if the stored value
/// lacks one.
pub fn derive_filename(
    settings: &Settings,
    title: Option<&str>,
    now: DateTime<Local>,
) -> Result<(String, TitleSource)> {
    let (base, source) = match title {
        Some(t) if !t.is_empty() => (t.to_string(), TitleSource::Explicit),
        _ => (
            format_timestamp(now, &settings.date_format)?,
            TitleSource::Timestamp,
        ),
    };

    let extension = normalize_extension(&settings.file_extension);
    Ok((format!("{}{}", base, extension), source))
}

/// Format `now` with a strftime-style pattern, rejecting invalid patterns.
fn format_timestamp(now: DateTime<Local>, format: &str) -> Result<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();

    // An unknown specifier parses to Item::Error and would make the
    // formatter fail at display time. Reject it up front instead.
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(JournalerError::DateFormat(format.to_string()));
    }

    Ok(now.format_with_items(items.into_iter()).to_string())
}

fn normalize_extension(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{}", extension)
    }
}
