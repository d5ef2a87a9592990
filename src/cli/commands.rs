//! CLI command definitions

use crate::domain::Overrides;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "journaler")]
#[command(about = "Creates a new journal entry and opens it in your editor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Entry title (equivalent to --title)
    #[arg(value_name = "TITLE")]
    pub title: Option<String>,

    /// Timestamp format for generated filenames (strftime syntax)
    #[arg(short = 'd', long = "date-format", value_name = "FMT")]
    pub date_format: Option<String>,

    /// Editor command to open the entry with
    #[arg(short, long, value_name = "CMD")]
    pub editor: Option<String>,

    /// File extension, with or without the leading dot
    #[arg(short = 'f', long = "file-ext", value_name = "EXT")]
    pub file_ext: Option<String>,

    /// Directory the entry is created in
    #[arg(short = 'j', long = "journal-dir", value_name = "DIR")]
    pub journal_dir: Option<String>,

    /// Entry title; wins over the positional form if both are given
    #[arg(short = 't', long = "title", value_name = "TITLE")]
    pub title_flag: Option<String>,
}

impl Cli {
    /// Title for this run. The flag form wins over the positional form.
    pub fn effective_title(&self) -> Option<String> {
        self.title_flag.clone().or_else(|| self.title.clone())
    }

    /// The CLI layer of the option resolution
    pub fn overrides(&self) -> Overrides {
        Overrides {
            date_format: self.date_format.clone(),
            file_extension: self.file_ext.clone(),
            editor: self.editor.clone(),
            journal_directory: self.journal_dir.clone(),
        }
    }
}
