//! Domain layer - Settings resolution and filename derivation

pub mod entry;
pub mod filename;
pub mod settings;

pub use entry::{Entry, TitleSource};
pub use filename::derive_filename;
pub use settings::{Overrides, Settings};
