//! journaler - Personal journaling launcher
//!
//! A command-line tool that creates a journal entry file named after an
//! explicit title or the current timestamp, then opens it in a configurable
//! external editor. Options come from CLI flags, a per-user TOML config file
//! (auto-generated on first run) and built-in defaults, in that order.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JournalerError;
