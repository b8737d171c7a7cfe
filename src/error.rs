//! Error types for hpicker
//!
//! - `PickerError` covers invalid item lists and selections, and loading the
//!   config file.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for hpicker
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Picker needs at least one item")]
    EmptyItems,

    #[error("Selection '{0}' is not one of the picker items")]
    SelectionNotFound(String),

    #[error("Item '{0}' appears more than once")]
    DuplicateItem(String),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for PickerError
pub type Result<T> = std::result::Result<T, PickerError>;
