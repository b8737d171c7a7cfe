//! Configuration file support for hpicker.
//!
//! Configuration is loaded from `~/.config/hpicker/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Configuration file
//! 3. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/hpicker/config.toml
//! item_gap = 35.0
//! drag_threshold = 100.0
//! units_per_cell = 10.0
//! transition_ms = 200
//! feedback = "none"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{PickerError, Result};
use crate::picker::{
    DEFAULT_DRAG_THRESHOLD, DEFAULT_ITEM_GAP, DEFAULT_TRANSITION, FeedbackKind, HPicker,
    PickerItem,
};
use crate::tui::DEFAULT_UNITS_PER_CELL;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Gap between neighbouring items, in layout units
    pub item_gap: Option<f32>,

    /// Horizontal drag distance that changes the selection, in layout units
    pub drag_threshold: Option<f32>,

    /// Layout units covered by one terminal cell
    pub units_per_cell: Option<f32>,

    /// Duration of the slide to a new selection
    pub transition_ms: Option<u64>,

    /// Signal emitted on selection changes
    pub feedback: Option<FeedbackKind>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match Self::read_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    /// Read and parse a config file.
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| PickerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hpicker")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, item_gap: Option<f32>, feedback: Option<FeedbackKind>) -> Self {
        if item_gap.is_some() {
            self.item_gap = item_gap;
        }
        if feedback.is_some() {
            self.feedback = feedback;
        }
        self
    }

    pub fn item_gap(&self) -> f32 {
        self.item_gap
            .filter(|gap| *gap >= 0.0)
            .unwrap_or(DEFAULT_ITEM_GAP)
    }

    pub fn drag_threshold(&self) -> f32 {
        self.drag_threshold
            .filter(|threshold| *threshold >= 0.0)
            .unwrap_or(DEFAULT_DRAG_THRESHOLD)
    }

    pub fn units_per_cell(&self) -> f32 {
        self.units_per_cell
            .filter(|units| *units > 0.0)
            .unwrap_or(DEFAULT_UNITS_PER_CELL)
    }

    pub fn transition(&self) -> Duration {
        self.transition_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TRANSITION)
    }

    pub fn feedback(&self) -> FeedbackKind {
        self.feedback.unwrap_or_default()
    }

    /// Apply the layout and gesture settings to a picker.
    pub fn apply<T: PickerItem>(&self, picker: HPicker<T>) -> HPicker<T> {
        picker
            .with_item_gap(self.item_gap())
            .with_drag_threshold(self.drag_threshold())
            .with_transition_duration(self.transition())
            .with_feedback(self.feedback().build())
    }
}
