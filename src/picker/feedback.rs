//! Selection feedback signals.
//!
//! The picker emits a short signal every time the user changes the
//! selection. Delivery is best effort: failures are swallowed and never
//! reach the caller.

use std::io::Write;

use serde::Deserialize;

/// Receives a signal whenever the selection changes.
pub trait SelectionFeedback {
    fn selection_changed(&self);
}

/// Rings the terminal bell.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl SelectionFeedback for TerminalBell {
    fn selection_changed(&self) {
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}

/// Drops every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl SelectionFeedback for NoFeedback {
    fn selection_changed(&self) {}
}

/// Feedback choice as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    #[default]
    Bell,
    None,
}

impl FeedbackKind {
    pub fn build(self) -> Box<dyn SelectionFeedback> {
        match self {
            FeedbackKind::Bell => Box::new(TerminalBell),
            FeedbackKind::None => Box::new(NoFeedback),
        }
    }
}
