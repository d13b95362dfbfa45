//! Command history.
//!
//! Submitted lines are kept in insertion order. The cursor ranges over
//! `[0, len]` where `len` means the prompt holds live input rather than a
//! recalled entry. Navigation is clamped at both ends and never wraps.

use tracing::debug;

/// Result of stepping forward through history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryStep {
    /// A newer entry to place into the prompt.
    Entry(String),
    /// Stepped past the newest entry; the prompt should be emptied.
    Live,
}

#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    current_index: usize,
}

impl CommandHistory {
    pub fn new() -> Self {
        CommandHistory {
            entries: Vec::new(),
            current_index: 0,
        }
    }

    /// Append a submitted line and return to live input.
    pub fn push(&mut self, command: &str) {
        self.entries.push(command.to_string());
        self.reset_index();
        debug!("history push {:?} (len {})", command, self.entries.len());
    }

    /// Navigate backward through history.
    pub fn back(&mut self) -> Option<String> {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.entries.get(self.current_index).cloned()
        } else {
            None
        }
    }

    /// Navigate forward through history.
    pub fn forward(&mut self) -> HistoryStep {
        if self.current_index + 1 < self.entries.len() {
            self.current_index += 1;
            match self.entries.get(self.current_index) {
                Some(entry) => HistoryStep::Entry(entry.clone()),
                None => HistoryStep::Live,
            }
        } else {
            self.reset_index();
            HistoryStep::Live
        }
    }

    /// Reset history index to the end.
    pub fn reset_index(&mut self) {
        self.current_index = self.entries.len();
    }

    /// Check if at the end of history.
    pub fn at_end(&self) -> bool {
        self.current_index == self.entries.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
