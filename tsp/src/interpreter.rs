//! Turns a submitted prompt line into exactly one [`Action`] and keeps the
//! command history.
//!
//! Precedence is fixed: builtin keyword, then search shorthand, then a URL
//! made of the whole line, then a bookmark named by the first token only.

use crate::history::{CommandHistory, HistoryStep};
use crate::search;
use crate::utils::{is_url, normalize_url};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Reserved keyword such as `help` or `import`. `args` excludes the keyword.
    RunBuiltin { name: String, args: Vec<String> },
    /// One-letter provider key followed by a query, which may be empty.
    RunSearch { provider: String, query: String },
    /// Normalized absolute URL.
    OpenUrl(String),
    /// Lowercased first token, looked up against bookmark names.
    OpenBookmark(String),
    /// Input that matched nothing. The line path always falls back to a bookmark
    /// lookup, so this only comes from callers building actions themselves.
    Unknown(String),
}

#[derive(Debug, Clone, Default)]
pub struct InputInterpreter {
    history: CommandHistory,
}

impl InputInterpreter {
    pub fn new() -> Self {
        InputInterpreter {
            history: CommandHistory::new(),
        }
    }

    /// Classify a submitted line.
    ///
    /// Blank input returns `None` and leaves history alone. Anything else is
    /// recorded in history before it is classified, whatever it turns out to be.
    pub fn classify(&mut self, raw: &str) -> Option<Action> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.history.push(trimmed);

        let action = classify_line(trimmed);
        debug!("classified {:?} as {:?}", trimmed, action);
        Some(action)
    }

    /// Step to an older entry. `None` once the oldest entry is reached.
    pub fn previous(&mut self) -> Option<String> {
        self.history.back()
    }

    /// Step to a newer entry, or back to live input past the newest.
    pub fn next(&mut self) -> HistoryStep {
        self.history.forward()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }
}

/// Pure classification of an already trimmed, non-empty line.
pub fn classify_line(trimmed: &str) -> Action {
    // Split on every single space so that runs of spaces survive re-joining.
    let parts: Vec<&str> = trimmed.split(' ').collect();
    let cmd = parts[0].to_lowercase();

    if tsp_builtin::is_builtin(&cmd) {
        return Action::RunBuiltin {
            name: cmd,
            args: parts[1..].iter().map(|s| s.to_string()).collect(),
        };
    }

    if search::is_search_key(&cmd) {
        return Action::RunSearch {
            provider: cmd,
            query: parts[1..].join(" ").trim().to_string(),
        };
    }

    let whole = parts.join(" ");
    if is_url(&whole) {
        return Action::OpenUrl(normalize_url(&whole));
    }

    Action::OpenBookmark(cmd)
}
