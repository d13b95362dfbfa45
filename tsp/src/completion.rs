//! Bookmark-name completion driven by prompt events.
//!
//! Each event handler mutates [`CompletionState`] and returns what the prompt
//! should do with the ghost preview (and, for Tab, the text to put into the
//! prompt). Nothing here draws; the terminal adapter applies the effects.
//!
//! Replacing the prompt text from a Tab result must not be fed back into
//! [`CompletionEngine::on_input_changed`]: cycling relies on the candidate
//! list surviving the replacement.

use crate::bookmark::BookmarkIndex;
use crate::utils::{find_common_prefix, is_search_command, is_url, remaining_suffix};
use tracing::debug;

/// Ghost text effect requested by an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// Remove any ghost text.
    Clear,
    /// Remove any ghost text, then render `suffix` after the typed text.
    Show { typed: String, suffix: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionState {
    /// Candidate names in byte order, duplicates kept.
    pub possible_completions: Vec<String>,
    /// Target of the ghost text: the shared prefix or the sole candidate.
    pub current_completion: Option<String>,
    /// Position while cycling through candidates; `None` when not cycling.
    pub completion_index: Option<usize>,
}

/// Effect of a Tab press.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabOutcome {
    /// New prompt text, if the prompt should change.
    pub replace_input: Option<String>,
    pub clear_preview: bool,
}

impl TabOutcome {
    fn replace(text: &str) -> Self {
        TabOutcome {
            replace_input: Some(text.to_string()),
            clear_preview: true,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.replace_input.is_none() && !self.clear_preview
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompletionEngine {
    state: CompletionState,
}

impl CompletionEngine {
    pub fn new() -> Self {
        CompletionEngine {
            state: CompletionState::default(),
        }
    }

    pub fn state(&self) -> &CompletionState {
        &self.state
    }

    /// Recompute candidates for the text now in the prompt.
    pub fn on_input_changed(&mut self, index: &BookmarkIndex, text: &str) -> Preview {
        // any keystroke cancels a cycle in progress
        self.state.completion_index = None;

        // completing URLs or search queries against bookmark names is noise
        if text.trim().is_empty() || is_url(text) || is_search_command(text) {
            self.state.possible_completions.clear();
            self.state.current_completion = None;
            return Preview::Clear;
        }

        self.state.possible_completions = index.find_by_prefix(&text.to_lowercase());
        if self.state.possible_completions.is_empty() {
            self.state.current_completion = None;
            return Preview::Clear;
        }

        let common_prefix = find_common_prefix(&self.state.possible_completions);
        let typed_len = text.chars().count();

        let preview = if common_prefix.chars().count() > typed_len {
            let preview = ghost(text, &common_prefix);
            self.state.current_completion = Some(common_prefix);
            preview
        } else if self.state.possible_completions.len() == 1 {
            let only = self.state.possible_completions[0].clone();
            let preview = ghost(text, &only);
            self.state.current_completion = Some(only);
            preview
        } else {
            // Nothing to extend. Remember the shared prefix so that Tab on text
            // already equal to it starts cycling straight away.
            self.state.current_completion = (!common_prefix.is_empty()).then_some(common_prefix);
            Preview::Clear
        };

        debug!(
            "completion for {:?}: {:?} -> {:?}",
            text, self.state.possible_completions, self.state.current_completion
        );
        preview
    }

    /// Tab: complete, then cycle.
    pub fn on_tab(&mut self, current_text: &str) -> TabOutcome {
        let candidates = &self.state.possible_completions;
        if candidates.is_empty() {
            return TabOutcome::default();
        }

        if candidates.len() == 1 {
            let only = candidates[0].clone();
            self.state.current_completion = None;
            self.state.completion_index = None;
            if only == current_text {
                // already complete
                return TabOutcome::default();
            }
            return TabOutcome::replace(&only);
        }

        let cycling = self
            .state
            .completion_index
            .and_then(|i| candidates.get(i))
            .is_some_and(|c| c == current_text);
        let at_prefix = self.state.current_completion.as_deref() == Some(current_text);

        if cycling || at_prefix {
            let next = match self.state.completion_index {
                Some(i) => (i + 1) % candidates.len(),
                None => 0,
            };
            self.state.completion_index = Some(next);
            debug!("cycling to completion {} of {}", next, candidates.len());
            return TabOutcome::replace(&candidates[next]);
        }

        match &self.state.current_completion {
            // complete to the shared prefix first; cycling begins on the next Tab
            Some(current) => TabOutcome::replace(&current.clone()),
            None => TabOutcome::default(),
        }
    }

    /// Escape: drop the preview and forget everything.
    pub fn on_escape(&mut self) -> Preview {
        self.state = CompletionState::default();
        Preview::Clear
    }

    /// A history entry was recalled into the prompt.
    pub fn on_history_navigate(&mut self, index: &BookmarkIndex, text: &str) -> Preview {
        self.state.completion_index = None;
        self.on_input_changed(index, text)
    }
}

fn ghost(typed: &str, completion: &str) -> Preview {
    let suffix = remaining_suffix(typed, completion);
    if suffix.is_empty() {
        Preview::Clear
    } else {
        Preview::Show {
            typed: typed.to_string(),
            suffix,
        }
    }
}
