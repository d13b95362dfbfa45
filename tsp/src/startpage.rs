//! The startpage root: owns the bookmark index, the interpreter and the
//! completion engine, and wires them to the output, storage and opener
//! collaborators.
//!
//! The terminal adapter drives it through the event methods and applies the
//! returned effects to the prompt.

use crate::bookmark::{BookmarkIndex, BookmarkStore, parse_bookmarks_html};
use crate::completion::{CompletionEngine, CompletionState, Preview, TabOutcome};
use crate::config::Config;
use crate::history::HistoryStep;
use crate::interpreter::{Action, InputInterpreter};
use crate::opener::UrlOpener;
use crate::output::BookmarkListRenderer;
use crate::search;
use anyhow::{Result, anyhow};
use tracing::{debug, error, warn};
use tsp_builtin::StartpageProxy;
use tsp_types::{Bookmark, ExitStatus, OutputKind, OutputSink, TspResult};

/// Prompt effect of a history step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecall {
    /// Replacement prompt text; `None` leaves the prompt as it is.
    pub text: Option<String>,
    pub preview: Preview,
}

pub struct Startpage {
    config: Config,
    index: BookmarkIndex,
    interpreter: InputInterpreter,
    completion: CompletionEngine,
    store: Box<dyn BookmarkStore>,
    output: Box<dyn OutputSink>,
    opener: Box<dyn UrlOpener>,
    renderer: Option<Box<dyn BookmarkListRenderer>>,
}

impl Startpage {
    pub fn new(
        config: Config,
        store: Box<dyn BookmarkStore>,
        output: Box<dyn OutputSink>,
        opener: Box<dyn UrlOpener>,
    ) -> Self {
        Startpage {
            config,
            index: BookmarkIndex::default(),
            interpreter: InputInterpreter::new(),
            completion: CompletionEngine::new(),
            store,
            output,
            opener,
            renderer: None,
        }
    }

    pub fn with_renderer(mut self, renderer: Box<dyn BookmarkListRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Populate the index from storage and show the list.
    pub fn load(&mut self) {
        match self.store.load_all() {
            Ok(bookmarks) => {
                debug!("loaded {} bookmarks", bookmarks.len());
                self.index.replace_all(bookmarks);
            }
            Err(err) => {
                warn!("failed to load bookmarks from {}: {}", self.store.location(), err);
                self.output
                    .show("Failed to load bookmarks from storage", OutputKind::Error);
            }
        }
        self.render_bookmarks();
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&self) -> &BookmarkIndex {
        &self.index
    }

    pub fn interpreter(&self) -> &InputInterpreter {
        &self.interpreter
    }

    pub fn completion(&self) -> &CompletionState {
        self.completion.state()
    }

    /// Handle a submitted line. Blank input does nothing.
    pub fn submit(&mut self, line: &str) -> ExitStatus {
        let Some(action) = self.interpreter.classify(line) else {
            return ExitStatus::success();
        };

        self.output.clear();
        let echo = format!("{} {}", self.config.prompt, line.trim());
        self.output.show(&echo, OutputKind::Info);

        match self.execute(action) {
            Ok(status) => status,
            Err(err) => {
                error!("command execution failed: {:?}", err);
                self.output.show("Command execution failed", OutputKind::Error);
                ExitStatus::failure()
            }
        }
    }

    pub fn execute(&mut self, action: Action) -> Result<ExitStatus> {
        match action {
            Action::RunBuiltin { name, args } => self.run_builtin(&name, args),
            Action::RunSearch { provider, query } => self.search(&provider, &query),
            Action::OpenUrl(url) => {
                self.opener.open(&url);
                self.output
                    .show(&format!("Opening URL: {url}"), OutputKind::Success);
                Ok(ExitStatus::success())
            }
            Action::OpenBookmark(name) => Ok(self.open_bookmark(&name)),
            Action::Unknown(text) => {
                self.output
                    .show(&format!("Unknown command: {text}"), OutputKind::Error);
                Ok(ExitStatus::failure())
            }
        }
    }

    /// Run a builtin by its keyword. `args` excludes the keyword.
    pub fn run_builtin(&mut self, name: &str, args: Vec<String>) -> Result<ExitStatus> {
        let command =
            tsp_builtin::get_command(name).ok_or_else(|| anyhow!("unknown builtin: {name}"))?;
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(name.to_string());
        argv.extend(args);
        Ok(command(argv, self))
    }

    fn search(&mut self, key: &str, query: &str) -> Result<ExitStatus> {
        let provider =
            search::provider(key).ok_or_else(|| anyhow!("unknown search provider: {key}"))?;

        if query.is_empty() {
            self.output.show(
                &format!("Error: Please provide a search term. Example: {key} search query"),
                OutputKind::Error,
            );
            return Ok(ExitStatus::failure());
        }

        self.opener.open(&provider.search_url(query));
        self.output.show(
            &format!("Searching {} for: \"{}\"", provider.name, query),
            OutputKind::Success,
        );
        Ok(ExitStatus::success())
    }

    fn open_bookmark(&mut self, name: &str) -> ExitStatus {
        let found = self
            .index
            .find_exact(name)
            .map(|b| (b.title.clone(), b.url.clone()));

        match found {
            Some((title, url)) => {
                self.opener.open(&url);
                self.output
                    .show(&format!("Opening: {title}"), OutputKind::Success);
                ExitStatus::success()
            }
            None => {
                self.output.show(
                    &format!("Bookmark not found: {name}. Type 'help' for available commands."),
                    OutputKind::Error,
                );
                ExitStatus::failure()
            }
        }
    }

    pub fn input_changed(&mut self, text: &str) -> Preview {
        self.completion.on_input_changed(&self.index, text)
    }

    /// The returned replacement must be applied without calling
    /// [`Startpage::input_changed`], or cycling restarts.
    pub fn tab(&mut self, text: &str) -> TabOutcome {
        self.completion.on_tab(text)
    }

    pub fn escape(&mut self) -> Preview {
        self.completion.on_escape()
    }

    pub fn history_previous(&mut self) -> HistoryRecall {
        let preview = self.completion.on_escape();
        match self.interpreter.previous() {
            Some(entry) => {
                let preview = self.completion.on_history_navigate(&self.index, &entry);
                HistoryRecall {
                    text: Some(entry),
                    preview,
                }
            }
            None => HistoryRecall {
                text: None,
                preview,
            },
        }
    }

    pub fn history_next(&mut self) -> HistoryRecall {
        let preview = self.completion.on_escape();
        match self.interpreter.next() {
            HistoryStep::Entry(entry) => {
                let preview = self.completion.on_history_navigate(&self.index, &entry);
                HistoryRecall {
                    text: Some(entry),
                    preview,
                }
            }
            HistoryStep::Live => HistoryRecall {
                text: Some(String::new()),
                preview,
            },
        }
    }

    /// First Ctrl+C: the adapter empties the prompt, this forgets completion
    /// state and wipes the output.
    pub fn interrupt(&mut self) -> Preview {
        let preview = self.completion.on_escape();
        self.output.clear();
        self.output.show("Input cleared", OutputKind::Info);
        preview
    }

    fn save(&mut self) {
        if let Err(err) = self.store.save_all(self.index.bookmarks()) {
            warn!("failed to save bookmarks to {}: {}", self.store.location(), err);
            self.output
                .show("Failed to save bookmarks to storage", OutputKind::Error);
        }
    }

    fn render_bookmarks(&mut self) {
        if let Some(renderer) = &self.renderer {
            renderer.render(self.index.bookmarks(), self.output.as_mut());
        }
    }
}

impl StartpageProxy for Startpage {
    fn show(&mut self, text: &str, kind: OutputKind) {
        self.output.show(text, kind);
    }

    fn clear_output(&mut self) {
        self.output.clear();
    }

    fn bookmarks(&self) -> &[Bookmark] {
        self.index.bookmarks()
    }

    fn import_bookmarks(&mut self, html: &str) -> TspResult<usize> {
        let bookmarks = parse_bookmarks_html(html)?;
        let count = bookmarks.len();

        self.index.replace_all(bookmarks);
        self.completion.on_escape();
        self.save();
        self.render_bookmarks();
        Ok(count)
    }

    fn storage_location(&self) -> String {
        self.store.location()
    }
}
