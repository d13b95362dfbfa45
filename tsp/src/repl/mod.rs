//! Interactive prompt: reads terminal events, feeds them to the [`Startpage`]
//! and applies the returned effects to the prompt line.

pub mod key_action;
pub mod state;

use crate::completion::Preview;
use crate::input::{Input, InputConfig};
use crate::startpage::{HistoryRecall, Startpage};
use anyhow::{Context as _, Result};
use crossterm::cursor::{MoveLeft, MoveToColumn};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};
use futures::StreamExt;
use key_action::{KeyAction, KeyContext, determine_key_action};
use state::DoublePressState;
use std::io::{self, Write};
use tracing::debug;
use tsp_builtin::StartpageProxy;

const CTRL_C_TIMEOUT_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Repl {
    startpage: Startpage,
    input: Input,
    ctrl_c_state: DoublePressState,
}

impl Repl {
    pub fn new(startpage: Startpage) -> Self {
        Repl {
            startpage,
            input: Input::new(InputConfig::default()),
            ctrl_c_state: DoublePressState::new(CTRL_C_TIMEOUT_MS),
        }
    }

    pub async fn run_interactive(&mut self) -> Result<()> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let result = self.event_loop().await;
        disable_raw_mode().ok();
        println!();
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        let mut reader = EventStream::new();
        self.redraw()?;

        while let Some(event) = reader.next().await {
            let event = event.context("failed to read terminal event")?;
            if self.handle_event(event)? == Flow::Exit {
                debug!("exit by double Ctrl+C");
                break;
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<Flow> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let flow = self.handle_key(&key);
                if flow == Flow::Continue {
                    self.redraw()?;
                }
                Ok(flow)
            }
            Event::Paste(text) => {
                self.input.insert_str(&text);
                self.input_changed();
                self.redraw()?;
                Ok(Flow::Continue)
            }
            Event::Resize(_, _) => {
                self.redraw()?;
                Ok(Flow::Continue)
            }
            _ => Ok(Flow::Continue),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Flow {
        if !matches!(
            (key.code, key.modifiers),
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
        ) {
            self.ctrl_c_state.reset();
        }

        let ctx = KeyContext {
            cursor_at_end: self.input.cursor_at_end(),
            has_completion: self.input.completion.is_some(),
        };

        match determine_key_action(key, &ctx) {
            KeyAction::CursorLeft => self.input.move_by(-1),
            KeyAction::CursorRight => self.input.move_by(1),
            KeyAction::CursorToBegin => self.input.move_to_begin(),
            KeyAction::CursorToEnd => self.input.move_to_end(),

            KeyAction::HistoryPrevious => {
                let recall = self.startpage.history_previous();
                self.apply_recall(recall);
            }
            KeyAction::HistoryNext => {
                let recall = self.startpage.history_next();
                self.apply_recall(recall);
            }

            KeyAction::InsertChar(ch) => {
                self.input.insert(ch);
                self.input_changed();
            }
            KeyAction::Backspace => {
                self.input.backspace();
                self.input_changed();
            }
            KeyAction::DeleteToBeginning => {
                self.input.delete_to_beginning();
                self.input_changed();
            }

            KeyAction::TriggerCompletion => {
                let outcome = self.startpage.tab(self.input.as_str());
                // not an edit: the cycled candidate list stays
                if let Some(text) = outcome.replace_input {
                    self.input.reset(text);
                }
                if outcome.clear_preview {
                    self.input.completion = None;
                }
            }
            KeyAction::AcceptCompletion => {
                if let Some(ghost) = self.input.completion.take() {
                    self.input.move_to_end();
                    self.input.insert_str(&ghost);
                    self.input_changed();
                }
            }
            KeyAction::CancelCompletion => {
                let preview = self.startpage.escape();
                self.apply_preview(preview);
            }

            KeyAction::Execute => self.execute(),
            KeyAction::ClearScreen => self.startpage.clear_output(),
            KeyAction::Interrupt => {
                if self.ctrl_c_state.on_pressed() {
                    return Flow::Exit;
                }
                self.input.clear();
                self.clear_line();
                let preview = self.startpage.interrupt();
                self.apply_preview(preview);
            }

            KeyAction::Unsupported => {}
        }
        Flow::Continue
    }

    fn execute(&mut self) {
        let line = self.input.as_str().to_string();
        self.input.clear();
        self.clear_line();

        let status = self.startpage.submit(&line);
        debug!("{:?} -> {:?}", line, status);

        // the prompt starts empty, so completion state follows it
        let preview = self.startpage.escape();
        self.apply_preview(preview);
    }

    fn input_changed(&mut self) {
        let preview = self.startpage.input_changed(self.input.as_str());
        self.apply_preview(preview);
    }

    fn apply_preview(&mut self, preview: Preview) {
        self.input.completion = match preview {
            Preview::Clear => None,
            Preview::Show { suffix, .. } => Some(suffix),
        };
    }

    fn apply_recall(&mut self, recall: HistoryRecall) {
        if let Some(text) = recall.text {
            self.input.reset(text);
        }
        self.apply_preview(recall.preview);
    }

    fn clear_line(&self) {
        let mut out = io::stdout().lock();
        queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
        out.flush().ok();
    }

    fn redraw(&self) -> Result<()> {
        let mut out = io::stdout().lock();
        queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        self.input.print(&mut out, &self.startpage.config().prompt)?;
        let back = self.input.columns_after_cursor();
        if back > 0 {
            queue!(out, MoveLeft(back as u16))?;
        }
        out.flush()?;
        Ok(())
    }
}
