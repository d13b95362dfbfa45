use crossterm::style::{Color, Stylize};
use std::cmp::min;
use std::fmt;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const INITIAL_CAP: usize = 256;

#[derive(Debug, Clone)]
pub struct InputConfig {
    pub fg_color: Color,
    pub prompt_color: Color,
    pub completion_color: Color,
}

impl Default for InputConfig {
    fn default() -> InputConfig {
        InputConfig {
            fg_color: Color::White,
            prompt_color: Color::Green,
            completion_color: Color::DarkGrey,
        }
    }
}

/// The prompt line: text, cursor (in characters) and the ghost suffix.
#[derive(Debug, Clone)]
pub struct Input {
    config: InputConfig,
    cursor: usize,
    input: String,
    indices: Vec<usize>,

    /// Ghost suffix drawn after the text; never part of the submitted line.
    pub completion: Option<String>,
}

impl Input {
    pub fn new(config: InputConfig) -> Input {
        Input {
            config,
            cursor: 0,
            input: String::with_capacity(INITIAL_CAP),
            indices: Vec::with_capacity(INITIAL_CAP),
            completion: None,
        }
    }

    /// Replace the whole text and put the cursor at the end.
    pub fn reset(&mut self, input: String) {
        self.input = input;
        self.update_indices();
        self.move_to_end();
    }

    pub fn as_str(&self) -> &str {
        self.input.as_str()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.cursor = 0;
        self.input.clear();
        self.indices.clear();
        self.completion = None;
    }

    pub fn move_to_begin(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn insert(&mut self, ch: char) {
        self.input.insert(self.byte_index(), ch);
        self.update_indices();
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, string: &str) {
        self.input.insert_str(self.byte_index(), string);
        self.update_indices();
        self.cursor += string.chars().count();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.input.remove(self.byte_index());
            self.update_indices();
        }
    }

    pub fn delete_to_beginning(&mut self) {
        let end = self.byte_index();
        self.input.replace_range(..end, "");
        self.update_indices();
        self.cursor = 0;
    }

    pub fn move_by(&mut self, offset: isize) {
        if offset < 0 {
            self.cursor = self.cursor.saturating_sub(offset.unsigned_abs());
        } else {
            self.cursor = min(self.len(), self.cursor + offset.unsigned_abs());
        }
    }

    fn byte_index(&self) -> usize {
        if self.cursor == self.indices.len() {
            self.input.len()
        } else {
            self.indices[self.cursor]
        }
    }

    fn update_indices(&mut self) {
        self.indices.clear();
        for index in self.input.char_indices() {
            self.indices.push(index.0);
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn cursor_at_end(&self) -> bool {
        self.cursor == self.len()
    }

    /// Display width of the text before the cursor.
    pub fn cursor_width(&self) -> usize {
        self.input[..self.byte_index()].width()
    }

    /// Draw `prompt`, the text and, when the cursor is at the end, the ghost suffix.
    /// Leaves the terminal cursor after the last drawn character.
    pub fn print<W: Write>(&self, out: &mut W, prompt: &str) -> io::Result<()> {
        let mut line = format!(
            "{} {}",
            prompt.with(self.config.prompt_color),
            self.as_str().with(self.config.fg_color)
        );
        if let Some(ghost) = self.completion.as_deref().filter(|_| self.cursor_at_end()) {
            line.push_str(&format!("{}", ghost.with(self.config.completion_color)));
        }
        write!(out, "{}", line)
    }

    /// Columns to move back from the end of the drawn line to the cursor.
    pub fn columns_after_cursor(&self) -> usize {
        let ghost = match (&self.completion, self.cursor_at_end()) {
            (Some(ghost), true) => ghost.width(),
            _ => 0,
        };
        self.input.width() - self.cursor_width() + ghost
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.input.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_creation_and_display() {
        let input = Input::new(InputConfig::default());
        assert_eq!(input.as_str(), "");
        assert_eq!(input.cursor(), 0);
        assert_eq!(format!("{}", input), "");
    }

    #[test]
    fn test_editing_in_the_middle() {
        let mut input = Input::new(InputConfig::default());
        input.insert_str("gthub");
        input.move_to_begin();
        input.move_by(1);
        input.insert('i');
        assert_eq!(input.as_str(), "github");
        assert_eq!(input.cursor(), 2);

        input.move_to_end();
        input.backspace();
        assert_eq!(input.as_str(), "githu");
        assert!(input.cursor_at_end());
    }

    #[test]
    fn test_multibyte_cursor() {
        let mut input = Input::new(InputConfig::default());
        input.insert_str("日本");
        input.move_by(-1);
        input.insert('x');
        assert_eq!(input.as_str(), "日x本");
        assert_eq!(input.cursor_width(), 3);
    }

    #[test]
    fn test_delete_to_beginning() {
        let mut input = Input::new(InputConfig::default());
        input.insert_str("g rust");
        input.move_by(-4);
        input.delete_to_beginning();
        assert_eq!(input.as_str(), "rust");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_reset_and_clear() {
        let mut input = Input::new(InputConfig::default());
        input.insert_str("git");
        input.completion = Some("hub".to_string());
        input.reset("github".to_string());
        assert_eq!(input.cursor(), 6);

        input.clear();
        assert!(input.is_empty());
        assert!(input.completion.is_none());
    }

    #[test]
    fn test_print_draws_ghost_only_at_end() -> anyhow::Result<()> {
        let mut input = Input::new(InputConfig::default());
        input.insert_str("git");
        input.completion = Some("hub".to_string());

        let mut out = Vec::new();
        input.print(&mut out, "$")?;
        let drawn = String::from_utf8(out)?;
        assert!(drawn.contains(&format!("{}", "hub".with(Color::DarkGrey))));
        assert_eq!(input.columns_after_cursor(), 3);

        input.move_by(-1);
        let mut out = Vec::new();
        input.print(&mut out, "$")?;
        assert!(!String::from_utf8(out)?.contains("hub"));
        assert_eq!(input.columns_after_cursor(), 1);
        Ok(())
    }
}
