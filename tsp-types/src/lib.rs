use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Terminal startpage specific error types
#[derive(Error, Debug)]
pub enum TspError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid bookmark file format")]
    InvalidBookmarkFile,

    #[error("File operation failed: {operation} on {path}: {source}")]
    File {
        operation: String,
        path: String,
        source: std::io::Error,
    },

    #[error("Storage operation failed: {0}")]
    Storage(String),

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type TspResult<T> = std::result::Result<T, TspError>;

/// A single bookmark.
///
/// `name` is the slug typed at the prompt. It is derived from the title on
/// import and is not unique: two bookmarks may share a name, in which case
/// lookups resolve to the first one in store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
    pub name: String,
}

impl Bookmark {
    pub fn new(title: impl Into<String>, url: impl Into<String>, name: impl Into<String>) -> Self {
        Bookmark {
            title: title.into(),
            url: url.into(),
            name: name.into(),
        }
    }
}

/// Style of a line written to the output pane.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OutputKind {
    Info,
    Success,
    Error,
    /// Pre-formatted block produced by the system information command.
    SystemInfo,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Info => write!(f, "info"),
            OutputKind::Success => write!(f, "success"),
            OutputKind::Error => write!(f, "error"),
            OutputKind::SystemInfo => write!(f, "system-info"),
        }
    }
}

/// Destination for everything the startpage reports back to the user.
pub trait OutputSink {
    /// Append a rendered line or block.
    fn show(&mut self, text: &str, kind: OutputKind);

    /// Remove everything shown so far.
    fn clear(&mut self);
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ExitStatus {
    ExitedWith(i32),
}

impl ExitStatus {
    pub fn success() -> Self {
        ExitStatus::ExitedWith(0)
    }

    pub fn failure() -> Self {
        ExitStatus::ExitedWith(1)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExitStatus::ExitedWith(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookmark_serializes_as_flat_record() {
        let bookmark = Bookmark::new("Rust Lang", "https://www.rust-lang.org/", "rust_lang");
        let json = serde_json::to_string(&bookmark).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Rust Lang","url":"https://www.rust-lang.org/","name":"rust_lang"}"#
        );
        let back: Bookmark = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bookmark);
    }

    #[test]
    fn test_output_kind_display() {
        assert_eq!(OutputKind::SystemInfo.to_string(), "system-info");
        assert_eq!(OutputKind::Error.to_string(), "error");
    }

    #[test]
    fn test_invalid_bookmark_file_message() {
        assert_eq!(
            TspError::InvalidBookmarkFile.to_string(),
            "Invalid bookmark file format"
        );
    }

    #[test]
    fn test_exit_status() {
        assert!(ExitStatus::success().is_success());
        assert!(!ExitStatus::failure().is_success());
    }
}
