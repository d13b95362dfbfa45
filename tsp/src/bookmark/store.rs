//! Persistence of the bookmark set as a single JSON array of `{title, url, name}` records.

use std::fs::{File, create_dir_all};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tsp_types::{Bookmark, TspError, TspResult};

/// Well-known file holding the serialized bookmark array.
pub const STORAGE_KEY: &str = "hacker-startpage-bookmarks.json";

pub trait BookmarkStore {
    /// Every persisted bookmark in store order. A store that was never written loads as empty.
    fn load_all(&self) -> TspResult<Vec<Bookmark>>;

    fn save_all(&mut self, bookmarks: &[Bookmark]) -> TspResult<()>;

    /// Where the bookmarks live, for display.
    fn location(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookmarkStore for JsonFileStore {
    fn load_all(&self) -> TspResult<Vec<Bookmark>> {
        if !self.path.exists() {
            debug!("no bookmark storage at {}", self.path.display());
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|source| TspError::File {
            operation: "open".to_string(),
            path: self.path.display().to_string(),
            source,
        })?;
        let bookmarks: Vec<Bookmark> = serde_json::from_reader(BufReader::new(file))?;
        debug!(
            "loaded {} bookmarks from {}",
            bookmarks.len(),
            self.path.display()
        );
        Ok(bookmarks)
    }

    fn save_all(&mut self, bookmarks: &[Bookmark]) -> TspResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_dir_all(parent)?;
        }

        let file = File::create(&self.path).map_err(|source| TspError::File {
            operation: "create".to_string(),
            path: self.path.display().to_string(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, bookmarks)?;
        writer.flush()?;
        debug!(
            "saved {} bookmarks to {}",
            bookmarks.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Volatile store used for `--no-save` sessions and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    bookmarks: Vec<Bookmark>,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new(bookmarks: Vec<Bookmark>) -> Self {
        MemoryStore {
            bookmarks,
            fail_writes: false,
        }
    }
}

impl BookmarkStore for MemoryStore {
    fn load_all(&self) -> TspResult<Vec<Bookmark>> {
        Ok(self.bookmarks.clone())
    }

    fn save_all(&mut self, bookmarks: &[Bookmark]) -> TspResult<()> {
        if self.fail_writes {
            return Err(TspError::Storage("memory store is read-only".to_string()));
        }
        self.bookmarks = bookmarks.to_vec();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
