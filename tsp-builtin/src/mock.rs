use super::StartpageProxy;
use tsp_types::{Bookmark, OutputKind, TspError, TspResult};

pub(crate) struct MockStartpageProxy {
    pub bookmarks: Vec<Bookmark>,
    pub lines: Vec<(String, OutputKind)>,
    pub cleared: usize,
    pub imported: Option<String>,
    pub fail_import: bool,
}

impl MockStartpageProxy {
    pub fn new() -> Self {
        Self {
            bookmarks: Vec::new(),
            lines: Vec::new(),
            cleared: 0,
            imported: None,
            fail_import: false,
        }
    }

    pub fn with_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        Self {
            bookmarks,
            ..Self::new()
        }
    }

    pub fn last_line(&self) -> Option<&(String, OutputKind)> {
        self.lines.last()
    }
}

impl StartpageProxy for MockStartpageProxy {
    fn show(&mut self, text: &str, kind: OutputKind) {
        self.lines.push((text.to_string(), kind));
    }

    fn clear_output(&mut self) {
        self.cleared += 1;
        self.lines.clear();
    }

    fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn import_bookmarks(&mut self, html: &str) -> TspResult<usize> {
        if self.fail_import {
            return Err(TspError::InvalidBookmarkFile);
        }
        self.imported = Some(html.to_string());
        self.bookmarks = vec![Bookmark::new("Imported", "https://example.com", "imported")];
        Ok(self.bookmarks.len())
    }

    fn storage_location(&self) -> String {
        "memory".to_string()
    }
}
