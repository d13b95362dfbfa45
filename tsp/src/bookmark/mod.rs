//! Bookmark index, persistence and browser export parsing.

pub mod import;
pub mod index;
pub mod store;

pub use import::{parse_bookmarks_html, sanitize_name};
pub use index::BookmarkIndex;
pub use store::{BookmarkStore, JsonFileStore, MemoryStore, STORAGE_KEY};
