//! In-memory bookmark set answering exact and prefix queries on bookmark names.

use tracing::debug;
use tsp_types::Bookmark;

#[derive(Debug, Clone, Default)]
pub struct BookmarkIndex {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkIndex {
    pub fn new(bookmarks: Vec<Bookmark>) -> Self {
        BookmarkIndex { bookmarks }
    }

    /// Swap in a whole new working set. Import is destructive, never additive.
    pub fn replace_all(&mut self, bookmarks: Vec<Bookmark>) {
        debug!(
            "replacing {} bookmarks with {}",
            self.bookmarks.len(),
            bookmarks.len()
        );
        self.bookmarks = bookmarks;
    }

    /// First bookmark, in store order, whose name equals the lowercased query.
    pub fn find_exact(&self, query: &str) -> Option<&Bookmark> {
        if query.is_empty() {
            return None;
        }
        let query = query.to_lowercase();
        self.bookmarks.iter().find(|b| b.name == query)
    }

    /// Names starting with the lowercased query, one entry per matching bookmark,
    /// in byte order.
    pub fn find_by_prefix(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }
        let query = query.to_lowercase();
        let mut names: Vec<String> = self
            .bookmarks
            .iter()
            .filter(|b| b.name.starts_with(&query))
            .map(|b| b.name.clone())
            .collect();
        names.sort();
        names
    }

    pub fn count(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> BookmarkIndex {
        BookmarkIndex::new(vec![
            Bookmark::new("GitLab", "https://gitlab.com", "gitlab"),
            Bookmark::new("GitHub", "https://github.com", "github"),
            Bookmark::new("GitHub Enterprise", "https://ghe.example.com", "github"),
            Bookmark::new("Netflix", "https://netflix.com", "netflix"),
        ])
    }

    #[test]
    fn test_find_exact_is_case_insensitive() {
        let index = index();
        assert_eq!(index.find_exact("NETFLIX").map(|b| b.title.as_str()), Some("Netflix"));
        assert!(index.find_exact("net").is_none());
        assert!(index.find_exact("").is_none());
    }

    #[test]
    fn test_find_exact_returns_first_duplicate() {
        let index = index();
        let found = index.find_exact("github").unwrap();
        assert_eq!(found.url, "https://github.com");
    }

    #[test]
    fn test_find_by_prefix_sorted_with_duplicates() {
        let index = index();
        assert_eq!(index.find_by_prefix("Git"), vec!["github", "github", "gitlab"]);
        assert_eq!(index.find_by_prefix("n"), vec!["netflix"]);
        assert!(index.find_by_prefix("zzz").is_empty());
        assert!(index.find_by_prefix("").is_empty());
    }

    #[test]
    fn test_find_by_prefix_uses_byte_order() {
        let index = BookmarkIndex::new(vec![
            Bookmark::new("b", "https://b.example", "a_b"),
            Bookmark::new("a", "https://a.example", "a-b"),
            Bookmark::new("c", "https://c.example", "a1"),
        ]);
        // '-' (0x2d) < '1' (0x31) < '_' (0x5f)
        assert_eq!(index.find_by_prefix("a"), vec!["a-b", "a1", "a_b"]);
    }

    #[test]
    fn test_replace_all() {
        let mut index = index();
        assert_eq!(index.count(), 4);
        index.replace_all(vec![Bookmark::new("Rust", "https://rust-lang.org", "rust")]);
        assert_eq!(index.count(), 1);
        assert!(index.find_exact("github").is_none());
        assert_eq!(index.find_by_prefix("r"), vec!["rust"]);
    }
}
