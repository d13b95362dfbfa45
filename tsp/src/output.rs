use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Stdout, Write};
use tabled::{Table, Tabled};
use tracing::warn;
use tsp_types::{Bookmark, OutputKind, OutputSink};

const MAX_URL_WIDTH: usize = 60;

/// Writes output lines to a terminal with one colour per [`OutputKind`].
pub struct TerminalOutput<W: Write> {
    out: W,
    /// Whether `clear` may wipe the screen. One-shot runs leave the scrollback alone.
    clear_screen: bool,
}

impl TerminalOutput<Stdout> {
    pub fn stdout(clear_screen: bool) -> Self {
        TerminalOutput::new(io::stdout(), clear_screen)
    }
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(out: W, clear_screen: bool) -> Self {
        TerminalOutput { out, clear_screen }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn color(kind: OutputKind) -> Option<Color> {
        match kind {
            OutputKind::Info => Some(Color::White),
            OutputKind::Success => Some(Color::Green),
            OutputKind::Error => Some(Color::Red),
            OutputKind::SystemInfo => None,
        }
    }

    fn write_lines(&mut self, text: &str, kind: OutputKind) -> io::Result<()> {
        // "\r\n" keeps columns aligned while the terminal is in raw mode
        for line in text.lines() {
            match Self::color(kind) {
                Some(color) => write!(self.out, "{}\r\n", line.with(color))?,
                None => write!(self.out, "{}\r\n", line)?,
            }
        }
        self.out.flush()
    }
}

impl<W: Write> OutputSink for TerminalOutput<W> {
    fn show(&mut self, text: &str, kind: OutputKind) {
        if let Err(err) = self.write_lines(text, kind) {
            warn!("failed to write output: {}", err);
        }
    }

    fn clear(&mut self) {
        if !self.clear_screen {
            return;
        }
        if let Err(err) = queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
            .and_then(|_| self.out.flush())
        {
            warn!("failed to clear output: {}", err);
        }
    }
}

/// Presents the current bookmark set.
pub trait BookmarkListRenderer {
    fn render(&self, bookmarks: &[Bookmark], out: &mut dyn OutputSink);
}

#[derive(Tabled)]
struct BookmarkRow {
    name: String,
    title: String,
    url: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer;

impl TableRenderer {
    /// Display order: by title ignoring case, ties broken by the raw title.
    /// This is independent of the byte order used for completion candidates.
    /// No locale collation is applied: accented titles sort after `z`.
    pub fn sorted(bookmarks: &[Bookmark]) -> Vec<&Bookmark> {
        let mut sorted: Vec<&Bookmark> = bookmarks.iter().collect();
        sorted.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title))
        });
        sorted
    }
}

impl BookmarkListRenderer for TableRenderer {
    fn render(&self, bookmarks: &[Bookmark], out: &mut dyn OutputSink) {
        if bookmarks.is_empty() {
            out.show(
                "No bookmarks found. Import bookmarks to get started.",
                OutputKind::Info,
            );
            return;
        }

        let rows: Vec<BookmarkRow> = TableRenderer::sorted(bookmarks)
            .into_iter()
            .map(|b| BookmarkRow {
                name: b.name.clone(),
                title: b.title.clone(),
                url: truncate(&b.url, MAX_URL_WIDTH),
            })
            .collect();

        let table = Table::new(rows).to_string();
        out.show(&table, OutputKind::Info);
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Lines(Vec<(String, OutputKind)>);

    impl OutputSink for Lines {
        fn show(&mut self, text: &str, kind: OutputKind) {
            self.0.push((text.to_string(), kind));
        }

        fn clear(&mut self) {
            self.0.clear();
        }
    }

    #[test]
    fn test_terminal_output_colors_and_raw_newlines() {
        let mut output = TerminalOutput::new(Vec::new(), true);
        output.show("ok\nsecond", OutputKind::Success);
        output.show("   __\n  /  \\", OutputKind::SystemInfo);

        let written = String::from_utf8(output.into_inner()).unwrap();
        assert!(written.contains(&format!("{}\r\n", "ok".with(Color::Green))));
        assert!(written.contains(&format!("{}\r\n", "second".with(Color::Green))));
        // system info is passed through untouched
        assert!(written.contains("   __\r\n  /  \\\r\n"));
    }

    #[test]
    fn test_terminal_output_clear_respects_flag() {
        let mut output = TerminalOutput::new(Vec::new(), false);
        output.clear();
        assert!(output.into_inner().is_empty());

        let mut output = TerminalOutput::new(Vec::new(), true);
        output.clear();
        assert!(!output.into_inner().is_empty());
    }

    #[test]
    fn test_table_renderer_empty_set() {
        let mut output = Lines::default();
        TableRenderer.render(&[], &mut output);
        assert_eq!(
            output.0.last(),
            Some(&(
                "No bookmarks found. Import bookmarks to get started.".to_string(),
                OutputKind::Info
            ))
        );
    }

    #[test]
    fn test_table_renderer_sorts_by_title() {
        let bookmarks = vec![
            Bookmark::new("zulip", "https://zulip.com", "zulip"),
            Bookmark::new("GitHub", "https://github.com", "github"),
            Bookmark::new("arch wiki", "https://wiki.archlinux.org", "arch_wiki"),
            Bookmark::new("github", "https://github.com/me", "github"),
        ];
        let titles: Vec<&str> = TableRenderer::sorted(&bookmarks)
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(titles, vec!["arch wiki", "GitHub", "github", "zulip"]);

        let mut output = Lines::default();
        TableRenderer.render(&bookmarks, &mut output);
        let (table, kind) = output.0.last().unwrap();
        assert_eq!(*kind, OutputKind::Info);
        assert!(table.contains("arch_wiki"));
        assert!(table.find("arch wiki").unwrap() < table.find("zulip").unwrap());
    }

    #[test]
    fn test_table_renderer_does_not_collate() {
        let bookmarks = vec![
            Bookmark::new("Émile", "https://emile.example", "mile"),
            Bookmark::new("zeta", "https://zeta.example", "zeta"),
        ];
        let titles: Vec<&str> = TableRenderer::sorted(&bookmarks)
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(titles, vec!["zeta", "Émile"]);
    }

    #[test]
    fn test_truncate_long_urls() {
        let url = format!("https://example.com/{}", "a".repeat(80));
        let short = truncate(&url, MAX_URL_WIDTH);
        assert_eq!(short.chars().count(), MAX_URL_WIDTH);
        assert!(short.ends_with("..."));
        assert_eq!(truncate("https://x.io", MAX_URL_WIDTH), "https://x.io");
    }
}
