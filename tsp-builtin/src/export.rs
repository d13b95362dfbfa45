use super::StartpageProxy;
use chrono::Utc;
use std::path::PathBuf;
use tracing::{debug, warn};
use tsp_types::{Bookmark, ExitStatus, OutputKind};

/// Built-in export command implementation
///
/// Usage:
///   export          - Write terminal-startpage-bookmarks-<date>.html into the current directory
///   export <file>   - Write to the given file
pub fn command(argv: Vec<String>, proxy: &mut dyn StartpageProxy) -> ExitStatus {
    if proxy.bookmarks().is_empty() {
        proxy.show(
            "No bookmarks to export. Import some bookmarks first.",
            OutputKind::Error,
        );
        return ExitStatus::failure();
    }

    let now = Utc::now();
    let path = if argv.len() > 1 {
        PathBuf::from(argv[1..].join(" ").trim())
    } else {
        PathBuf::from(default_file_name(&now.format("%Y-%m-%d").to_string()))
    };

    let html = generate_bookmark_html(proxy.bookmarks(), now.timestamp());
    let count = proxy.bookmarks().len();

    match std::fs::write(&path, html) {
        Ok(()) => {
            debug!("exported {} bookmarks to {}", count, path.display());
            proxy.show(
                &format!("Exported {count} bookmarks to HTML file"),
                OutputKind::Success,
            );
            proxy.show(&format!("Saved to {}", path.display()), OutputKind::Info);
            ExitStatus::success()
        }
        Err(err) => {
            warn!("failed to write {}: {}", path.display(), err);
            proxy.show(
                &format!("Error: Failed to write {}: {err}", path.display()),
                OutputKind::Error,
            );
            ExitStatus::failure()
        }
    }
}

pub fn default_file_name(date: &str) -> String {
    format!("terminal-startpage-bookmarks-{date}.html")
}

/// Render bookmarks as a Netscape bookmark file with a single folder.
pub fn generate_bookmark_html(bookmarks: &[Bookmark], timestamp: i64) -> String {
    let mut html = format!(
        r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file. -->
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
    <DT><H3 ADD_DATE="{timestamp}" LAST_MODIFIED="{timestamp}">Terminal Startpage Bookmarks</H3>
    <DL><p>
"#
    );

    for bookmark in bookmarks {
        html.push_str(&format!(
            "        <DT><A HREF=\"{}\" ADD_DATE=\"{timestamp}\">{}</A>\n",
            escape_html(&bookmark.url),
            escape_html(&bookmark.title)
        ));
    }

    html.push_str("    </DL><p>\n</DL><p>");
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
