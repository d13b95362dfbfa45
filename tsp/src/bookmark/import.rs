use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;
use tsp_types::{Bookmark, TspError, TspResult};

const MAX_NAME_LEN: usize = 30;

static NAME_INVALID_CHARS: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid name regex"));
static NAME_WHITESPACE: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Parse a browser bookmark export into a fresh bookmark list.
///
/// Every `<a href>` whose scheme starts with `http` becomes a bookmark; the link text
/// (or the href when the text is blank) is the title. A document without any anchor
/// is rejected so that an unrelated file never wipes the current set.
pub fn parse_bookmarks_html(html: &str) -> TspResult<Vec<Bookmark>> {
    let selector = Selector::parse("a[href]").map_err(|_| TspError::InvalidBookmarkFile)?;
    let document = Html::parse_document(html);

    let mut anchors = 0usize;
    let mut bookmarks = Vec::new();
    for link in document.select(&selector) {
        anchors += 1;
        let Some(href) = link.value().attr("href").and_then(http_href) else {
            continue;
        };

        let text = link.text().collect::<String>();
        let title = match text.trim() {
            "" => href.clone(),
            text => text.to_string(),
        };
        let name = sanitize_name(&title);
        bookmarks.push(Bookmark {
            title,
            url: href,
            name,
        });
    }

    if anchors == 0 {
        return Err(TspError::InvalidBookmarkFile);
    }
    debug!("parsed {} bookmarks out of {} anchors", bookmarks.len(), anchors);
    Ok(bookmarks)
}

/// The href with its scheme lowercased, if the scheme starts with `http`.
fn http_href(href: &str) -> Option<String> {
    let href = href.trim();
    let scheme_end = href.find(':').unwrap_or(href.len());
    let scheme = href[..scheme_end].to_ascii_lowercase();
    if !scheme.starts_with("http") {
        return None;
    }
    Some(format!("{scheme}{}", &href[scheme_end..]))
}

/// Derive the typed lookup key from a title: lowercase, `[a-z0-9_-]` only,
/// whitespace runs become `_`, at most 30 characters.
pub fn sanitize_name(name: &str) -> String {
    let lower = name.to_lowercase();
    let stripped = NAME_INVALID_CHARS.replace_all(&lower, "");
    let joined = NAME_WHITESPACE.replace_all(&stripped, "_");
    joined.chars().take(MAX_NAME_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
    <DT><H3>Toolbar</H3>
    <DL><p>
        <DT><A HREF="https://github.com/" ADD_DATE="1">GitHub</A>
        <DT><A HREF="https://news.ycombinator.com/">  Hacker News  </A>
        <DT><A HREF="javascript:alert(1)">Bookmarklet</A>
        <DT><A HREF="https://example.com/empty"></A>
        <DT><A HREF="http://old.example.org">Old &amp; Busted!</A>
    </DL><p>
</DL><p>"#;

    #[test]
    fn test_parse_netscape_export() {
        let bookmarks = parse_bookmarks_html(EXPORT).unwrap();
        assert_eq!(bookmarks.len(), 4);

        assert_eq!(bookmarks[0], Bookmark::new("GitHub", "https://github.com/", "github"));
        assert_eq!(bookmarks[1].title, "Hacker News");
        assert_eq!(bookmarks[1].name, "hacker_news");

        // blank link text falls back to the href
        assert_eq!(bookmarks[2].title, "https://example.com/empty");
        assert_eq!(bookmarks[2].name, "httpsexamplecomempty");

        assert_eq!(bookmarks[3].title, "Old & Busted!");
        assert_eq!(bookmarks[3].name, "old_busted");
    }

    #[test]
    fn test_parse_without_anchors_is_invalid() {
        assert!(matches!(
            parse_bookmarks_html("just some text"),
            Err(TspError::InvalidBookmarkFile)
        ));
        assert!(matches!(
            parse_bookmarks_html(""),
            Err(TspError::InvalidBookmarkFile)
        ));
    }

    #[test]
    fn test_parse_only_non_http_links_yields_empty_set() {
        let html = r#"<a href="ftp://files.example.com">Files</a>"#;
        assert!(parse_bookmarks_html(html).unwrap().is_empty());
    }

    #[test]
    fn test_parse_uppercase_scheme() {
        let html = r#"<DT><A HREF="HTTPS://Example.com/Docs">Example</A>"#;
        let bookmarks = parse_bookmarks_html(html).unwrap();
        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].url, "https://Example.com/Docs");
        assert_eq!(bookmarks[0].name, "example");
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("GitHub"), "github");
        assert_eq!(sanitize_name("Rust  Programming\tLanguage"), "rust_programming_language");
        assert_eq!(sanitize_name("C++ / Reference"), "c_reference");
        assert_eq!(sanitize_name("self-hosted"), "self-hosted");
        assert_eq!(
            sanitize_name("An extremely long bookmark title that keeps going"),
            "an_extremely_long_bookmark_tit"
        );
        assert_eq!(sanitize_name("Ünïcode"), "ncode");
    }
}
