use regex::Regex;

// Pre-compiled patterns for input classification
static URL_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^(https?://|www\.|[a-zA-Z0-9-]+\.[a-zA-Z]{2,})").expect("valid url regex")
});
static SEARCH_SHORTHAND_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^[bgyr]\s+.+").expect("valid search regex"));

/// URL heuristic: an explicit scheme, a `www.` prefix, or something shaped like `name.tld`.
/// Leading and trailing whitespace is ignored.
pub fn is_url(input: &str) -> bool {
    URL_REGEX.is_match(input.trim())
}

/// Prefix `https://` unless the text already carries an http(s) scheme.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Search shorthand such as `g rust lifetimes`, matched against the raw text as typed.
pub fn is_search_command(input: &str) -> bool {
    SEARCH_SHORTHAND_REGEX.is_match(input)
}

/// Longest string that every candidate starts with.
///
/// The first candidate is shortened one character at a time until all others start with it.
pub fn find_common_prefix<S: AsRef<str>>(strings: &[S]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };

    let mut prefix = first.as_ref();
    for candidate in rest {
        let candidate = candidate.as_ref();
        while !candidate.starts_with(prefix) {
            match prefix.char_indices().last() {
                Some((idx, _)) => prefix = &prefix[..idx],
                None => return String::new(),
            }
        }
        if prefix.is_empty() {
            return String::new();
        }
    }
    prefix.to_string()
}

/// Everything of `completion` past the first `typed.chars().count()` characters.
pub fn remaining_suffix(typed: &str, completion: &str) -> String {
    completion.chars().skip(typed.chars().count()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("netflix.com"));
        assert!(is_url("www.x.com"));
        assert!(is_url("http://x"));
        assert!(is_url("https://example.com/path"));
        assert!(is_url("  my-site.io  "));
        assert!(!is_url("netflix"));
        assert!(!is_url("a.b"));
        assert!(!is_url("ftp://example.com"));
        assert!(!is_url(""));
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("netflix.com"), "https://netflix.com");
        assert_eq!(normalize_url("www.x.com"), "https://www.x.com");
        assert_eq!(normalize_url("http://x"), "http://x");
        assert_eq!(normalize_url("https://x.com"), "https://x.com");
    }

    #[test]
    fn test_is_search_command() {
        assert!(is_search_command("g something"));
        assert!(is_search_command("b  two spaces"));
        assert!(!is_search_command("g"));
        assert!(!is_search_command("g "));
        assert!(!is_search_command("github"));
        assert!(!is_search_command("x query"));
        // raw text: leading whitespace defeats the shorthand
        assert!(!is_search_command(" g something"));
    }

    #[test]
    fn test_find_common_prefix_edges() {
        let empty: [&str; 0] = [];
        assert_eq!(find_common_prefix(&empty), "");
        assert_eq!(find_common_prefix(&["solo"]), "solo");
        assert_eq!(find_common_prefix(&["github", "gitlab"]), "git");
        assert_eq!(find_common_prefix(&["github", "github"]), "github");
        assert_eq!(find_common_prefix(&["abc", "xyz"]), "");
        assert_eq!(find_common_prefix(&["git", "github"]), "git");
    }

    #[test]
    fn test_find_common_prefix_shrinks_monotonically() {
        let names = ["netflix", "netlify", "news", "nextcloud"];
        let mut last = usize::MAX;
        for n in 1..=names.len() {
            let len = find_common_prefix(&names[..n]).len();
            assert!(len <= last);
            last = len;
        }
        assert_eq!(find_common_prefix(&names), "ne");
    }

    #[test]
    fn test_find_common_prefix_is_char_aware() {
        assert_eq!(find_common_prefix(&["café", "cafè"]), "caf");
    }

    #[test]
    fn test_remaining_suffix() {
        assert_eq!(remaining_suffix("git", "github"), "hub");
        assert_eq!(remaining_suffix("github", "github"), "");
        assert_eq!(remaining_suffix("GIT", "github"), "hub");
    }
}
