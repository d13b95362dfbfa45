/// A web search engine reachable through a one-letter shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProvider {
    pub key: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}

pub const SEARCH_PROVIDERS: &[SearchProvider] = &[
    SearchProvider {
        key: "b",
        name: "Brave",
        url: "https://search.brave.com/search?q=",
    },
    SearchProvider {
        key: "g",
        name: "Google",
        url: "https://www.google.com/search?q=",
    },
    SearchProvider {
        key: "y",
        name: "YouTube",
        url: "https://www.youtube.com/results?search_query=",
    },
    SearchProvider {
        key: "r",
        name: "Reddit",
        url: "https://www.reddit.com/search/?q=",
    },
];

/// Look up a provider by its exact key. Callers lowercase the token first.
pub fn provider(key: &str) -> Option<&'static SearchProvider> {
    SEARCH_PROVIDERS.iter().find(|p| p.key == key)
}

pub fn is_search_key(key: &str) -> bool {
    provider(key).is_some()
}

impl SearchProvider {
    /// Query URL with the term percent-encoded.
    pub fn search_url(&self, term: &str) -> String {
        format!("{}{}", self.url, urlencoding::encode(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_lookup() {
        assert_eq!(provider("g").map(|p| p.name), Some("Google"));
        assert_eq!(provider("y").map(|p| p.name), Some("YouTube"));
        assert!(provider("G").is_none());
        assert!(provider("x").is_none());
        assert!(is_search_key("b"));
        assert!(is_search_key("r"));
    }

    #[test]
    fn test_search_url_is_percent_encoded() {
        let google = provider("g").unwrap();
        assert_eq!(
            google.search_url("rust & c++"),
            "https://www.google.com/search?q=rust%20%26%20c%2B%2B"
        );

        let youtube = provider("y").unwrap();
        assert_eq!(
            youtube.search_url("lofi"),
            "https://www.youtube.com/results?search_query=lofi"
        );
    }
}
