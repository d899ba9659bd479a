use serde::{Deserialize, Serialize};

/// A stored key -> destination pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// The short path segment the link is registered under.
    pub key: String,
    /// The absolute URL the key redirects to. Scheme-prefixed once stored.
    pub destination: String,
}

impl LinkEntry {
    pub fn new(key: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            destination: destination.into(),
        }
    }
}

/// Ensures a destination carries a scheme prefix.
///
/// Anything that does not already start with the literal string `http`
/// gets `https://` prepended. This is a prefix check, not a URL parse:
/// `httpfoo` counts as already schemed and passes through unchanged.
/// Stored destinations depend on this exact rule; do not tighten it.
pub fn normalize_destination(raw: &str) -> String {
    if raw.starts_with("http") {
        raw.to_owned()
    } else {
        format!("https://{raw}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https_prefix() {
        assert_eq!(normalize_destination("example.com"), "https://example.com");
    }

    #[test]
    fn http_destination_unchanged() {
        assert_eq!(
            normalize_destination("http://example.com"),
            "http://example.com"
        );
    }

    #[test]
    fn https_destination_unchanged() {
        assert_eq!(
            normalize_destination("https://example.com"),
            "https://example.com"
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_destination("golang.org");
        assert_eq!(normalize_destination(&once), once);
    }

    #[test]
    fn prefix_check_is_literal_not_a_scheme_parse() {
        assert_eq!(normalize_destination("httpfoo"), "httpfoo");
    }

    #[test]
    fn path_and_query_survive() {
        assert_eq!(
            normalize_destination("example.com/a/b?q=1"),
            "https://example.com/a/b?q=1"
        );
    }
}
