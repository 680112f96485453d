/// Hostname extraction for history previews
use log::warn;
use url::Url;

/// Number of tabs whose hosts are listed in a history preview
pub const PREVIEW_TABS: usize = 3;

/// Extract the hostname from a URL.
///
/// Returns `None` when the URL does not parse or has no host
/// (`mailto:`, `file:///...`).
///
/// Examples:
/// - https://www.google.com/search → www.google.com
/// - http://localhost:3000 → localhost
/// - https://NEWS.bbc.co.uk/article → news.bbc.co.uk
pub fn extract_hostname(url: &str) -> Option<String> {
    match Url::parse(url.trim()) {
        Ok(parsed) => parsed.host_str().map(str::to_string),
        Err(e) => {
            warn!("cannot read hostname from {:?}: {}", url, e);
            None
        }
    }
}

/// Hostnames of the first three URLs joined by ", ".
///
/// A URL without a readable hostname contributes an empty string in its
/// slot rather than failing the whole preview.
pub fn build_preview<S: AsRef<str>>(urls: &[S]) -> String {
    urls.iter()
        .take(PREVIEW_TABS)
        .map(|url| extract_hostname(url.as_ref()).unwrap_or_default())
        .collect::<Vec<String>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hostname_basic() {
        assert_eq!(extract_hostname("https://www.google.com"), Some("www.google.com".to_string()));
        assert_eq!(extract_hostname("http://google.com/maps"), Some("google.com".to_string()));
        assert_eq!(
            extract_hostname("https://news.bbc.co.uk/article?id=1"),
            Some("news.bbc.co.uk".to_string())
        );
    }

    #[test]
    fn test_extract_hostname_special_cases() {
        assert_eq!(extract_hostname("http://localhost:3000"), Some("localhost".to_string()));
        assert_eq!(extract_hostname("http://127.0.0.1:8080/x"), Some("127.0.0.1".to_string()));
        assert_eq!(extract_hostname("https://GitHub.COM"), Some("github.com".to_string()));
    }

    #[test]
    fn test_extract_hostname_edge_cases() {
        assert_eq!(extract_hostname(""), None);
        assert_eq!(extract_hostname("not-a-url"), None);
        assert_eq!(extract_hostname("https://"), None);
        assert_eq!(extract_hostname("mailto:someone@example.com"), None);
    }

    #[test]
    fn test_build_preview_takes_three() {
        let urls = vec![
            "https://github.com/rust-lang",
            "https://docs.rs/serde",
            "https://crates.io",
            "https://blog.rust-lang.org",
        ];

        assert_eq!(build_preview(&urls), "github.com, docs.rs, crates.io");
    }

    #[test]
    fn test_build_preview_malformed_slot() {
        let urls = vec!["https://a.com", "not a url", "https://c.com"];
        assert_eq!(build_preview(&urls), "a.com, , c.com");
    }

    #[test]
    fn test_build_preview_short_and_empty() {
        assert_eq!(build_preview(&["https://only.one"]), "only.one");
        assert_eq!(build_preview::<&str>(&[]), "");
    }
}
