/// Token encoding and decoding for tab states
///
/// A token is the tab URLs joined by `\n`, taken as UTF-8 bytes and written
/// with the standard base64 alphabet. A share locator is [`SHARE_PREFIX`]
/// followed by the token, so anything that can read a URL fragment and
/// undo base64 can rebuild the tab list.
use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use log::debug;

use crate::error::{Result, TabStateError};

/// Fixed prefix of every share locator; the token is the fragment after `#`
pub const SHARE_PREFIX: &str = "https://vinodhalaharvi.github.io/tab-state-qr/#";

const SEPARATOR: &str = "\n";

/// Standard alphabet, padded on encode. Decoding is as forgiving as the
/// browser's `atob`: padding is optional and stray trailing bits are ignored.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encode an ordered URL list into a token.
///
/// URLs must not contain `\n`; such a URL would come back split in two.
pub fn encode<S: AsRef<str>>(urls: &[S]) -> String {
    let joined = urls
        .iter()
        .map(|url| url.as_ref())
        .collect::<Vec<&str>>()
        .join(SEPARATOR);

    let token = TOKEN_ENGINE.encode(joined.as_bytes());
    debug!("encoded {} urls into {} token chars", urls.len(), token.len());
    token
}

/// `SHARE_PREFIX + encode(urls)`
pub fn to_share_locator<S: AsRef<str>>(urls: &[S]) -> String {
    format!("{}{}", SHARE_PREFIX, encode(urls))
}

/// Remove [`SHARE_PREFIX`] from the start of `text`, if it is there.
pub fn strip_locator_prefix(text: &str) -> &str {
    text.strip_prefix(SHARE_PREFIX).unwrap_or(text)
}

/// Decode a token back into its URL list.
///
/// Lines that are not absolute `http`/`https` URLs are dropped silently so
/// that tokens carrying extra lines still open the tabs they do describe.
pub fn decode(token: &str) -> Result<Vec<String>> {
    let compact: String = token
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = TOKEN_ENGINE
        .decode(compact.as_bytes())
        .map_err(|e| TabStateError::Decode(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| TabStateError::Decode(e.to_string()))?;

    let urls: Vec<String> = text
        .split(SEPARATOR)
        .filter(|line| is_web_url(line))
        .map(str::to_string)
        .collect();

    debug!("decoded token into {} urls", urls.len());
    Ok(urls)
}

/// Decode either a share locator or a bare token.
pub fn decode_locator(text: &str) -> Result<Vec<String>> {
    decode(strip_locator_prefix(text))
}

/// True for strings that start with an `http://` or `https://` scheme
pub fn is_web_url(line: &str) -> bool {
    line.starts_with("http://") || line.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_encode_known_value() {
        // base64("https://example.com")
        assert_eq!(encode(&["https://example.com"]), "aHR0cHM6Ly9leGFtcGxlLmNvbQ==");
    }

    #[test]
    fn test_round_trip_basic() {
        let tabs = urls(&[
            "https://github.com/rust-lang/rust",
            "http://localhost:3000/dashboard",
            "https://www.google.com/search?q=rust+wasm",
        ]);

        assert_eq!(decode(&encode(&tabs)).unwrap(), tabs);
    }

    #[test]
    fn test_round_trip_empty() {
        let empty: Vec<String> = Vec::new();
        let token = encode(&empty);

        assert_eq!(token, "");
        assert_eq!(decode(&token).unwrap(), empty);
    }

    #[test]
    fn test_round_trip_single() {
        let tabs = urls(&["https://docs.rs"]);
        assert_eq!(decode(&encode(&tabs)).unwrap(), tabs);
    }

    #[test]
    fn test_round_trip_unicode() {
        let tabs = urls(&[
            "https://ja.wikipedia.org/wiki/東京",
            "https://example.com/café?q=naïve",
            "https://example.com/%E2%9C%93",
        ]);

        assert_eq!(decode(&encode(&tabs)).unwrap(), tabs);
    }

    #[test]
    fn test_round_trip_large() {
        let tabs: Vec<String> = (0..200)
            .map(|i| format!("https://example.com/page/{}?ref=tab{}", i, i))
            .collect();

        assert_eq!(decode(&encode(&tabs)).unwrap(), tabs);
    }

    #[test]
    fn test_order_preserved() {
        let tabs = urls(&["https://z.com", "https://a.com", "https://m.com"]);
        assert_eq!(decode(&encode(&tabs)).unwrap(), tabs);
    }

    #[test]
    fn test_decode_filters_non_urls() {
        let token = encode(&["http://a", "not-a-url", "https://b"]);
        assert_eq!(decode(&token).unwrap(), urls(&["http://a", "https://b"]));
    }

    #[test]
    fn test_decode_drops_blank_and_other_schemes() {
        let token = encode(&["", "ftp://files.example.com", "https://kept.com", "title: ignored"]);
        assert_eq!(decode(&token).unwrap(), urls(&["https://kept.com"]));
    }

    #[test]
    fn test_decode_without_padding() {
        assert_eq!(
            decode("aHR0cHM6Ly9leGFtcGxlLmNvbQ").unwrap(),
            urls(&["https://example.com"])
        );
    }

    #[test]
    fn test_decode_ignores_embedded_whitespace() {
        assert_eq!(
            decode("aHR0cHM6Ly9l\neGFtcGxlLmNvbQ==").unwrap(),
            urls(&["https://example.com"])
        );
    }

    #[test]
    fn test_decode_invalid_base64() {
        assert!(matches!(decode("not base64 !!"), Err(TabStateError::Decode(_))));
        assert!(matches!(decode("abcde"), Err(TabStateError::Decode(_))));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        // 0xFF 0xFE 0xFD is not UTF-8
        assert!(matches!(decode("//79"), Err(TabStateError::Decode(_))));
    }

    #[test]
    fn test_share_locator_prefix() {
        let tabs = urls(&["https://example.com", "https://rust-lang.org"]);
        let locator = to_share_locator(&tabs);

        assert!(locator.starts_with(SHARE_PREFIX));
        assert_eq!(strip_locator_prefix(&locator), encode(&tabs));
        assert_eq!(decode_locator(&locator).unwrap(), tabs);
    }

    #[test]
    fn test_strip_prefix_leaves_bare_token() {
        let token = encode(&["https://example.com"]);
        assert_eq!(strip_locator_prefix(&token), token);
    }

    #[test]
    fn test_strip_prefix_only_at_start() {
        let text = format!("x{}abc", SHARE_PREFIX);
        assert_eq!(strip_locator_prefix(&text), text);
    }

    #[test]
    fn test_is_web_url() {
        assert!(is_web_url("http://a"));
        assert!(is_web_url("https://example.com/path"));
        assert!(!is_web_url("httpbin"));
        assert!(!is_web_url("mailto:me@example.com"));
        assert!(!is_web_url(" https://leading-space.com"));
    }
}
