/// Auto-detect parsing of pasted tab states
///
/// Input is classified in a fixed order and the first match wins:
/// 1. share locator or bare token (base64 alphabet only)
/// 2. newline separated lines starting with `http`
/// 3. JSON object with a `tabs` array
///
/// A newline-free string made only of base64 characters is always taken as
/// a token, even when the user meant it as something else.
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::Deserialize;

use crate::codec::{SHARE_PREFIX, decode, strip_locator_prefix};
use crate::error::{Result, TabStateError};
use crate::tab_data::TabInfo;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+/]+=*$").expect("token pattern is valid"));

/// Result of classifying a piece of pasted text
#[derive(Debug, Clone, PartialEq)]
pub enum InputKind<'a> {
    /// A token, with any share prefix already removed
    Token(&'a str),
    /// Plain URL lines, in input order
    UrlList(Vec<String>),
    /// URLs taken from a structured export, in input order
    Structured(Vec<String>),
    Unrecognized,
}

#[derive(Debug, Deserialize)]
struct StructuredInput {
    tabs: Vec<StructuredTab>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StructuredTab {
    Url(String),
    Tab(TabInfo),
}

impl StructuredTab {
    fn into_url(self) -> String {
        match self {
            StructuredTab::Url(url) => url,
            StructuredTab::Tab(tab) => tab.url,
        }
    }
}

/// Decide which format `input` is in without decoding any token.
pub fn classify(input: &str) -> InputKind<'_> {
    let trimmed = input.trim();

    if trimmed.starts_with(SHARE_PREFIX) || TOKEN_PATTERN.is_match(trimmed) {
        return InputKind::Token(strip_locator_prefix(trimmed));
    }

    let urls: Vec<String> = trimmed
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("http"))
        .map(str::to_string)
        .collect();
    if !urls.is_empty() {
        return InputKind::UrlList(urls);
    }

    match serde_json::from_str::<StructuredInput>(trimmed) {
        Ok(structured) => InputKind::Structured(
            structured
                .tabs
                .into_iter()
                .map(StructuredTab::into_url)
                .filter(|url| !url.is_empty())
                .collect(),
        ),
        Err(_) => InputKind::Unrecognized,
    }
}

/// Parse a share locator, bare token, URL list, or structured export into
/// an ordered URL list.
pub fn parse_any(input: &str) -> Result<Vec<String>> {
    match classify(input) {
        InputKind::Token(token) => {
            debug!("parse_any: treating input as token");
            decode(token)
        }
        InputKind::UrlList(urls) => {
            debug!("parse_any: found {} plain urls", urls.len());
            Ok(urls)
        }
        InputKind::Structured(urls) => {
            debug!("parse_any: structured input with {} tabs", urls.len());
            Ok(urls)
        }
        InputKind::Unrecognized => Err(TabStateError::Parse(
            "expected a share link, token, URL list or JSON export".to_string(),
        )),
    }
}
