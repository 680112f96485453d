/// Data structures for Tab State QR
use serde::{Deserialize, Serialize};

/// URL schemes that never make it into a shared state
const EXCLUDED_SCHEMES: [&str; 2] = ["chrome://", "chrome-extension://"];

/// Information about a browser tab, as reported by the tab inventory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fav_icon_url: Option<String>,
}

impl TabInfo {
    pub fn new(url: String, title: String, fav_icon_url: Option<String>) -> TabInfo {
        TabInfo {
            url,
            title,
            fav_icon_url,
        }
    }

    /// Internal browser pages and tabs without a URL cannot be shared
    pub fn is_shareable(&self) -> bool {
        !self.url.is_empty()
            && !EXCLUDED_SCHEMES
                .iter()
                .any(|scheme| self.url.starts_with(scheme))
    }
}

/// The ordered set of tabs being exported.
///
/// Only the URLs survive encoding; titles and favicons exist for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TabState {
    pub tabs: Vec<TabInfo>,
    #[serde(default)]
    pub timestamp: u64,
}

impl TabState {
    pub fn new(tabs: Vec<TabInfo>, timestamp: u64) -> TabState {
        TabState { tabs, timestamp }
    }

    pub fn urls(&self) -> Vec<String> {
        self.tabs.iter().map(|tab| tab.url.clone()).collect()
    }

    /// Keep only the tabs at `indices`, in their original order.
    /// Indices past the end are ignored.
    pub fn select(&self, indices: &[usize], timestamp: u64) -> TabState {
        let tabs = self
            .tabs
            .iter()
            .enumerate()
            .filter(|(i, _)| indices.contains(i))
            .map(|(_, tab)| tab.clone())
            .collect();

        TabState { tabs, timestamp }
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}
