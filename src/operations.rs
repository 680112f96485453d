/// Tab operations: capturing the current window and reopening saved tabs
use log::{info, warn};
use serde::Serialize;

use crate::error::Result;
use crate::tab_data::{TabInfo, TabState};

/// Provides the tabs of the current window, in window order
#[allow(async_fn_in_trait)]
pub trait TabSource {
    async fn current_window_tabs(&self) -> Result<Vec<TabInfo>>;
}

/// Opens a single tab in the background
#[allow(async_fn_in_trait)]
pub trait TabSink {
    async fn create_tab(&self, url: &str) -> Result<()>;
}

/// Outcome of reopening a list of URLs
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpenReport {
    pub opened: usize,
    pub failed: Vec<String>,
}

/// Capture the shareable tabs of the current window as a state stamped `now`.
pub async fn collect_shareable_tabs<T: TabSource>(source: &T, now: u64) -> Result<TabState> {
    let tabs: Vec<TabInfo> = source
        .current_window_tabs()
        .await?
        .into_iter()
        .filter(TabInfo::is_shareable)
        .collect();

    Ok(TabState::new(tabs, now))
}

/// Capture the current window and keep only the shareable tabs at `indices`.
///
/// Indices refer to positions in the captured (already filtered) list.
pub async fn select_shareable_tabs<T: TabSource>(
    source: &T,
    indices: &[usize],
    now: u64,
) -> Result<TabState> {
    Ok(collect_shareable_tabs(source, now).await?.select(indices, now))
}

/// Open `urls` one after another so they land in order.
///
/// Each creation is awaited before the next starts. A failure is logged
/// and recorded but does not stop the remaining tabs from opening.
pub async fn open_tabs<T: TabSink, S: AsRef<str>>(sink: &T, urls: &[S]) -> OpenReport {
    let mut report = OpenReport::default();

    for url in urls {
        let url = url.as_ref();
        match sink.create_tab(url).await {
            Ok(()) => report.opened += 1,
            Err(e) => {
                warn!("{}", e);
                report.failed.push(url.to_string());
            }
        }
    }

    info!("opened {} tabs, {} failed", report.opened, report.failed.len());
    report
}
