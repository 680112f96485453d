/// Persistence of the history log in a key-value store
///
/// The whole log lives under one key and every change rewrites it. With at
/// most twenty small entries that costs nothing worth optimising.
use std::cell::RefCell;
use std::collections::HashMap;

use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, TabStateError};
use crate::history::{HISTORY_CAPACITY, HistoryEntry, HistoryLog};

/// Key under which the history log is stored
pub const HISTORY_KEY: &str = "tabstate_history";

/// Durable key-value storage, such as `chrome.storage.local`.
///
/// Writes are last-writer-wins; two contexts saving at once may lose one
/// of the saves.
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if nothing was ever written.
    async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>;

    /// Replace the value under `key`.
    async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()>;
}

/// In-process store holding JSON values; used when no browser storage exists
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, serde_json::Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let value = self.values.borrow().get(key).cloned();
        value
            .map(|value| {
                serde_json::from_value(value).map_err(|e| {
                    TabStateError::Storage(format!("Failed to parse {}: {}", key, e))
                })
            })
            .transpose()
    }

    async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| TabStateError::Storage(format!("Failed to serialize {}: {}", key, e)))?;
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

/// Where and how much history is kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    pub storage_key: String,
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            storage_key: HISTORY_KEY.to_string(),
            capacity: HISTORY_CAPACITY,
        }
    }
}

/// Saves, lists and restores exported tab states.
///
/// The log is read from the store on every call; nothing is cached.
pub struct HistoryStore<S> {
    store: S,
    config: HistoryConfig,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, HistoryConfig::default())
    }

    pub fn with_config(store: S, config: HistoryConfig) -> Self {
        HistoryStore { store, config }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    async fn load(&self) -> Result<HistoryLog> {
        Ok(self
            .store
            .get::<HistoryLog>(&self.config.storage_key)
            .await?
            .unwrap_or_default())
    }

    /// Save `urls` as a new entry stamped with the current time.
    pub async fn save<U: AsRef<str>>(&mut self, urls: &[U]) -> Result<HistoryEntry> {
        self.save_at(urls, crate::bridge::now_millis()).await
    }

    /// Save `urls` as a new entry created at `now` (milliseconds).
    ///
    /// Takes `&mut self` so that nothing else on this store can run between
    /// reading the log and writing it back.
    pub async fn save_at<U: AsRef<str>>(&mut self, urls: &[U], now: u64) -> Result<HistoryEntry> {
        let mut log = self.load().await?;
        let entry = HistoryEntry::new(log.next_id(now), now, urls);

        let evicted = log.insert(entry.clone(), self.config.capacity);
        self.store.set(&self.config.storage_key, &log).await?;

        info!(
            "saved history entry {} with {} tabs ({} evicted)",
            entry.id,
            entry.tab_count,
            evicted.len()
        );
        Ok(entry)
    }

    /// All entries, newest first.
    pub async fn list(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.load().await?.into_entries())
    }

    /// URLs of the entry saved under `id`.
    pub async fn restore(&self, id: u64) -> Result<Vec<String>> {
        let urls = self.load().await?.restore(id)?;
        debug!("restored history entry {} with {} urls", id, urls.len());
        Ok(urls)
    }
}
