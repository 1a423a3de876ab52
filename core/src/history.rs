//! # Alias History
//!
//! The list of aliases the user decided to keep.
//!
//! The list lives in memory and is mirrored to a [`KeyValueStore`] under
//! [`HISTORY_KEY`]: it is read once by [`History::load`] and written back
//! after every change. Entries are unique on their alias string and are kept
//! newest first.

use aliasguard_common::history::{HISTORY_KEY, HistoryEntry};
use aliasguard_common::store::KeyValueStore;
use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::{debug, error};

pub struct History {
    entries: Vec<HistoryEntry>,
    store: Box<dyn KeyValueStore>,
}

impl History {
    /// Reads the persisted history from `store`.
    ///
    /// A store without the history key yields an empty history. A value that
    /// does not deserialize is logged and dropped from the store, and the
    /// history starts over empty.
    pub fn load(mut store: Box<dyn KeyValueStore>) -> anyhow::Result<Self> {
        let entries: Vec<HistoryEntry> = match store.get(HISTORY_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    error!("Failed to parse stored history, starting fresh: {e}");
                    store
                        .remove(HISTORY_KEY)
                        .context("failed to drop corrupt history")?;
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        debug!(entries = entries.len(), "history loaded");
        Ok(Self { entries, store })
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.entries.iter().any(|entry| entry.alias == alias)
    }

    /// Saves `alias` stamped with the current time.
    ///
    /// Returns `false` without touching the store when the alias is already
    /// present.
    pub fn save(&mut self, alias: &str) -> anyhow::Result<bool> {
        self.save_at(alias, Utc::now())
    }

    pub fn save_at(&mut self, alias: &str, created_at: DateTime<Utc>) -> anyhow::Result<bool> {
        if self.contains(alias) {
            return Ok(false);
        }
        self.entries.insert(0, HistoryEntry::at(alias, created_at));
        self.persist()?;
        Ok(true)
    }

    /// Saves every alias in order and returns how many were new.
    ///
    /// The store is written once for the whole batch.
    pub fn save_all<I, S>(&mut self, aliases: I) -> anyhow::Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let now = Utc::now();
        let mut inserted: usize = 0;
        for alias in aliases {
            let alias = alias.as_ref();
            if !self.contains(alias) {
                self.entries.insert(0, HistoryEntry::at(alias, now));
                inserted += 1;
            }
        }
        if inserted > 0 {
            self.persist()?;
        }
        Ok(inserted)
    }

    /// Deletes the entry for `alias`; returns whether one existed.
    pub fn remove(&mut self, alias: &str) -> anyhow::Result<bool> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.alias != alias);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Deletes every entry and returns how many there were.
    pub fn clear(&mut self) -> anyhow::Result<usize> {
        let removed = self.entries.len();
        if removed == 0 {
            return Ok(0);
        }
        self.entries.clear();
        self.persist()?;
        Ok(removed)
    }

    fn persist(&mut self) -> anyhow::Result<()> {
        let raw = serde_json::to_string(&self.entries).context("failed to serialize history")?;
        self.store
            .set(HISTORY_KEY, &raw)
            .context("failed to persist history")?;
        debug!(entries = self.entries.len(), "history persisted");
        Ok(())
    }
}
