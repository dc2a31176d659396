use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Epoch millis.
    pub added_at: i64,
}

/// Ordered set of watched assets, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watchlist {
    items: Vec<WatchlistItem>,
}

impl Watchlist {
    pub fn items(&self) -> &[WatchlistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    /// Returns false if the id is already watched.
    pub fn add(&mut self, id: &str, symbol: &str, name: &str, added_at: i64) -> bool {
        if self.contains(id) {
            return false;
        }
        self.items.push(WatchlistItem {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            added_at,
        });
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

pub fn watchlist_path() -> PathBuf {
    std::env::var("COINSCOPE_WATCHLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/watchlist.json"))
}

/// Missing file loads as an empty watchlist.
pub fn load_watchlist_from_path(path: &Path) -> Result<Watchlist> {
    if !path.exists() {
        return Ok(Watchlist::default());
    }
    let payload = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let items: Vec<WatchlistItem> =
        serde_json::from_str(&payload).context("failed to parse watchlist json")?;

    let mut list = Watchlist::default();
    for item in items {
        list.add(&item.id, &item.symbol, &item.name, item.added_at);
    }
    Ok(list)
}

pub fn persist_watchlist_to_path(path: &Path, list: &Watchlist) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let json =
        serde_json::to_string_pretty(list.items()).context("failed to serialize watchlist json")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub fn load_watchlist() -> Result<Watchlist> {
    load_watchlist_from_path(&watchlist_path())
}

pub fn persist_watchlist(list: &Watchlist) -> Result<()> {
    persist_watchlist_to_path(&watchlist_path(), list)
}
