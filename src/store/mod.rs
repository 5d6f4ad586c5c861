//! # List Store
//!
//! Persists lists and their items to `<data_dir>/lists.json`.
//!
//! The whole store is one small JSON document, loaded at startup. Mutations
//! only touch memory; [`ListStore::flush`] writes them out in one go using
//! atomic rename (write `.tmp`, then `rename()`). A failed flush rolls memory
//! back to what is on disk, so readers never see data that wasn't saved.
//!
//! Lists and items are append-only, which makes the last saved state a
//! handful of lengths and counters (a `Checkpoint`).
//!
//! The TUI never touches `ListStore` directly: it talks to a [`StoreWriter`],
//! which forwards commands to a single worker that owns the store.

mod writer;

pub use writer::{StoreCommand, StoreWriter};

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::model::{ItemId, ItemInsertionRequest, ListEntry, ListId, ListItem};

const STORE_FILE: &str = "lists.json";

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Json(serde_json::Error),
    /// An insertion named a parent list that doesn't exist.
    UnknownList(ListId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "store I/O error: {e}"),
            StoreError::Json(e) => write!(f, "store format error: {e}"),
            StoreError::UnknownList(id) => write!(f, "no list with id {id}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

/// On-disk document.
#[derive(Serialize, Deserialize, Debug)]
struct StoreData {
    next_list_id: ListId,
    next_item_id: ItemId,
    lists: Vec<ListEntry>,
    /// Kept in insertion order.
    items: Vec<ListItem>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            next_list_id: 1,
            next_item_id: 1,
            lists: Vec::new(),
            items: Vec::new(),
        }
    }
}

/// Shape of the data at the last successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Checkpoint {
    next_list_id: ListId,
    next_item_id: ItemId,
    lists: usize,
    items: usize,
}

impl Checkpoint {
    fn of(data: &StoreData) -> Self {
        Self {
            next_list_id: data.next_list_id,
            next_item_id: data.next_item_id,
            lists: data.lists.len(),
            items: data.items.len(),
        }
    }
}

pub struct ListStore {
    path: PathBuf,
    data: StoreData,
    saved: Checkpoint,
}

impl ListStore {
    /// Open the store in `data_dir`, creating the directory if needed.
    /// A missing file is an empty store.
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(data_dir)?;
        let path = data_dir.join(STORE_FILE);
        let data = if path.exists() {
            let json = fs::read_to_string(&path)?;
            serde_json::from_str(&json)?
        } else {
            StoreData::default()
        };
        info!(
            "Opened store at {} ({} lists, {} items)",
            path.display(),
            data.lists.len(),
            data.items.len()
        );
        let saved = Checkpoint::of(&data);
        Ok(Self { path, data, saved })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All lists, sorted by name (case-insensitive), ties by id.
    pub fn lists(&self) -> Vec<ListEntry> {
        let mut lists = self.data.lists.clone();
        lists.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        lists
    }

    /// Items of one list, in insertion order.
    pub fn items(&self, list_id: ListId) -> Vec<ListItem> {
        self.data
            .items
            .iter()
            .filter(|item| item.list_id == list_id)
            .cloned()
            .collect()
    }

    /// Add a list in memory. Call [`flush`](Self::flush) to persist it.
    pub fn create_list(&mut self, name: &str) -> ListId {
        let id = self.data.next_list_id;
        self.data.next_list_id += 1;
        self.data.lists.push(ListEntry::new(id, name));
        debug!("Created list {} ({:?})", id, name);
        id
    }

    /// Append an item in memory. Rejects parents that don't exist.
    pub fn insert_item(&mut self, request: ItemInsertionRequest) -> Result<ItemId, StoreError> {
        let parent = request.parent_list_id;
        if !self.data.lists.iter().any(|list| list.id == parent) {
            return Err(StoreError::UnknownList(parent));
        }
        let id = self.data.next_item_id;
        self.data.next_item_id += 1;
        self.data.items.push(ListItem {
            id,
            list_id: parent,
            name: request.name,
            created_at: Utc::now().timestamp(),
        });
        Ok(id)
    }

    /// Whether memory holds changes that aren't on disk yet.
    pub fn has_unsaved_changes(&self) -> bool {
        Checkpoint::of(&self.data) != self.saved
    }

    /// Write pending changes to disk. On failure every change since the last
    /// successful flush is dropped, including the id counters.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        if !self.has_unsaved_changes() {
            return Ok(());
        }
        match atomic_write_json(&self.path, &self.data) {
            Ok(()) => {
                self.saved = Checkpoint::of(&self.data);
                debug!(
                    "Flushed store ({} lists, {} items)",
                    self.saved.lists, self.saved.items
                );
                Ok(())
            }
            Err(e) => {
                self.rollback();
                Err(e)
            }
        }
    }

    fn rollback(&mut self) {
        let saved = self.saved;
        warn!(
            "Discarding {} unsaved lists and {} unsaved items",
            self.data.lists.len() - saved.lists,
            self.data.items.len() - saved.items
        );
        self.data.lists.truncate(saved.lists);
        self.data.items.truncate(saved.items);
        self.data.next_list_id = saved.next_list_id;
        self.data.next_item_id = saved.next_item_id;
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), StoreError> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
