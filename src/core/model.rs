//! # Data Model
//!
//! Value types shared by the core, the store and the TUI.
//!
//! ```text
//! ListEntry ──┐
//!   id        │ 1
//!   name      │
//!             │ n
//! ListItem ◄──┘          ItemInsertionRequest
//!   id                     parent_list_id  ──► ListEntry.id
//!   list_id                name
//!   name
//!   created_at
//! ```
//!
//! Nothing here holds references into the store: everything is cloned out
//! and passed by value into the pure core functions.

use serde::{Deserialize, Serialize};

pub type ListId = u32;
pub type ItemId = u32;

/// A named list. Ids are assigned by the store and never change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: ListId,
    pub name: String,
}

impl ListEntry {
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A single item belonging to a list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: ItemId,
    pub list_id: ListId,
    pub name: String,
    /// Unix seconds.
    pub created_at: i64,
}

/// One create-item request, built per imported line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ItemInsertionRequest {
    pub parent_list_id: ListId,
    pub name: String,
}

impl ItemInsertionRequest {
    pub fn new(parent_list_id: ListId, name: impl Into<String>) -> Self {
        Self {
            parent_list_id,
            name: name.into(),
        }
    }
}
