//! # Application State
//!
//! Core state for rankfavs. Domain data and the route stack only; presentation
//! state (cursor positions, text buffers) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── app_name: String                  // compact pane title
//! ├── lists: Option<Vec<ListEntry>>     // None until the store answers
//! ├── items: HashMap<ListId, Vec<..>>   // cached items per list
//! ├── routes: Vec<Route>                // navigation stack, root = Lists
//! └── status_message: String            // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::HashMap;

use crate::core::model::{ListEntry, ListId, ListItem};

/// A screen on the navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Lists,
    Detail(ListId),
    Import(ListId),
    CreateList,
}

pub struct App {
    pub app_name: String,
    pub lists: Option<Vec<ListEntry>>,
    pub items: HashMap<ListId, Vec<ListItem>>,
    /// Never empty; `routes[0]` is always `Route::Lists`.
    pub routes: Vec<Route>,
    pub status_message: String,
}

impl App {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            lists: None,
            items: HashMap::new(),
            routes: vec![Route::Lists],
            status_message: String::new(),
        }
    }

    pub fn route(&self) -> Route {
        self.routes.last().copied().unwrap_or(Route::Lists)
    }

    /// The list whose detail is the current screen, if any.
    pub fn open_detail(&self) -> Option<ListId> {
        match self.route() {
            Route::Detail(id) => Some(id),
            _ => None,
        }
    }

    pub fn list(&self, id: ListId) -> Option<&ListEntry> {
        self.lists.as_deref()?.iter().find(|entry| entry.id == id)
    }

    /// Items of a list in insertion order. Empty until loaded.
    pub fn items_for(&self, id: ListId) -> &[ListItem] {
        self.items.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }
}
