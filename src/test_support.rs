//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, update};
use crate::core::import::InsertionSink;
use crate::core::model::{ItemInsertionRequest, ListEntry};
use crate::core::state::App;

/// A sink that records every request it receives, in order.
#[derive(Default)]
pub struct RecordingSink {
    pub requests: Vec<ItemInsertionRequest>,
}

impl InsertionSink for RecordingSink {
    fn insert(&mut self, request: ItemInsertionRequest) {
        self.requests.push(request);
    }
}

/// Three lists with ids 1..=3.
pub fn sample_lists() -> Vec<ListEntry> {
    vec![
        ListEntry::new(1, "Books"),
        ListEntry::new(2, "Films"),
        ListEntry::new(3, "Games"),
    ]
}

/// Creates a test App with the sample lists already loaded.
pub fn test_app() -> App {
    let mut app = App::new("Rank Favs");
    update(&mut app, Action::ListsLoaded(sample_lists()));
    app
}
