//! Ordered, fire-and-forget access to the store.
//!
//! ```text
//! StoreWriter::insert ─┐
//! StoreWriter::insert ─┼─► unbounded channel (FIFO) ─► worker (owns ListStore)
//! StoreWriter::create ─┘                                   │
//!                                                          ▼
//!                        Action::ListsLoaded / ItemsLoaded / StoreFailed
//! ```
//!
//! One worker drains the queue in order, so a batch of insertions lands in
//! the order it was issued. A failed command is reported and the queue keeps
//! going: a batch can complete partially.
//!
//! Commands only change memory. The file is written once per drained burst,
//! then the refreshed views are published. If that write fails the store
//! rolls back and the published views show what is actually on disk.

use std::collections::BTreeSet;
use std::sync::mpsc;

use log::{debug, info, warn};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

use super::{ListStore, StoreError};
use crate::core::action::Action;
use crate::core::import::InsertionSink;
use crate::core::model::{ItemInsertionRequest, ListId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    CreateList(String),
    Insert(ItemInsertionRequest),
    LoadLists,
    LoadItems(ListId),
}

/// Cheap handle for queueing store commands.
#[derive(Clone)]
pub struct StoreWriter {
    tx: UnboundedSender<StoreCommand>,
}

impl StoreWriter {
    /// Start the worker on tokio's blocking pool. The handle resolves to the
    /// store once every `StoreWriter` clone has been dropped and the queue is
    /// drained.
    pub fn spawn(store: ListStore, actions: mpsc::Sender<Action>) -> (Self, JoinHandle<ListStore>) {
        let (tx, rx) = unbounded_channel();
        let handle = tokio::task::spawn_blocking(move || run_worker(store, rx, actions));
        (Self { tx }, handle)
    }

    pub fn create_list(&self, name: String) {
        self.send(StoreCommand::CreateList(name));
    }

    pub fn load_lists(&self) {
        self.send(StoreCommand::LoadLists);
    }

    pub fn load_items(&self, list_id: ListId) {
        self.send(StoreCommand::LoadItems(list_id));
    }

    fn send(&self, command: StoreCommand) {
        if self.tx.send(command).is_err() {
            warn!("Store worker is gone, dropping command");
        }
    }
}

impl InsertionSink for StoreWriter {
    fn insert(&mut self, request: ItemInsertionRequest) {
        self.send(StoreCommand::Insert(request));
    }
}

/// What a burst of commands changed, so each view is refreshed once.
#[derive(Default)]
struct Refresh {
    lists: bool,
    items: BTreeSet<ListId>,
}

fn run_worker(
    mut store: ListStore,
    mut rx: UnboundedReceiver<StoreCommand>,
    actions: mpsc::Sender<Action>,
) -> ListStore {
    info!("Store worker started");
    while let Some(first) = rx.blocking_recv() {
        let mut refresh = Refresh::default();
        apply(&mut store, first, &mut refresh, &actions);
        // Drain whatever else is already queued before publishing
        while let Ok(command) = rx.try_recv() {
            apply(&mut store, command, &mut refresh, &actions);
        }
        if let Err(e) = store.flush() {
            report_failure(&e, &actions);
        }
        publish(&store, refresh, &actions);
    }
    info!("Store worker stopped");
    store
}

fn apply(
    store: &mut ListStore,
    command: StoreCommand,
    refresh: &mut Refresh,
    actions: &mpsc::Sender<Action>,
) {
    debug!("Store command: {:?}", command);
    let result = match command {
        StoreCommand::CreateList(name) => {
            refresh.lists = true;
            store.create_list(&name);
            Ok(())
        }
        StoreCommand::Insert(request) => {
            refresh.items.insert(request.parent_list_id);
            store.insert_item(request).map(|_| ())
        }
        StoreCommand::LoadLists => {
            refresh.lists = true;
            Ok(())
        }
        StoreCommand::LoadItems(list_id) => {
            refresh.items.insert(list_id);
            Ok(())
        }
    };

    if let Err(e) = result {
        report_failure(&e, actions);
    }
}

fn report_failure(error: &StoreError, actions: &mpsc::Sender<Action>) {
    warn!("Store command failed: {}", error);
    if actions.send(Action::StoreFailed(error.to_string())).is_err() {
        debug!("Failure report dropped: receiver gone");
    }
}

fn publish(store: &ListStore, refresh: Refresh, actions: &mpsc::Sender<Action>) {
    let mut updates = Vec::new();
    if refresh.lists {
        updates.push(Action::ListsLoaded(store.lists()));
    }
    for list_id in refresh.items {
        updates.push(Action::ItemsLoaded {
            list_id,
            items: store.items(list_id),
        });
    }
    for update in updates {
        if actions.send(update).is_err() {
            debug!("Store update dropped: receiver gone");
            return;
        }
    }
}
