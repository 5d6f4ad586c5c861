//! # Actions
//!
//! Everything that can happen in rankfavs becomes an `Action`.
//! User opens a list? That's `Action::Navigate(NavCommand::OpenDetail(id))`.
//! The store finishes a write? That's `Action::ItemsLoaded { .. }`.
//!
//! `update()` mutates the state and returns an `Effect` describing the I/O the
//! caller has to perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::import;
use crate::core::model::{ListEntry, ListId, ListItem};
use crate::core::state::{App, Route};

/// Navigation requests emitted by the surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    OpenDetail(ListId),
    CreateList,
    Import(ListId),
    Back,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ListsLoaded(Vec<ListEntry>),
    ItemsLoaded { list_id: ListId, items: Vec<ListItem> },
    Navigate(NavCommand),
    /// Import form committed its text.
    SubmitImport { list_id: ListId, text: String },
    /// Create-list form committed a name.
    SubmitNewList(String),
    StoreFailed(String),
    Quit,
}

/// I/O the caller performs after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    LoadItems(ListId),
    CreateList(String),
    /// Issue the parsed lines to the store, then navigate back once.
    Import { list_id: ListId, text: String },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::ListsLoaded(lists) => {
            debug!("Lists loaded: {}", lists.len());
            app.lists = Some(lists);
            Effect::None
        }
        Action::ItemsLoaded { list_id, items } => {
            debug!("Items loaded for list {}: {}", list_id, items.len());
            app.items.insert(list_id, items);
            Effect::None
        }
        Action::Navigate(command) => navigate(app, command),
        Action::SubmitImport { list_id, text } => {
            let count = import::extract_lines(&text).len();
            app.status_message = format!("Imported {} items", count);
            Effect::Import { list_id, text }
        }
        Action::SubmitNewList(name) => {
            let name = name.trim().to_string();
            if name.is_empty() {
                app.status_message = "List name can't be empty".to_string();
                return Effect::None;
            }
            info!("Creating list {:?}", name);
            app.status_message = format!("Created {}", name);
            pop_route(app);
            Effect::CreateList(name)
        }
        Action::StoreFailed(message) => {
            warn!("Store failure surfaced to UI: {}", message);
            app.status_message = format!("Store error: {}", message);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn navigate(app: &mut App, command: NavCommand) -> Effect {
    debug!("Navigate: {:?}", command);
    match command {
        NavCommand::OpenDetail(id) => {
            // Only one detail at a time: opening another replaces it.
            app.routes.truncate(1);
            app.routes.push(Route::Detail(id));
            Effect::LoadItems(id)
        }
        NavCommand::Import(id) => {
            app.routes.push(Route::Import(id));
            Effect::None
        }
        NavCommand::CreateList => {
            app.routes.push(Route::CreateList);
            Effect::None
        }
        NavCommand::Back => {
            pop_route(app);
            match app.route() {
                Route::Detail(id) => Effect::LoadItems(id),
                _ => Effect::None,
            }
        }
    }
}

fn pop_route(app: &mut App) {
    if app.routes.len() > 1 {
        app.routes.pop();
    }
}
