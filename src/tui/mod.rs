//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! store worker ──Action──► rx ─┐
//!                              ├─► update() ─► Effect ─► StoreWriter
//! keyboard ──TuiEvent──► dispatch()
//! ```
//!
//! Store updates arrive on a plain `std::sync::mpsc` channel and are drained
//! at the top of every iteration, so the screen refreshes within one poll
//! interval of a write landing. The loop only redraws when something changed.
//!
//! On quit the terminal is restored first, then the writer is dropped and the
//! worker awaited so queued insertions reach disk before the process exits.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::LayoutMode;
use crate::core::action::{Action, Effect, NavCommand, update};
use crate::core::config::ResolvedConfig;
use crate::core::import::commit_import;
use crate::core::state::{App, Route};
use crate::store::{ListStore, StoreWriter};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DetailEvent, DetailPaneState, ListsEvent, ListsPaneState, TextArea, TextEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long to wait for a key before checking the store channel again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Layout settings
    pub layout: LayoutMode,
    pub dual_pane_min_width: u16,
    pub list_pane_percent: u16,
    // Persistent component states
    pub lists: ListsPaneState,
    pub detail: DetailPaneState,
    pub import_form: TextArea,
    pub new_list: TextArea,
}

impl TuiState {
    pub fn new(layout: LayoutMode, dual_pane_min_width: u16, list_pane_percent: u16) -> Self {
        Self {
            layout,
            dual_pane_min_width,
            list_pane_percent,
            lists: ListsPaneState::new(),
            detail: DetailPaneState::new(),
            import_form: TextArea::new(true),
            new_list: TextArea::new(false),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            config.layout,
            config.dual_pane_min_width,
            config.list_pane_percent,
        )
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Bracketed paste delivers a pasted block as one event, newlines intact.
        // The keyboard protocol lets Ctrl+S arrive as a key instead of XOFF.
        execute!(
            stdout(),
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Run the TUI until the user quits. Must be called from a multi-threaded
/// tokio runtime: the store worker lives on the blocking pool.
pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let store = ListStore::open(&config.data_dir).map_err(io::Error::other)?;
    info!("Store opened at {}", store.path().display());

    let mut app = App::new(config.app_name.clone());
    let mut tui = TuiState::from_config(&config);

    // Channel for actions from the store worker
    let (tx, rx) = mpsc::channel();
    let (mut writer, worker) = StoreWriter::spawn(store, tx);
    writer.load_lists();

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Could not enable terminal modes: {}", e);
    }

    let result = event_loop(&mut terminal, &mut app, &mut tui, &mut writer, &rx);

    drop(terminal_mode_guard);
    ratatui::restore();

    // Closing the last sender lets the worker finish the queue and exit
    drop(writer);
    let handle = tokio::runtime::Handle::current();
    match tokio::task::block_in_place(|| handle.block_on(worker)) {
        Ok(store) => info!("Store flushed to {}", store.path().display()),
        Err(e) => warn!("Store worker ended abnormally: {}", e),
    }

    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    writer: &mut StoreWriter,
    rx: &mpsc::Receiver<Action>,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        // Store results first, so the frame shows the latest data
        for action in rx.try_iter() {
            needs_redraw = true;
            if apply(app, tui, writer, action) {
                return Ok(());
            }
        }

        tui.lists.sync(app.lists.as_deref());

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_INTERVAL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            let Some(action) = dispatch(app, tui, &event) else {
                continue;
            };
            if apply(app, tui, writer, action) {
                info!("Quit requested");
                return Ok(());
            }
        }
    }
}

/// Route one terminal event to the surface on top of the stack.
fn dispatch(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    // Ctrl+C always quits, whatever has focus
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    match app.route() {
        Route::Lists => match tui.lists.handle_event(event)? {
            ListsEvent::Open(id) => {
                tui.detail.reset();
                Some(Action::Navigate(NavCommand::OpenDetail(id)))
            }
            ListsEvent::CreateNew => {
                tui.new_list.clear();
                Some(Action::Navigate(NavCommand::CreateList))
            }
            ListsEvent::Quit => Some(Action::Quit),
        },
        Route::Detail(list_id) => match tui.detail.handle_event(event)? {
            DetailEvent::Import => {
                tui.import_form.clear();
                Some(Action::Navigate(NavCommand::Import(list_id)))
            }
            DetailEvent::Back => Some(Action::Navigate(NavCommand::Back)),
        },
        Route::Import(list_id) => match tui.import_form.handle_event(event)? {
            TextEvent::Commit(text) => Some(Action::SubmitImport { list_id, text }),
            TextEvent::Cancel => Some(Action::Navigate(NavCommand::Back)),
            TextEvent::ContentChanged => None,
        },
        Route::CreateList => match tui.new_list.handle_event(event)? {
            TextEvent::Commit(name) => Some(Action::SubmitNewList(name)),
            TextEvent::Cancel => Some(Action::Navigate(NavCommand::Back)),
            TextEvent::ContentChanged => None,
        },
    }
}

/// Feed an action through the core and perform the resulting effect.
/// Returns true when the app should quit.
fn apply(app: &mut App, tui: &mut TuiState, writer: &mut StoreWriter, action: Action) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::Quit => true,
        Effect::LoadItems(list_id) => {
            writer.load_items(list_id);
            false
        }
        Effect::CreateList(name) => {
            writer.create_list(name);
            false
        }
        Effect::Import { list_id, text } => {
            // Every insertion is queued before the form closes
            let back = commit_import(list_id, &text, writer);
            tui.import_form.clear();
            debug!("Import queued for list {}, leaving form", list_id);
            apply(app, tui, writer, Action::Navigate(back))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn test_tui() -> TuiState {
        let mut tui = TuiState::new(LayoutMode::Auto, 100, 40);
        tui.lists.sync(test_app().lists.as_deref());
        tui
    }

    fn type_text(app: &App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            assert_eq!(dispatch(app, tui, &TuiEvent::InputChar(c)), None);
        }
    }

    #[test]
    fn test_ctrl_c_quits_from_any_route() {
        let mut app = test_app();
        let mut tui = test_tui();
        update(&mut app, Action::Navigate(NavCommand::OpenDetail(1)));
        update(&mut app, Action::Navigate(NavCommand::Import(1)));
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::ForceQuit),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_enter_on_lists_opens_cursor_entry() {
        let app = test_app();
        let mut tui = test_tui();
        dispatch(&app, &mut tui, &TuiEvent::CursorDown);
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::Navigate(NavCommand::OpenDetail(2)))
        );
    }

    #[test]
    fn test_detail_import_clears_stale_form() {
        let mut app = test_app();
        let mut tui = test_tui();
        tui.import_form.buffer = "left over".to_string();
        update(&mut app, Action::Navigate(NavCommand::OpenDetail(3)));
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::InputChar('i')),
            Some(Action::Navigate(NavCommand::Import(3)))
        );
        assert!(tui.import_form.buffer.is_empty());
    }

    #[test]
    fn test_import_form_commits_on_save_only() {
        let mut app = test_app();
        let mut tui = test_tui();
        update(&mut app, Action::Navigate(NavCommand::OpenDetail(1)));
        update(&mut app, Action::Navigate(NavCommand::Import(1)));

        type_text(&app, &mut tui, "Dune");
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::Submit), None);
        type_text(&app, &mut tui, "Emma");
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::Save),
            Some(Action::SubmitImport {
                list_id: 1,
                text: "Dune\nEmma".to_string()
            })
        );
    }

    #[test]
    fn test_import_form_escape_goes_back() {
        let mut app = test_app();
        let mut tui = test_tui();
        update(&mut app, Action::Navigate(NavCommand::OpenDetail(1)));
        update(&mut app, Action::Navigate(NavCommand::Import(1)));
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::Escape),
            Some(Action::Navigate(NavCommand::Back))
        );
    }

    #[test]
    fn test_create_list_form_commits_on_enter() {
        let mut app = test_app();
        let mut tui = test_tui();
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::InputChar('n')),
            Some(Action::Navigate(NavCommand::CreateList))
        );
        update(&mut app, Action::Navigate(NavCommand::CreateList));
        type_text(&app, &mut tui, "Albums");
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::SubmitNewList("Albums".to_string()))
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_import_inserts_in_order_and_returns_to_detail() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ListStore::open(dir.path()).unwrap();
        let books = store.create_list("Books");

        let (tx, rx) = mpsc::channel();
        let (mut writer, worker) = StoreWriter::spawn(store, tx);
        let mut app = App::new("Rank Favs");
        let mut tui = test_tui();

        for command in [NavCommand::OpenDetail(books), NavCommand::Import(books)] {
            assert!(!apply(&mut app, &mut tui, &mut writer, Action::Navigate(command)));
        }
        tui.import_form.buffer = "- Dune\n* Emma".to_string();

        let quit = apply(
            &mut app,
            &mut tui,
            &mut writer,
            Action::SubmitImport {
                list_id: books,
                text: "- Dune\n* Emma".to_string(),
            },
        );
        assert!(!quit);
        assert_eq!(app.route(), Route::Detail(books));
        assert_eq!(app.status_message, "Imported 2 items");
        assert!(tui.import_form.buffer.is_empty());

        drop(writer);
        let store = worker.await.unwrap();
        let names: Vec<String> = store.items(books).into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Dune", "Emma"]);

        // The worker's refreshed items feed back into the core
        for action in rx.try_iter() {
            update(&mut app, action);
        }
        assert_eq!(app.items_for(books).len(), 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_quit_effect_stops_loop() {
        let dir = tempfile::tempdir().unwrap();
        let store = ListStore::open(dir.path()).unwrap();
        let (tx, _rx) = mpsc::channel();
        let (mut writer, worker) = StoreWriter::spawn(store, tx);
        let mut app = test_app();
        let mut tui = test_tui();

        assert!(apply(&mut app, &mut tui, &mut writer, Action::Quit));
        drop(writer);
        worker.await.unwrap();
    }
}
