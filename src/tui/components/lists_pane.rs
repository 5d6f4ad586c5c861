//! # Lists Pane Component
//!
//! Browses every list. On a narrow terminal this is the home screen; on a
//! wide one it sits left of the detail pane.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ListsPaneState` lives in `TuiState` (keyboard cursor)
//! - `ListsPane` is created each frame with borrowed state and props
//!
//! Two separate highlights are drawn: the keyboard cursor (`›` marker, bold)
//! and the selection decided by the core (background fill).

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::model::{ListEntry, ListId};
use crate::core::selection::ListsView;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const EMPTY_MESSAGE: &str = "No lists yet. Press n to create one.";

/// Persistent state for the lists pane.
#[derive(Default)]
pub struct ListsPaneState {
    /// Ids in display order, synced from the app every loop iteration
    ids: Vec<ListId>,
    pub list_state: ListState,
}

impl ListsPaneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync with the latest lists, keeping the cursor on the same id when
    /// it still exists.
    pub fn sync(&mut self, lists: Option<&[ListEntry]>) {
        let ids: Vec<ListId> = lists
            .unwrap_or_default()
            .iter()
            .map(|entry| entry.id)
            .collect();
        if ids == self.ids {
            return;
        }
        let current = self.cursor_id();
        self.ids = ids;
        let index = current
            .and_then(|id| self.ids.iter().position(|&other| other == id))
            .or_else(|| (!self.ids.is_empty()).then_some(0));
        self.list_state.select(index);
    }

    pub fn cursor_id(&self) -> Option<ListId> {
        self.list_state
            .selected()
            .and_then(|index| self.ids.get(index).copied())
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.ids.is_empty() {
            return;
        }
        let last = self.ids.len() - 1;
        let current = self.list_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.list_state.select(Some(next));
    }
}

/// Events emitted by the lists pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListsEvent {
    Open(ListId),
    CreateNew,
    Quit,
}

impl EventHandler for ListsPaneState {
    type Event = ListsEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListsEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.move_cursor(-1);
                None
            }
            TuiEvent::CursorDown => {
                self.move_cursor(1);
                None
            }
            TuiEvent::Submit | TuiEvent::CursorRight => self.cursor_id().map(ListsEvent::Open),
            TuiEvent::InputChar('n') => Some(ListsEvent::CreateNew),
            TuiEvent::InputChar('q') | TuiEvent::Escape => Some(ListsEvent::Quit),
            _ => None,
        }
    }
}

/// Transient render wrapper for the lists pane.
pub struct ListsPane<'a> {
    state: &'a mut ListsPaneState,
    view: ListsView<'a>,
    title: &'a str,
    focused: bool,
}

impl<'a> ListsPane<'a> {
    pub fn new(
        state: &'a mut ListsPaneState,
        view: ListsView<'a>,
        title: &'a str,
        focused: bool,
    ) -> Self {
        Self {
            state,
            view,
            title,
            focused,
        }
    }
}

impl Component for ListsPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));

        let rows = match &self.view {
            ListsView::Empty => {
                let empty = Paragraph::new(EMPTY_MESSAGE)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block);
                frame.render_widget(empty, area);
                return;
            }
            ListsView::Rows(rows) => rows,
        };

        let items: Vec<ListItem> = rows
            .iter()
            .map(|row| {
                let style = if row.selected {
                    Style::default().fg(Color::White).bg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(row.entry.name.as_str())).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_symbol("› ")
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
