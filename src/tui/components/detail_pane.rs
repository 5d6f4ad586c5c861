//! # Detail Pane Component
//!
//! Shows the items of one list, in insertion order.
//!
//! With no list open (wide layout, lists pane focused) it renders a
//! placeholder so the right half of the screen isn't blank.

use chrono::{DateTime, Local, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::model::{ListEntry, ListItem as FavItem};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const NO_ITEMS_MESSAGE: &str = "No items yet. Press i to import.";
const PLACEHOLDER_MESSAGE: &str = "Select a list to see its items.";

#[derive(Default)]
pub struct DetailPaneState {
    pub list_state: ListState,
    /// Item count from the last render, for clamping the cursor
    item_count: usize,
}

impl DetailPaneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the scroll position (a different list was opened).
    pub fn reset(&mut self) {
        self.list_state = ListState::default();
        self.item_count = 0;
    }
}

/// Events emitted by the detail pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    Import,
    Back,
}

impl EventHandler for DetailPaneState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match event {
            TuiEvent::CursorUp => {
                if self.item_count > 0 {
                    let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
                    self.list_state.select(Some(prev));
                }
                None
            }
            TuiEvent::CursorDown => {
                if self.item_count > 0 {
                    let next = self
                        .list_state
                        .selected()
                        .map_or(0, |i| (i + 1).min(self.item_count - 1));
                    self.list_state.select(Some(next));
                }
                None
            }
            TuiEvent::InputChar('i') => Some(DetailEvent::Import),
            TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::CursorLeft => {
                Some(DetailEvent::Back)
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the detail pane.
pub struct DetailPane<'a> {
    state: &'a mut DetailPaneState,
    /// `None` when nothing is open
    list: Option<&'a ListEntry>,
    items: &'a [FavItem],
    focused: bool,
}

impl<'a> DetailPane<'a> {
    pub fn new(
        state: &'a mut DetailPaneState,
        list: Option<&'a ListEntry>,
        items: &'a [FavItem],
        focused: bool,
    ) -> Self {
        Self {
            state,
            list,
            items,
            focused,
        }
    }
}

impl Component for DetailPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let title = match self.list {
            Some(list) => format!(" {} ({}) ", list.name, self.items.len()),
            None => String::new(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title)
            .padding(Padding::horizontal(1));

        self.state.item_count = self.items.len();

        let message = match self.list {
            None => Some(PLACEHOLDER_MESSAGE),
            Some(_) if self.items.is_empty() => Some(NO_ITEMS_MESSAGE),
            Some(_) => None,
        };
        if let Some(message) = message {
            let paragraph = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let number_width = self.items.len().to_string().len();
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let dim = Style::default().fg(Color::DarkGray);
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>number_width$}. ", index + 1), dim),
                    Span::raw(item.name.as_str()),
                    Span::styled(format!("  {}", format_timestamp(item.created_at)), dim),
                ]))
            })
            .collect();

        let list = List::new(rows)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Format a Unix timestamp as "Jan 15" style date.
fn format_timestamp(ts: i64) -> String {
    let dt: DateTime<Local> = DateTime::<Utc>::from_timestamp(ts, 0)
        .unwrap_or_default()
        .with_timezone(&Local);
    dt.format("%b %d").to_string()
}
