//! # TextArea Component
//!
//! Editable text buffer shared by the import form (multi-line) and the
//! create-list form (single line).
//!
//! ## State Management
//!
//! The buffer and cursor are internal state and survive across frames in
//! `TuiState`. Title and key hints are props set by the owning form.
//! The cursor is a byte offset that always sits on a char boundary.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the TextArea
#[derive(Debug, Clone, PartialEq)]
pub enum TextEvent {
    /// Ctrl+S, or Enter on a single-line field
    Commit(String),
    Cancel,
    ContentChanged,
}

pub struct TextArea {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Enter inserts a newline instead of committing (Prop)
    pub multiline: bool,
    pub title: String,
    pub hints: String,
    /// Cursor byte offset into `buffer`
    cursor: usize,
    /// First visible line / column, kept so the cursor stays on screen.
    /// Unbounded: an import can have any number of lines.
    scroll: (usize, usize),
}

impl TextArea {
    pub fn new(multiline: bool) -> Self {
        Self {
            buffer: String::new(),
            multiline,
            title: String::new(),
            hints: String::new(),
            cursor: 0,
            scroll: (0, 0),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.scroll = (0, 0);
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_str(&mut self, text: &str) {
        let text = if self.multiline {
            normalize_newlines(text)
        } else {
            text.replace(['\r', '\n'], " ")
        };
        self.buffer.insert_str(self.cursor, &text);
        self.cursor += text.len();
    }

    /// Line index and display column of the cursor.
    fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.buffer[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        (line, before[line_start..].width())
    }

    /// Move to the same display column on the previous/next line.
    fn move_vertically(&mut self, direction: isize) -> bool {
        let (line, col) = self.cursor_line_col();
        let Some(target) = line.checked_add_signed(direction) else {
            return false;
        };
        let mut offset = 0;
        for (index, text) in self.buffer.split('\n').enumerate() {
            if index == target {
                self.cursor = offset + byte_at_column(text, col);
                return true;
            }
            offset += text.len() + 1;
        }
        false
    }

    /// Adjust scroll so the cursor is inside a `width` x `height` viewport.
    fn follow_cursor(&mut self, width: u16, height: u16) {
        let (line, col) = self.cursor_line_col();
        let (top, left) = self.scroll;
        self.scroll = (
            scroll_to_show(top, line, height as usize),
            scroll_to_show(left, col, width as usize),
        );
    }
}

impl Component for TextArea {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner = Block::bordered().inner(area);
        self.follow_cursor(inner.width, inner.height);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(self.title.as_str())
            .title_bottom(Line::from(self.hints.as_str()).centered());
        let paragraph = Paragraph::new(self.buffer.as_str())
            .block(block)
            .style(Style::default().fg(Color::Green))
            .scroll((clamp_u16(self.scroll.0), clamp_u16(self.scroll.1)));
        frame.render_widget(paragraph, area);

        let (line, col) = self.cursor_line_col();
        let x = inner.x + clamp_u16(col.saturating_sub(self.scroll.1));
        let y = inner.y + clamp_u16(line.saturating_sub(self.scroll.0));
        frame.set_cursor_position(Position { x, y });
    }
}

impl EventHandler for TextArea {
    type Event = TextEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(TextEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.insert_str(text);
                Some(TextEvent::ContentChanged)
            }
            TuiEvent::Submit if self.multiline => {
                self.insert_str("\n");
                Some(TextEvent::ContentChanged)
            }
            TuiEvent::Submit | TuiEvent::Save => Some(TextEvent::Commit(self.buffer.clone())),
            TuiEvent::Escape => Some(TextEvent::Cancel),
            TuiEvent::Backspace => {
                let prev = prev_char_boundary(&self.buffer, self.cursor)?;
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(TextEvent::ContentChanged)
            }
            TuiEvent::Delete => {
                let next = next_char_boundary(&self.buffer, self.cursor)?;
                self.buffer.drain(self.cursor..next);
                Some(TextEvent::ContentChanged)
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor)?;
                Some(TextEvent::ContentChanged)
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor)?;
                Some(TextEvent::ContentChanged)
            }
            TuiEvent::CursorUp => self
                .move_vertically(-1)
                .then_some(TextEvent::ContentChanged),
            TuiEvent::CursorDown => self
                .move_vertically(1)
                .then_some(TextEvent::ContentChanged),
            _ => None,
        }
    }
}

/// Pasted text may carry CRLF or bare CR; store plain LF.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// New scroll offset so `pos` falls inside a viewport of `span` cells.
fn scroll_to_show(offset: usize, pos: usize, span: usize) -> usize {
    if pos < offset {
        pos
    } else if span > 0 && pos >= offset.saturating_add(span) {
        pos + 1 - span
    } else {
        offset
    }
}

/// ratatui offsets are u16; past that the view pins to the last reachable row.
fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn prev_char_boundary(text: &str, pos: usize) -> Option<usize> {
    text[..pos].char_indices().next_back().map(|(i, _)| i)
}

fn next_char_boundary(text: &str, pos: usize) -> Option<usize> {
    text[pos..].chars().next().map(|c| pos + c.len_utf8())
}

/// Byte offset of the first char at or past display column `col`.
fn byte_at_column(line: &str, col: usize) -> usize {
    let mut width = 0;
    for (i, c) in line.char_indices() {
        if width >= col {
            return i;
        }
        width += unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
    }
    line.len()
}
