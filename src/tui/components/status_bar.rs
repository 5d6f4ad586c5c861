//! # StatusBar Component
//!
//! Bottom line showing the last status message and the key hints for the
//! focused surface.
//!
//! Stateless: everything comes in as props, set fresh each frame.
//!
//! 1. **With status**: `"Imported 3 items | ↑↓ Move  Enter Open"`
//! 2. **Default**: `"↑↓ Move  Enter Open"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct StatusBar<'a> {
    /// Transient status (e.g. "Imported 3 items", "Store error: ...")
    pub status_message: &'a str,
    /// Key hints for the focused surface
    pub hints: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(status_message: &'a str, hints: &'a str) -> Self {
        Self {
            status_message,
            hints,
        }
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hints = Span::styled(self.hints, Style::default().fg(Color::DarkGray));
        let line = if self.status_message.is_empty() {
            Line::from(hints)
        } else {
            Line::from(vec![
                Span::styled(self.status_message, Style::default().fg(Color::Yellow)),
                Span::raw(" | "),
                hints,
            ])
        };
        frame.render_widget(line, area);
    }
}
