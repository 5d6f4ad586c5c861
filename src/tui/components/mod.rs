//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `StatusBar`: bottom line with status message and key hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it
//! together with the props for one frame:
//! - `ListsPane` / `ListsPaneState`: every list, with the selection highlight
//! - `DetailPane` / `DetailPaneState`: items of the open list
//! - `TextArea`: text editing for the import and create-list forms
//!
//! Components receive external data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! ListsPane::new(&mut tui.lists, view, title, focused).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! ListsPane::render(frame, area); // reads from App
//! ```
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── status_bar.rs   (bottom line)
//! ├── lists_pane.rs   (list browser)
//! ├── detail_pane.rs  (items of one list)
//! └── text_area.rs    (form text editing)
//! ```

pub mod detail_pane;
pub mod lists_pane;
mod status_bar;
pub mod text_area;

pub use detail_pane::{DetailEvent, DetailPane, DetailPaneState};
pub use lists_pane::{ListsEvent, ListsPane, ListsPaneState};
pub use status_bar::StatusBar;
pub use text_area::{TextArea, TextEvent};
