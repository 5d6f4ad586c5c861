//! # Core Application Logic
//!
//! This module contains rankfavs' business logic.
//! It knows nothing about any specific UI technology or the store's file format.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • import (parser)      │
//!                    │  • selection            │
//!                    │  • State + Action       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   Store    │
//!           │  Adapter   │              │  (JSON)    │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`model`]: `ListEntry`, `ListItem`, `ItemInsertionRequest`
//! - [`import`]: bulk-import parser and the `InsertionSink` boundary
//! - [`selection`]: highlight, pane-title and empty-state decisions
//! - [`state`]: The `App` struct and the route stack
//! - [`action`]: The `Action` enum, navigation commands and `update()`
//! - [`config`]: layered TOML configuration
//!
//! `config` is the one exception to "no I/O": it reads and seeds the config file.

pub mod action;
pub mod config;
pub mod import;
pub mod model;
pub mod selection;
pub mod state;
