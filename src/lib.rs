//! rankfavs library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod logging;
pub mod store;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How the list and detail panes are arranged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Side by side when the terminal is wide enough.
    #[default]
    Auto,
    Single,
    Dual,
}

impl LayoutMode {
    /// Whether a detail pane fits next to the lists pane at this width.
    pub fn both_panes_visible(self, width: u16, dual_pane_min_width: u16) -> bool {
        match self {
            LayoutMode::Auto => width >= dual_pane_min_width,
            LayoutMode::Single => false,
            LayoutMode::Dual => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_layout_switches_at_threshold() {
        assert!(!LayoutMode::Auto.both_panes_visible(99, 100));
        assert!(LayoutMode::Auto.both_panes_visible(100, 100));
    }

    #[test]
    fn test_forced_layouts_ignore_width() {
        assert!(!LayoutMode::Single.both_panes_visible(300, 100));
        assert!(LayoutMode::Dual.both_panes_visible(40, 100));
    }
}
