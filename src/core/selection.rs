//! # Selection Coordinator
//!
//! Decides, per render pass, which list entry is highlighted and what the
//! lists pane is called.
//!
//! ```text
//!   single pane (narrow)            dual pane (wide)
//! ┌───────────────────┐     ┌──────────────┬──────────────┐
//! │ Rank Favs         │     │ Lists        │ Books        │
//! │  Books            │     │▌Books        │  Dune        │
//! │  Films            │     │  Films       │  Hyperion    │
//! └───────────────────┘     └──────────────┴──────────────┘
//!   NoSelection                ShowSelection(books.id)
//! ```
//!
//! On a single pane the lists screen is the home screen, so it carries the
//! app name. Once a detail pane sits next to it, the app name gives way to a
//! neutral section label.
//!
//! Stateless: the caller builds a fresh [`SelectionState`] every frame.

use crate::core::model::{ListEntry, ListId};

/// Section label used when both panes are on screen.
pub const EXPANDED_TITLE: &str = "Lists";

/// Whether any entry is marked as selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState<Id = ListId> {
    #[default]
    NoSelection,
    ShowSelection(Id),
}

impl<Id: PartialEq> SelectionState<Id> {
    /// True only for `ShowSelection` with a matching id. Unknown or stale ids
    /// simply don't match.
    pub fn is_selected(&self, id: &Id) -> bool {
        match self {
            SelectionState::ShowSelection(selected) => selected == id,
            SelectionState::NoSelection => false,
        }
    }

    /// Selection for the current layout: the open detail is only shown as
    /// selected when it is on screen next to the list.
    pub fn for_layout(open_detail: Option<Id>, both_panes_visible: bool) -> Self {
        match open_detail {
            Some(id) if both_panes_visible => SelectionState::ShowSelection(id),
            _ => SelectionState::NoSelection,
        }
    }
}

/// Pick the lists pane title for the current presentation.
pub fn pane_title<'a>(both_panes_visible: bool, compact: &'a str, expanded: &'a str) -> &'a str {
    if both_panes_visible { expanded } else { compact }
}

/// A list entry paired with its highlight decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow<'a> {
    pub entry: &'a ListEntry,
    pub selected: bool,
}

/// What the lists pane should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListsView<'a> {
    /// Nothing loaded yet, or no lists at all.
    Empty,
    Rows(Vec<ListRow<'a>>),
}

impl ListsView<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, ListsView::Empty)
    }
}

/// Pair every entry with its highlight decision, or signal the empty state.
pub fn present_lists<'a>(
    entries: Option<&'a [ListEntry]>,
    selection: &SelectionState,
) -> ListsView<'a> {
    match entries {
        Some(entries) if !entries.is_empty() => ListsView::Rows(
            entries
                .iter()
                .map(|entry| ListRow {
                    entry,
                    selected: selection.is_selected(&entry.id),
                })
                .collect(),
        ),
        _ => ListsView::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_lists;

    #[test]
    fn test_matching_id_is_selected() {
        let state = SelectionState::ShowSelection(5);
        assert!(state.is_selected(&5));
    }

    #[test]
    fn test_other_id_and_no_selection_are_not_selected() {
        assert!(!SelectionState::ShowSelection(6).is_selected(&5));
        assert!(!SelectionState::<ListId>::NoSelection.is_selected(&5));
    }

    #[test]
    fn test_generic_over_id_type() {
        let state = SelectionState::ShowSelection("books");
        assert!(state.is_selected(&"books"));
        assert!(!state.is_selected(&"films"));
    }

    #[test]
    fn test_title_follows_pane_visibility_only() {
        assert_eq!(pane_title(false, "Rank Favs", EXPANDED_TITLE), "Rank Favs");
        assert_eq!(pane_title(true, "Rank Favs", EXPANDED_TITLE), "Lists");
    }

    #[test]
    fn test_for_layout_hides_selection_on_single_pane() {
        assert_eq!(
            SelectionState::for_layout(Some(2), false),
            SelectionState::NoSelection
        );
        assert_eq!(
            SelectionState::for_layout(Some(2), true),
            SelectionState::ShowSelection(2)
        );
        assert_eq!(
            SelectionState::<ListId>::for_layout(None, true),
            SelectionState::NoSelection
        );
    }

    #[test]
    fn test_absent_or_empty_collection_is_empty_state() {
        let selection = SelectionState::ShowSelection(1);
        assert!(present_lists(None, &selection).is_empty());
        assert!(present_lists(Some(&[][..]), &selection).is_empty());
    }

    #[test]
    fn test_entries_without_selection_are_not_empty_state() {
        let lists = sample_lists();
        let view = present_lists(Some(lists.as_slice()), &SelectionState::NoSelection);
        match view {
            ListsView::Rows(rows) => {
                assert_eq!(rows.len(), lists.len());
                assert!(rows.iter().all(|row| !row.selected));
            }
            ListsView::Empty => panic!("expected rows"),
        }
    }

    #[test]
    fn test_only_matching_row_is_highlighted() {
        let lists = sample_lists();
        let target = lists[1].id;
        let view = present_lists(Some(lists.as_slice()), &SelectionState::ShowSelection(target));
        let ListsView::Rows(rows) = view else {
            panic!("expected rows");
        };
        let selected: Vec<ListId> = rows
            .iter()
            .filter(|row| row.selected)
            .map(|row| row.entry.id)
            .collect();
        assert_eq!(selected, vec![target]);
    }

    #[test]
    fn test_stale_selection_highlights_nothing() {
        let lists = sample_lists();
        let view = present_lists(Some(lists.as_slice()), &SelectionState::ShowSelection(999));
        let ListsView::Rows(rows) = view else {
            panic!("expected rows");
        };
        assert!(rows.iter().all(|row| !row.selected));
    }
}
