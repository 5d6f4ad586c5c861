use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Clear;

use crate::core::selection::{self, EXPANDED_TITLE, SelectionState};
use crate::core::state::{App, Route};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DetailPane, ListsPane, StatusBar};

const LISTS_HINTS: &str = "↑↓ Move  Enter Open  n New  q Quit";
const DETAIL_HINTS: &str = "↑↓ Move  i Import  Esc Back";
const IMPORT_HINTS: &str = " Enter Newline  Ctrl+S Save  Esc Cancel ";
const CREATE_HINTS: &str = " Enter Create  Esc Cancel ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [main_area, status_area] = Layout::vertical([Min(0), Length(1)]).areas(frame.area());

    let both_panes_visible = tui
        .layout
        .both_panes_visible(main_area.width, tui.dual_pane_min_width);

    let hints = match app.route() {
        Route::Lists | Route::CreateList => LISTS_HINTS,
        Route::Detail(_) => DETAIL_HINTS,
        Route::Import(_) => "",
    };

    match app.route() {
        Route::Import(list_id) => {
            let name = app.list(list_id).map_or("list", |list| list.name.as_str());
            tui.import_form.title = format!(" Import into {} ", name);
            tui.import_form.hints = IMPORT_HINTS.to_string();
            tui.import_form.render(frame, main_area);
        }
        Route::CreateList => {
            draw_browser(frame, main_area, app, tui, both_panes_visible);
            let popup = centered_rect(60, 3, main_area);
            frame.render_widget(Clear, popup);
            tui.new_list.title = " New list ".to_string();
            tui.new_list.hints = CREATE_HINTS.to_string();
            tui.new_list.render(frame, popup);
        }
        Route::Lists | Route::Detail(_) => {
            draw_browser(frame, main_area, app, tui, both_panes_visible);
        }
    }

    StatusBar::new(&app.status_message, hints).render(frame, status_area);
}

/// Lists and detail, side by side or one at a time.
fn draw_browser(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    tui: &mut TuiState,
    both_panes_visible: bool,
) {
    let open_detail = app.open_detail();
    let selection = SelectionState::for_layout(open_detail, both_panes_visible);
    let title = selection::pane_title(both_panes_visible, &app.app_name, EXPANDED_TITLE);
    let view = selection::present_lists(app.lists.as_deref(), &selection);
    let detail_list = open_detail.and_then(|id| app.list(id));
    let detail_items = open_detail.map(|id| app.items_for(id)).unwrap_or(&[]);

    if both_panes_visible {
        let [lists_area, detail_area] = Layout::horizontal([
            Constraint::Percentage(tui.list_pane_percent),
            Constraint::Percentage(100 - tui.list_pane_percent),
        ])
        .areas(area);
        ListsPane::new(&mut tui.lists, view, title, open_detail.is_none())
            .render(frame, lists_area);
        DetailPane::new(&mut tui.detail, detail_list, detail_items, open_detail.is_some())
            .render(frame, detail_area);
    } else if open_detail.is_some() {
        DetailPane::new(&mut tui.detail, detail_list, detail_items, true).render(frame, area);
    } else {
        ListsPane::new(&mut tui.lists, view, title, true).render(frame, area);
    }
}

/// A rect `percent_x` wide and `height` rows tall, centered in `outer`.
fn centered_rect(percent_x: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
