use rankfavs::core::action::{Action, NavCommand, update};
use rankfavs::core::import::{commit_import, extract_lines, insertion_requests};
use rankfavs::core::state::{App, Route};
use rankfavs::store::{ListStore, StoreWriter};
use std::sync::mpsc;

// ============================================================================
// Helper Functions
// ============================================================================

/// Opens a store in a fresh temp dir with one list named "Books".
fn store_with_books() -> (tempfile::TempDir, ListStore, u32) {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ListStore::open(dir.path()).unwrap();
    let books = store.create_list("Books");
    (dir, store, books)
}

fn item_names(store: &ListStore, list_id: u32) -> Vec<String> {
    store.items(list_id).into_iter().map(|i| i.name).collect()
}

// ============================================================================
// Line Extraction
// ============================================================================

#[test]
fn test_one_name_per_line_for_every_newline_style() {
    let text = "- Dune\r\n* Hyperion\rFoundation\n  Emma  ";
    assert_eq!(
        extract_lines(text),
        vec!["Dune", "Hyperion", "Foundation", "Emma"]
    );
}

#[test]
fn test_line_count_is_newlines_plus_one() {
    let text = "a\n\nb\n";
    assert_eq!(extract_lines(text).len(), text.matches('\n').count() + 1);
}

#[test]
fn test_only_one_marker_is_stripped() {
    assert_eq!(extract_lines("- - nested\n* - mixed"), vec!["- nested", "- mixed"]);
}

#[test]
fn test_requests_target_the_given_list() {
    let requests = insertion_requests(7, "x\ny");
    assert!(requests.iter().all(|r| r.parent_list_id == 7));
    assert_eq!(requests.len(), 2);
}

// ============================================================================
// Store Round Trip
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_pasted_block_persists_in_order_across_reopen() {
    let (dir, store, books) = store_with_books();
    let (tx, _rx) = mpsc::channel();
    let (mut writer, worker) = StoreWriter::spawn(store, tx);

    let back = commit_import(books, "1. ignored prefix stays\n- Dune\n* Emma\n", &mut writer);
    assert_eq!(back, NavCommand::Back);
    drop(writer);
    worker.await.unwrap();

    let reopened = ListStore::open(dir.path()).unwrap();
    assert_eq!(
        item_names(&reopened, books),
        vec!["1. ignored prefix stays", "Dune", "Emma", ""]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_import_into_missing_list_surfaces_failure() {
    let (_dir, store, books) = store_with_books();
    let (tx, rx) = mpsc::channel();
    let (mut writer, worker) = StoreWriter::spawn(store, tx);

    commit_import(books + 100, "Dune", &mut writer);
    drop(writer);
    let store = worker.await.unwrap();
    assert!(item_names(&store, books).is_empty());

    let mut app = App::new("Rank Favs");
    for action in rx.try_iter() {
        update(&mut app, action);
    }
    assert!(app.status_message.starts_with("Store error:"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_full_flow_from_detail_back_to_detail() {
    let (_dir, store, books) = store_with_books();
    let (tx, rx) = mpsc::channel();
    let (mut writer, worker) = StoreWriter::spawn(store, tx);
    writer.load_lists();

    let mut app = App::new("Rank Favs");
    update(&mut app, Action::Navigate(NavCommand::OpenDetail(books)));
    update(&mut app, Action::Navigate(NavCommand::Import(books)));
    assert_eq!(app.route(), Route::Import(books));

    let text = "Dune\nEmma".to_string();
    update(&mut app, Action::SubmitImport { list_id: books, text: text.clone() });
    let back = commit_import(books, &text, &mut writer);
    update(&mut app, Action::Navigate(back));
    assert_eq!(app.route(), Route::Detail(books));

    drop(writer);
    worker.await.unwrap();
    for action in rx.try_iter() {
        update(&mut app, action);
    }
    let names: Vec<&str> = app.items_for(books).iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Dune", "Emma"]);
    assert_eq!(app.list(books).map(|l| l.name.as_str()), Some("Books"));
}
