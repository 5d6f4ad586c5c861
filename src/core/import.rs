//! # Bulk Import
//!
//! Turns pasted free-form text into one item name per line and hands the
//! resulting insertion requests to a sink.
//!
//! ```text
//! "- Dune\n* Hyperion\n  Foundation  "
//!        │ split on CR / LF / CRLF
//!        ▼
//! ["- Dune", "* Hyperion", "  Foundation  "]
//!        │ trim, strip one "- " or "* " marker
//!        ▼
//! ["Dune", "Hyperion", "Foundation"]
//! ```
//!
//! Blank lines are kept as empty names. Nothing is filtered here.

use log::{debug, info};

use crate::core::action::NavCommand;
use crate::core::model::{ItemInsertionRequest, ListId};

/// List markers stripped from the start of a trimmed line.
const LIST_MARKERS: [&str; 2] = ["- ", "* "];

/// Receives item insertions. Fire-and-forget: nothing is returned and
/// failures stay on the sink's side.
pub trait InsertionSink {
    fn insert(&mut self, request: ItemInsertionRequest);
}

/// Split `text` into item names, one per line, in input order.
///
/// Never fails. An empty string is a single empty line, so it yields `[""]`.
pub fn extract_lines(text: &str) -> Vec<String> {
    split_lines(text)
        .map(|line| strip_marker(line.trim()).to_string())
        .collect()
}

/// Build one insertion request per parsed line.
pub fn insertion_requests(list_id: ListId, text: &str) -> Vec<ItemInsertionRequest> {
    extract_lines(text)
        .into_iter()
        .map(|name| ItemInsertionRequest::new(list_id, name))
        .collect()
}

/// Issue every parsed line to `sink`, first line first, then signal back.
///
/// The returned command is produced once, after the whole batch has been
/// handed over.
pub fn commit_import<S: InsertionSink + ?Sized>(
    list_id: ListId,
    text: &str,
    sink: &mut S,
) -> NavCommand {
    let requests = insertion_requests(list_id, text);
    info!("Importing {} items into list {}", requests.len(), list_id);
    for request in requests {
        debug!("Import insert: {:?}", request.name);
        sink.insert(request);
    }
    NavCommand::Back
}

/// Split on `\r\n`, `\n` or a lone `\r`. Unlike `str::lines`, a trailing
/// terminator produces a final empty line and `""` produces one line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split("\r\n").flat_map(|chunk| chunk.split(['\n', '\r']))
}

fn strip_marker(line: &str) -> &str {
    LIST_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(*marker))
        .unwrap_or(line)
}
