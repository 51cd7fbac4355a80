//! Read-only projections of the collection: tag list and filtered notes.

use crate::domain::{Note, NoteRecord};
use log::trace;
use std::collections::BTreeSet;

/// Returns every tag used by any record, de-duplicated and sorted.
///
/// Records whose `tags` is missing or not an array contribute nothing.
pub fn unique_tags(records: &[NoteRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(NoteRecord::tags)
        .flatten()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Returns the notes matching both filters, normalized, in collection order.
///
/// A blank `search_term` matches everything; otherwise the note's text must
/// be a string containing the term, ignoring case. An empty `selected_tag`
/// matches everything; otherwise the note's tags must contain it exactly.
/// Records that are not objects or have no id are never returned.
pub fn filtered_notes(records: &[NoteRecord], search_term: &str, selected_tag: &str) -> Vec<Note> {
    let needle = search_term.to_lowercase();
    let searching = !search_term.trim().is_empty();

    records
        .iter()
        .filter(|r| !searching || matches_search(r, &needle))
        .filter(|r| selected_tag.is_empty() || r.has_tag(selected_tag))
        .filter_map(|r| {
            let note = r.normalize();
            if note.is_none() {
                trace!("skipping malformed note record: {}", r.as_value());
            }
            note
        })
        .collect()
}

fn matches_search(record: &NoteRecord, needle: &str) -> bool {
    record
        .text()
        .is_some_and(|text| text.to_lowercase().contains(needle))
}

/// Transient filter state of the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    search_term: String,
    selected_tag: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_tag(&self) -> &str {
        &self.selected_tag
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Selects `tag`, or clears the selection if `tag` is already selected.
    pub fn select_tag(&mut self, tag: &str) {
        if self.selected_tag == tag {
            self.selected_tag.clear();
        } else {
            self.selected_tag = tag.to_string();
        }
    }

    /// Applies this state to `records`.
    pub fn apply(&self, records: &[NoteRecord]) -> Vec<Note> {
        filtered_notes(records, &self.search_term, &self.selected_tag)
    }
}
