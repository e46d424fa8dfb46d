//! Row selection as pure set derivations.
//!
//! All operations are total functions of `(visible keys, current selection)`.
//! The facet holds no hidden state of its own, which is what keeps select-all
//! correct when the caller swaps the record collection between renders: the
//! tri-state is always computed against the keys visible *right now*.
//!
//! Keys that drop out of the visible set are never pruned automatically. A
//! caller paginating server-side may want a selection to survive page flips;
//! one that does not can call [`retain_visible`] when the collection changes.

use crate::ids::RowKey;
use std::collections::BTreeSet;

/// True iff `visible` is non-empty and every visible key is selected.
pub fn is_all_selected(visible: &[RowKey], selection: &BTreeSet<RowKey>) -> bool {
    !visible.is_empty() && visible.iter().all(|key| selection.contains(key))
}

/// True iff at least one but not all visible keys are selected.
pub fn is_partially_selected(visible: &[RowKey], selection: &BTreeSet<RowKey>) -> bool {
    let selected = visible.iter().filter(|key| selection.contains(*key)).count();
    selected > 0 && selected < visible.len()
}

/// Toggle selection of every visible key.
///
/// If all visible keys are selected they are removed; otherwise they are all
/// added. Only the currently visible rows are affected; keys selected on
/// other pages are left alone.
pub fn toggle_all(visible: &[RowKey], selection: &BTreeSet<RowKey>) -> BTreeSet<RowKey> {
    let mut next = selection.clone();
    if is_all_selected(visible, selection) {
        for key in visible {
            next.remove(key);
        }
    } else {
        next.extend(visible.iter().cloned());
    }
    next
}

/// Toggle selection of a single key.
pub fn toggle_one(key: &RowKey, selection: &BTreeSet<RowKey>) -> BTreeSet<RowKey> {
    let mut next = selection.clone();
    if !next.remove(key) {
        next.insert(key.clone());
    }
    next
}

/// Drop selected keys that are no longer visible.
///
/// Opt-in helper for callers that want page changes to clear off-page
/// selection; the engine never calls this itself.
pub fn retain_visible(visible: &[RowKey], selection: &BTreeSet<RowKey>) -> BTreeSet<RowKey> {
    selection
        .iter()
        .filter(|key| visible.contains(key))
        .cloned()
        .collect()
}
