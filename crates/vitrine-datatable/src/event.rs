//! User events in, caller intents out.
//!
//! The embedding page decodes DOM interaction into a [`TableEvent`] and feeds
//! it to [`DataTable::handle_event`](crate::DataTable::handle_event), which
//! returns the [`TableIntent`] the caller must apply (re-sort, fetch a page,
//! persist a selection). Handling is synchronous and pure: no I/O, nothing
//! deferred, one event per turn.

use crate::ids::{ActionId, ColumnId, RowKey};
use crate::sort::Direction;

/// A user interaction on the rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// A column header was clicked.
    HeaderClicked(ColumnId),
    /// A row's selection checkbox was toggled.
    RowToggled(RowKey),
    /// The header select-all checkbox was toggled.
    SelectAllToggled,
    /// A row's expansion control was toggled.
    RowExpansionToggled(RowKey),
    /// A row itself was clicked.
    RowClicked(RowKey),
    /// A page link or prev/next control was clicked.
    PageChanged(i64),
    /// A new page size was picked.
    PageSizeChanged(i64),
    /// The search box text changed.
    SearchChanged(String),
    /// A bulk-action button was clicked.
    BulkAction(ActionId),
    /// A per-row action button was clicked.
    RowAction(ActionId, RowKey),
}

/// A requested change the caller must apply and feed back via new props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIntent {
    /// The selection became this set of keys.
    SelectionChanged(Vec<RowKey>),
    /// The expanded-row set became this set of keys.
    ExpansionChanged(Vec<RowKey>),
    /// Sort by a column; `None` direction means clear the sort.
    Sort(ColumnId, Option<Direction>),
    /// Search text changed (forwarded verbatim, never filtered here).
    Search(String),
    /// Navigate to a page.
    PageChange(i64),
    /// Change the page size.
    PageSizeChange(i64),
    /// A row was clicked.
    RowClick(RowKey),
    /// Run a bulk action over the current selection.
    BulkAction(ActionId, Vec<RowKey>),
    /// Run a per-row action.
    RowAction(ActionId, RowKey),
}
