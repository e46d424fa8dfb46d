//! Generic data-table engine for Vitrine.
//!
//! [`DataTable`] renders an arbitrary, caller-supplied record collection
//! through caller-supplied [`Column`] descriptors while coordinating four
//! independent interaction facets: row selection, column sorting, row
//! expansion, and pagination/search delegation.
//!
//! The engine is deliberately inert:
//!
//! - It never mutates or reorders caller data. Records are rendered in the
//!   order supplied; sorting and pagination only produce *intents* that the
//!   caller applies before handing back a new slice.
//! - Every render derives the visible row keys fresh from the records passed
//!   in. Nothing about a previous slice is cached, so swapping the collection
//!   between renders (a server-side page change, say) can never leave the
//!   select-all state pointing at stale rows.
//! - Each facet can be engine-owned or caller-controlled (see
//!   [`FacetState`]). In controlled mode the engine treats the caller's
//!   value as authoritative and only emits intents.
//!
//! # Example
//!
//! ```
//! use vitrine_datatable::prelude::*;
//!
//! struct Product {
//!     id: String,
//!     name: String,
//! }
//!
//! let mut table = DataTable::new(
//!     vec![
//!         Column::text("name", "Name", |p: &Product| p.name.clone()).sortable(),
//!     ],
//!     |p: &Product| RowKey::new(&p.id),
//! )
//! .unwrap()
//! .selectable();
//!
//! let products = vec![
//!     Product { id: "p1".into(), name: "Mug".into() },
//!     Product { id: "p2".into(), name: "Kettle".into() },
//! ];
//!
//! let intent = table.handle_event(TableEvent::SelectAllToggled, &products);
//! assert!(matches!(intent, Some(TableIntent::SelectionChanged(keys)) if keys.len() == 2));
//!
//! let html = table.render(&products);
//! assert!(html.contains("Kettle"));
//! ```

mod column;
mod error;
mod event;
mod facet;
mod ids;
mod pagination;
mod render;
mod table;

pub mod expansion;
pub mod selection;
pub mod sort;

pub use column::{Align, Column};
pub use error::TableError;
pub use event::{TableEvent, TableIntent};
pub use facet::FacetState;
pub use ids::{ActionId, ColumnId, RowKey};
pub use pagination::PageInfo;
pub use sort::{Direction, SortCycle, SortState};
pub use table::{Action, DataTable, EmptyState};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Action, ActionId, Align, Column, ColumnId, DataTable, Direction, EmptyState, FacetState,
        PageInfo, RowKey, SortCycle, SortState, TableError, TableEvent, TableIntent,
    };
}
