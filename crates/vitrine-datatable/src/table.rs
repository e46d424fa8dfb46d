//! Table configuration and event handling.

use std::collections::BTreeSet;

use tracing::warn;
use vitrine_ui::Variant;

use crate::column::Column;
use crate::error::TableError;
use crate::event::{TableEvent, TableIntent};
use crate::facet::FacetState;
use crate::ids::{ActionId, RowKey};
use crate::pagination::PageInfo;
use crate::sort::{self, SortCycle, SortState};
use crate::{expansion, selection};

/// Default number of skeleton rows while loading.
const DEFAULT_LOADING_ROWS: usize = 5;

/// A bulk or per-row action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Action identifier, echoed back in the intent.
    pub id: ActionId,
    /// Button label.
    pub label: String,
    /// Button variant.
    pub variant: Variant,
}

impl Action {
    /// Create an action with the default (secondary) variant.
    pub fn new(id: impl Into<ActionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: Variant::Secondary,
        }
    }

    /// Set the button variant.
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

/// What to show when the record collection is empty (and not loading).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Icon name (see `vitrine_ui::icon`).
    pub icon: String,
    /// Message line.
    pub message: String,
    /// Optional single call-to-action.
    pub action: Option<Action>,
}

impl EmptyState {
    /// Create an empty-state block.
    pub fn new(icon: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            message: message.into(),
            action: None,
        }
    }

    /// Add a call-to-action button.
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }
}

impl Default for EmptyState {
    fn default() -> Self {
        Self::new("inbox", "Nothing to show yet")
    }
}

/// The table engine.
///
/// Owns column descriptors, per-facet state policies, and display
/// configuration. Records are *not* stored here; they are passed to
/// [`render`](DataTable::render) and [`handle_event`](DataTable::handle_event)
/// each time, so every derivation sees the caller's current collection.
pub struct DataTable<R> {
    pub(crate) columns: Vec<Column<R>>,
    pub(crate) row_key: Box<dyn Fn(&R) -> RowKey>,
    pub(crate) selectable: bool,
    pub(crate) row_click: bool,
    pub(crate) selection: FacetState<BTreeSet<RowKey>>,
    pub(crate) sort: FacetState<SortState>,
    pub(crate) sort_cycle: SortCycle,
    pub(crate) expansion: FacetState<BTreeSet<RowKey>>,
    pub(crate) detail: Option<Box<dyn Fn(&R) -> String>>,
    pub(crate) page: Option<PageInfo>,
    pub(crate) page_size_options: Vec<i64>,
    pub(crate) loading: bool,
    pub(crate) loading_rows: usize,
    pub(crate) empty: EmptyState,
    pub(crate) bulk_actions: Vec<Action>,
    pub(crate) row_actions: Option<Box<dyn Fn(&R) -> Vec<Action>>>,
}

impl<R> DataTable<R> {
    /// Create a table from column descriptors and a row-key extractor.
    ///
    /// Fails fast on configuration errors: an empty column set or duplicate
    /// column ids.
    pub fn new(
        columns: Vec<Column<R>>,
        row_key: impl Fn(&R) -> RowKey + 'static,
    ) -> Result<Self, TableError> {
        if columns.is_empty() {
            warn!("table configured with no columns");
            return Err(TableError::NoColumns);
        }
        let mut seen = BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.id().clone()) {
                warn!(column = %column.id(), "duplicate column id in table configuration");
                return Err(TableError::DuplicateColumnId(column.id().to_string()));
            }
        }

        Ok(Self {
            columns,
            row_key: Box::new(row_key),
            selectable: false,
            row_click: false,
            selection: FacetState::default(),
            sort: FacetState::default(),
            sort_cycle: SortCycle::default(),
            expansion: FacetState::default(),
            detail: None,
            page: None,
            page_size_options: vec![10, 20, 50],
            loading: false,
            loading_rows: DEFAULT_LOADING_ROWS,
            empty: EmptyState::default(),
            bulk_actions: Vec::new(),
            row_actions: None,
        })
    }

    /// Enable row selection with engine-owned state.
    pub fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    /// Enable row selection with caller-controlled state.
    pub fn selectable_controlled(mut self, initial: BTreeSet<RowKey>) -> Self {
        self.selectable = true;
        self.selection = FacetState::Controlled(initial);
        self
    }

    /// Enable row expansion, rendering `detail` beneath expanded rows.
    pub fn expandable(mut self, detail: impl Fn(&R) -> String + 'static) -> Self {
        self.detail = Some(Box::new(detail));
        self
    }

    /// Enable row expansion with caller-controlled state.
    pub fn expandable_controlled(
        mut self,
        detail: impl Fn(&R) -> String + 'static,
        initial: BTreeSet<RowKey>,
    ) -> Self {
        self.detail = Some(Box::new(detail));
        self.expansion = FacetState::Controlled(initial);
        self
    }

    /// Set the initial engine-owned sort state.
    pub fn with_sort(mut self, state: SortState) -> Self {
        self.sort = FacetState::Owned(state);
        self
    }

    /// Make sort state caller-controlled.
    pub fn controlled_sort(mut self, state: SortState) -> Self {
        self.sort = FacetState::Controlled(state);
        self
    }

    /// Pick the sort cycle policy (default three-state: asc → desc → none).
    pub fn sort_cycle(mut self, cycle: SortCycle) -> Self {
        self.sort_cycle = cycle;
        self
    }

    /// Supply the pagination descriptor to display.
    pub fn with_page(mut self, page: PageInfo) -> Self {
        self.page = Some(page);
        self
    }

    /// Offer these page sizes in the footer.
    pub fn page_size_options(mut self, sizes: Vec<i64>) -> Self {
        self.page_size_options = sizes;
        self
    }

    /// Set the loading flag.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Number of skeleton rows shown while loading (default 5).
    pub fn loading_rows(mut self, rows: usize) -> Self {
        self.loading_rows = rows;
        self
    }

    /// Configure the empty-state block.
    pub fn empty_state(mut self, empty: EmptyState) -> Self {
        self.empty = empty;
        self
    }

    /// Offer these bulk actions over the selection.
    pub fn bulk_actions(mut self, actions: Vec<Action>) -> Self {
        self.bulk_actions = actions;
        self
    }

    /// Derive per-row action buttons from each record.
    pub fn row_actions(mut self, actions: impl Fn(&R) -> Vec<Action> + 'static) -> Self {
        self.row_actions = Some(Box::new(actions));
        self
    }

    /// Emit a `RowClick` intent when a row is clicked.
    pub fn on_row_click(mut self) -> Self {
        self.row_click = true;
        self
    }

    /// Update the loading flag between renders.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Update the pagination descriptor between renders.
    pub fn set_page(&mut self, page: Option<PageInfo>) {
        self.page = page;
    }

    /// Feed back the caller-owned selection (controlled mode only).
    pub fn supply_selection(&mut self, selection: BTreeSet<RowKey>) {
        self.selection.supply(selection);
    }

    /// Feed back the caller-owned sort state (controlled mode only).
    pub fn supply_sort(&mut self, state: SortState) {
        self.sort.supply(state);
    }

    /// Feed back the caller-owned expansion set (controlled mode only).
    pub fn supply_expansion(&mut self, expanded: BTreeSet<RowKey>) {
        self.expansion.supply(expanded);
    }

    /// Current selection.
    pub fn selection(&self) -> &BTreeSet<RowKey> {
        self.selection.get()
    }

    /// Current sort state.
    pub fn sort_state(&self) -> &SortState {
        self.sort.get()
    }

    /// Currently expanded rows.
    pub fn expanded(&self) -> &BTreeSet<RowKey> {
        self.expansion.get()
    }

    /// Whether expansion is enabled.
    pub fn is_expandable(&self) -> bool {
        self.detail.is_some()
    }

    /// Row keys of the records in the given slice, in order.
    pub fn visible_keys(&self, records: &[R]) -> Vec<RowKey> {
        records.iter().map(|record| (self.row_key)(record)).collect()
    }

    /// Handle one user event against the current record slice.
    ///
    /// Applies the state transition to engine-owned facets and returns the
    /// intent the caller should act on, if any. `records` must be the same
    /// slice the event's render came from; visible keys are re-derived here
    /// rather than remembered from that render.
    pub fn handle_event(&mut self, event: TableEvent, records: &[R]) -> Option<TableIntent> {
        match event {
            TableEvent::HeaderClicked(column_id) => {
                let sortable = self
                    .columns
                    .iter()
                    .any(|column| column.id() == &column_id && column.is_sortable());
                if !sortable {
                    return None;
                }
                let next = sort::advance(self.sort.get(), &column_id, self.sort_cycle);
                let direction = next.direction_of(&column_id);
                self.sort.set_if_owned(next);
                Some(TableIntent::Sort(column_id, direction))
            }
            TableEvent::RowToggled(key) => {
                if !self.selectable {
                    return None;
                }
                let next = selection::toggle_one(&key, self.selection.get());
                let keys = next.iter().cloned().collect();
                self.selection.set_if_owned(next);
                Some(TableIntent::SelectionChanged(keys))
            }
            TableEvent::SelectAllToggled => {
                if !self.selectable {
                    return None;
                }
                let visible = self.visible_keys(records);
                let next = selection::toggle_all(&visible, self.selection.get());
                let keys = next.iter().cloned().collect();
                self.selection.set_if_owned(next);
                Some(TableIntent::SelectionChanged(keys))
            }
            TableEvent::RowExpansionToggled(key) => {
                if self.detail.is_none() {
                    return None;
                }
                let next = expansion::toggle(&key, self.expansion.get());
                let keys = next.iter().cloned().collect();
                self.expansion.set_if_owned(next);
                Some(TableIntent::ExpansionChanged(keys))
            }
            TableEvent::RowClicked(key) => {
                if !self.row_click {
                    return None;
                }
                Some(TableIntent::RowClick(key))
            }
            TableEvent::PageChanged(page) => Some(TableIntent::PageChange(page)),
            TableEvent::PageSizeChanged(size) => Some(TableIntent::PageSizeChange(size)),
            TableEvent::SearchChanged(text) => Some(TableIntent::Search(text)),
            TableEvent::BulkAction(id) => {
                let offered = self.bulk_actions.iter().any(|action| action.id == id);
                if !self.selectable || !offered {
                    return None;
                }
                let keys: Vec<RowKey> = self.selection.get().iter().cloned().collect();
                if keys.is_empty() {
                    return None;
                }
                Some(TableIntent::BulkAction(id, keys))
            }
            TableEvent::RowAction(id, key) => {
                if self.row_actions.is_none() {
                    return None;
                }
                Some(TableIntent::RowAction(id, key))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ColumnId;
    use crate::sort::Direction;

    struct Product {
        id: String,
        name: String,
    }

    fn products() -> Vec<Product> {
        vec![
            Product {
                id: "1".into(),
                name: "Bob".into(),
            },
            Product {
                id: "2".into(),
                name: "Amy".into(),
            },
        ]
    }

    fn table() -> DataTable<Product> {
        DataTable::new(
            vec![Column::text("name", "Name", |p: &Product| p.name.clone()).sortable()],
            |p: &Product| RowKey::new(&p.id),
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_column_id_rejected() {
        let result = DataTable::new(
            vec![
                Column::text("name", "Name", |p: &Product| p.name.clone()),
                Column::text("name", "Also Name", |p: &Product| p.name.clone()),
            ],
            |p: &Product| RowKey::new(&p.id),
        );
        assert_eq!(
            result.err(),
            Some(TableError::DuplicateColumnId("name".into()))
        );
    }

    #[test]
    fn test_empty_columns_rejected() {
        let result = DataTable::new(Vec::new(), |p: &Product| RowKey::new(&p.id));
        assert_eq!(result.err(), Some(TableError::NoColumns));
    }

    #[test]
    fn test_select_all_then_clear() {
        let mut table = table().selectable();
        let records = products();

        let intent = table.handle_event(TableEvent::SelectAllToggled, &records);
        assert_eq!(
            intent,
            Some(TableIntent::SelectionChanged(vec![
                RowKey::new("1"),
                RowKey::new("2")
            ]))
        );

        let intent = table.handle_event(TableEvent::SelectAllToggled, &records);
        assert_eq!(intent, Some(TableIntent::SelectionChanged(vec![])));
        assert!(table.selection().is_empty());
    }

    #[test]
    fn test_selection_ignored_when_not_selectable() {
        let mut table = table();
        assert_eq!(
            table.handle_event(TableEvent::SelectAllToggled, &products()),
            None
        );
        assert_eq!(
            table.handle_event(TableEvent::RowToggled(RowKey::new("1")), &products()),
            None
        );
    }

    #[test]
    fn test_controlled_selection_not_mutated() {
        let initial: BTreeSet<RowKey> = [RowKey::new("1")].into_iter().collect();
        let mut table = table().selectable_controlled(initial.clone());
        let records = products();

        let intent = table.handle_event(TableEvent::RowToggled(RowKey::new("2")), &records);
        assert_eq!(
            intent,
            Some(TableIntent::SelectionChanged(vec![
                RowKey::new("1"),
                RowKey::new("2")
            ]))
        );
        // Still the caller's snapshot until it is supplied back.
        assert_eq!(*table.selection(), initial);

        table.supply_selection([RowKey::new("1"), RowKey::new("2")].into_iter().collect());
        assert_eq!(table.selection().len(), 2);
    }

    #[test]
    fn test_sort_cycle_via_events() {
        let mut table = table();
        let records = products();
        let click = || TableEvent::HeaderClicked(ColumnId::new("name"));

        let first = table.handle_event(click(), &records);
        assert_eq!(
            first,
            Some(TableIntent::Sort(
                ColumnId::new("name"),
                Some(Direction::Asc)
            ))
        );
        let second = table.handle_event(click(), &records);
        assert_eq!(
            second,
            Some(TableIntent::Sort(
                ColumnId::new("name"),
                Some(Direction::Desc)
            ))
        );
        let third = table.handle_event(click(), &records);
        assert_eq!(third, Some(TableIntent::Sort(ColumnId::new("name"), None)));
        assert_eq!(*table.sort_state(), SortState::none());
    }

    #[test]
    fn test_two_state_cycle_via_events() {
        let mut table = table().sort_cycle(SortCycle::TwoState);
        let records = products();
        let click = || TableEvent::HeaderClicked(ColumnId::new("name"));

        table.handle_event(click(), &records);
        table.handle_event(click(), &records);
        let third = table.handle_event(click(), &records);
        assert_eq!(
            third,
            Some(TableIntent::Sort(
                ColumnId::new("name"),
                Some(Direction::Asc)
            ))
        );
    }

    #[test]
    fn test_unsortable_header_is_noop() {
        let mut table = DataTable::new(
            vec![Column::text("name", "Name", |p: &Product| p.name.clone())],
            |p: &Product| RowKey::new(&p.id),
        )
        .unwrap();

        let intent = table.handle_event(
            TableEvent::HeaderClicked(ColumnId::new("name")),
            &products(),
        );
        assert_eq!(intent, None);
        assert_eq!(*table.sort_state(), SortState::none());
    }

    #[test]
    fn test_expansion_independent_of_selection() {
        let mut table = table().selectable().expandable(|p: &Product| {
            format!("<p>{}</p>", p.name)
        });
        let records = products();

        table.handle_event(TableEvent::RowToggled(RowKey::new("1")), &records);
        table.handle_event(TableEvent::RowExpansionToggled(RowKey::new("2")), &records);

        assert!(table.selection().contains(&RowKey::new("1")));
        assert!(!table.selection().contains(&RowKey::new("2")));
        assert!(table.expanded().contains(&RowKey::new("2")));
        assert!(!table.expanded().contains(&RowKey::new("1")));

        // And the reverse: toggling selection leaves expansion alone.
        table.handle_event(TableEvent::RowToggled(RowKey::new("2")), &records);
        assert_eq!(table.expanded().len(), 1);
    }

    #[test]
    fn test_expansion_ignored_without_detail_renderer() {
        let mut table = table();
        let intent =
            table.handle_event(TableEvent::RowExpansionToggled(RowKey::new("1")), &products());
        assert_eq!(intent, None);
    }

    #[test]
    fn test_bulk_action_receives_selection() {
        let mut table = table()
            .selectable()
            .bulk_actions(vec![Action::new("archive", "Archive")]);
        let records = products();
        table.handle_event(TableEvent::SelectAllToggled, &records);

        let intent = table.handle_event(TableEvent::BulkAction(ActionId::new("archive")), &records);
        assert_eq!(
            intent,
            Some(TableIntent::BulkAction(
                ActionId::new("archive"),
                vec![RowKey::new("1"), RowKey::new("2")]
            ))
        );
    }

    #[test]
    fn test_bulk_action_requires_configuration() {
        let records = products();

        // Not selectable and nothing offered.
        let mut bare = table();
        assert_eq!(
            bare.handle_event(TableEvent::BulkAction(ActionId::new("export")), &records),
            None
        );

        // Selectable, but the id was never offered.
        let mut table = table()
            .selectable()
            .bulk_actions(vec![Action::new("export", "Export")]);
        table.handle_event(TableEvent::SelectAllToggled, &records);
        assert_eq!(
            table.handle_event(TableEvent::BulkAction(ActionId::new("nope")), &records),
            None
        );
    }

    #[test]
    fn test_bulk_action_requires_selection() {
        let mut table = table()
            .selectable()
            .bulk_actions(vec![Action::new("export", "Export")]);
        assert_eq!(
            table.handle_event(TableEvent::BulkAction(ActionId::new("export")), &products()),
            None
        );
    }

    #[test]
    fn test_row_action_ignored_without_row_actions() {
        let mut table = table();
        assert_eq!(
            table.handle_event(
                TableEvent::RowAction(ActionId::new("view"), RowKey::new("1")),
                &products()
            ),
            None
        );

        let mut table = self::table().row_actions(|_: &Product| vec![Action::new("view", "View")]);
        assert_eq!(
            table.handle_event(
                TableEvent::RowAction(ActionId::new("view"), RowKey::new("1")),
                &products()
            ),
            Some(TableIntent::RowAction(ActionId::new("view"), RowKey::new("1")))
        );
    }

    #[test]
    fn test_pagination_and_search_forwarded() {
        let mut table = table();
        let records = products();
        assert_eq!(
            table.handle_event(TableEvent::PageChanged(3), &records),
            Some(TableIntent::PageChange(3))
        );
        assert_eq!(
            table.handle_event(TableEvent::PageSizeChanged(50), &records),
            Some(TableIntent::PageSizeChange(50))
        );
        assert_eq!(
            table.handle_event(TableEvent::SearchChanged("mug".into()), &records),
            Some(TableIntent::Search("mug".into()))
        );
    }

    #[test]
    fn test_row_click_gated() {
        let mut table = table();
        assert_eq!(
            table.handle_event(TableEvent::RowClicked(RowKey::new("1")), &products()),
            None
        );
        let mut table = table.on_row_click();
        assert_eq!(
            table.handle_event(TableEvent::RowClicked(RowKey::new("1")), &products()),
            Some(TableIntent::RowClick(RowKey::new("1")))
        );
    }

    #[test]
    fn test_double_select_all_is_idempotent_per_state() {
        // Rapid double-toggle lands back where it started; set semantics, no
        // drift.
        let mut table = table().selectable();
        let records = products();
        let before = table.selection().clone();
        table.handle_event(TableEvent::SelectAllToggled, &records);
        table.handle_event(TableEvent::SelectAllToggled, &records);
        assert_eq!(*table.selection(), before);
    }
}
