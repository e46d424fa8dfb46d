//! Column descriptors.

use crate::ids::ColumnId;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// CSS class suffix for this alignment.
    pub fn as_class(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// How a column derives a cell from a record.
pub(crate) enum CellSource<R> {
    /// Plain text, escaped by the renderer.
    Text(Box<dyn Fn(&R) -> String>),
    /// Pre-built HTML, trusted as-is (for composing `vitrine-ui` primitives).
    Html(Box<dyn Fn(&R) -> String>),
}

/// Declares how one column of the table derives and presents its value.
///
/// Pure data plus a pure value function; columns have no behavior of their
/// own. The value function must be deterministic for a given record.
///
/// # Example
///
/// ```
/// use vitrine_datatable::{Align, Column};
///
/// struct Order { total: i64 }
///
/// let col = Column::text("total", "Total", |o: &Order| format!("{}", o.total))
///     .sortable()
///     .align(Align::Right)
///     .width("8rem");
/// assert_eq!(col.id().as_str(), "total");
/// ```
pub struct Column<R> {
    id: ColumnId,
    header: String,
    source: CellSource<R>,
    sortable: bool,
    align: Align,
    width: Option<String>,
}

impl<R> Column<R> {
    /// Create a column whose value function yields plain text.
    ///
    /// The text is HTML-escaped when rendered.
    pub fn text(
        id: impl Into<ColumnId>,
        header: impl Into<String>,
        value: impl Fn(&R) -> String + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            source: CellSource::Text(Box::new(value)),
            sortable: false,
            align: Align::Left,
            width: None,
        }
    }

    /// Create a column whose value function yields a trusted HTML fragment.
    ///
    /// Use this for cells composed from `vitrine-ui` primitives (badges,
    /// prices, avatars). The fragment is interpolated without escaping, so
    /// any record-derived text inside it must already be escaped.
    pub fn html(
        id: impl Into<ColumnId>,
        header: impl Into<String>,
        value: impl Fn(&R) -> String + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            source: CellSource::Html(Box::new(value)),
            sortable: false,
            align: Align::Left,
            width: None,
        }
    }

    /// Let users sort by this column.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set cell alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set a fixed CSS width.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// The column's id.
    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    /// The header label.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Whether this column participates in sorting.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Cell alignment.
    pub fn alignment(&self) -> Align {
        self.align
    }

    /// Fixed CSS width, if any.
    pub fn fixed_width(&self) -> Option<&str> {
        self.width.as_deref()
    }

    pub(crate) fn source(&self) -> &CellSource<R> {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: String,
    }

    #[test]
    fn test_column_defaults() {
        let col = Column::text("name", "Name", |r: &Row| r.name.clone());
        assert!(!col.is_sortable());
        assert_eq!(col.alignment(), Align::Left);
        assert!(col.fixed_width().is_none());
    }

    #[test]
    fn test_column_builder() {
        let col = Column::text("name", "Name", |r: &Row| r.name.clone())
            .sortable()
            .align(Align::Right)
            .width("10rem");
        assert!(col.is_sortable());
        assert_eq!(col.alignment(), Align::Right);
        assert_eq!(col.fixed_width(), Some("10rem"));
    }

    #[test]
    fn test_value_function_is_pure_access() {
        let col = Column::text("name", "Name", |r: &Row| r.name.clone());
        let row = Row {
            name: "Kettle".into(),
        };
        match col.source() {
            CellSource::Text(f) => {
                assert_eq!(f(&row), "Kettle");
                assert_eq!(f(&row), "Kettle");
            }
            CellSource::Html(_) => panic!("expected text source"),
        }
    }
}
