//! Table configuration errors.

use thiserror::Error;

/// Errors raised for caller configuration mistakes.
///
/// These are detected eagerly at table construction. Silently tolerating a
/// duplicate column id would misattribute sort indicators, so the engine
/// fails fast instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Two columns share the same id.
    #[error("Duplicate column id: {0}")]
    DuplicateColumnId(String),

    /// The column set is empty.
    #[error("A table requires at least one column")]
    NoColumns,
}
