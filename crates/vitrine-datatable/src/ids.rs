//! Newtype identifiers used by the table engine.
//!
//! Newtypes keep row keys, column ids, and action ids from being mixed up at
//! call sites, and give the engine a single opaque handle onto caller records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype string identifiers.
macro_rules! define_key {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_key!(
    /// Stable, unique key for a record within one visible collection.
    ///
    /// Produced by the caller's row-key extractor; the only thing the
    /// selection and expansion facets ever store.
    RowKey
);

define_key!(
    /// Identifier of a column, unique within one table's column set.
    ColumnId
);

define_key!(
    /// Identifier of a bulk or per-row action.
    ActionId
);
