//! Owned vs controlled state for a single interaction facet.

/// Who owns the authoritative value of one facet (selection, sort,
/// expansion).
///
/// - `Owned`: the engine holds the value and updates it when handling
///   events, in addition to emitting the intent.
/// - `Controlled`: the caller's value is authoritative. The engine keeps the
///   latest snapshot the caller supplied, reads it during renders and event
///   handling, and never writes to it; events only emit intents for the
///   caller to apply.
///
/// One indirection shared by all facets, so controlled-mode logic is not
/// duplicated per facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetState<T> {
    /// Engine-held value.
    Owned(T),
    /// Caller-supplied snapshot.
    Controlled(T),
}

impl<T> FacetState<T> {
    /// Read the current value, whoever owns it.
    pub fn get(&self) -> &T {
        match self {
            FacetState::Owned(value) | FacetState::Controlled(value) => value,
        }
    }

    /// Store a new value if the engine owns this facet; no-op otherwise.
    pub fn set_if_owned(&mut self, value: T) {
        if let FacetState::Owned(current) = self {
            *current = value;
        }
    }

    /// Replace the caller-supplied snapshot; no-op for owned facets.
    pub fn supply(&mut self, value: T) {
        if let FacetState::Controlled(current) = self {
            *current = value;
        }
    }

    /// Whether the caller owns this facet.
    pub fn is_controlled(&self) -> bool {
        matches!(self, FacetState::Controlled(_))
    }
}

impl<T: Default> Default for FacetState<T> {
    fn default() -> Self {
        FacetState::Owned(T::default())
    }
}
