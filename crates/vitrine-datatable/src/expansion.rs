//! Row expansion as a pure set flip.
//!
//! Expansion is independent of selection: the two facets share the `RowKey`
//! type and nothing else. Expanding a detail row's own sub-rows is not
//! supported.

use crate::ids::RowKey;
use std::collections::BTreeSet;

/// Toggle expansion of a single row.
pub fn toggle(key: &RowKey, expanded: &BTreeSet<RowKey>) -> BTreeSet<RowKey> {
    let mut next = expanded.clone();
    if !next.remove(key) {
        next.insert(key.clone());
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_roundtrip() {
        let key = RowKey::new("ord_1");
        let start = BTreeSet::new();
        let opened = toggle(&key, &start);
        assert!(opened.contains(&key));
        assert_eq!(toggle(&key, &opened), start);
    }

    #[test]
    fn test_toggle_leaves_other_rows() {
        let other = RowKey::new("ord_2");
        let start: BTreeSet<RowKey> = [other.clone()].into_iter().collect();
        let next = toggle(&RowKey::new("ord_1"), &start);
        assert!(next.contains(&other));
        assert_eq!(next.len(), 2);
    }
}
