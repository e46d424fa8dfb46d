//! Column sort state.
//!
//! At most one column sorts at a time. The engine never reorders records; a
//! header click advances the state machine here and the caller receives a
//! sort intent to apply (locally or via a server query).

use crate::ids::ColumnId;
use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Short wire/display form ("asc"/"desc").
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// What repeated clicks on the same sorted column cycle through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortCycle {
    /// asc → desc → unsorted → asc ...
    #[default]
    ThreeState,
    /// asc → desc → asc ... (never returns to unsorted)
    TwoState,
}

/// The active sort, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SortState {
    /// Sorted column, `None` when unsorted.
    pub column: Option<ColumnId>,
    /// Direction for the sorted column.
    pub direction: Direction,
}

impl SortState {
    /// Unsorted state.
    pub fn none() -> Self {
        Self::default()
    }

    /// Ascending sort on a column.
    pub fn asc(column: impl Into<ColumnId>) -> Self {
        Self {
            column: Some(column.into()),
            direction: Direction::Asc,
        }
    }

    /// Descending sort on a column.
    pub fn desc(column: impl Into<ColumnId>) -> Self {
        Self {
            column: Some(column.into()),
            direction: Direction::Desc,
        }
    }

    /// Direction of the given column, if it is the sorted one.
    pub fn direction_of(&self, column: &ColumnId) -> Option<Direction> {
        match &self.column {
            Some(active) if active == column => Some(self.direction),
            _ => None,
        }
    }
}

/// Advance the sort state for a click on `column`.
///
/// A click on a column other than the active one always starts an ascending
/// sort on it; repeated clicks on the active column follow `cycle`.
pub fn advance(state: &SortState, column: &ColumnId, cycle: SortCycle) -> SortState {
    match state.direction_of(column) {
        None => SortState::asc(column.clone()),
        Some(Direction::Asc) => SortState::desc(column.clone()),
        Some(Direction::Desc) => match cycle {
            SortCycle::ThreeState => SortState::none(),
            SortCycle::TwoState => SortState::asc(column.clone()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name() -> ColumnId {
        ColumnId::new("name")
    }

    #[test]
    fn test_three_state_cycle() {
        let cycle = SortCycle::ThreeState;
        let first = advance(&SortState::none(), &name(), cycle);
        assert_eq!(first, SortState::asc("name"));
        let second = advance(&first, &name(), cycle);
        assert_eq!(second, SortState::desc("name"));
        let third = advance(&second, &name(), cycle);
        assert_eq!(third, SortState::none());
    }

    #[test]
    fn test_two_state_cycle() {
        let cycle = SortCycle::TwoState;
        let first = advance(&SortState::none(), &name(), cycle);
        assert_eq!(first, SortState::asc("name"));
        let second = advance(&first, &name(), cycle);
        assert_eq!(second, SortState::desc("name"));
        let third = advance(&second, &name(), cycle);
        assert_eq!(third, SortState::asc("name"));
    }

    #[test]
    fn test_switching_column_starts_ascending() {
        let state = SortState::desc("price");
        let next = advance(&state, &name(), SortCycle::ThreeState);
        assert_eq!(next, SortState::asc("name"));
    }

    #[test]
    fn test_direction_of() {
        let state = SortState::desc("price");
        assert_eq!(
            state.direction_of(&ColumnId::new("price")),
            Some(Direction::Desc)
        );
        assert_eq!(state.direction_of(&name()), None);
        assert_eq!(SortState::none().direction_of(&name()), None);
    }
}
