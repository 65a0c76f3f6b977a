//! Query matching over the row tree.
//!
//! Filtering is a pure view: it never mutates rows and never touches
//! expansion state. A matched subrow inside a collapsed parent is the
//! presentation layer's problem to reveal (or not).

use crate::fields::FilterScope;
use crate::grid::{Cells, Row};

fn cells_match(cells: &Cells, needle: &str) -> bool {
    cells.values().any(|v| v.to_lowercase().contains(needle))
}

/// Case-insensitive substring match against any of the row's own cells.
/// `needle` must already be lowercased.
pub fn row_matches(row: &Row, needle: &str) -> bool {
    cells_match(&row.cells, needle)
}

/// True when any cell of any subrow matches. `needle` must already be
/// lowercased.
pub fn subrows_match(row: &Row, needle: &str) -> bool {
    row.subrows.iter().any(|s| cells_match(&s.cells, needle))
}

/// Filtered view of `rows` for a query and scope. An empty query keeps
/// everything; `All` is the union of the parent and subtask scopes.
pub fn filter_rows<'a>(rows: &'a [Row], query: &str, scope: FilterScope) -> Vec<&'a Row> {
    if query.is_empty() {
        return rows.iter().collect();
    }
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| match scope {
            FilterScope::Parent => row_matches(row, &needle),
            FilterScope::Subtask => subrows_match(row, &needle),
            FilterScope::All => row_matches(row, &needle) || subrows_match(row, &needle),
        })
        .collect()
}
