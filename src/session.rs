//! Transient interaction state: the single active edit cursor and the single
//! active pointer-gesture session.
//!
//! Neither value is ever persisted. The board enforces mutual exclusion:
//! starting an edit or a gesture clears whichever of the two was active.
//! Attaching and detaching the global pointer listeners that feed a gesture
//! is the presentation layer's job; the board only tracks start/update/end.

/// Addresses one ordered column list on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaScope {
    /// The top-level columns a group applies to its rows.
    Group(u64),
    /// The subtask columns one row applies to its subrows.
    Row(u64),
}

/// Addresses one cell: a row cell when `sub` is `None`, else a subrow cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: u64,
    pub sub: Option<u64>,
    pub column: u64,
}

impl CellRef {
    pub fn row_cell(row: u64, column: u64) -> Self {
        CellRef {
            row,
            sub: None,
            column,
        }
    }

    pub fn sub_cell(row: u64, sub: u64, column: u64) -> Self {
        CellRef {
            row,
            sub: Some(sub),
            column,
        }
    }
}

/// The at-most-one in-place edit in flight. The draft lives here; row data
/// is untouched until commit.
#[derive(Debug, Clone, PartialEq)]
pub enum EditCursor {
    /// Inline cell editor opened by a double-click/activate gesture.
    Cell { cell: CellRef, draft: String },
    /// Column header rename, including the rename-on-create flow.
    ColumnHeader {
        scope: SchemaScope,
        column: u64,
        draft: String,
    },
    /// Group title rename.
    GroupName { group: u64, draft: String },
}

impl EditCursor {
    pub fn draft(&self) -> &str {
        match self {
            EditCursor::Cell { draft, .. }
            | EditCursor::ColumnHeader { draft, .. }
            | EditCursor::GroupName { draft, .. } => draft,
        }
    }

    pub fn set_draft(&mut self, text: &str) {
        match self {
            EditCursor::Cell { draft, .. }
            | EditCursor::ColumnHeader { draft, .. }
            | EditCursor::GroupName { draft, .. } => *draft = text.to_string(),
        }
    }
}

/// The at-most-one pointer gesture in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragSession {
    /// Header drag: source marks on dragstart, target on dragover, the swap
    /// happens on drop.
    ColumnReorder {
        scope: SchemaScope,
        source: u64,
        over: Option<u64>,
    },
    /// Resize handle drag. Widths are computed from the gesture's anchor, not
    /// from per-event deltas, so a fast pointer never loses travel.
    ColumnResize {
        scope: SchemaScope,
        column: u64,
        start_x: i32,
        start_width: u32,
    },
    RowReorder { source: u64 },
    SubRowReorder { source: u64 },
}
