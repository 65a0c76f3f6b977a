//! Column definitions and the stock schemas fresh groups and rows start from.
//!
//! A column's `id` is permanent and is the only key cell values are ever
//! stored under. Display names are cosmetic: renaming a column touches
//! nothing but its `name`, so no rename can strand or collide stored values.

use serde::{Deserialize, Serialize};

use crate::board::IdSource;
use crate::fields::ColumnKind;

/// Narrowest a column can be resized to, in pixels.
pub const MIN_COLUMN_WIDTH: u32 = 100;

/// Width given to freshly added columns.
pub const DEFAULT_COLUMN_WIDTH: u32 = 150;

/// Display name given to freshly added columns until renamed.
pub const NEW_COLUMN_NAME: &str = "New Column";

/// A named, typed, resizable field definition applied to every row in its
/// scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub id: u64,
    pub name: String,
    pub kind: ColumnKind,
    pub width: u32,
}

impl Column {
    pub fn new(id: u64, name: &str, kind: ColumnKind, width: u32) -> Self {
        Column {
            id,
            name: name.to_string(),
            kind,
            width,
        }
    }
}

/// Find a column by id in an ordered schema.
pub fn find_column(columns: &[Column], id: u64) -> Option<&Column> {
    columns.iter().find(|c| c.id == id)
}

/// The schema every new group applies to its rows.
pub fn default_parent_columns(ids: &mut IdSource) -> Vec<Column> {
    vec![
        Column::new(ids.next(), "Item", ColumnKind::Text, 300),
        Column::new(ids.next(), "Person", ColumnKind::Owner, 150),
        Column::new(ids.next(), "Status", ColumnKind::Status, 150),
        Column::new(ids.next(), "Date", ColumnKind::Date, 100),
    ]
}

/// The schema every new row applies to its own subtask table.
pub fn default_subtask_columns(ids: &mut IdSource) -> Vec<Column> {
    vec![
        Column::new(ids.next(), "Subitem", ColumnKind::Text, 300),
        Column::new(ids.next(), "Owner", ColumnKind::Owner, 150),
        Column::new(ids.next(), "Status", ColumnKind::Status, 150),
        Column::new(ids.next(), "Date", ColumnKind::Date, 100),
    ]
}
