//! The group → row → subrow tree and its cell storage.
//!
//! Every row and subrow keeps a cell entry (possibly empty) for each column
//! in the schema that governs it; adding a column backfills the gap. Order of
//! groups, rows and subrows is display order and survives every mutation
//! except an explicit reorder.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::schema::Column;

/// Name given to freshly added groups until renamed.
pub const NEW_GROUP_NAME: &str = "New Group";

/// Cell values keyed by permanent column id. Loosely typed by design: every
/// column kind reads from and commits to a plain string.
pub type Cells = BTreeMap<u64, String>;

/// Insert an empty value for every schema column the mapping lacks.
pub fn backfill(cells: &mut Cells, columns: &[Column]) {
    for col in columns {
        cells.entry(col.id).or_default();
    }
}

/// A child record of a row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubRow {
    pub id: u64,
    pub cells: Cells,
    /// Set until the primary cell first commits a non-empty value.
    /// Committing a blank primary on a placeholder discards the subrow;
    /// a subrow that has been named is never auto-removed.
    #[serde(default)]
    pub placeholder: bool,
    pub created_at_utc: i64,
    pub updated_at_utc: i64,
}

impl SubRow {
    pub fn new(id: u64, columns: &[Column]) -> Self {
        let mut cells = Cells::new();
        backfill(&mut cells, columns);
        let now = Utc::now().timestamp();
        SubRow {
            id,
            cells,
            placeholder: true,
            created_at_utc: now,
            updated_at_utc: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at_utc = Utc::now().timestamp();
    }
}

/// A schema-driven record with an ordered list of subrows. Each row owns the
/// column schema its subtask table uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Row {
    pub id: u64,
    pub expanded: bool,
    pub cells: Cells,
    pub subcolumns: Vec<Column>,
    pub subrows: Vec<SubRow>,
    pub created_at_utc: i64,
    pub updated_at_utc: i64,
}

impl Row {
    pub fn new(id: u64, columns: &[Column], subcolumns: Vec<Column>) -> Self {
        let mut cells = Cells::new();
        backfill(&mut cells, columns);
        let now = Utc::now().timestamp();
        Row {
            id,
            expanded: false,
            cells,
            subcolumns,
            subrows: Vec::new(),
            created_at_utc: now,
            updated_at_utc: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at_utc = Utc::now().timestamp();
    }

    pub fn subrow(&self, id: u64) -> Option<&SubRow> {
        self.subrows.iter().find(|s| s.id == id)
    }

    pub fn subrow_mut(&mut self, id: u64) -> Option<&mut SubRow> {
        self.subrows.iter_mut().find(|s| s.id == id)
    }

    /// First subtask column; the cell a fresh subrow opens its editor on.
    pub fn primary_subcolumn(&self) -> Option<u64> {
        self.subcolumns.first().map(|c| c.id)
    }
}

/// Top-level collapsible section. Owns the column schema its rows share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: u64,
    pub name: String,
    pub expanded: bool,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl Group {
    pub fn new(id: u64, name: &str, columns: Vec<Column>) -> Self {
        Group {
            id,
            name: name.to_string(),
            expanded: true,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn row(&self, id: u64) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn row_mut(&mut self, id: u64) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    /// First top-level column; the cell a named row add commits into.
    pub fn primary_column(&self) -> Option<u64> {
        self.columns.first().map(|c| c.id)
    }
}
