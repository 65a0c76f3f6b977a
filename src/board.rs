//! The board store.
//!
//! `Board` owns the whole grid state: the group tree, the id source, and the
//! transient interaction state (one edit cursor, one drag session, never
//! both). Every mutation the presentation layer can request lives here as a
//! total, synchronous state transition. Unknown ids are deliberate no-ops
//! rather than faults: callers only ever hand back ids they were given, and a
//! stale id just means the state moved on underneath them.
//!
//! Boards snapshot to JSON files the same way the rest of the data layer
//! does: load returns an empty board when the file is missing or corrupt,
//! save goes through a temp file and rename.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::fields::{ColumnKind, FilterScope};
use crate::filter::filter_rows;
use crate::grid::{Group, Row, SubRow, NEW_GROUP_NAME};
use crate::schema::{
    default_parent_columns, default_subtask_columns, find_column, Column, DEFAULT_COLUMN_WIDTH,
    MIN_COLUMN_WIDTH, NEW_COLUMN_NAME,
};
use crate::session::{CellRef, DragSession, EditCursor, SchemaScope};

/// Allocates ids from wall-clock milliseconds, bumping monotonically when
/// the clock hands out the same millisecond twice or runs backwards.
#[derive(Debug, Default, Clone)]
pub struct IdSource {
    last: u64,
}

impl IdSource {
    pub fn next(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis() as u64;
        self.last = if now > self.last { now } else { self.last + 1 };
        self.last
    }

    /// Never hand out anything at or below `floor` again. Applied after a
    /// snapshot load so fresh ids cannot collide with persisted ones.
    pub fn reserve(&mut self, floor: u64) {
        if floor > self.last {
            self.last = floor;
        }
    }
}

/// In-memory store for the hierarchical grid.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Board {
    pub groups: Vec<Group>,
    #[serde(skip)]
    edit: Option<EditCursor>,
    #[serde(skip)]
    drag: Option<DragSession>,
    #[serde(skip)]
    ids: IdSource,
}

impl Board {
    /// Load a board from a JSON snapshot, starting fresh if the file doesn't
    /// exist or doesn't parse.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Board::default();
        }
        let mut buf = String::new();
        match File::open(path).and_then(|mut f| f.read_to_string(&mut buf)) {
            Ok(_) => match serde_json::from_str::<Board>(&buf) {
                Ok(mut board) => {
                    board.reseed_ids();
                    board
                }
                Err(e) => {
                    eprintln!("Error parsing board, starting fresh: {e}");
                    Board::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading board, starting fresh: {e}");
                Board::default()
            }
        }
    }

    /// Save the board to a JSON snapshot using atomic write (temp + rename).
    /// Transient edit/drag state is not persisted.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let tmp = path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        let data = serde_json::to_string_pretty(self).unwrap();
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    /// Push the id floor past every id in the tree.
    fn reseed_ids(&mut self) {
        let mut max = 0;
        for g in &self.groups {
            max = max.max(g.id);
            for c in &g.columns {
                max = max.max(c.id);
            }
            for r in &g.rows {
                max = max.max(r.id);
                for c in &r.subcolumns {
                    max = max.max(c.id);
                }
                for s in &r.subrows {
                    max = max.max(s.id);
                }
            }
        }
        self.ids.reserve(max);
    }

    // ---- lookups ----------------------------------------------------------

    pub fn group(&self, id: u64) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn group_mut(&mut self, id: u64) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    /// Row lookup across every group.
    pub fn row(&self, id: u64) -> Option<&Row> {
        self.groups.iter().find_map(|g| g.row(id))
    }

    pub fn row_mut(&mut self, id: u64) -> Option<&mut Row> {
        self.groups.iter_mut().find_map(|g| g.row_mut(id))
    }

    fn locate_row(&self, id: u64) -> Option<(usize, usize)> {
        for (gi, g) in self.groups.iter().enumerate() {
            if let Some(ri) = g.rows.iter().position(|r| r.id == id) {
                return Some((gi, ri));
            }
        }
        None
    }

    fn locate_subrow(&self, id: u64) -> Option<(usize, usize, usize)> {
        for (gi, g) in self.groups.iter().enumerate() {
            for (ri, r) in g.rows.iter().enumerate() {
                if let Some(si) = r.subrows.iter().position(|s| s.id == id) {
                    return Some((gi, ri, si));
                }
            }
        }
        None
    }

    /// The ordered column list a scope resolves to.
    pub fn schema(&self, scope: SchemaScope) -> Option<&[Column]> {
        match scope {
            SchemaScope::Group(id) => self.group(id).map(|g| g.columns.as_slice()),
            SchemaScope::Row(id) => self.row(id).map(|r| r.subcolumns.as_slice()),
        }
    }

    fn schema_mut(&mut self, scope: SchemaScope) -> Option<&mut Vec<Column>> {
        match scope {
            SchemaScope::Group(id) => self.group_mut(id).map(|g| &mut g.columns),
            SchemaScope::Row(id) => self.row_mut(id).map(|r| &mut r.subcolumns),
        }
    }

    /// A group's rows in display order.
    pub fn rows(&self, group_id: u64) -> Option<&[Row]> {
        self.group(group_id).map(|g| g.rows.as_slice())
    }

    /// Non-mutating filtered view of a group's rows. Pure in `(rows, query,
    /// scope)`; memoisation is the caller's business.
    pub fn filtered_rows(&self, group_id: u64, query: &str, scope: FilterScope) -> Vec<&Row> {
        self.group(group_id)
            .map(|g| filter_rows(&g.rows, query, scope))
            .unwrap_or_default()
    }

    /// A cell's committed value, if the cell exists.
    pub fn cell_value(&self, cell: CellRef) -> Option<String> {
        let row = self.row(cell.row)?;
        match cell.sub {
            Some(sub_id) => row.subrow(sub_id)?.cells.get(&cell.column).cloned(),
            None => row.cells.get(&cell.column).cloned(),
        }
    }

    pub fn active_edit(&self) -> Option<&EditCursor> {
        self.edit.as_ref()
    }

    pub fn active_drag(&self) -> Option<DragSession> {
        self.drag
    }

    // One interactive affordance at a time: starting either kind of session
    // tears down whatever else was active.
    fn set_edit(&mut self, cursor: EditCursor) {
        self.drag = None;
        self.edit = Some(cursor);
    }

    fn set_drag(&mut self, session: DragSession) {
        self.edit = None;
        self.drag = Some(session);
    }

    // ---- schema management ------------------------------------------------

    /// Append a fresh column to the scope's schema, backfill an empty value
    /// into every record the scope governs, and open the header for its
    /// rename-on-create edit. Returns the new column's id.
    pub fn add_column(&mut self, scope: SchemaScope, kind: ColumnKind) -> Option<u64> {
        let id = self.ids.next();
        let column = Column::new(id, NEW_COLUMN_NAME, kind, DEFAULT_COLUMN_WIDTH);
        match scope {
            SchemaScope::Group(gid) => {
                let group = self.group_mut(gid)?;
                group.columns.push(column);
                for row in &mut group.rows {
                    row.cells.entry(id).or_default();
                }
            }
            SchemaScope::Row(rid) => {
                let row = self.row_mut(rid)?;
                row.subcolumns.push(column);
                for sub in &mut row.subrows {
                    sub.cells.entry(id).or_default();
                }
            }
        }
        self.set_edit(EditCursor::ColumnHeader {
            scope,
            column: id,
            draft: NEW_COLUMN_NAME.to_string(),
        });
        Some(id)
    }

    /// Change a column's display name. Cells stay keyed by the permanent id,
    /// so no rename can lose or collide stored values.
    pub fn rename_column(&mut self, scope: SchemaScope, column_id: u64, name: &str) {
        if let Some(columns) = self.schema_mut(scope) {
            if let Some(col) = columns.iter_mut().find(|c| c.id == column_id) {
                col.name = name.to_string();
            }
        }
    }

    /// Set a column's width, clamped to [`MIN_COLUMN_WIDTH`].
    pub fn resize_column(&mut self, scope: SchemaScope, column_id: u64, width: u32) {
        if let Some(columns) = self.schema_mut(scope) {
            if let Some(col) = columns.iter_mut().find(|c| c.id == column_id) {
                col.width = width.max(MIN_COLUMN_WIDTH);
            }
        }
    }

    /// Move `from_id` to the position `to_id` occupies, within one scope.
    pub fn reorder_column(&mut self, scope: SchemaScope, from_id: u64, to_id: u64) {
        if from_id == to_id {
            return;
        }
        let Some(columns) = self.schema_mut(scope) else {
            return;
        };
        let Some(from) = columns.iter().position(|c| c.id == from_id) else {
            return;
        };
        let Some(to) = columns.iter().position(|c| c.id == to_id) else {
            return;
        };
        // Target index is captured before removal: dragging the first column
        // onto the last lands it at the very end.
        let moved = columns.remove(from);
        let to = to.min(columns.len());
        columns.insert(to, moved);
    }

    // ---- row / tree mutation ----------------------------------------------

    /// Append a group with its own copy of the stock parent schema, expanded
    /// and with its title opened for rename.
    pub fn add_group(&mut self) -> u64 {
        let id = self.ids.next();
        let columns = default_parent_columns(&mut self.ids);
        self.groups.push(Group::new(id, NEW_GROUP_NAME, columns));
        self.set_edit(EditCursor::GroupName {
            group: id,
            draft: NEW_GROUP_NAME.to_string(),
        });
        id
    }

    /// Append a row to a group, cells backfilled empty for the group schema,
    /// with its own copy of the stock subtask schema.
    pub fn add_row(&mut self, group_id: u64) -> Option<u64> {
        let id = self.ids.next();
        let subcolumns = default_subtask_columns(&mut self.ids);
        let group = self.group_mut(group_id)?;
        let row = Row::new(id, &group.columns, subcolumns);
        group.rows.push(row);
        Some(id)
    }

    /// Append a subrow, auto-expand the parent, and open the new subrow's
    /// primary cell for editing so naming it needs no second click.
    pub fn add_subrow(&mut self, row_id: u64) -> Option<u64> {
        let id = self.ids.next();
        let row = self.row_mut(row_id)?;
        row.subrows.push(SubRow::new(id, &row.subcolumns));
        row.expanded = true;
        let primary = row.primary_subcolumn();
        if let Some(column) = primary {
            self.set_edit(EditCursor::Cell {
                cell: CellRef::sub_cell(row_id, id, column),
                draft: String::new(),
            });
        }
        Some(id)
    }

    /// Flip a group open/closed. Presentational only, no cascade.
    pub fn toggle_group(&mut self, group_id: u64) {
        if let Some(g) = self.group_mut(group_id) {
            g.expanded = !g.expanded;
        }
    }

    /// Flip a row's subtask table open/closed.
    pub fn toggle_row(&mut self, row_id: u64) {
        if let Some(r) = self.row_mut(row_id) {
            r.expanded = !r.expanded;
        }
    }

    /// Move a row to the position `target` occupies. Detach and insert happen
    /// in the same update, and the move may cross groups.
    pub fn reorder_row(&mut self, dragged: u64, target: u64) {
        if dragged == target {
            return;
        }
        let Some((from_g, from_i)) = self.locate_row(dragged) else {
            return;
        };
        let Some((to_g, to_i)) = self.locate_row(target) else {
            return;
        };
        let moved = self.groups[from_g].rows.remove(from_i);
        let rows = &mut self.groups[to_g].rows;
        rows.insert(to_i.min(rows.len()), moved);
    }

    /// Move a subrow to sit where `target_sub` is inside `target_row`, or
    /// append to `target_row` when no target subrow is given. A cross-row
    /// move detaches from the old parent and attaches to the new one in the
    /// same update: at no point does the subrow live in both rows or neither.
    pub fn reorder_subrow(&mut self, dragged: u64, target_row: u64, target_sub: Option<u64>) {
        if Some(dragged) == target_sub {
            return;
        }
        let Some((fg, fr, fi)) = self.locate_subrow(dragged) else {
            return;
        };
        let Some((tg, tr)) = self.locate_row(target_row) else {
            return;
        };
        let to_i = match target_sub {
            Some(sub) => {
                match self.groups[tg].rows[tr].subrows.iter().position(|s| s.id == sub) {
                    Some(i) => i,
                    None => return,
                }
            }
            None => self.groups[tg].rows[tr].subrows.len(),
        };
        let moved = self.groups[fg].rows[fr].subrows.remove(fi);
        let subrows = &mut self.groups[tg].rows[tr].subrows;
        subrows.insert(to_i.min(subrows.len()), moved);
    }

    // ---- edit cursor ------------------------------------------------------

    /// Open a cell editor seeded with the cell's current value.
    pub fn begin_cell_edit(&mut self, cell: CellRef) {
        let Some(value) = self.cell_value(cell) else {
            return;
        };
        self.set_edit(EditCursor::Cell { cell, draft: value });
    }

    /// Open a column header for rename, seeded with its current name.
    pub fn begin_column_header_edit(&mut self, scope: SchemaScope, column_id: u64) {
        let Some(name) = self
            .schema(scope)
            .and_then(|cols| find_column(cols, column_id))
            .map(|c| c.name.clone())
        else {
            return;
        };
        self.set_edit(EditCursor::ColumnHeader {
            scope,
            column: column_id,
            draft: name,
        });
    }

    /// Open a group title for rename, seeded with its current name.
    pub fn begin_group_rename(&mut self, group_id: u64) {
        let Some(name) = self.group(group_id).map(|g| g.name.clone()) else {
            return;
        };
        self.set_edit(EditCursor::GroupName {
            group: group_id,
            draft: name,
        });
    }

    /// Replace the active draft. Each keystroke lands here; committed data is
    /// untouched until [`Board::commit_edit`].
    pub fn update_draft(&mut self, text: &str) {
        if let Some(cursor) = self.edit.as_mut() {
            cursor.set_draft(text);
        }
    }

    /// The single commit routine. Blur and Enter both route here.
    pub fn commit_edit(&mut self) {
        let Some(cursor) = self.edit.take() else {
            return;
        };
        match cursor {
            EditCursor::Cell { cell, draft } => self.commit_cell(cell, draft),
            EditCursor::ColumnHeader {
                scope,
                column,
                draft,
            } => {
                // A header abandoned blank falls back to the stock name.
                let name = if draft.trim().is_empty() {
                    NEW_COLUMN_NAME.to_string()
                } else {
                    draft
                };
                self.rename_column(scope, column, &name);
            }
            EditCursor::GroupName { group, draft } => {
                if !draft.trim().is_empty() {
                    if let Some(g) = self.group_mut(group) {
                        g.name = draft;
                    }
                }
            }
        }
    }

    /// Abandon the active edit, draft and all.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    fn commit_cell(&mut self, cell: CellRef, draft: String) {
        let Some(row) = self.row_mut(cell.row) else {
            return;
        };
        match cell.sub {
            None => {
                // Writes only land on columns still in the schema.
                if row.cells.contains_key(&cell.column) {
                    row.cells.insert(cell.column, draft);
                    row.touch();
                }
            }
            Some(sub_id) => {
                let is_primary = row.primary_subcolumn() == Some(cell.column);
                let discard = {
                    let Some(sub) = row.subrow_mut(sub_id) else {
                        return;
                    };
                    if !sub.cells.contains_key(&cell.column) {
                        return;
                    }
                    let blank = draft.trim().is_empty();
                    sub.cells.insert(cell.column, draft);
                    sub.touch();
                    if is_primary && !blank {
                        sub.placeholder = false;
                    }
                    is_primary && blank && sub.placeholder
                };
                if discard {
                    // Never-named placeholder left blank: drop it rather than
                    // keep an empty line. Named subrows survive a blanking
                    // edit.
                    row.subrows.retain(|s| s.id != sub_id);
                }
                row.touch();
            }
        }
    }

    // ---- drag sessions ----------------------------------------------------

    /// Mark a column as the reorder source.
    pub fn begin_column_drag(&mut self, scope: SchemaScope, column_id: u64) {
        let known = self
            .schema(scope)
            .map_or(false, |cols| find_column(cols, column_id).is_some());
        if !known {
            return;
        }
        self.set_drag(DragSession::ColumnReorder {
            scope,
            source: column_id,
            over: None,
        });
    }

    /// Mark the column the pointer is currently over as the drop target.
    /// Hovers over another scope's headers are ignored: no cross-scope moves.
    pub fn drag_column_over(&mut self, column_id: u64) {
        let Some(DragSession::ColumnReorder { scope, .. }) = self.drag else {
            return;
        };
        let known = self
            .schema(scope)
            .map_or(false, |cols| find_column(cols, column_id).is_some());
        if !known {
            return;
        }
        if let Some(DragSession::ColumnReorder { over, .. }) = self.drag.as_mut() {
            *over = Some(column_id);
        }
    }

    /// Complete the column reorder between the marked source and target.
    pub fn drop_column(&mut self) {
        let Some(DragSession::ColumnReorder {
            scope,
            source,
            over,
        }) = self.drag
        else {
            return;
        };
        self.drag = None;
        if let Some(target) = over {
            self.reorder_column(scope, source, target);
        }
    }

    pub fn begin_row_drag(&mut self, row_id: u64) {
        if self.locate_row(row_id).is_none() {
            return;
        }
        self.set_drag(DragSession::RowReorder { source: row_id });
    }

    pub fn drop_row_on(&mut self, target: u64) {
        let Some(DragSession::RowReorder { source }) = self.drag else {
            return;
        };
        self.drag = None;
        self.reorder_row(source, target);
    }

    pub fn begin_subrow_drag(&mut self, sub_id: u64) {
        if self.locate_subrow(sub_id).is_none() {
            return;
        }
        self.set_drag(DragSession::SubRowReorder { source: sub_id });
    }

    pub fn drop_subrow_on(&mut self, target_row: u64, target_sub: Option<u64>) {
        let Some(DragSession::SubRowReorder { source }) = self.drag else {
            return;
        };
        self.drag = None;
        self.reorder_subrow(source, target_row, target_sub);
    }

    /// Abandon whatever gesture is in flight (pointer released off-target).
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Start a resize session anchored at the pointer's current x and the
    /// column's current width.
    pub fn begin_column_resize(&mut self, scope: SchemaScope, column_id: u64, start_x: i32) {
        let Some(start_width) = self
            .schema(scope)
            .and_then(|cols| find_column(cols, column_id))
            .map(|c| c.width)
        else {
            return;
        };
        self.set_drag(DragSession::ColumnResize {
            scope,
            column: column_id,
            start_x,
            start_width,
        });
    }

    /// Apply the live width for the pointer's current x. The delta is taken
    /// from the gesture anchor, never from the previous move event.
    pub fn update_column_resize(&mut self, current_x: i32) {
        let Some(DragSession::ColumnResize {
            scope,
            column,
            start_x,
            start_width,
        }) = self.drag
        else {
            return;
        };
        let delta = i64::from(current_x) - i64::from(start_x);
        let width = (i64::from(start_width) + delta)
            .clamp(i64::from(MIN_COLUMN_WIDTH), i64::from(u32::MAX)) as u32;
        self.resize_column(scope, column, width);
    }

    /// Pointer released: the resize session is over.
    pub fn end_column_resize(&mut self) {
        if matches!(self.drag, Some(DragSession::ColumnResize { .. })) {
            self.drag = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_group() -> (Board, u64) {
        let mut board = Board::default();
        let gid = board.add_group();
        board.cancel_edit();
        (board, gid)
    }

    #[test]
    fn id_source_is_strictly_increasing() {
        let mut ids = IdSource::default();
        let a = ids.next();
        let b = ids.next();
        let c = ids.next();
        assert!(a < b && b < c);
    }

    #[test]
    fn add_column_backfills_every_row() {
        let (mut board, gid) = board_with_group();
        let r1 = board.add_row(gid).unwrap();
        let r2 = board.add_row(gid).unwrap();
        let col = board.add_column(SchemaScope::Group(gid), ColumnKind::Status).unwrap();
        for rid in [r1, r2] {
            assert_eq!(
                board.cell_value(CellRef::row_cell(rid, col)).as_deref(),
                Some("")
            );
        }
        // Rename-on-create: the new header is already open for editing.
        assert!(matches!(
            board.active_edit(),
            Some(EditCursor::ColumnHeader { column, .. }) if *column == col
        ));
    }

    #[test]
    fn add_column_on_unknown_scope_is_a_noop() {
        let (mut board, _gid) = board_with_group();
        assert_eq!(board.add_column(SchemaScope::Row(999), ColumnKind::Text), None);
        assert!(board.active_edit().is_none());
    }

    #[test]
    fn rename_never_touches_cell_data() {
        let (mut board, gid) = board_with_group();
        let rid = board.add_row(gid).unwrap();
        let primary = board.group(gid).unwrap().primary_column().unwrap();
        board.begin_cell_edit(CellRef::row_cell(rid, primary));
        board.update_draft("Build the thing");
        board.commit_edit();
        board.rename_column(SchemaScope::Group(gid), primary, "Task Name");
        assert_eq!(
            board.cell_value(CellRef::row_cell(rid, primary)).as_deref(),
            Some("Build the thing")
        );
        let schema = board.schema(SchemaScope::Group(gid)).unwrap();
        assert_eq!(find_column(schema, primary).unwrap().name, "Task Name");
    }

    #[test]
    fn resize_clamps_to_floor() {
        let (mut board, gid) = board_with_group();
        let primary = board.group(gid).unwrap().primary_column().unwrap();
        board.begin_column_resize(SchemaScope::Group(gid), primary, 500);
        board.update_column_resize(-100_000);
        let schema = board.schema(SchemaScope::Group(gid)).unwrap();
        assert_eq!(find_column(schema, primary).unwrap().width, MIN_COLUMN_WIDTH);
        board.end_column_resize();
        assert!(board.active_drag().is_none());
    }

    #[test]
    fn edit_and_drag_are_mutually_exclusive() {
        let (mut board, gid) = board_with_group();
        let rid = board.add_row(gid).unwrap();
        let primary = board.group(gid).unwrap().primary_column().unwrap();

        board.begin_column_header_edit(SchemaScope::Group(gid), primary);
        assert!(board.active_edit().is_some());
        board.begin_cell_edit(CellRef::row_cell(rid, primary));
        // The header edit is gone, replaced by the cell edit.
        assert!(matches!(board.active_edit(), Some(EditCursor::Cell { .. })));

        board.begin_column_drag(SchemaScope::Group(gid), primary);
        assert!(board.active_edit().is_none());
        assert!(board.active_drag().is_some());
    }

    #[test]
    fn placeholder_subrow_discards_on_blank_commit() {
        let (mut board, gid) = board_with_group();
        let rid = board.add_row(gid).unwrap();
        let sid = board.add_subrow(rid).unwrap();
        // add_subrow opened the primary-cell editor with an empty draft.
        board.commit_edit();
        assert!(board.row(rid).unwrap().subrow(sid).is_none());
    }

    #[test]
    fn named_subrow_survives_a_blanking_edit() {
        let (mut board, gid) = board_with_group();
        let rid = board.add_row(gid).unwrap();
        let sid = board.add_subrow(rid).unwrap();
        board.update_draft("Draft agenda");
        board.commit_edit();
        let primary = board.row(rid).unwrap().primary_subcolumn().unwrap();

        board.begin_cell_edit(CellRef::sub_cell(rid, sid, primary));
        board.update_draft("");
        board.commit_edit();
        let sub = board.row(rid).unwrap().subrow(sid).expect("subrow kept");
        assert_eq!(sub.cells.get(&primary).map(String::as_str), Some(""));
    }

    #[test]
    fn snapshot_round_trips_and_reseeds_ids() {
        let (mut board, gid) = board_with_group();
        let rid = board.add_row(gid).unwrap();
        board.add_subrow(rid);
        board.update_draft("Prepare agenda");
        board.commit_edit();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        board.save(&path).unwrap();

        let mut loaded = Board::load(&path);
        assert_eq!(loaded.groups.len(), 1);
        assert_eq!(loaded.row(rid).unwrap().subrows.len(), 1);
        // Fresh ids from the loaded board stay unique.
        let new_group = loaded.add_group();
        assert!(loaded.group(gid).is_some());
        assert_ne!(new_group, gid);
    }

    #[test]
    fn load_missing_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let board = Board::load(&dir.path().join("absent.json"));
        assert!(board.groups.is_empty());
    }
}
