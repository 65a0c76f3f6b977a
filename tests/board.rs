//! End-to-end behaviour of the board store through its public API.

use taskboard::{Board, CellRef, ColumnKind, EditCursor, FilterScope, SchemaScope, MIN_COLUMN_WIDTH};

fn set_cell(board: &mut Board, cell: CellRef, value: &str) {
    board.begin_cell_edit(cell);
    board.update_draft(value);
    board.commit_edit();
}

fn column_id(board: &Board, scope: SchemaScope, name: &str) -> u64 {
    board
        .schema(scope)
        .unwrap()
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("no column named {name}"))
        .id
}

fn named_group(board: &mut Board, name: &str) -> u64 {
    let gid = board.add_group();
    board.update_draft(name);
    board.commit_edit();
    gid
}

fn named_row(board: &mut Board, gid: u64, title: &str) -> u64 {
    let rid = board.add_row(gid).unwrap();
    let primary = column_id(board, SchemaScope::Group(gid), "Item");
    set_cell(board, CellRef::row_cell(rid, primary), title);
    rid
}

fn named_subrow(board: &mut Board, rid: u64, title: &str) -> u64 {
    let sid = board.add_subrow(rid).unwrap();
    // add_subrow leaves the primary-cell editor open.
    board.update_draft(title);
    board.commit_edit();
    sid
}

#[test]
fn new_column_backfills_rows_and_subrows() {
    let mut board = Board::default();
    let gid = named_group(&mut board, "Sprint");
    let r1 = named_row(&mut board, gid, "Kickoff");
    let r2 = named_row(&mut board, gid, "Design review");
    let s1 = named_subrow(&mut board, r1, "Agenda");

    let col = board
        .add_column(SchemaScope::Group(gid), ColumnKind::Number)
        .unwrap();
    board.commit_edit();
    for rid in [r1, r2] {
        assert_eq!(
            board.cell_value(CellRef::row_cell(rid, col)).as_deref(),
            Some("")
        );
    }

    let sub_col = board.add_column(SchemaScope::Row(r1), ColumnKind::Label).unwrap();
    board.commit_edit();
    assert_eq!(
        board.cell_value(CellRef::sub_cell(r1, s1, sub_col)).as_deref(),
        Some("")
    );
    // r2's subtask schema is its own; the new column never leaked into it.
    assert!(board
        .schema(SchemaScope::Row(r2))
        .unwrap()
        .iter()
        .all(|c| c.id != sub_col));
}

#[test]
fn resize_sequence_never_drops_below_floor() {
    let mut board = Board::default();
    let gid = named_group(&mut board, "Sprint");
    let scope = SchemaScope::Group(gid);
    let col = column_id(&board, scope, "Item");

    board.begin_column_resize(scope, col, 400);
    for x in [410, 150, -90_000, 500, i32::MIN, 405] {
        board.update_column_resize(x);
        let width = board.schema(scope).unwrap()[0].width;
        assert!(width >= MIN_COLUMN_WIDTH, "width {width} fell below floor");
    }
    board.end_column_resize();
    assert!(board.active_drag().is_none());

    // Delta is anchored to the gesture start: +50 from a 300px start is 350
    // even after an interim move pinned the width to the floor.
    board.resize_column(scope, col, 300);
    board.begin_column_resize(scope, col, 100);
    board.update_column_resize(-90_000);
    board.update_column_resize(150);
    assert_eq!(board.schema(scope).unwrap()[0].width, 350);
}

#[test]
fn at_most_one_edit_session() {
    let mut board = Board::default();
    let gid = named_group(&mut board, "Sprint");
    let rid = named_row(&mut board, gid, "Kickoff");
    let scope = SchemaScope::Group(gid);
    let item = column_id(&board, scope, "Item");
    let status = column_id(&board, scope, "Status");

    board.begin_column_header_edit(scope, status);
    assert!(matches!(
        board.active_edit(),
        Some(EditCursor::ColumnHeader { .. })
    ));

    board.begin_cell_edit(CellRef::row_cell(rid, item));
    match board.active_edit() {
        Some(EditCursor::Cell { cell, draft }) => {
            assert_eq!(cell.column, item);
            assert_eq!(draft, "Kickoff");
        }
        other => panic!("expected cell edit, got {other:?}"),
    }

    // Drafts never leak into committed data without a commit.
    board.update_draft("Kickoff v2");
    assert_eq!(
        board.cell_value(CellRef::row_cell(rid, item)).as_deref(),
        Some("Kickoff")
    );
    board.commit_edit();
    assert_eq!(
        board.cell_value(CellRef::row_cell(rid, item)).as_deref(),
        Some("Kickoff v2")
    );
    assert!(board.active_edit().is_none());
}

#[test]
fn column_drag_is_a_permutation() {
    let mut board = Board::default();
    let gid = named_group(&mut board, "Sprint");
    let scope = SchemaScope::Group(gid);
    let before: Vec<u64> = board.schema(scope).unwrap().iter().map(|c| c.id).collect();
    let (a, d) = (before[0], before[3]);

    // Drag the first header onto the last.
    board.begin_column_drag(scope, a);
    board.drag_column_over(d);
    board.drop_column();

    let after: Vec<u64> = board.schema(scope).unwrap().iter().map(|c| c.id).collect();
    assert_eq!(after, vec![before[1], before[2], before[3], before[0]]);

    let mut sorted_before = before.clone();
    let mut sorted_after = after.clone();
    sorted_before.sort_unstable();
    sorted_after.sort_unstable();
    assert_eq!(sorted_before, sorted_after);
}

#[test]
fn row_drag_reorders_without_losing_rows() {
    let mut board = Board::default();
    let gid = named_group(&mut board, "Sprint");
    let r1 = named_row(&mut board, gid, "one");
    let r2 = named_row(&mut board, gid, "two");
    let r3 = named_row(&mut board, gid, "three");

    board.begin_row_drag(r1);
    board.drop_row_on(r3);

    let order: Vec<u64> = board.rows(gid).unwrap().iter().map(|r| r.id).collect();
    assert_eq!(order, vec![r2, r3, r1]);
}

#[test]
fn cross_parent_subrow_move_is_atomic() {
    let mut board = Board::default();
    let gid = named_group(&mut board, "Sprint");
    let t1 = named_row(&mut board, gid, "Kickoff");
    let t2 = named_row(&mut board, gid, "Design");
    let s = named_subrow(&mut board, t1, "Agenda");
    let keep = named_subrow(&mut board, t1, "Invites");

    board.begin_subrow_drag(s);
    board.drop_subrow_on(t2, None);

    let t1_subs: Vec<u64> = board.row(t1).unwrap().subrows.iter().map(|s| s.id).collect();
    let t2_subs: Vec<u64> = board.row(t2).unwrap().subrows.iter().map(|s| s.id).collect();
    assert_eq!(t1_subs, vec![keep]);
    assert_eq!(t2_subs, vec![s]);
    // Values travelled with the subrow.
    let primary = board.row(t2).unwrap().primary_subcolumn().unwrap();
    assert_eq!(
        board.cell_value(CellRef::sub_cell(t2, s, primary)).as_deref(),
        Some("Agenda")
    );
}

#[test]
fn subrow_move_before_a_sibling() {
    let mut board = Board::default();
    let gid = named_group(&mut board, "Sprint");
    let t1 = named_row(&mut board, gid, "Kickoff");
    let a = named_subrow(&mut board, t1, "a");
    let b = named_subrow(&mut board, t1, "b");
    let c = named_subrow(&mut board, t1, "c");

    board.reorder_subrow(a, t1, Some(c));
    let order: Vec<u64> = board.row(t1).unwrap().subrows.iter().map(|s| s.id).collect();
    assert_eq!(order, vec![b, c, a]);
}

#[test]
fn rename_is_invisible_to_stored_values() {
    let mut board = Board::default();
    let gid = named_group(&mut board, "Sprint");
    let rid = named_row(&mut board, gid, "Build");
    let scope = SchemaScope::Group(gid);
    let task_col = column_id(&board, scope, "Item");

    board.begin_column_header_edit(scope, task_col);
    board.update_draft("Task Name");
    board.commit_edit();

    assert_eq!(column_id(&board, scope, "Task Name"), task_col);
    assert_eq!(
        board.cell_value(CellRef::row_cell(rid, task_col)).as_deref(),
        Some("Build")
    );
}

#[test]
fn cross_scope_column_drops_are_ignored() {
    let mut board = Board::default();
    let gid = named_group(&mut board, "Sprint");
    let rid = named_row(&mut board, gid, "Kickoff");
    let parent_scope = SchemaScope::Group(gid);
    let before: Vec<u64> = board
        .schema(parent_scope)
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();
    let foreign = column_id(&board, SchemaScope::Row(rid), "Owner");

    board.begin_column_drag(parent_scope, before[0]);
    board.drag_column_over(foreign);
    board.drop_column();

    let after: Vec<u64> = board
        .schema(parent_scope)
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(before, after);
}

#[test]
fn abandoned_drag_changes_nothing() {
    let mut board = Board::default();
    let gid = named_group(&mut board, "Sprint");
    let r1 = named_row(&mut board, gid, "one");
    let r2 = named_row(&mut board, gid, "two");

    board.begin_row_drag(r2);
    assert!(board.active_drag().is_some());
    // Pointer released off-target.
    board.end_drag();
    assert!(board.active_drag().is_none());
    board.drop_row_on(r1);

    let order: Vec<u64> = board.rows(gid).unwrap().iter().map(|r| r.id).collect();
    assert_eq!(order, vec![r1, r2]);
}

#[test]
fn group_rename_goes_through_the_cursor() {
    let mut board = Board::default();
    let gid = named_group(&mut board, "Sprint");

    board.begin_group_rename(gid);
    match board.active_edit() {
        Some(EditCursor::GroupName { draft, .. }) => assert_eq!(draft, "Sprint"),
        other => panic!("expected group rename, got {other:?}"),
    }
    board.update_draft("Sprint 2");
    board.commit_edit();
    assert_eq!(board.group(gid).unwrap().name, "Sprint 2");

    // A blank draft leaves the name alone.
    board.begin_group_rename(gid);
    board.update_draft("   ");
    board.commit_edit();
    assert_eq!(board.group(gid).unwrap().name, "Sprint 2");
}

#[test]
fn filter_scenario_matches_by_scope() {
    let mut board = Board::default();
    let gid = named_group(&mut board, "G1");
    let t1 = named_row(&mut board, gid, "Build");
    let scope = SchemaScope::Group(gid);
    let status = column_id(&board, scope, "Status");
    set_cell(&mut board, CellRef::row_cell(t1, status), "stuck");
    let s1 = named_subrow(&mut board, t1, "Draft");
    let owner = column_id(&board, SchemaScope::Row(t1), "Owner");
    set_cell(&mut board, CellRef::sub_cell(t1, s1, owner), "Sam");

    let by_sub = board.filtered_rows(gid, "sam", FilterScope::Subtask);
    assert_eq!(by_sub.iter().map(|r| r.id).collect::<Vec<_>>(), vec![t1]);

    assert!(board.filtered_rows(gid, "sam", FilterScope::Parent).is_empty());
    assert_eq!(board.filtered_rows(gid, "sam", FilterScope::All).len(), 1);
    assert_eq!(board.filtered_rows(gid, "stuck", FilterScope::Parent).len(), 1);
}

#[test]
fn filtering_leaves_the_board_untouched() {
    let mut board = Board::default();
    let gid = named_group(&mut board, "G1");
    let t1 = named_row(&mut board, gid, "Build");
    named_subrow(&mut board, t1, "Draft");
    board.toggle_row(t1);
    // Collapse the parent: filtering must not re-expand it to reveal a match.
    assert!(!board.row(t1).unwrap().expanded);

    let before = serde_json::to_string(&board).unwrap();
    let first = board.filtered_rows(gid, "draft", FilterScope::All).len();
    let second = board.filtered_rows(gid, "draft", FilterScope::All).len();
    assert_eq!(first, 1);
    assert_eq!(first, second);
    assert_eq!(before, serde_json::to_string(&board).unwrap());
    assert!(!board.row(t1).unwrap().expanded);
}

#[test]
fn toggles_flip_only_their_target() {
    let mut board = Board::default();
    let gid = named_group(&mut board, "Sprint");
    let r1 = named_row(&mut board, gid, "one");
    let r2 = named_row(&mut board, gid, "two");
    named_subrow(&mut board, r1, "sub");

    // named_subrow auto-expanded r1.
    assert!(board.row(r1).unwrap().expanded);
    board.toggle_row(r1);
    assert!(!board.row(r1).unwrap().expanded);
    assert!(!board.row(r2).unwrap().expanded);

    assert!(board.group(gid).unwrap().expanded);
    board.toggle_group(gid);
    assert!(!board.group(gid).unwrap().expanded);
    // Rows keep their own state.
    assert!(!board.row(r1).unwrap().expanded);
}

#[test]
fn unknown_ids_are_noops() {
    let mut board = Board::default();
    let gid = named_group(&mut board, "Sprint");
    let rid = named_row(&mut board, gid, "Kickoff");

    board.begin_cell_edit(CellRef::row_cell(999, 1));
    assert!(board.active_edit().is_none());
    board.begin_row_drag(999);
    assert!(board.active_drag().is_none());
    assert!(board.add_row(999).is_none());
    assert!(board.add_subrow(999).is_none());
    board.reorder_row(rid, 999);
    assert_eq!(board.rows(gid).unwrap().len(), 1);
    board.resize_column(SchemaScope::Group(999), 1, 500);
}
