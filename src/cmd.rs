//! Command implementations for the CLI interface.
//!
//! Every handler drives the same in-memory [`Board`] API the grid UI would,
//! then snapshots the board back to disk. Identifiers may be raw ids or, for
//! groups and columns, display names.

use std::io;
use std::path::Path;

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use taskboard::fields::{format_kind, format_scope, ColumnKind, FilterScope};
use taskboard::schema::Column;
use taskboard::{Board, CellRef, Group, Row, SchemaScope};

use crate::cli::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Add a group (with the stock Item/Person/Status/Date schema).
    AddGroup {
        /// Group name; left as "New Group" when omitted.
        name: Option<String>,
    },

    /// Rename a group.
    RenameGroup {
        /// Group ID or current name.
        group: String,
        /// New group name.
        name: String,
    },

    /// Add a row to a group.
    AddRow {
        /// Group ID or name.
        group: String,
        /// Value committed into the row's first column.
        title: Option<String>,
    },

    /// Add a subrow beneath a row.
    AddSub {
        /// Parent row ID.
        row: u64,
        /// Value committed into the subrow's first column. Without it the
        /// subrow stays a blank placeholder.
        title: Option<String>,
    },

    /// Add a column to a group schema or to one row's subtask schema.
    AddColumn {
        /// Column kind: text | status | owner | date | number | label | formula.
        #[arg(long, value_enum, default_value_t = ColumnKind::Text)]
        kind: ColumnKind,
        /// Group ID or name (top-level schema).
        #[arg(long, conflicts_with = "row")]
        group: Option<String>,
        /// Row ID (that row's subtask schema).
        #[arg(long)]
        row: Option<u64>,
        /// Display name committed instead of "New Column".
        #[arg(long)]
        name: Option<String>,
    },

    /// Rename a column (display name only; stored values are untouched).
    RenameColumn {
        /// Column ID or current name.
        column: String,
        /// New display name.
        name: String,
        #[arg(long, conflicts_with = "row")]
        group: Option<String>,
        #[arg(long)]
        row: Option<u64>,
    },

    /// Resize a column (pixels; clamped to the 100px floor).
    ResizeColumn {
        /// Column ID or name.
        column: String,
        /// New width in pixels.
        width: u32,
        #[arg(long, conflicts_with = "row")]
        group: Option<String>,
        #[arg(long)]
        row: Option<u64>,
    },

    /// Move a column onto another column's position within its schema.
    MoveColumn {
        /// Column ID or name to move.
        from: String,
        /// Column ID or name to land on.
        to: String,
        #[arg(long, conflicts_with = "row")]
        group: Option<String>,
        #[arg(long)]
        row: Option<u64>,
    },

    /// Write a cell value through the edit cursor.
    Set {
        /// Row ID.
        row: u64,
        /// Column ID or name.
        column: String,
        /// New cell value.
        value: String,
        /// Subrow ID when targeting a subtask cell.
        #[arg(long)]
        sub: Option<u64>,
    },

    /// Toggle a group or row open/closed.
    Toggle {
        /// Group or row ID.
        id: u64,
    },

    /// Move a row onto another row's position (may cross groups).
    MoveRow {
        /// Row ID to move.
        dragged: u64,
        /// Row ID to land on.
        target: u64,
    },

    /// Move a subrow into a row, before a sibling or appended at the end.
    MoveSub {
        /// Subrow ID to move.
        dragged: u64,
        /// Destination row ID.
        row: u64,
        /// Sibling subrow ID to land on; appended when omitted.
        #[arg(long)]
        before: Option<u64>,
    },

    /// List groups and rows.
    List {
        /// Restrict to one group (ID or name).
        group: Option<String>,
        /// Include each row's subtask table.
        #[arg(long)]
        subs: bool,
    },

    /// List a schema's columns.
    Columns {
        #[arg(long, conflicts_with = "row")]
        group: Option<String>,
        #[arg(long)]
        row: Option<u64>,
    },

    /// Search rows across the board.
    Search {
        /// Query text (case-insensitive substring).
        query: String,
        /// Match scope: all | parent | subtask.
        #[arg(long, value_enum, default_value_t = FilterScope::All)]
        scope: FilterScope,
        /// Restrict to one group (ID or name).
        #[arg(long)]
        group: Option<String>,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Resolve a group identifier (id or name, case-insensitive) to its id.
fn resolve_group(board: &Board, identifier: &str) -> Result<u64, String> {
    if let Ok(id) = identifier.parse::<u64>() {
        if board.group(id).is_some() {
            return Ok(id);
        }
        return Err(format!("Group with ID {} not found", id));
    }

    let matches: Vec<&Group> = board
        .groups
        .iter()
        .filter(|g| g.name.to_lowercase() == identifier.to_lowercase())
        .collect();

    match matches.len() {
        0 => Err(format!("No group found with name '{}'", identifier)),
        1 => Ok(matches[0].id),
        _ => {
            let ids: Vec<String> = matches.iter().map(|g| g.id.to_string()).collect();
            Err(format!(
                "Multiple groups named '{}' (ids {}). Please use the specific ID instead.",
                identifier,
                ids.join(", ")
            ))
        }
    }
}

/// Resolve the --group/--row pair to a schema scope.
fn resolve_scope(
    board: &Board,
    group: Option<String>,
    row: Option<u64>,
) -> Result<SchemaScope, String> {
    match (group, row) {
        (Some(g), None) => resolve_group(board, &g).map(SchemaScope::Group),
        (None, Some(r)) => {
            if board.row(r).is_none() {
                return Err(format!("Row with ID {} not found", r));
            }
            Ok(SchemaScope::Row(r))
        }
        _ => Err("Specify exactly one of --group or --row".to_string()),
    }
}

/// Resolve a column identifier (id or display name) within a schema.
fn resolve_column(columns: &[Column], identifier: &str) -> Result<u64, String> {
    if let Ok(id) = identifier.parse::<u64>() {
        if columns.iter().any(|c| c.id == id) {
            return Ok(id);
        }
    }
    columns
        .iter()
        .find(|c| c.name.to_lowercase() == identifier.to_lowercase())
        .map(|c| c.id)
        .ok_or_else(|| format!("No column '{}' in this schema", identifier))
}

fn fail(msg: &str) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn save_board(board: &Board, path: &Path) {
    if let Err(e) = board.save(path) {
        eprintln!("Failed to save board: {e}");
        std::process::exit(1);
    }
}

/// Add a group, optionally committing a name through the rename cursor.
pub fn cmd_add_group(board: &mut Board, path: &Path, name: Option<String>) {
    let id = board.add_group();
    if let Some(name) = name {
        board.update_draft(&name);
    }
    board.commit_edit();
    save_board(board, path);
    let group = board.group(id).expect("group just added");
    println!("Added group {} ({})", id, group.name);
}

/// Rename a group through its title cursor.
pub fn cmd_rename_group(board: &mut Board, path: &Path, group: String, name: String) {
    let gid = match resolve_group(board, &group) {
        Ok(gid) => gid,
        Err(e) => fail(&e),
    };
    board.begin_group_rename(gid);
    board.update_draft(&name);
    board.commit_edit();
    save_board(board, path);
    println!("Renamed group {} to {}", gid, name);
}

/// Add a row, optionally committing a title into its primary column.
pub fn cmd_add_row(board: &mut Board, path: &Path, group: String, title: Option<String>) {
    let gid = match resolve_group(board, &group) {
        Ok(gid) => gid,
        Err(e) => fail(&e),
    };
    let Some(rid) = board.add_row(gid) else {
        fail("Group vanished while adding the row");
    };
    if let Some(title) = title {
        if let Some(primary) = board.group(gid).and_then(Group::primary_column) {
            board.begin_cell_edit(CellRef::row_cell(rid, primary));
            board.update_draft(&title);
            board.commit_edit();
        }
    }
    save_board(board, path);
    println!("Added row {} to group {}", rid, gid);
}

/// Add a subrow. With a title it is committed through the primary-cell edit
/// that `add_subrow` opens; without one the editor is cancelled so the blank
/// placeholder survives.
pub fn cmd_add_sub(board: &mut Board, path: &Path, row: u64, title: Option<String>) {
    let Some(sid) = board.add_subrow(row) else {
        fail(&format!("Row with ID {} not found", row));
    };
    match title {
        Some(title) => {
            board.update_draft(&title);
            board.commit_edit();
        }
        None => board.cancel_edit(),
    }
    save_board(board, path);
    println!("Added subrow {} under row {}", sid, row);
}

/// Add a column to the resolved scope and commit its name.
pub fn cmd_add_column(
    board: &mut Board,
    path: &Path,
    kind: ColumnKind,
    group: Option<String>,
    row: Option<u64>,
    name: Option<String>,
) {
    let scope = match resolve_scope(board, group, row) {
        Ok(scope) => scope,
        Err(e) => fail(&e),
    };
    let Some(id) = board.add_column(scope, kind) else {
        fail("Schema scope vanished while adding the column");
    };
    if let Some(name) = name {
        board.update_draft(&name);
    }
    board.commit_edit();
    save_board(board, path);
    let schema = board.schema(scope).expect("scope checked above");
    let column = schema.iter().find(|c| c.id == id).expect("column just added");
    println!("Added {} column {} ({})", format_kind(kind), id, column.name);
}

pub fn cmd_rename_column(
    board: &mut Board,
    path: &Path,
    column: String,
    name: String,
    group: Option<String>,
    row: Option<u64>,
) {
    let scope = match resolve_scope(board, group, row) {
        Ok(scope) => scope,
        Err(e) => fail(&e),
    };
    let id = match board
        .schema(scope)
        .ok_or_else(|| "Schema not found".to_string())
        .and_then(|cols| resolve_column(cols, &column))
    {
        Ok(id) => id,
        Err(e) => fail(&e),
    };
    board.rename_column(scope, id, &name);
    save_board(board, path);
    println!("Renamed column {} to {}", id, name);
}

pub fn cmd_resize_column(
    board: &mut Board,
    path: &Path,
    column: String,
    width: u32,
    group: Option<String>,
    row: Option<u64>,
) {
    let scope = match resolve_scope(board, group, row) {
        Ok(scope) => scope,
        Err(e) => fail(&e),
    };
    let id = match board
        .schema(scope)
        .ok_or_else(|| "Schema not found".to_string())
        .and_then(|cols| resolve_column(cols, &column))
    {
        Ok(id) => id,
        Err(e) => fail(&e),
    };
    board.resize_column(scope, id, width);
    save_board(board, path);
    let final_width = board
        .schema(scope)
        .and_then(|cols| cols.iter().find(|c| c.id == id))
        .map(|c| c.width)
        .unwrap_or(width);
    println!("Column {} is now {}px wide", id, final_width);
}

pub fn cmd_move_column(
    board: &mut Board,
    path: &Path,
    from: String,
    to: String,
    group: Option<String>,
    row: Option<u64>,
) {
    let scope = match resolve_scope(board, group, row) {
        Ok(scope) => scope,
        Err(e) => fail(&e),
    };
    let (from_id, to_id) = {
        let Some(cols) = board.schema(scope) else {
            fail("Schema not found");
        };
        let from_id = match resolve_column(cols, &from) {
            Ok(id) => id,
            Err(e) => fail(&e),
        };
        let to_id = match resolve_column(cols, &to) {
            Ok(id) => id,
            Err(e) => fail(&e),
        };
        (from_id, to_id)
    };
    // Drive the full drag protocol rather than reordering directly.
    board.begin_column_drag(scope, from_id);
    board.drag_column_over(to_id);
    board.drop_column();
    save_board(board, path);
    let order: Vec<String> = board
        .schema(scope)
        .map(|cols| cols.iter().map(|c| c.name.clone()).collect())
        .unwrap_or_default();
    println!("Column order: {}", order.join(" | "));
}

/// Write one cell through begin-edit / draft / commit.
pub fn cmd_set(
    board: &mut Board,
    path: &Path,
    row: u64,
    column: String,
    value: String,
    sub: Option<u64>,
) {
    let scope = match sub {
        Some(_) => SchemaScope::Row(row),
        None => {
            let Some(gid) = board.groups.iter().find(|g| g.row(row).is_some()).map(|g| g.id)
            else {
                fail(&format!("Row with ID {} not found", row));
            };
            SchemaScope::Group(gid)
        }
    };
    let id = match board
        .schema(scope)
        .ok_or_else(|| format!("Row with ID {} not found", row))
        .and_then(|cols| resolve_column(cols, &column))
    {
        Ok(id) => id,
        Err(e) => fail(&e),
    };
    let cell = CellRef {
        row,
        sub,
        column: id,
    };
    board.begin_cell_edit(cell);
    if board.active_edit().is_none() {
        fail("Cell not found");
    }
    board.update_draft(&value);
    board.commit_edit();
    save_board(board, path);
    println!("Set column {} on {}", id, match sub {
        Some(s) => format!("subrow {s}"),
        None => format!("row {row}"),
    });
}

pub fn cmd_toggle(board: &mut Board, path: &Path, id: u64) {
    if board.group(id).is_some() {
        board.toggle_group(id);
        let expanded = board.group(id).map(|g| g.expanded).unwrap_or(false);
        save_board(board, path);
        println!("Group {} is now {}", id, if expanded { "expanded" } else { "collapsed" });
    } else if board.row(id).is_some() {
        board.toggle_row(id);
        let expanded = board.row(id).map(|r| r.expanded).unwrap_or(false);
        save_board(board, path);
        println!("Row {} is now {}", id, if expanded { "expanded" } else { "collapsed" });
    } else {
        fail(&format!("No group or row with ID {}", id));
    }
}

pub fn cmd_move_row(board: &mut Board, path: &Path, dragged: u64, target: u64) {
    board.begin_row_drag(dragged);
    if board.active_drag().is_none() {
        fail(&format!("Row with ID {} not found", dragged));
    }
    board.drop_row_on(target);
    save_board(board, path);
    println!("Moved row {} onto {}", dragged, target);
}

pub fn cmd_move_sub(board: &mut Board, path: &Path, dragged: u64, row: u64, before: Option<u64>) {
    board.begin_subrow_drag(dragged);
    if board.active_drag().is_none() {
        fail(&format!("Subrow with ID {} not found", dragged));
    }
    board.drop_subrow_on(row, before);
    save_board(board, path);
    println!("Moved subrow {} into row {}", dragged, row);
}

/// Character budget a pixel width buys in the text table.
fn col_chars(width: u32) -> usize {
    (width / 10).clamp(8, 32) as usize
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}

fn print_header(columns: &[Column], indent: &str) {
    let mut line = format!("{indent}{:<15}", "ID");
    for col in columns {
        line.push_str(&format!("{:<width$} ", truncate(&col.name, col_chars(col.width)), width = col_chars(col.width)));
    }
    println!("{}", line.trim_end());
}

fn print_row_cells(id: u64, cells: &taskboard::Cells, columns: &[Column], indent: &str) {
    let mut line = format!("{indent}{:<15}", id);
    for col in columns {
        let value = cells.get(&col.id).map(String::as_str).unwrap_or("");
        line.push_str(&format!("{:<width$} ", truncate(value, col_chars(col.width)), width = col_chars(col.width)));
    }
    println!("{}", line.trim_end());
}

fn print_group(group: &Group, subs: bool) {
    println!(
        "{} {} ({}) - {} row(s)",
        if group.expanded { "v" } else { ">" },
        group.name,
        group.id,
        group.rows.len()
    );
    if group.rows.is_empty() {
        return;
    }
    print_header(&group.columns, "  ");
    for row in &group.rows {
        print_row_cells(row.id, &row.cells, &group.columns, "  ");
        if subs && !row.subrows.is_empty() {
            print_header(&row.subcolumns, "      ");
            for sub in &row.subrows {
                print_row_cells(sub.id, &sub.cells, &row.subcolumns, "      ");
            }
        }
    }
}

pub fn cmd_list(board: &Board, group: Option<String>, subs: bool) {
    let groups: Vec<&Group> = match group {
        Some(ident) => match resolve_group(board, &ident) {
            Ok(gid) => board.group(gid).into_iter().collect(),
            Err(e) => fail(&e),
        },
        None => board.groups.iter().collect(),
    };
    if groups.is_empty() {
        println!("Board is empty.");
        return;
    }
    for group in groups {
        print_group(group, subs);
    }
}

pub fn cmd_columns(board: &Board, group: Option<String>, row: Option<u64>) {
    let scope = match resolve_scope(board, group, row) {
        Ok(scope) => scope,
        Err(e) => fail(&e),
    };
    let Some(columns) = board.schema(scope) else {
        fail("Schema not found");
    };
    println!("{:<15} {:<20} {:<10} {}", "ID", "Name", "Kind", "Width");
    for col in columns {
        println!(
            "{:<15} {:<20} {:<10} {}",
            col.id,
            truncate(&col.name, 20),
            format_kind(col.kind),
            col.width
        );
    }
}

pub fn cmd_search(board: &Board, query: String, scope: FilterScope, group: Option<String>) {
    let groups: Vec<&Group> = match group {
        Some(ident) => match resolve_group(board, &ident) {
            Ok(gid) => board.group(gid).into_iter().collect(),
            Err(e) => fail(&e),
        },
        None => board.groups.iter().collect(),
    };
    let mut total = 0usize;
    for group in groups {
        let hits: Vec<&Row> = board.filtered_rows(group.id, &query, scope);
        if hits.is_empty() {
            continue;
        }
        println!("{} ({})", group.name, group.id);
        print_header(&group.columns, "  ");
        for row in &hits {
            print_row_cells(row.id, &row.cells, &group.columns, "  ");
        }
        total += hits.len();
    }
    println!(
        "{} row(s) matched '{}' in scope {}",
        total,
        query,
        format_scope(scope)
    );
}

/// Generate shell completions to stdout.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "tb", &mut io::stdout());
}
