//! # tb - task board CLI
//!
//! A file-backed driver for the `taskboard` grid engine: groups, rows and
//! subrows with per-scope column schemas, edited through the same cursor and
//! drag-session API an interactive front end would use.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a group and a couple of rows
//! tb add-group "Sprint 12"
//! tb add-row "Sprint 12" "Project kickoff meeting"
//! tb add-sub <row-id> "Prepare agenda"
//!
//! # Grow the schema and fill cells
//! tb add-column --group "Sprint 12" --kind status --name Review
//! tb set <row-id> Status working
//!
//! # Look around
//! tb list --subs
//! tb search sam --scope subtask
//! ```
//!
//! The board lives in `./board.json` unless `--board` points elsewhere.

mod cli;
mod cmd;

use std::path::PathBuf;

use clap::Parser;

use taskboard::Board;

use cli::Cli;
use cmd::Commands;

fn main() {
    let cli = Cli::parse();

    // Completions don't need a board file.
    if let Commands::Completions { shell } = &cli.command {
        cmd::cmd_completions(*shell);
        return;
    }

    let board_path = cli.board.unwrap_or_else(|| PathBuf::from("board.json"));
    let mut board = Board::load(&board_path);

    match cli.command {
        Commands::Completions { .. } => unreachable!("completions handled above"),

        Commands::AddGroup { name } => cmd::cmd_add_group(&mut board, &board_path, name),

        Commands::RenameGroup { group, name } => {
            cmd::cmd_rename_group(&mut board, &board_path, group, name)
        }

        Commands::AddRow { group, title } => {
            cmd::cmd_add_row(&mut board, &board_path, group, title)
        }

        Commands::AddSub { row, title } => cmd::cmd_add_sub(&mut board, &board_path, row, title),

        Commands::AddColumn {
            kind,
            group,
            row,
            name,
        } => cmd::cmd_add_column(&mut board, &board_path, kind, group, row, name),

        Commands::RenameColumn {
            column,
            name,
            group,
            row,
        } => cmd::cmd_rename_column(&mut board, &board_path, column, name, group, row),

        Commands::ResizeColumn {
            column,
            width,
            group,
            row,
        } => cmd::cmd_resize_column(&mut board, &board_path, column, width, group, row),

        Commands::MoveColumn {
            from,
            to,
            group,
            row,
        } => cmd::cmd_move_column(&mut board, &board_path, from, to, group, row),

        Commands::Set {
            row,
            column,
            value,
            sub,
        } => cmd::cmd_set(&mut board, &board_path, row, column, value, sub),

        Commands::Toggle { id } => cmd::cmd_toggle(&mut board, &board_path, id),

        Commands::MoveRow { dragged, target } => {
            cmd::cmd_move_row(&mut board, &board_path, dragged, target)
        }

        Commands::MoveSub {
            dragged,
            row,
            before,
        } => cmd::cmd_move_sub(&mut board, &board_path, dragged, row, before),

        Commands::List { group, subs } => cmd::cmd_list(&board, group, subs),

        Commands::Columns { group, row } => cmd::cmd_columns(&board, group, row),

        Commands::Search {
            query,
            scope,
            group,
        } => cmd::cmd_search(&board, query, scope, group),
    }
}
