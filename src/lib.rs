//! # taskboard - hierarchical grid engine
//!
//! A monday-style task board core: groups of rows, rows of subrows, and an
//! ordered, typed column schema per scope. The [`Board`] store owns all grid
//! state and exposes the mutation operations a presentation layer consumes;
//! rendering, styling and input plumbing live elsewhere.
//!
//! ## Key Behaviours
//!
//! - **Per-scope schemas**: every group carries its own top-level columns,
//!   and every row carries its own subtask columns. Adding a column backfills
//!   an empty cell into each record in its scope.
//! - **Opaque column ids**: cell values are keyed by a permanent id, never by
//!   display text, so renaming a column can't lose data.
//! - **One affordance at a time**: at most one edit cursor (cell, column
//!   header, or group title) and one drag session (column reorder/resize,
//!   row/subrow reorder) exist; starting either clears the other.
//! - **Draft-until-commit editing**: keystrokes touch only the draft; blur
//!   and Enter both run the same commit routine.
//! - **Silent no-ops**: operations given a stale or unknown id do nothing.
//! - **Pure search**: filtered views never mutate the tree or its expansion
//!   state.
//!
//! Boards persist as plain JSON snapshots (see [`Board::load`] and
//! [`Board::save`]); the `tb` binary in this crate is a thin file-backed
//! driver around the same API.

pub mod board;
pub mod fields;
pub mod filter;
pub mod grid;
pub mod schema;
pub mod session;

pub use board::{Board, IdSource};
pub use fields::{ColumnKind, FilterScope};
pub use grid::{Cells, Group, Row, SubRow};
pub use schema::{Column, DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH};
pub use session::{CellRef, DragSession, EditCursor, SchemaScope};
