//! Enumerations shared across the board: column typing and search scopes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The typing applied to a column.
///
/// Cell values stay loosely typed strings regardless of kind; the kind tells
/// the presentation layer which editor to offer for the cell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKind {
    #[serde(alias = "Text")]
    Text,
    #[serde(alias = "Status")]
    Status,
    #[serde(alias = "Owner")]
    Owner,
    #[serde(alias = "Date")]
    Date,
    #[serde(alias = "Number")]
    Number,
    #[serde(alias = "Label")]
    Label,
    #[serde(alias = "Formula")]
    Formula,
}

/// Which part of the row tree a search query is matched against.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FilterScope {
    /// Parent rows or any of their subrows.
    #[default]
    All,
    /// Parent row cells only.
    Parent,
    /// Subrow cells only.
    Subtask,
}

/// Format a column kind for display.
pub fn format_kind(k: ColumnKind) -> &'static str {
    match k {
        ColumnKind::Text => "Text",
        ColumnKind::Status => "Status",
        ColumnKind::Owner => "Owner",
        ColumnKind::Date => "Date",
        ColumnKind::Number => "Number",
        ColumnKind::Label => "Label",
        ColumnKind::Formula => "Formula",
    }
}

/// Format a filter scope for display.
pub fn format_scope(s: FilterScope) -> &'static str {
    match s {
        FilterScope::All => "All",
        FilterScope::Parent => "Parent",
        FilterScope::Subtask => "Subtask",
    }
}
