//! Edit commands
//!
//! [`EditCommand`] is the request form of every editor operation. Requests
//! are applied one at a time in arrival order with
//! [`Editor::apply_all`](crate::Editor::apply_all).
//!
//! Commands also have a one-line textual form:
//!
//! ```text
//! set 1 0 new value
//! delete-row 2
//! insert-row-above 1
//! insert-row-below 1
//! delete-col 0
//! rename-col 1 Name
//! insert-col-left 0
//! insert-col-right 0
//! undo
//! redo
//! ```
//!
//! Everything after the indices of `set` and `rename-col` is taken as the
//! value, with leading whitespace removed.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A single editor request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Replace one cell value
    UpdateCell { row: usize, col: usize, value: String },
    /// Remove a data row
    DeleteRow(usize),
    /// Insert an empty row above the given row
    InsertRowAbove(usize),
    /// Insert an empty row below the given row
    InsertRowBelow(usize),
    /// Remove a column
    DeleteColumn(usize),
    /// Rename a column header
    RenameColumn { col: usize, name: String },
    /// Insert an empty column left of the given column
    InsertColumnLeft(usize),
    /// Insert an empty column right of the given column
    InsertColumnRight(usize),
    /// Step back in history
    Undo,
    /// Step forward in history
    Redo,
}

impl EditCommand {
    /// Check if this command is a history step rather than a mutation
    pub fn is_history_step(&self) -> bool {
        matches!(self, EditCommand::Undo | EditCommand::Redo)
    }
}

impl fmt::Display for EditCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditCommand::UpdateCell { row, col, value } => write!(f, "set {row} {col} {value}"),
            EditCommand::DeleteRow(row) => write!(f, "delete-row {row}"),
            EditCommand::InsertRowAbove(row) => write!(f, "insert-row-above {row}"),
            EditCommand::InsertRowBelow(row) => write!(f, "insert-row-below {row}"),
            EditCommand::DeleteColumn(col) => write!(f, "delete-col {col}"),
            EditCommand::RenameColumn { col, name } => write!(f, "rename-col {col} {name}"),
            EditCommand::InsertColumnLeft(col) => write!(f, "insert-col-left {col}"),
            EditCommand::InsertColumnRight(col) => write!(f, "insert-col-right {col}"),
            EditCommand::Undo => f.write_str("undo"),
            EditCommand::Redo => f.write_str("redo"),
        }
    }
}

impl FromStr for EditCommand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (verb, rest) = split_word(s.trim());

        let command = match verb {
            "set" => {
                let (row, rest) = index(rest, s)?;
                let (col, value) = index(rest, s)?;
                EditCommand::UpdateCell {
                    row,
                    col,
                    value: value.to_string(),
                }
            }
            "delete-row" => EditCommand::DeleteRow(only_index(rest, s)?),
            "insert-row-above" => EditCommand::InsertRowAbove(only_index(rest, s)?),
            "insert-row-below" => EditCommand::InsertRowBelow(only_index(rest, s)?),
            "delete-col" => EditCommand::DeleteColumn(only_index(rest, s)?),
            "rename-col" => {
                let (col, name) = index(rest, s)?;
                EditCommand::RenameColumn {
                    col,
                    name: name.to_string(),
                }
            }
            "insert-col-left" => EditCommand::InsertColumnLeft(only_index(rest, s)?),
            "insert-col-right" => EditCommand::InsertColumnRight(only_index(rest, s)?),
            "undo" if rest.is_empty() => EditCommand::Undo,
            "redo" if rest.is_empty() => EditCommand::Redo,
            _ => return Err(Error::InvalidCommand(s.to_string())),
        };

        Ok(command)
    }
}

fn split_word(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], s[pos..].trim_start()),
        None => (s, ""),
    }
}

fn index<'a>(s: &'a str, line: &str) -> Result<(usize, &'a str)> {
    let (word, rest) = split_word(s);
    let value = word
        .parse()
        .map_err(|_| Error::InvalidCommand(line.to_string()))?;
    Ok((value, rest))
}

fn only_index(s: &str, line: &str) -> Result<usize> {
    match index(s, line)? {
        (value, "") => Ok(value),
        _ => Err(Error::InvalidCommand(line.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "set 1 0 hello world".parse::<EditCommand>().unwrap(),
            EditCommand::UpdateCell {
                row: 1,
                col: 0,
                value: "hello world".into()
            }
        );
        assert_eq!(
            "delete-row 3".parse::<EditCommand>().unwrap(),
            EditCommand::DeleteRow(3)
        );
        assert_eq!(
            "  insert-col-right 0 ".parse::<EditCommand>().unwrap(),
            EditCommand::InsertColumnRight(0)
        );
        assert_eq!(
            "rename-col 2 Name".parse::<EditCommand>().unwrap(),
            EditCommand::RenameColumn {
                col: 2,
                name: "Name".into()
            }
        );
        assert_eq!("undo".parse::<EditCommand>().unwrap(), EditCommand::Undo);
        assert_eq!("redo".parse::<EditCommand>().unwrap(), EditCommand::Redo);
    }

    #[test]
    fn test_parse_empty_value() {
        assert_eq!(
            "set 1 1".parse::<EditCommand>().unwrap(),
            EditCommand::UpdateCell {
                row: 1,
                col: 1,
                value: String::new()
            }
        );
    }

    #[test]
    fn test_parse_invalid() {
        for line in ["", "explode 1", "delete-row", "delete-row x", "delete-row 1 2", "undo 1", "set 1"] {
            assert!(
                matches!(line.parse::<EditCommand>(), Err(Error::InvalidCommand(_))),
                "expected error for {line:?}"
            );
        }
    }

    #[test]
    fn test_display_parses_back() {
        let commands = [
            EditCommand::UpdateCell {
                row: 2,
                col: 1,
                value: "x y".into(),
            },
            EditCommand::InsertRowAbove(1),
            EditCommand::InsertRowBelow(4),
            EditCommand::DeleteColumn(0),
            EditCommand::InsertColumnLeft(2),
            EditCommand::Redo,
        ];

        for command in commands {
            assert_eq!(command.to_string().parse::<EditCommand>().unwrap(), command);
        }
    }
}
