//! Human-facing coordinates: column letters, row numbers counted from the bottom
//! edge, and the star points drawn on conventional board sizes.

use super::BoardPosition;
use thiserror::Error;

/// `I` is skipped to avoid confusion with `J`.
pub const COLUMN_LETTERS: &str = "ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// The largest board whose columns can all be labelled.
pub const MAX_LABELLED_SIZE: usize = 25;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VertexError {
    #[error("malformed vertex {0:?}")]
    Malformed(String),
    #[error("column {column} is not on a {size}x{size} board")]
    Column { column: char, size: usize },
    #[error("row {row} is not on a {size}x{size} board")]
    Row { row: usize, size: usize },
}

pub fn column_label(x: usize) -> Option<char> {
    COLUMN_LETTERS.chars().nth(x)
}

/// Row numbers count up from the bottom edge, so row 0 is labelled `size`.
pub fn row_label(y: usize, size: usize) -> Option<usize> {
    if y < size {
        Some(size - y)
    } else {
        None
    }
}

impl BoardPosition {
    /// Formats the position as e.g. `D4`, or `None` if it cannot be labelled.
    pub fn to_vertex(self, size: usize) -> Option<String> {
        if self.x >= size {
            return None;
        }

        let row = row_label(self.y, size)?;

        column_label(self.x).map(|column| format!("{}{}", column, row))
    }
}

pub fn parse_vertex(text: &str, size: usize) -> Result<BoardPosition, VertexError> {
    let mut chars = text.chars();

    let column = chars
        .next()
        .filter(char::is_ascii_alphabetic)
        .ok_or_else(|| VertexError::Malformed(text.to_string()))?
        .to_ascii_uppercase();

    let row: usize = chars
        .as_str()
        .parse()
        .map_err(|_| VertexError::Malformed(text.to_string()))?;

    let x = COLUMN_LETTERS
        .chars()
        .position(|letter| letter == column)
        .filter(|&x| x < size)
        .ok_or(VertexError::Column { column, size })?;

    if row == 0 || row > size {
        return Err(VertexError::Row { row, size });
    }

    Ok(BoardPosition::new(x, size - row))
}

/// Star points (hoshi), restricted to those that fall on the board.
pub fn star_points(size: usize) -> Vec<BoardPosition> {
    if size < 7 {
        return Vec::new();
    }

    let lines: &[usize] = match size {
        9 => &[2, 4, 6],
        13 => &[3, 6, 9],
        _ => &[3, 9, 15],
    };

    lines
        .iter()
        .flat_map(|&y| lines.iter().map(move |&x| BoardPosition::new(x, y)))
        .filter(|position| position.x < size && position.y < size)
        .collect()
}
