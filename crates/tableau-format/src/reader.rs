use std::fmt;

use tableau_solver::{SimplexError, Tableau};
use thiserror::Error;

/// 1-based line/column of a token in the source text.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid number '{token}' at {position}")]
    InvalidNumber { token: String, position: Position },
    #[error("No tableau rows found")]
    Empty,
    #[error(transparent)]
    Shape(#[from] SimplexError),
}

/// Read whitespace-separated numbers, one tableau row per line.
///
/// Blank lines and lines starting with `#` are skipped. Tokens must be finite
/// numbers (`NaN` and `inf` are rejected). Row lengths are not checked here.
pub fn read_matrix(source: &str) -> Result<Vec<Vec<f64>>, ParseError> {
    let mut rows = Vec::new();

    for (index, raw_line) in source.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut row = Vec::new();
        for (offset, token) in tokens(raw_line) {
            let invalid = || ParseError::InvalidNumber {
                token: token.to_string(),
                position: Position {
                    line: index + 1,
                    column: offset + 1,
                },
            };
            let value = token.parse::<f64>().map_err(|_| invalid())?;
            if !value.is_finite() {
                return Err(invalid());
            }
            row.push(value);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(rows)
}

/// Read and validate a tableau in one step.
pub fn read_tableau(source: &str) -> Result<Tableau, ParseError> {
    let matrix = read_matrix(source)?;
    Ok(Tableau::from_rows(matrix)?)
}

/// Split a line on whitespace, pairing each token with its 0-based column.
fn tokens(line: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start: Option<(usize, usize)> = None;

    for (column, (byte, ch)) in line.char_indices().enumerate() {
        match (ch.is_whitespace(), start) {
            (false, None) => start = Some((column, byte)),
            (true, Some((col, begin))) => {
                out.push((col, &line[begin..byte]));
                start = None;
            }
            _ => {}
        }
    }
    if let Some((col, begin)) = start {
        out.push((col, &line[begin..]));
    }

    out
}
