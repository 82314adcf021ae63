pub mod parse;
pub mod position;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::alphabet::{normalize, word_len};
use crate::error::{Result, WordSearchError};

pub use position::{neighbors, Dimensions, Position};

const DEFAULT_CELLS: [&str; 16] = [
    "E", "E", "C", "A",
    "A", "L", "E", "P",
    "H", "N", "B", "O",
    "Q", "T", "T", "Y",
];

/// A rectangular grid of tokens stored in row-major order. A token may span several letters ("QU").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<String>,
    rows: usize,
    columns: usize,
}

impl Default for Board {
    fn default() -> Self {
        Board {
            cells: DEFAULT_CELLS.iter().map(|t| t.to_string()).collect(),
            rows: 4,
            columns: 4,
        }
    }
}

/// Side length of a square with `n` cells, if there is one.
fn square_side(n: usize) -> Option<usize> {
    let mut side = (n as f64).sqrt() as usize;
    while side * side > n {
        side -= 1;
    }
    while (side + 1) * (side + 1) <= n {
        side += 1;
    }
    (side * side == n).then(|| side)
}

/// Flattens a board given as rows. A single row is taken as an already flat token list.
pub(crate) fn flatten_rows(rows: Vec<Vec<String>>) -> Result<Vec<String>> {
    if rows.len() > 1 {
        if let Some(bad) = rows.iter().position(|r| r.len() != rows.len()) {
            return Err(WordSearchError::invalid(format!(
                "board is not square: row {} has {} tokens, expected {}",
                bad, rows[bad].len(), rows.len())));
        }
    }
    Ok(rows.into_iter().flatten().collect())
}

impl Board {
    pub fn from_tokens<I, S>(tokens: I) -> Result<Board>
        where I: IntoIterator<Item = S>, S: AsRef<str> {
        let mut board = Board::default();
        board.set_cells(tokens)?;
        Ok(board)
    }

    /// Replaces every cell. The token count must be a non-zero perfect square; the board
    /// becomes `√N × √N`. On error the board is left untouched.
    pub fn set_cells<I, S>(&mut self, tokens: I) -> Result<()>
        where I: IntoIterator<Item = S>, S: AsRef<str> {
        let cells: Vec<String> = tokens.into_iter().map(|t| normalize(t.as_ref())).collect();

        let side = square_side(cells.len())
            .filter(|&side| side > 0)
            .ok_or_else(|| WordSearchError::invalid(format!(
                "board needs a non-zero square number of cells, got {}", cells.len())))?;
        if let Some(empty) = cells.iter().position(|t| t.is_empty()) {
            return Err(WordSearchError::invalid(format!("cell {} is empty", empty)));
        }

        debug!(rows = side, columns = side, "Board replaced");
        self.cells = cells;
        self.rows = side;
        self.columns = side;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn dims(&self) -> Dimensions {
        (self.rows, self.columns)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Callers stay in bounds by moving only through [`neighbors`].
    pub fn token_at(&self, row: usize, col: usize) -> &str {
        &self.cells[row * self.columns + col]
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(move |i| Position::from_index(i, self.columns))
    }

    /// All tokens concatenated in row-major order, without separators.
    pub fn render_flat(&self) -> String {
        self.cells.concat()
    }

    fn row_slices(&self) -> std::slice::Chunks<'_, String> {
        self.cells.chunks(self.columns)
    }
}

impl std::ops::Index<Position> for Board {
    type Output = str;

    fn index(&self, index: Position) -> &Self::Output {
        self.token_at(index.row, index.col)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let width = self.cells.iter().map(|t| word_len(t)).max().unwrap_or(1);
        for row in self.row_slices() {
            let line = row.iter()
                .map(|t| format!("{:<width$}", t, width = width))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where S: Serializer {
        serializer.collect_seq(self.row_slices())
    }
}

/// A board as it appears in a JSON file: a flat token list or a list of rows.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BoardLayout {
    Flat(Vec<String>),
    Rows(Vec<Vec<String>>),
}

impl BoardLayout {
    pub fn into_tokens(self) -> Result<Vec<String>> {
        match self {
            BoardLayout::Flat(tokens) => Ok(tokens),
            BoardLayout::Rows(rows) => flatten_rows(rows),
        }
    }
}
