use std::fmt;

use crate::error::BoardError;

use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }

    fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' => Some(Cell::Empty),
            'R' | 'r' => Some(Cell::Red),
            'Y' | 'y' => Some(Cell::Yellow),
            _ => None,
        }
    }
}

/// A `columns x rows` grid of cells.
///
/// Row 0 is the top of the board and row `rows - 1` the bottom. Tokens in a
/// column always form a contiguous stack resting on the bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>, // row-major, top row first
}

impl Board {
    /// Create a new empty board of the standard 7x6 size
    pub fn new() -> Self {
        Board {
            columns: COLS,
            rows: ROWS,
            cells: vec![Cell::Empty; COLS * ROWS],
        }
    }

    /// Create an empty board with the given dimensions
    pub fn with_size(columns: usize, rows: usize) -> Result<Self, BoardError> {
        if columns == 0 || rows == 0 {
            return Err(BoardError::InvalidDimensions { columns, rows });
        }
        Ok(Board {
            columns,
            rows,
            cells: vec![Cell::Empty; columns * rows],
        })
    }

    /// Parse a picture of the board, top row first.
    ///
    /// `.` is an empty cell, `R` a red token and `Y` a yellow token. Rows must
    /// all have the same width and every token must rest on another token or
    /// on the bottom row.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let first = rows.first().ok_or(BoardError::Empty)?;
        let columns = first.chars().count();
        let mut board = Board::with_size(columns, rows.len())?;

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != columns {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: columns,
                    found,
                });
            }
            for (column, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(BoardError::UnknownSymbol {
                    symbol,
                    column,
                    row,
                })?;
                board.cells[row * columns + column] = cell;
            }
        }

        for column in 0..board.columns {
            for row in 0..board.rows - 1 {
                if !board.at(column, row).is_empty() && board.at(column, row + 1).is_empty() {
                    return Err(BoardError::FloatingToken { column, row });
                }
            }
        }

        Ok(board)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Whether (column, row) lies on the grid
    pub fn contains(&self, column: usize, row: usize) -> bool {
        column < self.columns && row < self.rows
    }

    /// Get the cell at a specific position, `Cell::Empty` when off the grid
    pub fn at(&self, column: usize, row: usize) -> Cell {
        if !self.contains(column, row) {
            return Cell::Empty;
        }
        self.cells[row * self.columns + column]
    }

    /// The row a token dropped into `column` would land on, or `None` if the
    /// column is full.
    ///
    /// Scans top to bottom and keeps the last empty row seen.
    pub fn lowest_open_row(&self, column: usize) -> Option<usize> {
        if column >= self.columns {
            return None;
        }
        let mut lowest = None;
        for row in 0..self.rows {
            if self.at(column, row).is_empty() {
                lowest = Some(row);
            }
        }
        lowest
    }

    /// Check if a column is full
    pub fn is_column_full(&self, column: usize) -> bool {
        self.lowest_open_row(column).is_none()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|column| self.is_column_full(column))
    }

    /// Columns that can still take a token, left to right
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    /// Drop a token for `player` into `column`, returning the row it landed on.
    ///
    /// A full or out-of-range column is left untouched and yields `None`.
    pub fn place(&mut self, column: usize, player: Player) -> Option<usize> {
        let row = self.lowest_open_row(column)?;
        self.cells[row * self.columns + column] = player.to_cell();
        Some(row)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for column in 0..self.columns {
                write!(f, "{}", self.at(column, row).symbol())?;
            }
        }
        Ok(())
    }
}
