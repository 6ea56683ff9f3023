use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// zero-sized grid, or a start cell that does not lie inside it
    InvalidDimension {
        cols: usize,
        rows: usize,
        start: (usize, usize),
    },
    OutOfBounds {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimension { cols, rows, start } => write!(
                f,
                "invalid grid {}x{} with start ({}, {})",
                cols, rows, start.0, start.1
            ),
            GridError::OutOfBounds {
                col,
                row,
                cols,
                rows,
            } => write!(
                f,
                "cell ({}, {}) is outside the {}x{} grid",
                col, row, cols, rows
            ),
        }
    }
}

impl std::error::Error for GridError {}
