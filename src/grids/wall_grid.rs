use std::mem;

use crate::error::GridError;
use crate::grids::cell::Cell;
use crate::grids::{Dimensions, Direction, Neighborhood};

pub type Passage = ((usize, usize), (usize, usize));

/// Row-major `columns x rows` array of cells. Each wall is stored on both
/// sides, so a cell can be drawn without looking at its neighbours.
#[derive(Debug, Clone)]
pub struct WallGrid {
    pub dims: Dimensions,

    pub cells: Vec<Cell>,
}

impl WallGrid {
    pub fn with_dims(columns: usize, rows: usize) -> Result<Self, GridError> {
        let dims = Dimensions { columns, rows };
        // the cell buffer must stay within isize::MAX bytes
        let len = dims
            .cell_count()
            .filter(|&len| len > 0)
            .filter(|&len| {
                len.checked_mul(mem::size_of::<Cell>())
                    .map_or(false, |bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(GridError::InvalidDimension {
                cols: columns,
                rows,
                start: (0, 0),
            })?;

        let mut cells = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..columns {
                cells.push(Cell::new(col, row));
            }
        }

        Ok(Self { dims, cells })
    }

    #[inline]
    pub fn index_of(&self, col: usize, row: usize) -> usize {
        debug_assert!(self.dims.contains(col, row));
        (self.dims.columns * row) + col
    }

    pub fn cell_at(&self, col: usize, row: usize) -> Result<&Cell, GridError> {
        if !self.dims.contains(col, row) {
            return Err(GridError::OutOfBounds {
                col,
                row,
                cols: self.dims.columns,
                rows: self.dims.rows,
            });
        }
        Ok(&self.cells[self.index_of(col, row)])
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, (col, row): (usize, usize)) -> &mut Cell {
        let index = self.index_of(col, row);
        &mut self.cells[index]
    }

    pub fn neighborhood_of(&self, col: usize, row: usize) -> Neighborhood {
        Neighborhood::of(col, row, self.dims)
    }

    /// Opens the passage between two grid-adjacent cells on both sides.
    /// Returns the side of `one` that was cleared, or `None` if the cells
    /// are not adjacent (nothing is touched then).
    pub fn clear_wall_between(
        &mut self,
        one: (usize, usize),
        two: (usize, usize),
    ) -> Option<Direction> {
        let dir = Direction::between(one, two)?;
        if !self.dims.contains(one.0, one.1) || !self.dims.contains(two.0, two.1) {
            return None;
        }

        self.cell_mut(one).clear_wall(dir);
        self.cell_mut(two).clear_wall(-dir);
        Some(dir)
    }

    /// Every open passage, listed once, as (cell, cell to its right or below).
    pub fn passages(&self) -> Vec<Passage> {
        let mut passages = Vec::new();
        for cell in &self.cells {
            for dir in [Direction::Right, Direction::Bottom].iter().copied() {
                if cell.has_wall(dir) {
                    continue;
                }
                if let Some(neighbor) = self.neighborhood_of(cell.col, cell.row).get(dir) {
                    passages.push((cell.coords(), neighbor));
                }
            }
        }
        passages
    }

    /// Shared sides of adjacent cells agree and the outer border is intact.
    pub fn is_consistent(&self) -> bool {
        self.cells.iter().all(|cell| {
            let hood = self.neighborhood_of(cell.col, cell.row);
            Direction::ALL.iter().copied().all(|dir| match hood.get(dir) {
                Some((col, row)) => {
                    cell.has_wall(dir) == self.cells[self.index_of(col, row)].has_wall(-dir)
                }
                None => cell.has_wall(dir),
            })
        })
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited).count()
    }
}
