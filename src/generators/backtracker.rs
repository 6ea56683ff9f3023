use crate::error::GridError;
use crate::generators::{Generator, NeighbourPicker, StepAction, StepResult};
use crate::grids::cell::Cell;
use crate::grids::wall_grid::WallGrid;
use log::{debug, info, trace};

/// Randomized depth-first search with an explicit backtracking stack.
///
/// Every call to [`step`](Self::step) either carves into one unvisited
/// neighbour of the current cell, pops back to the previous cell, or, once
/// the stack has run dry, marks the maze complete. The result is a spanning
/// tree over the grid: `cols * rows - 1` passages and no cycles.
pub struct RecursiveBacktracker<P> {
    grid: WallGrid,
    stack: Vec<(usize, usize)>,
    current: (usize, usize),
    picker: P,
    steps: usize,
    pub done: bool,
}

impl<P: NeighbourPicker> RecursiveBacktracker<P> {
    pub fn new(
        cols: usize,
        rows: usize,
        start: (usize, usize),
        picker: P,
    ) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimension { cols, rows, start };
        let mut grid = WallGrid::with_dims(cols, rows).map_err(|_| invalid)?;
        if !grid.dims.contains(start.0, start.1) {
            return Err(invalid);
        }

        grid.cell_mut(start).visited = true;
        debug!("backtracker on {}x{} grid from {:?}", cols, rows, start);

        let stack = Vec::with_capacity(grid.cells.len());
        Ok(Self {
            grid,
            stack,
            current: start,
            picker,
            steps: 0,
            done: false,
        })
    }

    pub fn cell_at(&self, col: usize, row: usize) -> Result<&Cell, GridError> {
        self.grid.cell_at(col, row)
    }

    #[inline]
    pub fn current(&self) -> (usize, usize) {
        self.current
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.done
    }

    /// Cells waiting to be resumed, bottom first.
    pub fn stack(&self) -> &[(usize, usize)] {
        &self.stack
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn step(&mut self) -> StepResult {
        if self.done {
            return StepResult::finished();
        }

        let here = self.current;
        let cell = self.grid.cells[self.grid.index_of(here.0, here.1)];
        let next = cell.pick_unvisited_neighbour(&self.grid, &mut self.picker);

        let action = if let Some(next) = next {
            self.grid.cell_mut(here).in_stack = true;
            self.stack.push(here);
            self.grid.clear_wall_between(here, next);
            self.grid.cell_mut(next).visited = true;
            self.current = next;
            StepAction::Carve { from: here, to: next }
        } else if let Some(prev) = self.stack.pop() {
            // the cell being left drops out; `prev` keeps its flag until it is left too
            self.grid.cell_mut(here).in_stack = false;
            self.current = prev;
            StepAction::Backtrack { from: here, to: prev }
        } else {
            self.grid.cell_mut(here).in_stack = false;
            self.done = true;
            info!(
                "maze complete: {} cells, {} passages, {} steps",
                self.grid.cells.len(),
                self.grid.passages().len(),
                self.steps
            );
            return StepResult::finished();
        };

        self.steps += 1;
        trace!("{:?}", action);
        StepResult::moved(action)
    }
}

impl<P: NeighbourPicker> Generator for RecursiveBacktracker<P> {
    fn step_generation(&mut self) -> StepResult {
        self.step()
    }

    fn generate_maze(&mut self) -> &WallGrid {
        while !self.step().completed {}
        &self.grid
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn current(&self) -> (usize, usize) {
        self.current
    }

    fn grid(&self) -> &WallGrid {
        &self.grid
    }
}
