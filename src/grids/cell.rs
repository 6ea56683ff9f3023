use crate::generators::NeighbourPicker;
use crate::grids::wall_grid::WallGrid;
use crate::grids::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub col: usize,
    pub row: usize,

    /// Top, Left, Bottom, Right; `true` means the wall is standing
    pub walls: [bool; 4],
    pub visited: bool,
    /// pushed onto the backtracking stack and not yet left by a backtrack
    pub in_stack: bool,
}

impl Cell {
    pub fn new(col: usize, row: usize) -> Self {
        Self {
            col,
            row,
            walls: [true; 4],
            visited: false,
            in_stack: false,
        }
    }

    #[inline]
    pub fn coords(&self) -> (usize, usize) {
        (self.col, self.row)
    }

    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls[dir as usize]
    }

    #[inline]
    pub fn clear_wall(&mut self, dir: Direction) {
        self.walls[dir as usize] = false;
    }

    /// Chooses uniformly among the in-bounds, unvisited 4-neighbours of this cell.
    pub fn pick_unvisited_neighbour<P>(
        &self,
        grid: &WallGrid,
        picker: &mut P,
    ) -> Option<(usize, usize)>
    where
        P: NeighbourPicker + ?Sized,
    {
        let mut candidates = [(0usize, 0usize); 4];
        let mut count = 0;
        for ((col, row), _) in grid.neighborhood_of(self.col, self.row) {
            if !grid.cells[grid.index_of(col, row)].visited {
                candidates[count] = (col, row);
                count += 1;
            }
        }

        if count == 0 {
            return None;
        }
        let index = picker.pick(count);
        debug_assert!(index < count, "picker chose {} of {}", index, count);
        Some(candidates[index.min(count - 1)])
    }
}

#[cfg(test)]
mod test_cell {
    use super::*;
    use crate::generators::test_support::Scripted;

    #[test]
    fn starts_fully_walled() {
        let cell = Cell::new(3, 4);
        assert_eq!(cell.coords(), (3, 4));
        assert!(Direction::ALL.iter().all(|dir| cell.has_wall(*dir)));
        assert!(!cell.visited);
        assert!(!cell.in_stack);
    }

    #[test]
    fn picks_from_unvisited_in_order() {
        let mut grid = WallGrid::with_dims(3, 3).unwrap();
        let centre = grid.cells[grid.index_of(1, 1)];

        // Top, Left, Bottom, Right
        let mut picker = Scripted::new(vec![0, 1, 2, 3]);
        assert_eq!(centre.pick_unvisited_neighbour(&grid, &mut picker), Some((1, 0)));
        assert_eq!(centre.pick_unvisited_neighbour(&grid, &mut picker), Some((0, 1)));
        assert_eq!(centre.pick_unvisited_neighbour(&grid, &mut picker), Some((1, 2)));
        assert_eq!(centre.pick_unvisited_neighbour(&grid, &mut picker), Some((2, 1)));

        let top = grid.index_of(1, 0);
        let left = grid.index_of(0, 1);
        grid.cells[top].visited = true;
        grid.cells[left].visited = true;
        let mut picker = Scripted::new(vec![0, 1]);
        assert_eq!(centre.pick_unvisited_neighbour(&grid, &mut picker), Some((1, 2)));
        assert_eq!(centre.pick_unvisited_neighbour(&grid, &mut picker), Some((2, 1)));
    }

    #[test]
    fn none_when_surrounded_by_visited() {
        let mut grid = WallGrid::with_dims(2, 1).unwrap();
        for cell in grid.cells.iter_mut() {
            cell.visited = true;
        }
        let first = grid.cells[0];
        let mut picker = Scripted::new(vec![0]);
        assert_eq!(first.pick_unvisited_neighbour(&grid, &mut picker), None);
    }

    struct OutOfRange;

    impl NeighbourPicker for OutOfRange {
        fn pick(&mut self, _count: usize) -> usize {
            99
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "picker chose 99 of 4")]
    fn out_of_range_pick_is_caught() {
        let grid = WallGrid::with_dims(3, 3).unwrap();
        let centre = grid.cells[grid.index_of(1, 1)];
        centre.pick_unvisited_neighbour(&grid, &mut OutOfRange);
    }

    #[test]
    fn lone_cell_has_no_neighbour() {
        let grid = WallGrid::with_dims(1, 1).unwrap();
        let mut picker = Scripted::new(vec![0]);
        assert_eq!(grid.cells[0].pick_unvisited_neighbour(&grid, &mut picker), None);
    }
}
