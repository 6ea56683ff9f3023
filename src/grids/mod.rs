pub mod cell;
pub mod wall_grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub columns: usize,
    pub rows: usize,
}

impl Dimensions {
    #[inline]
    pub fn contains(&self, col: usize, row: usize) -> bool {
        col < self.columns && row < self.rows
    }

    /// Number of cells, `None` if it does not fit in `usize`.
    #[inline]
    pub fn cell_count(&self) -> Option<usize> {
        self.columns.checked_mul(self.rows)
    }
}

/// Sides of a cell. The discriminant is the index into `Cell::walls`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Top = 0,
    Left = 1,
    Bottom = 2,
    Right = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Left,
        Direction::Bottom,
        Direction::Right,
    ];

    /// (dcol, drow) of the cell across this side
    #[inline]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Top => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Bottom => (0, 1),
            Direction::Right => (1, 0),
        }
    }

    /// Side of `from` that faces the grid-adjacent cell `to`, if they are adjacent.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Direction> {
        let dcol = from.0 as isize - to.0 as isize;
        let drow = from.1 as isize - to.1 as isize;
        match (dcol, drow) {
            (0, 1) => Some(Direction::Top),
            (1, 0) => Some(Direction::Left),
            (0, -1) => Some(Direction::Bottom),
            (-1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::Top,
            1 => Direction::Left,
            2 => Direction::Bottom,
            3 => Direction::Right,
            _ => unreachable!(),
        }
    }
}

pub type Neighbor = (usize, usize);

/// In-bounds 4-neighbourhood of a cell, yielded in Top, Left, Bottom, Right order.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub top: Option<Neighbor>,
    pub left: Option<Neighbor>,
    pub bottom: Option<Neighbor>,
    pub right: Option<Neighbor>,

    counter: usize,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self {
            top: None,
            left: None,
            bottom: None,
            right: None,
            counter: 0,
        }
    }

    pub fn of(col: usize, row: usize, dims: Dimensions) -> Self {
        let mut hood = Self::new();
        for dir in Direction::ALL.iter().copied() {
            let (dcol, drow) = dir.offset();
            let n_col = col as isize + dcol;
            let n_row = row as isize + drow;
            if n_col < 0 || n_row < 0 {
                continue;
            }
            let (n_col, n_row) = (n_col as usize, n_row as usize);
            if !dims.contains(n_col, n_row) {
                continue;
            }
            *hood.slot_mut(dir) = Some((n_col, n_row));
        }
        hood
    }

    pub fn get(&self, dir: Direction) -> Option<Neighbor> {
        match dir {
            Direction::Top => self.top,
            Direction::Left => self.left,
            Direction::Bottom => self.bottom,
            Direction::Right => self.right,
        }
    }

    fn slot_mut(&mut self, dir: Direction) -> &mut Option<Neighbor> {
        match dir {
            Direction::Top => &mut self.top,
            Direction::Left => &mut self.left,
            Direction::Bottom => &mut self.bottom,
            Direction::Right => &mut self.right,
        }
    }
}

impl Iterator for Neighborhood {
    type Item = (Neighbor, Direction);

    fn next(&mut self) -> Option<Self::Item> {
        while self.counter < Direction::ALL.len() {
            let dir = Direction::from(self.counter);
            self.counter += 1;
            if let Some(neighbor) = self.get(dir) {
                return Some((neighbor, dir));
            }
        }
        None
    }
}

#[cfg(test)]
mod test_grids {
    use super::*;

    #[test]
    fn corner_has_two_neighbors() {
        let dims = Dimensions { columns: 3, rows: 2 };
        let found: Vec<_> = Neighborhood::of(0, 0, dims).collect();
        assert_eq!(
            found,
            vec![((0, 1), Direction::Bottom), ((1, 0), Direction::Right)]
        );
    }

    #[test]
    fn interior_yields_top_left_bottom_right() {
        let dims = Dimensions { columns: 3, rows: 3 };
        let dirs: Vec<_> = Neighborhood::of(1, 1, dims).map(|(_, dir)| dir).collect();
        assert_eq!(dirs, Direction::ALL.to_vec());
    }

    #[test]
    fn cell_count_checks_overflow() {
        assert_eq!(Dimensions { columns: 4, rows: 3 }.cell_count(), Some(12));
        assert_eq!(Dimensions { columns: usize::MAX, rows: 2 }.cell_count(), None);
    }

    #[test]
    fn single_cell_is_isolated() {
        let dims = Dimensions { columns: 1, rows: 1 };
        assert_eq!(Neighborhood::of(0, 0, dims).count(), 0);
    }

    #[test]
    fn between_matches_removal_table() {
        assert_eq!(Direction::between((2, 2), (2, 1)), Some(Direction::Top));
        assert_eq!(Direction::between((2, 2), (1, 2)), Some(Direction::Left));
        assert_eq!(Direction::between((2, 2), (2, 3)), Some(Direction::Bottom));
        assert_eq!(Direction::between((2, 2), (3, 2)), Some(Direction::Right));
        assert_eq!(Direction::between((2, 2), (3, 3)), None);
        assert_eq!(Direction::between((2, 2), (2, 2)), None);
    }

    #[test]
    fn opposite_sides() {
        for dir in Direction::ALL.iter().copied() {
            assert_eq!(-(-dir), dir);
            assert_ne!(-dir, dir);
        }
    }
}
