use std::fmt::Write;

use crate::grids::cell::Cell;
use crate::grids::wall_grid::WallGrid;
use crate::grids::Direction;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellShade {
    Unvisited,
    Visited,
    InStack,
    Current,
}

impl CellShade {
    pub fn of(cell: &Cell, current: (usize, usize)) -> Self {
        if cell.coords() == current {
            CellShade::Current
        } else if cell.in_stack {
            CellShade::InStack
        } else if cell.visited {
            CellShade::Visited
        } else {
            CellShade::Unvisited
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            CellShade::Unvisited => [223, 235, 247],
            CellShade::Visited => [157, 195, 230],
            CellShade::InStack => [255, 175, 175],
            CellShade::Current => [255, 0, 0],
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            CellShade::Unvisited => "  ",
            CellShade::Visited => "..",
            CellShade::InStack => "::",
            CellShade::Current => "@@",
        }
    }
}

fn paint(out: &mut String, shade: CellShade, color: bool) {
    if color {
        let [r, g, b] = shade.rgb();
        let _ = write!(out, "\x1b[48;2;{};{};{}m  {}", r, g, b, RESET);
    } else {
        out.push_str(shade.glyph());
    }
}

/// Draws the grid as text, two characters per cell interior.
pub fn render(grid: &WallGrid, current: (usize, usize), color: bool) -> String {
    let columns = grid.dims.columns;
    let rows = grid.dims.rows;
    let mut out = String::with_capacity((columns * 3 + 2) * (rows * 2 + 1));

    for row in 0..rows {
        for col in 0..columns {
            let cell = &grid.cells[grid.index_of(col, row)];
            out.push('+');
            out.push_str(if cell.has_wall(Direction::Top) { "--" } else { "  " });
        }
        out.push_str("+\n");

        for col in 0..columns {
            let cell = &grid.cells[grid.index_of(col, row)];
            out.push(if cell.has_wall(Direction::Left) { '|' } else { ' ' });
            paint(&mut out, CellShade::of(cell, current), color);
        }
        let last = &grid.cells[grid.index_of(columns - 1, row)];
        out.push(if last.has_wall(Direction::Right) { '|' } else { ' ' });
        out.push('\n');
    }

    for col in 0..columns {
        let cell = &grid.cells[grid.index_of(col, rows - 1)];
        out.push('+');
        out.push_str(if cell.has_wall(Direction::Bottom) { "--" } else { "  " });
    }
    out.push_str("+\n");

    out
}

/// A full terminal frame: clear, then the grid.
pub fn frame(grid: &WallGrid, current: (usize, usize), color: bool) -> String {
    let mut out = String::from(CLEAR_SCREEN);
    out.push_str(&render(grid, current, color));
    out
}
