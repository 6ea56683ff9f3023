pub mod config;
pub mod error;
pub mod generators;
pub mod grids;
pub mod renderer;

pub use error::GridError;
pub use generators::backtracker::RecursiveBacktracker;
pub use generators::{Generator, NeighbourPicker, StepAction, StepResult};
pub use grids::cell::Cell;
pub use grids::wall_grid::WallGrid;
pub use grids::Direction;
