pub mod backtracker;

use crate::grids::wall_grid::WallGrid;
use rand::Rng;

/// What a single generation step did to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// wall between `from` and `to` removed, `to` is now current
    Carve { from: (usize, usize), to: (usize, usize) },
    /// dead end at `from`, resumed at `to` off the stack
    Backtrack { from: (usize, usize), to: (usize, usize) },
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    pub advanced: bool,
    pub completed: bool,
    pub action: StepAction,
}

impl StepResult {
    pub(crate) fn moved(action: StepAction) -> Self {
        Self {
            advanced: true,
            completed: false,
            action,
        }
    }

    pub(crate) fn finished() -> Self {
        Self {
            advanced: false,
            completed: true,
            action: StepAction::Idle,
        }
    }
}

pub trait Generator {
    fn step_generation(&mut self) -> StepResult;
    fn generate_maze(&mut self) -> &WallGrid;
    fn is_done(&self) -> bool;
    fn current(&self) -> (usize, usize);
    fn grid(&self) -> &WallGrid;
}

/// Source of the random choice between candidate neighbours.
pub trait NeighbourPicker {
    /// Index in `0..count`. `count` is never zero; anything outside the
    /// range is a bug in the picker and trips a debug assertion.
    fn pick(&mut self, count: usize) -> usize;
}

impl<R: Rng> NeighbourPicker for R {
    fn pick(&mut self, count: usize) -> usize {
        self.gen_range(0, count)
    }
}


#[cfg(test)]
mod test_picker {
    use super::NeighbourPicker;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rng_picks_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let index = rng.pick(4);
            assert!(index < 4);
            seen[index] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
        assert_eq!(rng.pick(1), 0);
    }
}
