use rand::Rng;
use rand::seq::SliceRandom;

use crate::grid::{Cell, Grid};

/// Ticks a freshly spawned food stays on the board.
pub const FOOD_MAX_TICKS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    cell: Cell,
    remaining: u32,
}

impl Food {
    pub fn new(cell: Cell) -> Self {
        Self {
            cell,
            remaining: FOOD_MAX_TICKS,
        }
    }

    /// Places food on a random cell for which `blocked` is false.
    ///
    /// Returns `None` when every cell is blocked.
    pub fn spawn<R, F>(rng: &mut R, grid: &Grid, blocked: F) -> Option<Self>
    where
        R: Rng + ?Sized,
        F: Fn(Cell) -> bool,
    {
        let free: Vec<Cell> = grid.cells().filter(|c| !blocked(*c)).collect();
        free.choose(rng).copied().map(Food::new)
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Counts one tick off the lifetime. Returns `true` once the food has expired.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    pub fn freshness(&self) -> f32 {
        (self.remaining as f32 / FOOD_MAX_TICKS as f32).clamp(0.0, 1.0)
    }

    /// Score for eating this food now, scaled down as it ages.
    pub fn points(&self, score_increment: u32) -> u32 {
        (self.freshness() * score_increment as f32) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fresh_food_is_worth_full_increment() {
        let food = Food::new(Cell::new(1, 1));
        assert_eq!(food.freshness(), 1.0);
        assert_eq!(food.points(10), 10);
    }

    #[test]
    fn points_decay_with_age() {
        let mut food = Food::new(Cell::new(1, 1));
        for _ in 0..50 {
            food.tick();
        }
        assert_eq!(food.remaining(), 50);
        assert_eq!(food.points(10), 5);
        assert_eq!(food.points(7), 3);
    }

    #[test]
    fn expires_after_max_ticks() {
        let mut food = Food::new(Cell::new(0, 0));
        for _ in 0..FOOD_MAX_TICKS - 1 {
            assert!(!food.tick());
        }
        assert!(food.tick());
        assert_eq!(food.points(10), 0);
    }

    #[test]
    fn never_spawns_on_blocked_cells() {
        let grid = Grid::new(5, 5);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let food = Food::spawn(&mut rng, &grid, |c| c.x < 4).expect("free column");
            assert_eq!(food.cell().x, 4);
        }
    }

    #[test]
    fn full_board_yields_no_food() {
        let grid = Grid::new(3, 3);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Food::spawn(&mut rng, &grid, |_| true).is_none());
    }
}
