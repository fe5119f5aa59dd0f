use rand::Rng;
use rand::seq::SliceRandom;

use crate::grid::{Cell, Grid};

/// Ticks a new wall flashes before it turns solid.
pub const WALL_FLASH_TICKS: u32 = 30;
pub const MIN_WALL_BLOCKS: usize = 3;
pub const MAX_WALL_BLOCKS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallState {
    /// Telegraphed, harmless to the snake.
    Flashing,
    Solid,
}

/// A chain of 4-connected blocks that appears mid-game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wall {
    blocks: Vec<Cell>,
    state: WallState,
    flash_counter: u32,
}

impl Wall {
    pub fn new(blocks: Vec<Cell>, flash_ticks: u32) -> Self {
        Self {
            blocks,
            state: WallState::Flashing,
            flash_counter: flash_ticks,
        }
    }

    /// Random walk from a random start, extending into free in-bounds neighbours.
    /// Stops early when the walk boxes itself in.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, grid: &Grid) -> Self {
        let target = rng.gen_range(MIN_WALL_BLOCKS..=MAX_WALL_BLOCKS);
        let start = Cell::new(
            rng.gen_range(0..grid.width()),
            rng.gen_range(0..grid.height()),
        );

        let mut blocks = Vec::with_capacity(target);
        blocks.push(start);
        while blocks.len() < target {
            let last = blocks[blocks.len() - 1];
            let options: Vec<Cell> = last
                .neighbours()
                .into_iter()
                .filter(|c| grid.contains(*c) && !blocks.contains(c))
                .collect();
            match options.choose(rng) {
                Some(next) => blocks.push(*next),
                None => break,
            }
        }

        Self::new(blocks, WALL_FLASH_TICKS)
    }

    pub fn blocks(&self) -> &[Cell] {
        &self.blocks
    }

    pub fn state(&self) -> WallState {
        self.state
    }

    pub fn is_solid(&self) -> bool {
        self.state == WallState::Solid
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.blocks.contains(&cell)
    }

    pub fn overlaps(&self, other: &Wall) -> bool {
        self.blocks.iter().any(|b| other.contains(*b))
    }

    /// Returns `true` on the tick the wall turns solid.
    pub fn tick(&mut self) -> bool {
        if self.state != WallState::Flashing {
            return false;
        }
        self.flash_counter = self.flash_counter.saturating_sub(1);
        if self.flash_counter == 0 {
            self.state = WallState::Solid;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn is_connected_chain(blocks: &[Cell]) -> bool {
        blocks
            .windows(2)
            .all(|w| (w[0].x - w[1].x).abs() + (w[0].y - w[1].y).abs() == 1)
    }

    #[test]
    fn generated_walls_are_connected_chains_in_bounds() {
        let grid = Grid::new(40, 30);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let wall = Wall::generate(&mut rng, &grid);
            let blocks = wall.blocks();
            assert!(!blocks.is_empty() && blocks.len() <= MAX_WALL_BLOCKS);
            assert!(blocks.iter().all(|b| grid.contains(*b)));
            assert!(is_connected_chain(blocks));
            for (i, b) in blocks.iter().enumerate() {
                assert!(!blocks[i + 1..].contains(b));
            }
            assert_eq!(wall.state(), WallState::Flashing);
        }
    }

    #[test]
    fn roomy_grid_reaches_minimum_length() {
        let grid = Grid::new(40, 30);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            assert!(Wall::generate(&mut rng, &grid).blocks().len() >= MIN_WALL_BLOCKS);
        }
    }

    #[test]
    fn walk_stops_when_boxed_in() {
        let grid = Grid::new(1, 2);
        let mut rng = StdRng::seed_from_u64(9);
        let wall = Wall::generate(&mut rng, &grid);
        assert_eq!(wall.blocks().len(), 2);
    }

    #[test]
    fn flashes_then_turns_solid() {
        let mut wall = Wall::new(vec![Cell::new(1, 1)], 3);
        assert!(!wall.tick());
        assert!(!wall.tick());
        assert!(!wall.is_solid());
        assert!(wall.tick());
        assert!(wall.is_solid());
        assert!(!wall.tick());
        assert_eq!(wall.state(), WallState::Solid);
    }

    #[test]
    fn generated_wall_turns_solid_on_its_thirtieth_tick() {
        let grid = Grid::new(40, 30);
        let mut rng = StdRng::seed_from_u64(17);
        let mut wall = Wall::generate(&mut rng, &grid);
        for _ in 1..WALL_FLASH_TICKS {
            assert!(!wall.tick());
            assert_eq!(wall.state(), WallState::Flashing);
        }
        assert!(wall.tick());
        assert!(wall.is_solid());
    }

    #[test]
    fn overlap_checks_any_shared_block() {
        let a = Wall::new(vec![Cell::new(1, 1), Cell::new(2, 1)], 1);
        let b = Wall::new(vec![Cell::new(2, 1), Cell::new(2, 2)], 1);
        let c = Wall::new(vec![Cell::new(5, 5)], 1);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }
}
