use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Next heading in clockwise order, used by the settings screen.
    pub fn clockwise(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    pub fn counter_clockwise(self) -> Self {
        self.clockwise().opposite()
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step towards `direction`, without wrapping.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Cell::new(self.x, self.y - 1),
            Direction::Down => Cell::new(self.x, self.y + 1),
            Direction::Left => Cell::new(self.x - 1, self.y),
            Direction::Right => Cell::new(self.x + 1, self.y),
        }
    }

    pub fn neighbours(self) -> [Cell; 4] {
        [
            self.step(Direction::Right),
            self.step(Direction::Left),
            self.step(Direction::Down),
            self.step(Direction::Up),
        ]
    }
}

/// Playfield dimensions in cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Grid that fits a `field_width` x `field_height` pixel panel with square cells.
    pub fn for_field(field_width: i32, field_height: i32, cell_size: i32) -> Self {
        let cell_size = cell_size.max(1);
        Self::new(field_width / cell_size, field_height / cell_size)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn area(&self) -> usize {
        (self.width * self.height) as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    /// Folds a cell that stepped off one edge back onto the opposite edge.
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(cell.x.rem_euclid(self.width), cell.y.rem_euclid(self.height))
    }

    /// Clamps a cell into the grid.
    pub fn clamp(&self, cell: Cell) -> Cell {
        Cell::new(
            cell.x.clamp(0, self.width - 1),
            cell.y.clamp(0, self.height - 1),
        )
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_pairs() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }

    #[test]
    fn clockwise_cycles_through_all_directions() {
        let mut d = Direction::Up;
        for expected in [Direction::Right, Direction::Down, Direction::Left, Direction::Up] {
            d = d.clockwise();
            assert_eq!(d, expected);
        }
        assert_eq!(Direction::Up.counter_clockwise(), Direction::Left);
    }

    #[test]
    fn wrap_folds_every_edge() {
        let grid = Grid::new(40, 30);
        assert_eq!(grid.wrap(Cell::new(-1, 5)), Cell::new(39, 5));
        assert_eq!(grid.wrap(Cell::new(40, 5)), Cell::new(0, 5));
        assert_eq!(grid.wrap(Cell::new(3, -1)), Cell::new(3, 29));
        assert_eq!(grid.wrap(Cell::new(3, 30)), Cell::new(3, 0));
        assert_eq!(grid.wrap(Cell::new(7, 8)), Cell::new(7, 8));
    }

    #[test]
    fn field_is_divided_by_cell_size() {
        let grid = Grid::for_field(800, 600, 20);
        assert_eq!((grid.width(), grid.height()), (40, 30));
        assert_eq!(grid.area(), 1200);
        assert_eq!(grid.cells().count(), 1200);
    }

    #[test]
    fn contains_rejects_out_of_bounds() {
        let grid = Grid::new(4, 3);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(3, 2)));
        assert!(!grid.contains(Cell::new(4, 0)));
        assert!(!grid.contains(Cell::new(0, -1)));
    }
}
