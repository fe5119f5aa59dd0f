use std::collections::VecDeque;

use crate::grid::{Cell, Direction, Grid};

/// The snake body, head first, plus the turns the player queued between ticks.
#[derive(Debug, Clone)]
pub struct Snake {
    cells: Vec<Cell>,
    direction: Direction,
    pending: VecDeque<Direction>,
    vacated_tail: Cell,
}

impl Snake {
    pub fn new(head: Cell, direction: Direction) -> Self {
        Self {
            cells: vec![head],
            direction,
            pending: VecDeque::new(),
            vacated_tail: head,
        }
    }

    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn pending_turns(&self) -> impl Iterator<Item = &Direction> {
        self.pending.iter()
    }

    /// Queues a turn for a later tick. Turns straight back and duplicates are dropped.
    pub fn queue_turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() || self.pending.contains(&direction) {
            return false;
        }
        self.pending.push_back(direction);
        true
    }

    /// Applies at most one queued turn, then moves one cell forward.
    pub fn advance(&mut self, grid: &Grid) {
        if let Some(next) = self.pending.pop_front() {
            let landing = grid.wrap(self.head().step(next));
            let doubles_back = self.cells.get(1).is_some_and(|neck| *neck == landing);
            if !doubles_back {
                self.direction = next;
            }
        }

        self.vacated_tail = self.cells[self.cells.len() - 1];
        let new_head = grid.wrap(self.head().step(self.direction));
        self.cells.rotate_right(1);
        self.cells[0] = new_head;
    }

    /// Adds a segment on the cell the tail left during the last move.
    pub fn grow(&mut self) {
        self.cells.push(self.vacated_tail);
    }

    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.cells[1..].contains(&head)
    }
}
