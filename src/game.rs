//! The Snake simulation: a fixed-interval tick plus two wall-clock timers,
//! one spawning walls and one bringing food back after it was eaten or expired.

use rand::rngs::StdRng;

use crate::food::Food;
use crate::grid::{Cell, Direction, Grid};
use crate::settings::Settings;
use crate::snake::Snake;
use crate::timer::{Countdown, IntervalTimer};
use crate::wall::Wall;

/// Where the head is placed on every (re)start.
pub const START_CELL: Cell = Cell::new(10, 5);
/// Seconds of running time between wall spawn attempts.
pub const WALL_SPAWN_INTERVAL: f32 = 7.0;
/// Seconds without food after it was eaten or expired.
pub const FOOD_RESPAWN_DELAY: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first key press.
    Ready,
    Running,
    Paused,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Restart,
    TogglePause,
    /// Any other key. Only meaningful for starting the game.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    Restarted,
    Ate { points: u32 },
    FoodExpired,
    FoodSpawned,
    WallSpawned,
    WallSolidified,
    GameOver { score: u32 },
}

pub struct SnakeGame {
    grid: Grid,
    settings: Settings,
    snake: Snake,
    food: Option<Food>,
    walls: Vec<Wall>,
    score: u32,
    phase: Phase,
    tick_timer: IntervalTimer,
    wall_timer: IntervalTimer,
    food_respawn: Countdown,
    rng: StdRng,
}

impl SnakeGame {
    pub fn new(settings: Settings, grid: Grid, rng: StdRng) -> Self {
        let mut game = Self {
            grid,
            settings,
            snake: Snake::new(grid.clamp(START_CELL), settings.direction),
            food: None,
            walls: Vec::new(),
            score: 0,
            phase: Phase::Ready,
            tick_timer: IntervalTimer::new(settings.tick_period()),
            wall_timer: IntervalTimer::new(WALL_SPAWN_INTERVAL),
            food_respawn: Countdown::new(FOOD_RESPAWN_DELAY),
            rng,
        };
        game.restart();
        game
    }

    /// Back to a single-cell snake waiting for the first key.
    pub fn restart(&mut self) {
        self.snake = Snake::new(self.grid.clamp(START_CELL), self.settings.direction);
        self.walls.clear();
        self.score = 0;
        self.phase = Phase::Ready;
        self.tick_timer.reset();
        self.wall_timer.reset();
        self.food_respawn.stop();
        self.food = None;
        self.respawn_food();
        tracing::debug!(grid_w = self.grid.width(), grid_h = self.grid.height(), "game reset");
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn handle_command(&mut self, command: Command) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match (self.phase, command) {
            (Phase::Over, Command::Restart) | (Phase::Ready, Command::Restart) => {
                self.restart();
                events.push(GameEvent::Restarted);
            }
            (Phase::Over, _) => {}
            (Phase::Ready, command) => {
                self.phase = Phase::Running;
                events.push(GameEvent::Started);
                if let Command::Turn(direction) = command {
                    self.snake.queue_turn(direction);
                }
            }
            (Phase::Running | Phase::Paused, Command::Restart) => {
                self.restart();
                events.push(GameEvent::Restarted);
            }
            (Phase::Running, Command::TogglePause) => {
                self.phase = Phase::Paused;
                events.push(GameEvent::Paused);
            }
            (Phase::Paused, Command::TogglePause) => {
                self.phase = Phase::Running;
                events.push(GameEvent::Resumed);
            }
            (Phase::Running | Phase::Paused, Command::Turn(direction)) => {
                self.snake.queue_turn(direction);
            }
            (Phase::Running | Phase::Paused, Command::Other) => {}
        }
        events
    }

    /// Advances every timer by `dt` seconds. Nothing moves unless the game is running.
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != Phase::Running {
            return events;
        }

        for _ in 0..self.tick_timer.advance(dt) {
            events.extend(self.tick());
            if self.phase == Phase::Over {
                return events;
            }
        }

        for _ in 0..self.wall_timer.advance(dt) {
            if self.spawn_wall() {
                events.push(GameEvent::WallSpawned);
            }
        }

        if self.food_respawn.advance(dt) && self.respawn_food() {
            events.push(GameEvent::FoodSpawned);
        }

        events
    }

    /// One simulation step: turn, move, eat, age walls and food, then collide.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != Phase::Running {
            return events;
        }

        self.snake.advance(&self.grid);
        let head = self.snake.head();

        if let Some(food) = self.food.filter(|f| f.cell() == head) {
            let points = food.points(self.settings.score_increment);
            self.score += points;
            self.snake.grow();
            self.food = None;
            self.food_respawn.start();
            tracing::debug!(points, score = self.score, len = self.snake.len(), "food eaten");
            events.push(GameEvent::Ate { points });
        }

        for wall in &mut self.walls {
            if wall.tick() {
                events.push(GameEvent::WallSolidified);
            }
        }

        let expired = self.food.as_mut().is_some_and(|f| f.tick());
        if expired {
            self.food = None;
            self.food_respawn.start();
            events.push(GameEvent::FoodExpired);
        }

        let hit_wall = self
            .walls
            .iter()
            .any(|w| w.is_solid() && w.contains(head));
        if self.snake.bites_itself() || hit_wall {
            self.phase = Phase::Over;
            tracing::debug!(score = self.score, hit_wall, "snake crashed");
            events.push(GameEvent::GameOver { score: self.score });
        }

        events
    }

    /// Tries to place a new flashing wall. Candidates touching the snake,
    /// the food or another wall are dropped.
    pub fn spawn_wall(&mut self) -> bool {
        let wall = Wall::generate(&mut self.rng, &self.grid);
        let food_cell = self.food.map(|f| f.cell());
        let clashes = wall
            .blocks()
            .iter()
            .any(|b| self.snake.contains(*b) || Some(*b) == food_cell)
            || self.walls.iter().any(|w| w.overlaps(&wall));
        if clashes {
            return false;
        }
        tracing::debug!(blocks = wall.blocks().len(), "wall spawned");
        self.walls.push(wall);
        true
    }

    /// Puts food on a free cell. Returns `false` if the board is full.
    pub fn respawn_food(&mut self) -> bool {
        let snake = &self.snake;
        let walls = &self.walls;
        self.food = Food::spawn(&mut self.rng, &self.grid, |c| {
            snake.contains(c) || walls.iter().any(|w| w.contains(c))
        });
        self.food_respawn.stop();
        self.food.is_some()
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, cell: Cell) {
        self.food = Some(Food::new(cell));
    }

    #[cfg(test)]
    pub(crate) fn place_wall(&mut self, wall: Wall) {
        self.walls.push(wall);
    }
}
