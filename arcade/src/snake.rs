//! Grid-locked snake. The world is a `width` by `height` board of cells;
//! the snake wraps at the edges, grows on apples, and running into its own
//! body resets the game in place. One [`SnakeGame::step`] call advances one
//! cell; tick pacing belongs to the front end.

use std::collections::VecDeque;

use log::debug;
use rand::Rng;

/// The snake's starting (and post-reset) length in cells.
pub const INITIAL_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// What a single step did, so the front end can react (redraw, play a
/// sound) without diffing the whole board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    Moved,
    Ate,
    Died,
}

#[derive(Debug, Clone)]
pub struct SnakeGame {
    width: i32,
    height: i32,
    head: Cell,
    /// Body cells, head first.
    cells: VecDeque<Cell>,
    max_cells: usize,
    direction: Direction,
    apple: Cell,
    score: u32,
}

impl SnakeGame {
    pub fn new<R: Rng + ?Sized>(width: i32, height: i32, rng: &mut R) -> SnakeGame {
        let mut game = SnakeGame {
            width,
            height,
            head: Cell {
                x: width / 2,
                y: height / 2,
            },
            cells: VecDeque::new(),
            max_cells: INITIAL_LENGTH,
            direction: Direction::Right,
            apple: Cell { x: 0, y: 0 },
            score: 0,
        };
        game.apple = game.random_cell(rng);
        game
    }

    /// Changes direction. Turning straight back onto the body is ignored;
    /// only perpendicular turns apply.
    pub fn turn(&mut self, direction: Direction) {
        if direction.is_horizontal() != self.direction.is_horizontal() {
            self.direction = direction;
        }
    }

    /// Advances the snake one cell, wrapping at the board edges.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StepEvent {
        let (dx, dy) = self.direction.delta();
        self.head.x = (self.head.x + dx).rem_euclid(self.width);
        self.head.y = (self.head.y + dy).rem_euclid(self.height);

        self.cells.push_front(self.head);
        if self.cells.len() > self.max_cells {
            self.cells.pop_back();
        }

        if self.head == self.apple {
            self.max_cells += 1;
            self.score = (self.max_cells - INITIAL_LENGTH) as u32;
            self.apple = self.random_cell(rng);
            return StepEvent::Ate;
        }

        let head = self.head;
        if self.cells.iter().skip(1).any(|&cell| cell == head) {
            debug!("snake ran into itself at {},{}; resetting", head.x, head.y);
            self.reset(rng);
            return StepEvent::Died;
        }

        StepEvent::Moved
    }

    fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.head = Cell {
            x: self.width / 2,
            y: self.height / 2,
        };
        self.cells.clear();
        self.max_cells = INITIAL_LENGTH;
        self.direction = Direction::Right;
        self.score = 0;
        self.apple = self.random_cell(rng);
    }

    fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell {
            x: rng.gen_range(0..self.width),
            y: rng.gen_range(0..self.height),
        }
    }

    pub fn head(&self) -> Cell {
        self.head
    }

    /// Body cells, head first.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn apple(&self) -> Cell {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}
