//! Snake on a toroidal grid: fixed-tick movement, growth, self-collision.
//!
//! The engine has no clock. The driver feeds it [`SnakeEvent`]s: a
//! `Turn` per direction key and a `Tick` per period of its own timer
//! (the original frontend ticks every 150 ms). Each `Tick` advances the
//! simulation exactly one cell; the board wraps at every edge, and the
//! run ends when the head lands on a cell of the body that is still
//! occupied after the step.
//!
//! Food placement is the only randomness. The RNG lives inside
//! [`SnakeState`] and is seeded at reset, so a run is a pure function
//! of `(seed, events)`.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Direction, GameRng, Point};
use crate::engine::Engine;

/// Snake game configuration.
///
/// Defaults match the original 20x20 board with the snake starting in
/// the middle, headed right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeConfig {
    /// Cells per side of the square grid. Must be at least 2.
    pub grid_size: i32,

    /// Head cell of the length-1 starting snake.
    pub start: Point,

    /// Starting movement direction.
    pub direction: Direction,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            start: Point::new(10, 10),
            direction: Direction::Right,
        }
    }
}

impl SnakeConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid side length.
    #[must_use]
    pub fn with_grid_size(mut self, size: i32) -> Self {
        assert!(size >= 2, "Grid must be at least 2x2");
        self.grid_size = size;
        self
    }

    /// Set the starting head cell (wrapped onto the grid at reset).
    #[must_use]
    pub fn with_start(mut self, start: Point) -> Self {
        self.start = start;
        self
    }

    /// Set the starting direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// Discrete inputs the driver feeds into the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakeEvent {
    /// A direction key. Takes effect on the next tick.
    Turn(Direction),
    /// One step of the driver's fixed-period clock.
    Tick,
}

/// Complete snake game state.
///
/// The body is head-first. `direction` is the direction of the last
/// completed step; a `Turn` lands in `pending` and is adopted on the
/// next tick, so several key presses between ticks overwrite each other
/// (last write wins).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeState {
    body: VecDeque<Point>,
    food: Point,
    direction: Direction,
    pending: Direction,
    score: u32,
    alive: bool,
    rng: GameRng,
}

impl SnakeState {
    /// Build a state from explicit parts, for analysis and tests.
    ///
    /// `body` is head-first and must be non-empty. The caller is
    /// responsible for keeping `food` off the body and all cells on the
    /// intended grid.
    #[must_use]
    pub fn from_parts(
        body: impl IntoIterator<Item = Point>,
        food: Point,
        direction: Direction,
        seed: u64,
    ) -> Self {
        let body: VecDeque<Point> = body.into_iter().collect();
        assert!(!body.is_empty(), "Snake body must be non-empty");

        Self {
            body,
            food,
            direction,
            pending: direction,
            score: 0,
            alive: true,
            rng: GameRng::new(seed),
        }
    }

    /// The head cell.
    #[must_use]
    pub fn head(&self) -> Point {
        *self.body.front().expect("snake body is never empty")
    }

    /// Body cells, head first.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    /// Body length in cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// A snake is never empty; kept for clippy's `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The current food cell. Never on the body.
    #[must_use]
    pub fn food(&self) -> Point {
        self.food
    }

    /// Direction of the last completed step.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Pieces of food eaten so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// False once the snake has collided with itself.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

/// Rules engine for snake.
#[derive(Clone, Copy, Debug)]
pub struct Snake {
    config: SnakeConfig,
}

impl Snake {
    /// Create an engine for the given configuration.
    #[must_use]
    pub fn new(config: SnakeConfig) -> Self {
        assert!(config.grid_size >= 2, "Grid must be at least 2x2");
        Self { config }
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    /// Fresh initial state: length-1 snake at the configured start,
    /// configured direction, score 0, freshly placed food.
    ///
    /// The same seed yields an identical run for identical events.
    #[must_use]
    pub fn reset(&self, seed: u64) -> SnakeState {
        let mut rng = GameRng::new(seed);
        let mut body = VecDeque::with_capacity(8);
        body.push_back(self.config.start.wrapped(self.config.grid_size));

        let food = Self::place_food(self.config.grid_size, &body, &mut rng)
            .expect("a fresh grid has free cells for food");

        SnakeState {
            body,
            food,
            direction: self.config.direction,
            pending: self.config.direction,
            score: 0,
            alive: true,
            rng,
        }
    }

    /// Request a direction change for the next tick.
    ///
    /// Ignored (returns `false`) when the game is over or `requested`
    /// would reverse the direction of the last completed step - a 180
    /// degree turn into the neck is never accepted. Requests between
    /// ticks overwrite each other.
    pub fn set_direction(&self, state: &mut SnakeState, requested: Direction) -> bool {
        if !state.alive || requested.is_opposite(state.direction) {
            return false;
        }

        state.pending = requested;
        true
    }

    /// Advance the simulation by exactly one step.
    ///
    /// The caller must not advance a finished game: that is a contract
    /// violation which fails fast in debug builds and is a rejected
    /// event in release builds. (The [`Engine`] impl guards terminal
    /// states before calling this.)
    pub fn advance(&self, state: &mut SnakeState) -> bool {
        debug_assert!(state.alive, "advance on a finished game");
        if !state.alive {
            return false;
        }

        state.direction = state.pending;
        let new_head = state.head().step(state.direction).wrapped(self.config.grid_size);

        let grows = new_head == state.food;

        // The tail cell vacates this step unless the snake grows, so it
        // does not count as a collision.
        let occupied = if grows {
            state.body.len()
        } else {
            state.body.len() - 1
        };
        if state.body.iter().take(occupied).any(|&segment| segment == new_head) {
            state.alive = false;
            return true;
        }

        state.body.push_front(new_head);

        if grows {
            state.score += 1;
            match Self::place_food(self.config.grid_size, &state.body, &mut state.rng) {
                Some(food) => state.food = food,
                // Body covers the whole grid - nothing left to eat.
                None => state.alive = false,
            }
        } else {
            state.body.pop_back();
        }

        true
    }

    /// Render the grid as text: `O` head, `o` body, `*` food.
    #[must_use]
    pub fn render(&self, state: &SnakeState) -> String {
        let head = state.head();
        let body: FxHashSet<Point> = state.segments().collect();

        let mut out = String::new();
        for y in 0..self.config.grid_size {
            for x in 0..self.config.grid_size {
                let cell = Point::new(x, y);
                let c = if cell == head {
                    'O'
                } else if body.contains(&cell) {
                    'o'
                } else if cell == state.food {
                    '*'
                } else {
                    '.'
                };
                out.push(c);
                if x < self.config.grid_size - 1 {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out
    }

    /// Choose a uniformly random free cell, or `None` when the body
    /// covers the grid.
    fn place_food(grid_size: i32, body: &VecDeque<Point>, rng: &mut GameRng) -> Option<Point> {
        let occupied: FxHashSet<Point> = body.iter().copied().collect();

        let free: Vec<Point> = (0..grid_size)
            .flat_map(|y| (0..grid_size).map(move |x| Point::new(x, y)))
            .filter(|cell| !occupied.contains(cell))
            .collect();

        rng.choose(&free).copied()
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new(SnakeConfig::default())
    }
}

impl Engine for Snake {
    type State = SnakeState;
    type Event = SnakeEvent;

    fn apply(&self, state: &mut SnakeState, event: SnakeEvent) -> bool {
        if !state.alive {
            return false;
        }

        match event {
            SnakeEvent::Turn(direction) => self.set_direction(state, direction),
            SnakeEvent::Tick => self.advance(state),
        }
    }

    fn is_terminal(&self, state: &SnakeState) -> bool {
        !state.alive
    }
}
