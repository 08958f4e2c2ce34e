//! # grid-games
//!
//! Pure state-machine engines for two small grid games: tic-tac-toe
//! and snake.
//!
//! ## Design Principles
//!
//! 1. **Engines are pure**: no I/O, no clock, no concurrency. Every
//!    transition is a deterministic function of explicit state and one
//!    discrete event.
//!
//! 2. **The driver owns time and input**: a frontend (or a test, or a
//!    bot harness) captures clicks, key presses, and timer ticks,
//!    serializes them into [`Engine::apply`], and renders the state it
//!    gets back.
//!
//! 3. **Randomness is injected**: the only random decision (snake food
//!    placement) draws from a seeded RNG owned by the game state, so
//!    the same seed and events reproduce the same run.
//!
//! ## Modules
//!
//! - `core`: grid geometry ([`Point`], [`Direction`]) and the seeded
//!   [`GameRng`]
//! - `engine`: the [`Engine`] trait games implement
//! - `games`: the two game implementations
//!
//! ## Example
//!
//! ```
//! use grid_games::{Engine, Mark, TicTacToe};
//!
//! let game = TicTacToe::new();
//! let mut state = game.reset();
//!
//! // X takes the top row while O wanders.
//! for cell in [0, 3, 1, 4, 2] {
//!     game.apply(&mut state, cell);
//! }
//!
//! assert!(game.is_terminal(&state));
//! assert_eq!(state.outcome().winner(), Some(Mark::X));
//! assert_eq!(state.outcome().winning_line(), Some([0, 1, 2]));
//! ```

pub mod core;
pub mod engine;
pub mod games;

// Re-export commonly used types
pub use crate::core::{Direction, GameRng, Point};

pub use crate::engine::Engine;

pub use crate::games::tictactoe::{
    Board, LineKind, Mark, Outcome, TicTacToe, TicTacToeState, CELLS, WIN_LINES,
};

pub use crate::games::snake::{Snake, SnakeConfig, SnakeEvent, SnakeState};
