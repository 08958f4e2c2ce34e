//! Core types shared by the game engines: grid geometry and RNG.
//!
//! Nothing in this module knows about a specific game. Games build
//! their state out of these pieces.

pub mod grid;
pub mod rng;

pub use grid::{Direction, Point};
pub use rng::GameRng;
