//! Engine trait for discrete-event game simulations.
//!
//! Games implement [`Engine`] to define their rules:
//! - What events exist
//! - How events modify state
//! - When a state is terminal
//!
//! An engine is a pure state-transition component: no I/O, no clock, no
//! concurrency of its own. The driver (a frontend, a bot harness, a
//! test) owns event capture and tick cadence, feeds events into
//! [`Engine::apply`] one at a time, and renders the state it gets back.
//! Terminal states accept no further transitions; leaving one means
//! building a fresh state.

/// A pure state-transition game engine.
///
/// ## Implementation Notes
///
/// - `apply`: must be deterministic given the state (including any RNG
///   the state owns) and the event
/// - `apply`: invalid events are ignored, not errors - the return value
///   says whether anything changed
/// - `is_terminal`: a terminal state must ignore every further event
pub trait Engine {
    /// Complete game state handed back to the driver after each
    /// transition.
    type State;

    /// Discrete input event (a click, a key press, a timer tick).
    type Event;

    /// Apply one event to the state.
    ///
    /// Returns `true` if the event changed the state, `false` if it was
    /// ignored (occupied cell, finished game, illegal direction).
    fn apply(&self, state: &mut Self::State, event: Self::Event) -> bool;

    /// Check whether the game is over.
    fn is_terminal(&self, state: &Self::State) -> bool;
}
