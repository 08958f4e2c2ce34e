//! Tic-tac-toe: 3x3 board, alternating marks, win/draw detection.
//!
//! The board is a row-major array of 9 cells. X always moves first.
//! Win detection scans the 8 winning triples in a fixed order, so the
//! reported line is deterministic even on (unreachable in normal play)
//! boards with several complete lines.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::engine::Engine;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// The 8 winning index triples: 3 rows, 3 columns, 2 diagonals.
///
/// [`Board::outcome`] checks them in this order and reports the first
/// complete one.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player mark. X always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Row-major 3x3 board. Index 0 is the top-left cell, 8 bottom-right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELLS],
}

impl Board {
    /// Empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from raw cells, for analysis and tests.
    #[must_use]
    pub fn from_cells(cells: [Option<Mark>; CELLS]) -> Self {
        Self { cells }
    }

    /// The mark at `index`, or `None` for an empty cell.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells[index]
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Option<Mark>; CELLS] {
        &self.cells
    }

    /// Count cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }

    /// Check whether every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Outcome of this position.
    ///
    /// The first complete triple in [`WIN_LINES`] order wins. No
    /// complete triple on a full board is a draw.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        for line in WIN_LINES {
            let [a, b, c] = line;
            if let Some(mark) = self.cells[a] {
                if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) {
                    return Outcome::Win { mark, line };
                }
            }
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                match self.cells[row * 3 + col] {
                    Some(mark) => write!(f, "{}", mark)?,
                    None => write!(f, ".")?,
                }
                if col < 2 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still being accepted.
    InProgress,
    /// `mark` completed `line` (indices into the board).
    Win { mark: Mark, line: [usize; 3] },
    /// Full board, no winner.
    Draw,
}

impl Outcome {
    /// Check whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning mark, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// The winning line, if any.
    #[must_use]
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Orientation of a winning triple, for frontends that draw a strike
/// line across the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Horizontal line in row `0..3`.
    Row(usize),
    /// Vertical line in column `0..3`.
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl LineKind {
    /// Classify one of the 8 winning triples.
    #[must_use]
    pub fn of(line: [usize; 3]) -> Self {
        let [a, b, c] = line;
        if a / 3 == b / 3 && b / 3 == c / 3 {
            LineKind::Row(a / 3)
        } else if a % 3 == b % 3 && b % 3 == c % 3 {
            LineKind::Column(a % 3)
        } else if a == 0 {
            LineKind::MainDiagonal
        } else {
            LineKind::AntiDiagonal
        }
    }
}

/// Complete tic-tac-toe game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeState {
    board: Board,
    next_mark: Mark,
    outcome: Outcome,
}

impl TicTacToeState {
    /// Fresh state: empty board, X to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_mark: Mark::X,
            outcome: Outcome::InProgress,
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that moves next. Meaningless once the game is over.
    #[must_use]
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    /// The game outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Rules engine for tic-tac-toe.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl TicTacToe {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Place the next mark at `index`.
    ///
    /// Ignored (returns `false`) if the game is over or the cell is
    /// occupied. `index` must be below [`CELLS`]; out-of-range indices
    /// are a caller bug and fail fast in debug builds.
    pub fn apply_move(&self, state: &mut TicTacToeState, index: usize) -> bool {
        debug_assert!(index < CELLS, "cell index {index} out of range");

        if index >= CELLS || state.outcome.is_over() || state.board.get(index).is_some() {
            return false;
        }

        state.board.cells[index] = Some(state.next_mark);
        state.next_mark = state.next_mark.opponent();
        state.outcome = state.board.outcome();
        true
    }

    /// Empty cells still playable, in index order.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self, state: &TicTacToeState) -> SmallVec<[usize; CELLS]> {
        if state.outcome.is_over() {
            return SmallVec::new();
        }

        (0..CELLS)
            .filter(|&i| state.board.get(i).is_none())
            .collect()
    }

    /// Fresh initial state.
    #[must_use]
    pub fn reset(&self) -> TicTacToeState {
        TicTacToeState::new()
    }
}

impl Engine for TicTacToe {
    type State = TicTacToeState;
    type Event = usize;

    fn apply(&self, state: &mut TicTacToeState, event: usize) -> bool {
        self.apply_move(state, event)
    }

    fn is_terminal(&self, state: &TicTacToeState) -> bool {
        state.outcome.is_over()
    }
}
