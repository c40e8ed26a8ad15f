//! Solver engine for 9x9 Sudoku puzzles.
//!
//! The engine consumes a flat 81-character digit string (`0` marking blank
//! cells) and produces a completed grid plus a solved flag. Internally it
//! runs three cooperating stages in fixed order:
//!
//! 1. Deterministic propagation: [naked-single] and [hidden-single]
//!    elimination, alternated to a fixed point.
//! 2. Depth-first backtracking search over any cells propagation could not
//!    resolve, scanning cells in row-major order and digits in ascending
//!    order, so the first solution found is deterministic.
//! 3. A final full-grid scan deriving the solved flag.
//!
//! [naked-single]: propagate::naked_singles
//! [hidden-single]: propagate::hidden_singles
//!
//! # Examples
//!
//! ```
//! let solution = minidoku_solver::solve(
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
//! )?;
//! assert!(solution.is_solved());
//! # Ok::<(), minidoku_solver::SolveError>(())
//! ```
//!
//! Malformed or conflicting input is rejected before solving begins; a
//! well-formed puzzle with no completion is *not* an error and simply comes
//! back with [`Solution::is_solved`] returning `false`.

pub use self::{
    error::SolveError,
    solve::{Solution, solve, solve_grid},
};

mod error;
pub mod propagate;
mod search;
mod solve;
