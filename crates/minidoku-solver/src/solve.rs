//! Top-level solve orchestration.

use std::fmt::{self, Display};

use minidoku_core::{CandidateGrid, DigitGrid, Position};

use crate::{SolveError, propagate, search};

/// The outcome of a solve attempt.
///
/// Carries the resulting grid (completed, or partially completed when the
/// puzzle has no solution) and the solved flag. The `Display` impl renders
/// the flat 81-character digit string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    grid: DigitGrid,
    solved: bool,
}

impl Solution {
    /// Returns `true` if every cell of the resulting grid is filled.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Returns the resulting grid.
    #[must_use]
    pub fn grid(&self) -> &DigitGrid {
        &self.grid
    }

    /// Consumes the solution and returns the grid.
    #[must_use]
    pub fn into_grid(self) -> DigitGrid {
        self.grid
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.grid, f)
    }
}

/// Solves a puzzle given as a flat 81-character digit string.
///
/// The string is row-major with `0` denoting a blank cell. Validation
/// happens before any solving: a malformed string is rejected with
/// [`SolveError::Format`], and a clue colliding with an already-placed peer
/// with [`SolveError::Conflict`].
///
/// An unsolvable but well-formed puzzle is not an error; it yields a
/// [`Solution`] with the solved flag unset and the grid filled as far as
/// propagation got.
///
/// # Errors
///
/// Returns [`SolveError`] if the input is malformed or conflicting.
///
/// # Examples
///
/// ```
/// let solution = minidoku_solver::solve(
///     "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
/// )?;
/// assert!(solution.is_solved());
/// assert_eq!(solution.to_string().len(), 81);
/// # Ok::<(), minidoku_solver::SolveError>(())
/// ```
pub fn solve(input: &str) -> Result<Solution, SolveError> {
    let grid: DigitGrid = input.parse()?;
    solve_grid(&grid)
}

/// Solves a puzzle given as a [`DigitGrid`].
///
/// Runs naked-single elimination to a fixed point, alternates it with
/// hidden-single elimination until neither makes progress, then resolves any
/// remaining cells by backtracking search. The solved flag is derived from a
/// final full-grid scan, so it is accurate whether or not search ran.
///
/// # Errors
///
/// Returns [`SolveError::Conflict`] if two peers in the input share a digit.
pub fn solve_grid(grid: &DigitGrid) -> Result<Solution, SolveError> {
    let mut state = seed_candidates(grid)?;

    propagate::naked_singles(&mut state);
    while propagate::hidden_singles(&mut state) {
        propagate::naked_singles(&mut state);
    }

    let open = Position::ALL
        .iter()
        .filter(|&&pos| state.value(pos).is_none())
        .count();
    log::debug!("propagation reached a fixed point with {open} open cells");
    if open > 0 {
        search::fill_remaining(&mut state);
    }

    let grid = state.into_values();
    let solved = grid.is_complete();
    log::debug!("solve finished, solved = {solved}");
    Ok(Solution { grid, solved })
}

/// Builds the candidate state from the clues, scanning row-major.
///
/// Each clue must still be a candidate at its cell given the clues assigned
/// before it; the first one that is not names the conflict.
fn seed_candidates(grid: &DigitGrid) -> Result<CandidateGrid, SolveError> {
    let mut state = CandidateGrid::new();
    for pos in Position::ALL {
        if let Some(digit) = grid[pos] {
            if !state.is_candidate(pos, digit) {
                return Err(SolveError::Conflict { pos, digit });
            }
            state.assign(pos, digit);
        }
    }
    Ok(state)
}
