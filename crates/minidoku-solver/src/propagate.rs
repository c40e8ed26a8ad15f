//! Deterministic candidate propagation rules.
//!
//! Both rules place digits through [`CandidateGrid::assign`], so every
//! placement also prunes the candidate sets of the placed cell's peers.
//! The solver alternates the two until neither makes progress; each is also
//! usable on its own for stepwise solving.

use minidoku_core::{CandidateGrid, Digit, House, Position};

/// Assigns every naked single until a full-grid pass makes no change.
///
/// A *naked single* is an unassigned cell whose candidate set holds exactly
/// one digit. Each assignment prunes peers and may expose further naked
/// singles, so the grid is rescanned until a fixed point is reached. The
/// iteration is bounded: every assignment strictly reduces the number of
/// unassigned cells, of which there are at most 81.
///
/// Returns `true` if any cell was assigned across all passes.
///
/// # Examples
///
/// ```
/// use minidoku_core::{CandidateGrid, Digit, Position};
/// use minidoku_solver::propagate;
///
/// let mut grid = CandidateGrid::new();
/// for (x, digit) in (1..9).zip(Digit::ALL) {
///     grid.assign(Position::new(x, 0), digit);
/// }
///
/// // (0, 0) has a single remaining candidate: 9
/// assert!(propagate::naked_singles(&mut grid));
/// assert_eq!(grid.value(Position::new(0, 0)), Some(Digit::D9));
/// ```
pub fn naked_singles(grid: &mut CandidateGrid) -> bool {
    let mut changed = false;
    loop {
        let mut pass_changed = false;
        for pos in Position::ALL {
            if grid.value(pos).is_some() {
                continue;
            }
            if let Some(digit) = grid.candidates_at(pos).as_single() {
                grid.assign(pos, digit);
                pass_changed = true;
            }
        }
        if !pass_changed {
            break;
        }
        changed = true;
    }
    if changed {
        log::trace!("naked singles reached a fixed point");
    }
    changed
}

/// Assigns every hidden single found in one pass over all houses.
///
/// A *hidden single* is a digit that has exactly one unassigned cell left
/// able to hold it within a house, even if that cell itself still has other
/// candidates. Houses are scanned in row, column, box order and digits in
/// ascending order; the pass is not iterated internally, the caller
/// alternates it with [`naked_singles`].
///
/// The match is tracked with an explicit `Option`, so a single whose only
/// slot is the first cell of its house is found like any other.
///
/// Returns `true` if any cell was assigned.
pub fn hidden_singles(grid: &mut CandidateGrid) -> bool {
    let mut changed = false;
    for house in House::ALL {
        for digit in Digit::ALL {
            let mut found = None;
            for pos in house.positions() {
                if grid.value(pos).is_some() || !grid.is_candidate(pos, digit) {
                    continue;
                }
                if found.is_some() {
                    // Second open slot: not a hidden single
                    found = None;
                    break;
                }
                found = Some(pos);
            }
            if let Some(pos) = found {
                grid.assign(pos, digit);
                changed = true;
            }
        }
    }
    changed
}
