//! Per-cell candidate bookkeeping for solving.

use crate::{Digit, DigitGrid, DigitSet, Position};

/// Cell values paired with per-cell candidate sets.
///
/// For every cell the grid tracks which digits are still legally placeable
/// there. The two halves are kept consistent by [`assign`], the only
/// operation that mutates candidate state:
///
/// - an unassigned cell's set holds exactly the digits that do not collide
///   with any assigned peer in its row, column, or box;
/// - an assigned cell's set is the singleton of its own value, used as a
///   "this cell is done" marker rather than as remaining options.
///
/// Trial placements made through [`set_trial`] deliberately bypass candidate
/// bookkeeping: they write the value half only, leaving candidate state
/// untouched. Search uses this for cheap, reversible placements, relying on
/// [`DigitGrid::is_legal`] for live validation instead.
///
/// A grid is created fresh for each solve and never shared.
///
/// [`assign`]: CandidateGrid::assign
/// [`set_trial`]: CandidateGrid::set_trial
///
/// # Examples
///
/// ```
/// use minidoku_core::{CandidateGrid, Digit, Position};
///
/// let mut grid = CandidateGrid::new();
/// assert_eq!(grid.candidates_at(Position::new(0, 0)).len(), 9);
///
/// grid.assign(Position::new(0, 0), Digit::D5);
///
/// // The assigned cell keeps only its own digit
/// assert_eq!(
///     grid.candidates_at(Position::new(0, 0)).as_single(),
///     Some(Digit::D5)
/// );
/// // Peers lose the digit as a candidate
/// assert!(!grid.is_candidate(Position::new(8, 0), Digit::D5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGrid {
    values: DigitGrid,
    candidates: [DigitSet; 81],
}

impl Default for CandidateGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateGrid {
    /// Creates an empty grid with all candidates available everywhere.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: DigitGrid::new(),
            candidates: [DigitSet::FULL; 81],
        }
    }

    /// Returns the value of the cell at `pos`, if assigned.
    #[must_use]
    pub fn value(&self, pos: Position) -> Option<Digit> {
        self.values[pos]
    }

    /// Returns the value grid.
    #[must_use]
    pub fn values(&self) -> &DigitGrid {
        &self.values
    }

    /// Consumes the grid and returns the value half.
    #[must_use]
    pub fn into_values(self) -> DigitGrid {
        self.values
    }

    /// Returns the candidate set of the cell at `pos`.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        self.candidates[pos.index()]
    }

    /// Returns `true` if `digit` is still a candidate at `pos`.
    #[must_use]
    pub fn is_candidate(&self, pos: Position, digit: Digit) -> bool {
        self.candidates[pos.index()].contains(digit)
    }

    /// Assigns `digit` to the cell at `pos`, updating candidate state.
    ///
    /// As one atomic unit this sets the cell's value, removes the digit from
    /// the candidate sets of every other cell in the same row, column, and
    /// box, and reduces the cell's own candidate set to the singleton of the
    /// assigned digit.
    ///
    /// Callers must ensure the digit is currently a candidate at `pos`; this
    /// is the contract under which candidate state stays consistent with the
    /// values.
    pub fn assign(&mut self, pos: Position, digit: Digit) {
        debug_assert!(self.is_candidate(pos, digit));

        self.values[pos] = Some(digit);
        for house in [
            Position::ROWS[usize::from(pos.y())],
            Position::COLUMNS[usize::from(pos.x())],
            Position::BOXES[usize::from(pos.box_index())],
        ] {
            for peer in house {
                self.candidates[peer.index()].remove(digit);
            }
        }
        self.candidates[pos.index()] = DigitSet::from_elem(digit);
    }

    /// Writes `digit` to the cell at `pos` without touching candidate state.
    ///
    /// This is the lightweight placement used by trial search. Candidate
    /// sets become stale relative to trial values; legality of subsequent
    /// trials must be re-checked against [`Self::values`].
    pub fn set_trial(&mut self, pos: Position, digit: Digit) {
        self.values[pos] = Some(digit);
    }

    /// Reverts a trial placement, leaving the cell unassigned again.
    pub fn clear_trial(&mut self, pos: Position) {
        self.values[pos] = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_has_all_candidates() {
        let grid = CandidateGrid::new();
        for pos in Position::ALL {
            assert_eq!(grid.value(pos), None);
            assert_eq!(grid.candidates_at(pos), DigitSet::FULL);
        }
    }

    #[test]
    fn test_assign_sets_value_and_marker() {
        let mut grid = CandidateGrid::new();
        let pos = Position::new(4, 4);
        grid.assign(pos, Digit::D5);

        assert_eq!(grid.value(pos), Some(Digit::D5));
        assert_eq!(grid.candidates_at(pos), DigitSet::from_elem(Digit::D5));
    }

    #[test]
    fn test_assign_prunes_row_column_box() {
        let mut grid = CandidateGrid::new();
        let pos = Position::new(4, 4);
        grid.assign(pos, Digit::D5);

        for x in 0..9 {
            if x != 4 {
                assert!(!grid.is_candidate(Position::new(x, 4), Digit::D5));
            }
        }
        for y in 0..9 {
            if y != 4 {
                assert!(!grid.is_candidate(Position::new(4, y), Digit::D5));
            }
        }
        for peer in Position::BOXES[4] {
            if peer != pos {
                assert!(!grid.is_candidate(peer, Digit::D5));
                // Only the placed digit was pruned
                assert_eq!(grid.candidates_at(peer).len(), 8);
            }
        }
    }

    #[test]
    fn test_assign_leaves_unrelated_cells_untouched() {
        let mut grid = CandidateGrid::new();
        grid.assign(Position::new(0, 0), Digit::D1);

        assert_eq!(grid.candidates_at(Position::new(8, 8)), DigitSet::FULL);
        assert_eq!(grid.candidates_at(Position::new(4, 5)), DigitSet::FULL);
    }

    #[test]
    fn test_successive_assignments_accumulate() {
        let mut grid = CandidateGrid::new();
        grid.assign(Position::new(0, 0), Digit::D1);
        grid.assign(Position::new(1, 0), Digit::D2);
        grid.assign(Position::new(0, 1), Digit::D3);

        let candidates = grid.candidates_at(Position::new(2, 2));
        assert!(!candidates.contains(Digit::D1));
        assert!(!candidates.contains(Digit::D2));
        assert!(!candidates.contains(Digit::D3));
        assert_eq!(candidates.len(), 6);

        // A cell in row 0 outside box 0 only loses the row digits
        let candidates = grid.candidates_at(Position::new(8, 0));
        assert!(!candidates.contains(Digit::D1));
        assert!(!candidates.contains(Digit::D2));
        assert!(candidates.contains(Digit::D3));
    }

    #[test]
    fn test_trial_placements_skip_candidate_bookkeeping() {
        let mut grid = CandidateGrid::new();
        let pos = Position::new(3, 3);
        grid.set_trial(pos, Digit::D7);

        assert_eq!(grid.value(pos), Some(Digit::D7));
        assert_eq!(grid.candidates_at(pos), DigitSet::FULL);
        assert!(grid.is_candidate(Position::new(4, 3), Digit::D7));

        grid.clear_trial(pos);
        assert_eq!(grid.value(pos), None);
    }

    #[test]
    fn test_into_values() {
        let mut grid = CandidateGrid::new();
        grid.assign(Position::new(2, 6), Digit::D9);

        let values = grid.into_values();
        assert_eq!(values[Position::new(2, 6)], Some(Digit::D9));
        assert!(!values.is_complete());
    }
}
