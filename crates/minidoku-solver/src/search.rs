//! Depth-first backtracking search over cells propagation left open.

use minidoku_core::{CandidateGrid, Digit, Position};
use tinyvec::ArrayVec;

/// Fills every remaining open cell by depth-first search.
///
/// Open cells are tried in row-major order and digits in ascending order,
/// so the first solution found under this fixed ordering is deterministic.
/// A digit is tried only if it both survives the candidate bitset computed
/// during propagation *and* passes a live legality check against the value
/// grid; the latter is what keeps trials sound, since trial placements do
/// not maintain candidate state.
///
/// On success the trial values are left in place and `true` is returned; on
/// exhaustion every trial is unwound and the grid is unchanged.
pub(crate) fn fill_remaining(grid: &mut CandidateGrid) -> bool {
    let open: ArrayVec<[Position; 81]> = Position::ALL
        .iter()
        .copied()
        .filter(|&pos| grid.value(pos).is_none())
        .collect();
    log::debug!("searching over {} open cells", open.len());
    fill_from(grid, &open, 0)
}

/// Recursion depth is bounded by the number of open cells (at most 81).
fn fill_from(grid: &mut CandidateGrid, open: &[Position], slot: usize) -> bool {
    let Some(&pos) = open.get(slot) else {
        return true;
    };
    for digit in Digit::ALL {
        if !grid.is_candidate(pos, digit) || !grid.values().is_legal(pos, digit) {
            continue;
        }
        grid.set_trial(pos, digit);
        if fill_from(grid, open, slot + 1) {
            return true;
        }
        grid.clear_trial(pos);
    }
    false
}

#[cfg(test)]
mod tests {
    use minidoku_core::{DigitGrid, House};

    use super::*;

    fn seeded(input: &str) -> CandidateGrid {
        let values: DigitGrid = input.parse().unwrap();
        let mut grid = CandidateGrid::new();
        for pos in Position::ALL {
            if let Some(digit) = values[pos] {
                grid.assign(pos, digit);
            }
        }
        grid
    }

    fn assert_valid_completion(grid: &DigitGrid) {
        for house in House::ALL {
            let mut seen = minidoku_core::DigitSet::EMPTY;
            for pos in house.positions() {
                let digit = grid[pos].expect("completed grid must fill every cell");
                assert!(!seen.contains(digit), "duplicate {digit} in {house:?}");
                seen.insert(digit);
            }
        }
    }

    #[test]
    fn test_search_fills_blank_grid() {
        let mut grid = CandidateGrid::new();
        assert!(fill_remaining(&mut grid));
        assert_valid_completion(grid.values());
    }

    #[test]
    fn test_search_is_deterministic() {
        let mut a = CandidateGrid::new();
        let mut b = CandidateGrid::new();
        assert!(fill_remaining(&mut a));
        assert!(fill_remaining(&mut b));
        assert_eq!(a.values(), b.values());

        // Fixed ordering: the first row of the blank-grid solution is 1-9
        for (x, digit) in (0..9).zip(Digit::ALL) {
            assert_eq!(a.value(Position::new(x, 0)), Some(digit));
        }
    }

    #[test]
    fn test_search_reports_dead_end_and_unwinds() {
        // Row 0 holds 1-8 with its last cell blank, and 9 is pinned into
        // that cell's column elsewhere, so (8, 0) has no legal digit.
        let mut grid = seeded(
            "123456780\
             000000009\
             000000000000000000000000000000000000000000000000000000000000000",
        );
        let before = grid.clone();
        assert!(!fill_remaining(&mut grid));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_search_respects_clues() {
        let input =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let mut grid = seeded(input);
        assert!(fill_remaining(&mut grid));
        assert_valid_completion(grid.values());

        let clues: DigitGrid = input.parse().unwrap();
        for pos in Position::ALL {
            if let Some(digit) = clues[pos] {
                assert_eq!(grid.value(pos), Some(digit));
            }
        }
    }
}
