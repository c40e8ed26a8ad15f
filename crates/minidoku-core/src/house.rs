//! Rows, columns, and boxes.

use crate::Position;

/// A Sudoku house (row, column, or 3x3 box).
///
/// A house is any of the 27 groups of 9 cells subject to the uniqueness
/// constraint. [`House::ALL`] lists them in row, column, box order, which is
/// the order the hidden-single rule scans them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3x3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns all positions contained in this house, in house-cell order.
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        match self {
            House::Row { y } => Position::ROWS[usize::from(y)],
            House::Column { x } => Position::COLUMNS[usize::from(x)],
            House::Box { index } => Position::BOXES[usize::from(index)],
        }
    }

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => Position::from_box(index, i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_houses() {
        assert_eq!(House::ALL.len(), 27);
        assert_eq!(House::ALL[0], House::Row { y: 0 });
        assert_eq!(House::ALL[9], House::Column { x: 0 });
        assert_eq!(House::ALL[26], House::Box { index: 8 });
    }

    #[test]
    fn test_positions_match_tables() {
        assert_eq!(House::Row { y: 2 }.positions(), Position::ROWS[2]);
        assert_eq!(House::Column { x: 7 }.positions(), Position::COLUMNS[7]);
        assert_eq!(House::Box { index: 4 }.positions(), Position::BOXES[4]);
    }

    #[test]
    fn test_position_from_cell_index() {
        for house in House::ALL {
            for (i, pos) in (0..).zip(house.positions()) {
                assert_eq!(house.position_from_cell_index(i), pos);
            }
        }
    }

    #[test]
    fn test_every_cell_in_three_houses() {
        for pos in Position::ALL {
            let containing = House::ALL
                .iter()
                .filter(|house| house.positions().contains(&pos))
                .count();
            assert_eq!(containing, 3);
        }
    }
}
