//! Board position types.

/// A cell coordinate on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions map to row-major indices 0-80 via [`index`].
///
/// [`index`]: Position::index
///
/// # Examples
///
/// ```
/// use minidoku_core::Position;
///
/// let pos = Position::new(4, 4);
/// assert_eq!(pos.index(), 40);
/// assert_eq!(pos.box_index(), 4);
/// assert_eq!(Position::from_index(40), pos);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({x}, {y})")]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Positions of each row, indexed by row then column.
    pub const ROWS: [[Self; 9]; 9] = {
        let mut rows = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut y = 0;
        #[expect(clippy::cast_possible_truncation)]
        while y < 9 {
            let mut x = 0;
            while x < 9 {
                rows[y][x] = Self {
                    x: x as u8,
                    y: y as u8,
                };
                x += 1;
            }
            y += 1;
        }
        rows
    };

    /// Positions of each column, indexed by column then row.
    pub const COLUMNS: [[Self; 9]; 9] = {
        let mut columns = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut x = 0;
        #[expect(clippy::cast_possible_truncation)]
        while x < 9 {
            let mut y = 0;
            while y < 9 {
                columns[x][y] = Self {
                    x: x as u8,
                    y: y as u8,
                };
                y += 1;
            }
            x += 1;
        }
        columns
    };

    /// Positions of each 3x3 box, indexed by box then box-cell.
    ///
    /// Boxes are numbered 0-8 left to right, top to bottom, and cells within
    /// a box follow the same order.
    pub const BOXES: [[Self; 9]; 9] = {
        let mut boxes = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut b = 0;
        #[expect(clippy::cast_possible_truncation)]
        while b < 9 {
            let mut i = 0;
            while i < 9 {
                boxes[b][i] = Self::from_box(b as u8, i as u8);
                i += 1;
            }
            b += 1;
        }
        boxes
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is 9 or greater.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major index of this position (0-80).
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.y) * 9 + usize::from(self.x)
    }

    /// Creates a position from a row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    /// Returns the index of the 3x3 box containing this position (0-8).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.y / 3 * 3 + self.x / 3
    }

    /// Returns the cell index of this position within its box (0-8).
    #[must_use]
    pub const fn box_cell_index(self) -> u8 {
        self.y % 3 * 3 + self.x % 3
    }

    /// Creates a position from a box index and a cell index within that box.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell` is 9 or greater.
    #[must_use]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9 && cell < 9);
        Self {
            x: box_index % 3 * 3 + cell % 3,
            y: box_index / 3 * 3 + cell / 3,
        }
    }

    /// Returns `true` if `other` is a peer of this position: a different cell
    /// sharing the same row, column, or box.
    #[must_use]
    pub const fn sees(self, other: Self) -> bool {
        !(self.x == other.x && self.y == other.y)
            && (self.x == other.x
                || self.y == other.y
                || self.box_index() == other.box_index())
    }
}
