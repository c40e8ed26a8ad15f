//! The 9x9 grid of cell values and its flat-string codec.

use std::{
    fmt::{self, Display, Write as _},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Digit, Position};

/// Error parsing a grid from its flat 81-character string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The string is not exactly 81 characters long.
    #[display("expected exactly 81 characters, got {len}")]
    InvalidLength {
        /// Length of the rejected input, in bytes.
        len: usize,
    },
    /// The string contains a character other than the ASCII digits 0-9.
    #[display("invalid character {ch:?} at index {index}, expected a digit 0-9")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
        /// Byte index of the rejected character.
        index: usize,
    },
}

/// A 9x9 grid of cell values.
///
/// Each cell holds either a [`Digit`] or `None` for a blank. The grid parses
/// from and renders to the flat row-major 81-character digit string, with `0`
/// denoting a blank cell.
///
/// # Examples
///
/// ```
/// use minidoku_core::{Digit, DigitGrid, Position};
///
/// let input = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
/// let grid: DigitGrid = input.parse()?;
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(2, 0)], None);
/// assert_eq!(grid.to_string(), input);
/// # Ok::<(), minidoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates a grid with every cell blank.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if placing `digit` at `pos` would not collide with a
    /// digit already placed in the same row, column, or box.
    ///
    /// The cell at `pos` itself is ignored, so a digit is always legal at a
    /// cell that already holds it.
    #[must_use]
    pub fn is_legal(&self, pos: Position, digit: Digit) -> bool {
        for row in [
            Position::ROWS[usize::from(pos.y())],
            Position::COLUMNS[usize::from(pos.x())],
            Position::BOXES[usize::from(pos.box_index())],
        ] {
            for peer in row {
                if peer != pos && self[peer] == Some(digit) {
                    return false;
                }
            }
        }
        true
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Option<Digit> {
        &mut self.cells[pos.index()]
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        if s.len() != 81 {
            return Err(ParseGridError::InvalidLength { len: s.len() });
        }
        let mut grid = Self::new();
        for (index, ch) in s.char_indices() {
            match ch {
                '0' => {}
                _ => match Digit::from_char(ch) {
                    Some(digit) => grid.cells[index] = Some(digit),
                    None => return Err(ParseGridError::InvalidCharacter { ch, index }),
                },
            }
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    /// Renders the flat 81-character digit string, or a spaced 9-line board
    /// with the alternate (`{:#}`) flag.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            for row in Position::ROWS {
                for pos in row {
                    let ch = self[pos].map_or('0', Digit::to_char);
                    f.write_char(ch)?;
                    f.write_char(' ')?;
                }
                f.write_char('\n')?;
            }
        } else {
            for pos in Position::ALL {
                f.write_char(self[pos].map_or('0', Digit::to_char))?;
            }
        }
        Ok(())
    }
}
