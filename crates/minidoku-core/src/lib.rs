//! Core data structures for the minidoku solver.
//!
//! This crate provides the domain vocabulary shared by everything that works
//! with 9x9 Sudoku grids:
//!
//! - [`Digit`]: type-safe representation of the digits 1-9
//! - [`Position`]: a board coordinate with row-major indexing
//! - [`House`]: a row, column, or 3x3 box (any of the 27 uniqueness groups)
//! - [`DigitSet`]: a 9-bit set of candidate digits for a single cell
//! - [`DigitGrid`]: cell values plus the flat 81-character string codec
//! - [`CandidateGrid`]: cell values paired with per-cell candidate sets,
//!   kept consistent by the [`CandidateGrid::assign`] primitive
//!
//! # Examples
//!
//! ```
//! use minidoku_core::{CandidateGrid, Digit, Position};
//!
//! let mut grid = CandidateGrid::new();
//! grid.assign(Position::new(4, 4), Digit::D5);
//!
//! // 5 is no longer a candidate anywhere in row 4, column 4, or the center box
//! assert!(!grid.is_candidate(Position::new(4, 0), Digit::D5));
//! assert!(!grid.is_candidate(Position::new(0, 4), Digit::D5));
//! assert!(!grid.is_candidate(Position::new(3, 3), Digit::D5));
//! ```

pub use self::{
    candidate_grid::CandidateGrid,
    digit::Digit,
    digit_grid::{DigitGrid, ParseGridError},
    digit_set::DigitSet,
    house::House,
    position::Position,
};

mod candidate_grid;
mod digit;
mod digit_grid;
mod digit_set;
mod house;
mod position;
