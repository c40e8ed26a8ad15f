use minidoku_core::{Digit, ParseGridError, Position};

/// Errors reported before solving begins.
///
/// Both kinds are terminal for the attempted solve; no partial state is
/// observable afterwards. An unsolvable but well-formed puzzle is not an
/// error (see [`Solution::is_solved`](crate::Solution::is_solved)).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolveError {
    /// The input string is not a well-formed 81-digit grid.
    #[display("malformed puzzle: {_0}")]
    Format(ParseGridError),
    /// A clue collides with an already-placed peer in the same row, column,
    /// or box.
    #[display("conflicting clue: digit {digit} at {pos} collides with an already-placed peer")]
    #[from(ignore)]
    Conflict {
        /// Cell holding the conflicting clue.
        pos: Position,
        /// The digit that is not placeable there.
        digit: Digit,
    },
}
