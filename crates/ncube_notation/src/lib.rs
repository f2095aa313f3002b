//! Move notation for NxNxN cubes.
//!
//! A move is written `<FACE>[<suffix>][.<depth>]`:
//!
//! - `FACE` is one of `F`, `B`, `U`, `D`, `R`, `L`
//! - no suffix is a clockwise quarter turn, `'` is counterclockwise, and `2`
//!   is a half turn
//! - `depth` selects a slice counted from that face, with `0` (the default)
//!   being the outermost layer
//!
//! Example: `R U R' U' F2.1`

mod errors;
mod face;
mod moves;

pub use errors::MoveParseError;
pub use face::{Axis, Face};
pub use moves::Move;

use itertools::Itertools;

/// Parses a whitespace-separated sequence of moves.
///
/// Each token is parsed independently, so an invalid token does not prevent
/// later tokens from parsing.
pub fn parse_moves(s: &str) -> impl '_ + Iterator<Item = Result<Move, MoveParseError>> {
    s.split_whitespace().map(str::parse)
}

/// Formats a sequence of moves, separated by spaces.
pub fn format_moves(moves: impl IntoIterator<Item = Move>) -> String {
    moves.into_iter().join(" ")
}

/// Returns the inverse of a sequence of moves.
pub fn invert_moves(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|m| m.inv()).collect()
}
