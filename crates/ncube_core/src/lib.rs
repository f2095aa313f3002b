//! Kinematics engine for NxNxN twisty cubes.
//!
//! A [`Cube`] owns a fixed set of [`Piece`]s and a [`Grid`] of slots holding
//! them. Turns permute pieces between slots and update their orientation
//! codes; pieces are never created or destroyed after construction. Every
//! recorded move goes into a [`History`] that supports undo and redo, and the
//! whole cube can be saved to and loaded from a single line of text.
//!
//! Visual playback is optional: attach a [`Renderer`] and each animated turn
//! is played on a dedicated worker thread, in order, from an owned snapshot.

pub mod animation;
mod colors;
mod cube;
mod grid;
mod history;
mod params;
mod piece;
mod rgb;
mod scramble;
mod state;
pub mod turn;

#[cfg(test)]
mod tests;

pub use animation::{AnimationScheduler, Frame, PieceView, Renderer, TurnAnimation};
pub use colors::ColorScheme;
pub use cube::{Cube, face_normal, slot_center};
pub use grid::{Grid, Pos, all_positions, slice_pos};
pub use history::History;
pub use ncube_notation::{self as notation, Axis, Face, Move};
pub use params::{CubeParams, FALLBACK_LAYERS, FALLBACK_WIDTH};
pub use piece::{Facelet, Piece, PieceId, PieceKind};
pub use rgb::{Rgb, RgbParseError};
pub use scramble::{SCRAMBLE_MOVES_PER_LAYER, ScrambleParams};
pub use state::{SavedState, StateError};
pub use turn::QuarterTurn;

/// Number of animation frames per quarter turn.
pub const TURN_STEPS: u32 = 3;
