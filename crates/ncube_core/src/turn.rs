//! Permutation and orientation of pieces under a single quarter turn.

use cgmath::{Deg, Matrix3};
use ncube_notation::{Axis, Face, Move};
use smallvec::{SmallVec, smallvec};

use crate::grid::SliceDirection;
use crate::{Grid, Piece, PieceId, Pos};

/// Clockwise quarter turn of one slice, viewed from outside `face`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct QuarterTurn {
    /// Face from which the turn is viewed.
    pub face: Face,
    /// Index of the slice along the face's axis, counted from the low face
    /// (`F`, `L`, or `D`).
    pub slice: usize,
}

impl QuarterTurn {
    /// Returns the clockwise quarter turn of the slice `depth` layers in from
    /// `face`.
    pub fn new(face: Face, depth: usize, layers: usize) -> Self {
        let slice = if face.is_low() {
            depth
        } else {
            layers - 1 - depth
        };
        Self { face, slice }
    }

    /// Returns the axis of the turn.
    pub fn axis(self) -> Axis {
        self.face.axis()
    }

    pub(crate) fn direction(self) -> SliceDirection {
        match self.face {
            Face::F | Face::L | Face::U => SliceDirection::Forward,
            Face::B | Face::R | Face::D => SliceDirection::Backward,
        }
    }

    /// Returns the rotation angle around the positive axis, in degrees.
    ///
    /// Grid coordinates are left-handed when viewed from the front, so a
    /// clockwise turn of a low face is a negative angle.
    pub fn angle(self) -> f32 {
        if self.face.is_low() { -90.0 } else { 90.0 }
    }

    /// Returns the rotation matrix for a fraction of the turn.
    pub fn rotation(self, fraction: f32) -> Matrix3<f32> {
        axis_rotation(self.axis(), self.angle() * fraction)
    }

    /// Returns the move recorded in history for this turn.
    ///
    /// The outer slices are recorded on the face they touch, and interior
    /// slices on the low face with a depth equal to the slice index. Turns
    /// viewed from the other face are recorded counterclockwise.
    pub fn canonical_move(self, layers: usize) -> Move {
        let axis = self.axis();
        let face = if self.slice == layers - 1 {
            axis.high_face()
        } else {
            axis.low_face()
        };
        let depth = if face.is_low() { self.slice } else { 0 };
        let turns = if face == self.face { 1 } else { 3 };
        Move::new(face, turns, depth)
    }
}

/// Decomposes a move into quarter turns.
///
/// Counterclockwise moves become a single clockwise turn of the same slice
/// viewed from the opposite face. Half turns become two quarter turns.
pub fn quarter_turns(m: Move, layers: usize) -> SmallVec<[QuarterTurn; 2]> {
    let m = m.clamp_depth(layers);
    match m.turns() {
        2 => {
            let q = QuarterTurn::new(m.face(), m.depth(), layers);
            smallvec![q, q]
        }
        3 => smallvec![QuarterTurn::new(
            m.face().opposite(),
            layers - 1 - m.depth(),
            layers,
        )],
        _ => smallvec![QuarterTurn::new(m.face(), m.depth(), layers)],
    }
}

/// Returns the rotation matrix around an axis.
pub fn axis_rotation(axis: Axis, degrees: f32) -> Matrix3<f32> {
    match axis {
        Axis::X => Matrix3::from_angle_x(Deg(degrees)),
        Axis::Y => Matrix3::from_angle_y(Deg(degrees)),
        Axis::Z => Matrix3::from_angle_z(Deg(degrees)),
    }
}

/// Applies the logical effect of a quarter turn: orientation first, then
/// position. Returns the pieces in the slice.
pub(crate) fn apply(grid: &mut Grid, pieces: &mut [Piece], turn: QuarterTurn) -> Vec<PieceId> {
    let layers = grid.layers();
    let last = layers - 1;
    let axis = turn.axis();
    let boundary = turn.slice == 0 || turn.slice == last;

    let affected: Vec<(Pos, PieceId)> = grid.slice_pieces(axis, turn.slice).collect();
    for &(pos, id) in &affected {
        let piece = &mut pieces[id.index()];
        if boundary && axis != Axis::Y {
            piece.twist_corner(corner_twist(axis, turn.slice == last, pos));
        }
        piece.flip_edge(|o| edge_flip(turn, boundary, last, o));
    }

    grid.rotate_slice(axis, turn.slice, turn.direction());

    log::trace!("turned {} slice {}", turn.face, turn.slice);
    affected.into_iter().map(|(_, id)| id).collect()
}

/// Returns the twist added to the corner in `pos` by an `R`/`L`/`F`/`B` turn
/// of an outer slice.
///
/// The twist depends only on the slice, not the turn direction. Two
/// diagonally opposite corners get +1 and the other two get +2.
fn corner_twist(axis: Axis, high_slice: bool, pos: Pos) -> u8 {
    let (u, v) = match axis {
        Axis::X => (pos.z, pos.y),
        _ => (pos.x, pos.y),
    };
    let same_side = (u == 0) == (v == 0);
    let base = if same_side { 1 } else { 2 };
    if (axis == Axis::X) != high_slice {
        3 - base
    } else {
        base
    }
}

/// Returns the new flip code of an edge in the turned slice.
fn edge_flip(turn: QuarterTurn, boundary: bool, last: usize, o: u8) -> u8 {
    match turn.axis() {
        Axis::Z if boundary => o ^ 2,
        Axis::X if boundary => o ^ 3,
        Axis::X | Axis::Z => {
            if o < 2 {
                o ^ 1
            } else {
                o
            }
        }
        Axis::Y => {
            // The layer touching the turning face is left alone.
            let own_layer = if turn.face == Face::U { last } else { 0 };
            if turn.slice != own_layer && o >= 2 {
                o ^ 1
            } else {
                o
            }
        }
    }
}
