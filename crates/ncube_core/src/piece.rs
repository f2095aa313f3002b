use std::fmt;

use cgmath::{Matrix3, SquareMatrix, Vector3};
use smallvec::SmallVec;

use crate::Rgb;

/// Index of a piece in a cube.
///
/// Piece IDs are assigned once at construction and never change.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl PieceId {
    /// Returns the ID as an index into a list of pieces.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Colored face of a piece.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Facelet {
    /// Sticker color.
    pub color: Rgb,
    /// Outward unit normal of the sticker, in the piece's home frame.
    pub normal: Vector3<f32>,
}

/// Kind of piece, along with its colors and orientation.
///
/// Facelet order is significant: it is fixed at construction and used to
/// identify pieces.
#[derive(Debug, Clone, PartialEq)]
pub enum PieceKind {
    /// Piece with one facelet. Centers have no orientation.
    Center([Facelet; 1]),
    /// Piece with two facelets.
    Edge {
        /// Facelets in construction order.
        facelets: [Facelet; 2],
        /// Pair of flip flags. Bit 1 is set when the edge lies along the Y
        /// axis; bit 0 is toggled by slice turns.
        orient: u8,
    },
    /// Piece with three facelets.
    Corner {
        /// Facelets in construction order.
        facelets: [Facelet; 3],
        /// Twist around the body diagonal relative to the U/D axis, in `0..3`.
        orient: u8,
    },
}

/// Physical piece of the cube.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    kind: PieceKind,
    initial_orient: Option<u8>,

    /// Position of the piece's center when the cube is solved.
    home: Vector3<f32>,
    /// Rotation that has been rendered or animated.
    pose: Matrix3<f32>,
    /// Rotation from turns that have not been rendered yet.
    pending: Matrix3<f32>,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, home: Vector3<f32>) -> Self {
        let initial_orient = orient_of(&kind);
        Self {
            kind,
            initial_orient,
            home,
            pose: Matrix3::identity(),
            pending: Matrix3::identity(),
        }
    }

    /// Returns the kind of piece, along with its colors and orientation.
    pub fn kind(&self) -> &PieceKind {
        &self.kind
    }

    /// Returns whether the piece is a center.
    pub fn is_center(&self) -> bool {
        matches!(self.kind, PieceKind::Center(_))
    }
    /// Returns whether the piece is an edge.
    pub fn is_edge(&self) -> bool {
        matches!(self.kind, PieceKind::Edge { .. })
    }
    /// Returns whether the piece is a corner.
    pub fn is_corner(&self) -> bool {
        matches!(self.kind, PieceKind::Corner { .. })
    }

    /// Returns the facelets of the piece in construction order.
    pub fn facelets(&self) -> &[Facelet] {
        match &self.kind {
            PieceKind::Center(facelets) => &facelets[..],
            PieceKind::Edge { facelets, .. } => &facelets[..],
            PieceKind::Corner { facelets, .. } => &facelets[..],
        }
    }
    /// Returns the colors of the piece in construction order.
    pub fn colors(&self) -> SmallVec<[Rgb; 3]> {
        self.facelets().iter().map(|f| f.color).collect()
    }
    /// Returns the `i`th color of the piece, if it has one.
    pub fn color(&self, i: usize) -> Option<Rgb> {
        self.facelets().get(i).map(|f| f.color)
    }

    /// Returns the orientation code, or `None` for centers.
    pub fn orient(&self) -> Option<u8> {
        orient_of(&self.kind)
    }
    /// Returns the orientation code at construction.
    pub fn initial_orient(&self) -> Option<u8> {
        self.initial_orient
    }
    /// Returns whether the orientation code matches the one at construction.
    pub fn is_oriented(&self) -> bool {
        self.orient() == self.initial_orient
    }

    /// Adds `delta` to the twist of a corner. Does nothing for other pieces.
    pub(crate) fn twist_corner(&mut self, delta: u8) {
        if let PieceKind::Corner { orient, .. } = &mut self.kind {
            *orient = (*orient + delta) % 3;
        }
    }
    /// Remaps the flip code of an edge. Does nothing for other pieces.
    pub(crate) fn flip_edge(&mut self, f: impl FnOnce(u8) -> u8) {
        if let PieceKind::Edge { orient, .. } = &mut self.kind {
            *orient = f(*orient);
        }
    }

    /// Returns the position of the piece's center when the cube is solved.
    pub fn home(&self) -> Vector3<f32> {
        self.home
    }
    /// Returns the rendered rotation of the piece.
    pub fn pose(&self) -> Matrix3<f32> {
        self.pose
    }
    /// Returns the rotation that has not been applied to the pose yet.
    pub fn pending(&self) -> Matrix3<f32> {
        self.pending
    }
    /// Returns the rendered position of the piece's center.
    pub fn position(&self) -> Vector3<f32> {
        self.pose * self.home
    }

    /// Rotates the rendered pose of the piece, after any accumulated
    /// rotation.
    pub(crate) fn rotate(&mut self, m: Matrix3<f32>) {
        self.flush_pending();
        self.pose = m * self.pose;
    }
    /// Accumulates a rotation without rendering it.
    pub(crate) fn defer_rotation(&mut self, m: Matrix3<f32>) {
        self.pending = m * self.pending;
    }
    /// Applies the accumulated rotation to the rendered pose.
    pub(crate) fn flush_pending(&mut self) {
        self.pose = self.pending * self.pose;
        self.pending = Matrix3::identity();
    }
}

fn orient_of(kind: &PieceKind) -> Option<u8> {
    match kind {
        PieceKind::Center(_) => None,
        PieceKind::Edge { orient, .. } | PieceKind::Corner { orient, .. } => Some(*orient),
    }
}
