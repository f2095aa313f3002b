use std::fmt;

use ncube_notation::Axis;

use crate::PieceId;

/// Integer coordinates of a slot in the grid.
///
/// `x` increases from left to right, `y` from bottom to top, and `z` from
/// front to back.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pos {
    /// Left-right coordinate.
    pub x: usize,
    /// Down-up coordinate.
    pub y: usize,
    /// Front-back coordinate.
    pub z: usize,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Pos {
    /// Constructs a position.
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Returns the coordinate along an axis.
    pub fn get(self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Direction in which to rotate a slice, in terms of its 2D view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) enum SliceDirection {
    /// `new[a][b] = old[b][N-a]`
    Forward,
    /// `new[a][b] = old[N-b][a]`
    Backward,
}

/// Cubic lattice of slots, each holding at most one piece.
///
/// Slots are stored in a single flat list; slices are index views into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    layers: usize,
    slots: Vec<Option<PieceId>>,
}

impl Grid {
    /// Constructs an empty grid.
    pub fn new(layers: usize) -> Self {
        Self {
            layers,
            slots: vec![None; layers * layers * layers],
        }
    }

    /// Returns the number of layers along each axis.
    pub fn layers(&self) -> usize {
        self.layers
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.z * self.layers + pos.y) * self.layers + pos.x
    }

    /// Returns the piece in a slot, or `None` if the slot is empty or out of
    /// range.
    pub fn get(&self, pos: Pos) -> Option<PieceId> {
        let n = self.layers;
        if pos.x >= n || pos.y >= n || pos.z >= n {
            return None;
        }
        self.slots[self.index(pos)]
    }

    pub(crate) fn set(&mut self, pos: Pos, piece: Option<PieceId>) {
        let i = self.index(pos);
        self.slots[i] = piece;
    }

    /// Returns whether a slot touches an outer face.
    pub fn is_exterior(&self, pos: Pos) -> bool {
        let last = self.layers - 1;
        [pos.x, pos.y, pos.z].iter().any(|&c| c == 0 || c == last)
    }

    /// Iterates over every slot in storage order: by `z`, then `y`, then `x`.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (Pos, Option<PieceId>)> {
        all_positions(self.layers).map(|pos| (pos, self.get(pos)))
    }

    /// Iterates over every piece in the grid, in storage order.
    pub fn pieces(&self) -> impl '_ + Iterator<Item = (Pos, PieceId)> {
        self.iter().filter_map(|(pos, piece)| Some((pos, piece?)))
    }

    /// Iterates over every piece in a slice perpendicular to `axis`.
    pub fn slice_pieces(&self, axis: Axis, slice: usize) -> impl '_ + Iterator<Item = (Pos, PieceId)> {
        let n = self.layers;
        (0..n)
            .flat_map(move |a| (0..n).map(move |b| slice_pos(axis, slice, a, b)))
            .filter_map(|pos| Some((pos, self.get(pos)?)))
    }

    /// Rotates a slice by a quarter turn in place.
    ///
    /// The slice is viewed as a 2D grid `P[a][b]` (see [`slice_pos()`]) and
    /// rotated one concentric ring at a time.
    pub(crate) fn rotate_slice(&mut self, axis: Axis, slice: usize, direction: SliceDirection) {
        let n = self.layers;
        let last = n - 1;
        let src = |(a, b): (usize, usize)| match direction {
            SliceDirection::Forward => (b, last - a),
            SliceDirection::Backward => (last - b, a),
        };
        let pos = |(a, b): (usize, usize)| slice_pos(axis, slice, a, b);

        for j in 0..n / 2 {
            for i in j..last - j {
                let p0 = (j, i);
                let p1 = src(p0);
                let p2 = src(p1);
                let p3 = src(p2);
                let tmp = self.get(pos(p0));
                self.set(pos(p0), self.get(pos(p1)));
                self.set(pos(p1), self.get(pos(p2)));
                self.set(pos(p2), self.get(pos(p3)));
                self.set(pos(p3), tmp);
            }
        }
    }
}

/// Iterates over every position in a grid, by `z`, then `y`, then `x`.
pub fn all_positions(layers: usize) -> impl Iterator<Item = Pos> {
    (0..layers).flat_map(move |z| {
        (0..layers).flat_map(move |y| (0..layers).map(move |x| Pos::new(x, y, z)))
    })
}

/// Returns the position of `P[a][b]` in the 2D view of a slice.
///
/// | Axis | `a` | `b` |
/// |------|-----|-----|
/// | X    | `z` | `y` |
/// | Y    | `z` | `x` |
/// | Z    | `y` | `x` |
pub fn slice_pos(axis: Axis, slice: usize, a: usize, b: usize) -> Pos {
    match axis {
        Axis::X => Pos::new(slice, b, a),
        Axis::Y => Pos::new(b, slice, a),
        Axis::Z => Pos::new(b, a, slice),
    }
}
