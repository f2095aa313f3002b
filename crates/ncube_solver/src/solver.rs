use std::ops::ControlFlow;

use ncube_core::{ColorScheme, Cube, Move, Piece, Pos, Rgb};

/// Colors the solvers look for, named after the default color of each face.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Color of the `U` face.
    pub white: Rgb,
    /// Color of the `D` face.
    pub yellow: Rgb,
    /// Color of the `F` face.
    pub red: Rgb,
    /// Color of the `B` face.
    pub orange: Rgb,
    /// Color of the `L` face.
    pub green: Rgb,
    /// Color of the `R` face.
    pub blue: Rgb,
}

impl From<&ColorScheme> for Palette {
    fn from(scheme: &ColorScheme) -> Self {
        Self {
            white: scheme.up,
            yellow: scheme.down,
            red: scheme.front,
            orange: scheme.back,
            green: scheme.left,
            blue: scheme.right,
        }
    }
}

/// Cube being solved, along with every move applied so far.
pub(crate) struct Solver<'a> {
    cube: &'a mut Cube,
    pub(crate) colors: Palette,
    moves: Vec<Move>,
}

impl<'a> Solver<'a> {
    pub(crate) fn new(cube: &'a mut Cube) -> Self {
        let colors = Palette::from(cube.scheme());
        Self {
            cube,
            colors,
            moves: vec![],
        }
    }

    pub(crate) fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    pub(crate) fn layers(&self) -> usize {
        self.cube.layers()
    }

    pub(crate) fn is_solved(&self) -> bool {
        self.cube.is_solved()
    }

    /// Applies a sequence of moves through the public evaluator.
    pub(crate) fn run(&mut self, sequence: &str) {
        let applied = self.cube.evaluate(sequence);
        self.moves.extend(applied);
    }

    fn piece(&self, x: usize, y: usize, z: usize) -> Option<&Piece> {
        self.cube.piece_at(Pos::new(x, y, z))
    }

    /// Returns the orientation code of the piece in a slot.
    pub(crate) fn orient(&self, x: usize, y: usize, z: usize) -> Option<u8> {
        self.piece(x, y, z)?.orient()
    }

    /// Returns the `i`th color of the piece in a slot.
    pub(crate) fn color(&self, x: usize, y: usize, z: usize, i: usize) -> Option<Rgb> {
        self.piece(x, y, z)?.color(i)
    }

    /// Visits every slot holding a matching piece.
    ///
    /// Slots are read live in storage order (z, then y, then x), so `visit`
    /// may move pieces into slots that have not been scanned yet.
    /// [`ControlFlow::Break`] skips the rest of the current row.
    pub(crate) fn scan(
        &mut self,
        matches: impl Fn(&Palette, &Piece) -> bool,
        mut visit: impl FnMut(&mut Self, Pos) -> ControlFlow<()>,
    ) {
        let n = self.layers();
        for z in 0..n {
            for y in 0..n {
                for x in 0..n {
                    let pos = Pos::new(x, y, z);
                    let found = self
                        .cube
                        .piece_at(pos)
                        .is_some_and(|piece| matches(&self.colors, piece));
                    if found && visit(self, pos).is_break() {
                        break;
                    }
                }
            }
        }
    }

    /// Twists the last four corners into place by turning `D` until the cube
    /// is solved.
    ///
    /// The reference corner is at `(0, 0, 0)` and the others are compared
    /// against it in the order right, back, and diagonal.
    pub(crate) fn twist_bottom_corners(&mut self) {
        let last = self.layers() - 1;
        let right = (last, 0, 0);
        let back = (0, 0, last);
        let diagonal = (last, 0, last);
        let orient = |s: &Self, (x, y, z): (usize, usize, usize)| s.orient(x, y, z);

        for _ in 0..4 {
            if self.is_solved() {
                break;
            }

            self.run("D");

            if orient(self, (0, 0, 0)) == Some(1) {
                if orient(self, right) == Some(2) {
                    self.run("L' U L U' L' U L D' L' U' L U L' U' L D");
                } else if orient(self, back) == Some(2) {
                    self.run("L' U L U' L' U L D L' U' L U L' U' L D'");
                } else if orient(self, diagonal) == Some(2) {
                    self.run("L' U L U' L' U L D2 L' U' L U L' U' L D2");
                } else if orient(self, right) == Some(0) {
                    self.run("L' U L U' L' U L D L' U' L U L' U2 L U L' U' L D L' U L U' L' U L D2");
                } else if orient(self, back) == Some(0) {
                    self.run("L' U L U' L' U L D' L' U' L U L' U2 L U L' U' L D' L' U L U' L' U L D2");
                } else if orient(self, diagonal) == Some(0) {
                    self.run("D' L' U L U' L' U L D L' U' L U L' U2 L U L' U' L D L' U L U' L' U L D'");
                }
            }

            if orient(self, (0, 0, 0)) == Some(2) {
                if orient(self, right) == Some(1) {
                    self.run("L' U' L U L' U' L D' L' U L U' L' U L D");
                } else if orient(self, back) == Some(1) {
                    self.run("L' U' L U L' U' L D L' U L U' L' U L D'");
                } else if orient(self, diagonal) == Some(1) {
                    self.run("L' U' L U L' U' L D2 L' U L U' L' U L D2");
                } else if orient(self, right) == Some(0) {
                    self.run("L' U' L U L' U' L D L' U L U' L' U2 L U' L' U L D L' U' L U L' U' L D2");
                } else if orient(self, back) == Some(0) {
                    self.run("L' U' L U L' U' L D' L' U L U' L' U2 L U' L' U L D' L' U' L U L' U' L D2");
                } else if orient(self, diagonal) == Some(0) {
                    self.run("D' L' U' L U L' U' L D L' U L U' L' U2 L U' L' U L D L' U' L U L' U' L D'");
                }
            }
        }
    }
}

/// Returns whether a piece has exactly these colors, in order.
pub(crate) fn has_colors(piece: &Piece, colors: &[Rgb]) -> bool {
    piece.colors()[..] == *colors
}
