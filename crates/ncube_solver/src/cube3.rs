//! Beginner's layer-by-layer method for 3-layer cubes.
//!
//! The white face is solved on top, then the middle layer, then the yellow
//! face on the bottom.

use std::ops::ControlFlow;

use ncube_core::{Piece, Pos, Rgb};

use crate::solver::{Palette, Solver};

pub(crate) fn solve(s: &mut Solver<'_>) {
    orient_centers(s);
    white_cross(s);
    flip_top_edges(s);
    white_corners(s);
    twist_top_corners(s);
    middle_edges(s);
    align_bottom_edges(s);
    flip_bottom_edges(s);
    place_bottom_corners(s);
    s.twist_bottom_corners();
}

fn edge(piece: &Piece, first: Rgb, second: Rgb) -> bool {
    piece.is_edge() && piece.color(0) == Some(first) && piece.color(1) == Some(second)
}

fn corner(piece: &Piece, first: Rgb, i: usize, other: Rgb) -> bool {
    piece.is_corner() && piece.color(0) == Some(first) && piece.color(i) == Some(other)
}

fn center(s: &Solver<'_>, x: usize, y: usize, z: usize) -> Option<Rgb> {
    s.color(x, y, z, 0)
}

const fn next() -> ControlFlow<()> {
    ControlFlow::Continue(())
}

/// Turns the middle slices so that white is on top and red is in front.
fn orient_centers(s: &mut Solver<'_>) {
    let Palette { white, red, .. } = s.colors;
    let white = Some(white);
    let red = Some(red);

    if center(s, 1, 2, 1) != white {
        if center(s, 1, 1, 0) == white {
            s.run("R.1");
        } else if center(s, 1, 1, 2) == white {
            s.run("L.1");
        } else if center(s, 0, 1, 1) == white {
            s.run("F.1");
        } else if center(s, 2, 1, 1) == white {
            s.run("B.1");
        } else {
            s.run("F2.1");
        }
    }

    if center(s, 1, 1, 0) != red {
        if center(s, 2, 1, 1) == red {
            s.run("U.1");
        } else if center(s, 0, 1, 1) == red {
            s.run("D.1");
        } else {
            s.run("U2.1");
        }
    }
}

fn white_cross(s: &mut Solver<'_>) {
    s.scan(
        |c, p| edge(p, c.white, c.red),
        |s, Pos { x, y, z }| {
            s.run(match (x, y, z) {
                (0, 2, _) => "U'",
                (2, 2, _) => "U",
                (_, 2, 2) => "U2",
                (_, 2, _) => "",
                (0, 0, _) => "L2 U'",
                (2, 0, _) => "R2 U",
                (_, 0, 0) => "F2",
                (_, 0, 2) => "B2 U2",
                (_, 0, _) => "",
                (0, _, 0) => "F",
                (_, _, 0) => "F'",
                (0, _, _) => "B' U2",
                _ => "B U2",
            });
            next()
        },
    );

    s.scan(
        |c, p| edge(p, c.white, c.green),
        |s, Pos { x, y, z }| {
            s.run(match (x, y, z) {
                (2, 2, _) => "F U2 F'",
                (_, 2, 2) => "F U' F'",
                (_, 2, _) => "",
                (0, 0, _) => "L2",
                (2, 0, _) => "D2 L2",
                (_, 0, 0) => "D' L2",
                (_, 0, 2) => "D L2",
                (_, 0, _) => "",
                (0, _, 0) => "L'",
                (_, _, 0) => "U' F' U",
                (0, _, _) => "L",
                _ => "U2 R' U2",
            });
            next()
        },
    );

    s.scan(
        |c, p| edge(p, c.white, c.blue),
        |s, Pos { x, y, z }| {
            s.run(match (x, y, z) {
                (_, 2, 2) => "B' R'",
                (_, 2, _) => "",
                (0, 0, _) => "D2 R2",
                (2, 0, _) => "R2",
                (_, 0, 0) => "D R2",
                (_, 0, 2) => "D' R2",
                (_, 0, _) => "",
                (0, _, 0) => "L D2 R2 L'",
                (_, _, 0) => "R",
                (0, _, _) => "B2 R'",
                _ => "R'",
            });
            next()
        },
    );

    s.scan(
        |c, p| edge(p, c.white, c.orange),
        |s, Pos { x, y, z }| {
            s.run(match (x, y, z) {
                (0, 0, _) => "D' B2",
                (2, 0, _) => "D B2",
                (_, 0, 0) => "D2 B2",
                (_, 0, 2) => "B2",
                (0, 1, 0) => "L D' B2 L'",
                (_, 1, 0) => "R' D B2 R",
                (0, 1, _) => "B'",
                (_, 1, _) => "B",
                _ => "",
            });
            next()
        },
    );
    log::debug!("white cross placed");
}

fn flip_top_edges(s: &mut Solver<'_>) {
    let fixes = [
        ((1, 0), "F R' D' R F2"),
        ((0, 1), "L F' D' F L2"),
        ((2, 1), "R B' D' B R2"),
        ((1, 2), "B L' D' L B2"),
    ];
    for ((x, z), fix) in fixes {
        if s.orient(x, 2, z) == Some(1) {
            s.run(fix);
        }
    }
}

fn white_corners(s: &mut Solver<'_>) {
    s.scan(
        |c, p| corner(p, c.white, 2, c.red),
        |s, Pos { x, y, z }| {
            s.run(match (x, y, z) {
                (2, 2, 0) => "R' L D' R L'",
                (0, 2, 2) => "B F' D B' F",
                (_, 2, 2) => "B' L D2 B L'",
                (_, 2, _) => "",
                (0, _, 0) => "L D L'",
                (_, _, 0) => "D' L D L'",
                (0, _, _) => "D L D L'",
                _ => "D2 L D L'",
            });
            next()
        },
    );

    s.scan(
        |c, p| corner(p, c.white, 1, c.red),
        |s, Pos { x, y, z }| {
            s.run(match (x, y, z) {
                (0, 2, 2) => "B R' D2 B' R",
                (_, 2, 2) => "B' F D' B F'",
                (0, 0, 0) => "R' D R",
                (_, 0, 0) => "R' D' R",
                (0, 0, _) => "D2 R' D' R",
                (_, 0, _) => "D' R' D' R",
                _ => "",
            });
            next()
        },
    );

    s.scan(
        |c, p| corner(p, c.white, 2, c.green),
        |s, Pos { x, y, z }| {
            s.run(match (x, y, z) {
                (2, 2, 2) => "B' L' D L2 B L'",
                (0, 0, 0) => "D' B D B'",
                (_, 0, 0) => "D2 B D B'",
                (0, 0, _) => "B D B'",
                (_, 0, _) => "D B D B'",
                _ => "",
            });
            next()
        },
    );

    s.scan(
        |c, p| corner(p, c.white, 1, c.blue),
        |s, Pos { x, y, z }| {
            s.run(match (x, y, z) {
                (0, 0, 0) => "D2 R D R'",
                (_, 0, 0) => "D R D R'",
                (0, 0, _) => "D' R D R'",
                (_, 0, _) => "R D R'",
                _ => "",
            });
            next()
        },
    );
    log::debug!("white corners placed");
}

fn twist_top_corners(s: &mut Solver<'_>) {
    let fixes = [
        ((0, 0), "L D L' D' L D L'", "L D' L' D L D' L'"),
        ((2, 0), "F D F' D' F D F'", "F D' F' D F D' F'"),
        ((0, 2), "B D B' D' B D B'", "B D' B' D B D' B'"),
        ((2, 2), "R D R' D' R D R'", "R D' R' D R D' R'"),
    ];
    for ((x, z), once, twice) in fixes {
        if s.orient(x, 2, z) == Some(1) {
            s.run(once);
        }
        if s.orient(x, 2, z) == Some(2) {
            s.run(twice);
        }
    }
}

fn middle_edges(s: &mut Solver<'_>) {
    s.scan(
        |c, p| edge(p, c.green, c.red),
        |s, Pos { x, y, z }| {
            let o = s.orient(x, y, z);
            let flipped = o != Some(0);
            s.run(match (x, y, z) {
                (_, 0, 0) if !flipped => "D L D' L' D' F' D F",
                (_, 0, 0) => "D2 F' D F D L D' L'",
                (_, 0, 2) if !flipped => "D' L D' L' D' F' D F",
                (_, 0, 2) => "F' D F D L D' L'",
                (0, 0, _) if !flipped => "D2 L D' L' D' F' D F",
                (0, 0, _) => "D' F' D F D L D' L'",
                (_, 0, _) if !flipped => "L D' L' D' F' D F",
                (_, 0, _) => "D F' D F D L D' L'",
                (0, _, 0) if o == Some(3) => "L D' L' D' F' D F D' L D' L' D' F' D F",
                (2, _, 0) if o == Some(2) => "F D' F' D' R' D R D2 L D' L' D' F' D F",
                (2, _, 0) => "F D' F' D' R' D R D' F' D F D L D' L'",
                (_, _, 0) => "",
                (0, _, _) if o == Some(2) => "B D' B' D' L' D L2 D' L' D' F' D F",
                (0, _, _) => "B D' B' D' L' D L D F' D F D L D' L'",
                _ if o == Some(2) => "R D' R' D' B' D B D2 F' D F D L D' L'",
                _ => "R D' R' D' B' D B D L D' L' D' F' D F",
            });
            next()
        },
    );

    s.scan(
        |c, p| edge(p, c.blue, c.red),
        |s, Pos { x, y, z }| {
            let o = s.orient(x, y, z);
            let flipped = o != Some(0);
            s.run(match (x, y, z) {
                (_, 0, 0) if !flipped => "D' R' D R D F D' F'",
                (_, 0, 0) => "D2 F D' F' D' R' D R",
                (_, 0, 2) if !flipped => "D R' D R D F D' F'",
                (_, 0, 2) => "F D' F' D' R' D R",
                (0, 0, _) if !flipped => "R' D R D F D' F'",
                (0, 0, _) => "D' F D' F' D' R' D R",
                (_, 0, _) if !flipped => "D2 R' D R D F D' F'",
                (_, 0, _) => "D F D' F' D' R' D R",
                (2, _, 0) if o == Some(3) => "F D' F' D' R' D R D' F D' F' D' R' D R",
                (0, _, 2) if o == Some(2) => "B D' B' D' L' D L D2 R' D R D F D' F'",
                (0, _, 2) => "B D' B' D' L' D L D F D' F' D' R' D R",
                (_, _, 2) if o == Some(2) => "R D' R' D' B' D B D2 F D' F' D' R' D R",
                (_, _, 2) => "R D' R' D' B' D B D' R' D R D F D' F'",
                _ => "",
            });
            next()
        },
    );

    s.scan(
        |c, p| edge(p, c.green, c.orange),
        |s, Pos { x, y, z }| {
            let o = s.orient(x, y, z);
            let flipped = o != Some(0);
            s.run(match (x, y, z) {
                (_, 0, 0) if !flipped => "D L' D L D B D' B'",
                (_, 0, 0) => "B D' B' D' L' D L",
                (_, 0, 2) if !flipped => "D' L' D L D B D' B'",
                (_, 0, 2) => "D2 B D' B' D' L' D L",
                (0, 0, _) if !flipped => "D2 L' D L D B D' B'",
                (0, 0, _) => "D B D' B' D' L' D L",
                (_, 0, _) if !flipped => "L' D L D B D' B'",
                (_, 0, _) => "D' B D' B' D' L' D L",
                (0, _, _) if o == Some(3) => "B D' B' D' L' D L D' B D' B' D' L' D L",
                (2, _, _) if o == Some(2) => "R D' R' D' B' D B B D' B' D' L' D L",
                (2, _, _) => "R D' R' D' B' D B D L' D L D B D' B'",
                _ => "",
            });
            next()
        },
    );

    s.scan(
        |c, p| edge(p, c.blue, c.orange),
        |s, Pos { x, y, z }| {
            let o = s.orient(x, y, z);
            let flipped = o != Some(0);
            s.run(match (x, y, z) {
                (_, 0, 0) if !flipped => "D' R D' R' D' B' D B",
                (_, 0, 0) => "B' D B D R D' R'",
                (_, 0, 2) if !flipped => "D R D' R' D' B' D B",
                (_, 0, 2) => "D2 B' D B D R D' R'",
                (0, 0, _) if !flipped => "R D' R' D' B' D B",
                (0, 0, _) => "D B' D B D R D' R'",
                (_, 0, _) if !flipped => "D2 R D' R' D' B' D B",
                (_, 0, _) => "D' B' D B D R D' R'",
                _ if o == Some(3) => "R D' R' D' B' D B D' R D' R' D' B' D B",
                _ => "",
            });
            next()
        },
    );
    log::debug!("middle layer placed");
}

/// Turns `D` so that the red edge is in front, then swaps edges until green
/// is on the left and blue on the right.
fn align_bottom_edges(s: &mut Solver<'_>) {
    let Palette {
        red, green, blue, ..
    } = s.colors;
    let side = |s: &Solver<'_>, x, z| s.color(x, 0, z, 1);

    if side(s, 1, 2) == Some(red) {
        s.run("D2");
    } else if side(s, 0, 1) == Some(red) {
        s.run("D");
    } else if side(s, 2, 1) == Some(red) {
        s.run("D'");
    }

    if side(s, 1, 2) == Some(green) {
        s.run("B D2 B' D' B D' B' D'");
    } else if side(s, 2, 1) == Some(green) {
        s.run("F D2 F' D' F D' F' D2");
    }

    if side(s, 1, 2) == Some(blue) {
        s.run("R D2 R' D' R D' R' D'");
    }
}

fn flip_bottom_edges(s: &mut Solver<'_>) {
    let flipped = |s: &Solver<'_>, x, z| s.orient(x, 0, z) == Some(1);

    if flipped(s, 1, 0) {
        if flipped(s, 0, 1) {
            s.run("L R' F L' R U' L R' F2 L' R D L R' F2 L' R U L R' F' L' R D'");
        } else if flipped(s, 2, 1) {
            s.run("L R' F L' R U' L R' F2 L' R D' L R' F2 L' R U L R' F' L' R D");
        } else if flipped(s, 1, 2) {
            s.run("L R' F L' R U' L R' F2 L' R D2 L R' F2 L' R U L R' F' L' R D2");
        }
    }

    if flipped(s, 0, 1) {
        if flipped(s, 2, 1) {
            s.run("D L R' F L' R U' L R' F2 L' R D2 L R' F2 L' R U L R' F' L' R D");
        } else if flipped(s, 1, 2) {
            s.run("D L R' F L' R U' L R' F2 L' R D L R' F2 L' R U L R' F' L' R D2");
        }
    }

    if flipped(s, 1, 2) {
        s.run("D2 L R' F L' R U' L R' F2 L' R D L R' F2 L' R U L R' F' L' R D");
    }
}

/// Cycles the bottom corners into their slots.
///
/// A corner is in its slot when its second color matches the side face it
/// belongs under.
fn place_bottom_corners(s: &mut Solver<'_>) {
    let Palette {
        red,
        orange,
        green,
        blue,
        ..
    } = s.colors;
    let side = |s: &Solver<'_>, x, z| s.color(x, 0, z, 1);

    let placed = side(s, 0, 0) == Some(red)
        || side(s, 2, 0) == Some(blue)
        || side(s, 2, 2) == Some(orange)
        || side(s, 0, 2) == Some(green);
    if !placed {
        if side(s, 0, 2) == Some(red) {
            s.run("R' D L D' R D L' D'");
        } else if side(s, 2, 2) == Some(red) {
            s.run("R' D L D' R D L' D' R' D L D' R D L' D'");
        } else {
            s.run("D L D' R' D L' D' R");
        }
    }

    if side(s, 0, 0) == Some(red) {
        if side(s, 0, 2) == Some(blue) {
            s.run("R' D L D' R D L' D'");
        } else if side(s, 2, 0) == Some(green) {
            s.run("D L D' R' D L' D' R");
        }
    } else if side(s, 2, 0) == Some(blue) {
        if side(s, 0, 0) == Some(orange) {
            s.run("B' D F D' B D F' D'");
        } else if side(s, 0, 0) == Some(green) {
            s.run("D F D' B' D F' D' B");
        }
    } else if side(s, 2, 2) == Some(orange) {
        if side(s, 2, 0) == Some(green) {
            s.run("L' D R D' L D R' D'");
        } else if side(s, 0, 2) == Some(blue) {
            s.run("D R D' L' D R' D' L");
        }
    } else if side(s, 0, 2) == Some(green) {
        if side(s, 2, 2) == Some(red) {
            s.run("F' D B D' F D B' D'");
        } else if side(s, 0, 0) == Some(orange) {
            s.run("D B D' F' D B' D' F");
        }
    }
    log::debug!("bottom corners placed");
}
