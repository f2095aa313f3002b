//! Corner-only method for 2-layer cubes.

use std::ops::ControlFlow;

use ncube_core::Pos;

use crate::solver::{Palette, Solver, has_colors};

/// Corner of the top layer and how to bring it home from the bottom layer.
struct TopCorner {
    colors: fn(&Palette) -> [ncube_core::Rgb; 3],
    home: (usize, usize),
    /// `D` turns to apply first, indexed by `x` then `z`.
    align: [[&'static str; 2]; 2],
    insert: &'static str,
}

const TOP_CORNERS: [TopCorner; 4] = [
    TopCorner {
        colors: |c| [c.white, c.green, c.red],
        home: (0, 0),
        align: [["", "D"], ["D'", "D2"]],
        insert: "L D L'",
    },
    TopCorner {
        colors: |c| [c.white, c.red, c.blue],
        home: (1, 0),
        align: [["D", "D2"], ["", "D'"]],
        insert: "R' D' R",
    },
    TopCorner {
        colors: |c| [c.white, c.orange, c.green],
        home: (0, 1),
        align: [["D'", ""], ["D2", "D"]],
        insert: "L' D' L",
    },
    TopCorner {
        colors: |c| [c.white, c.blue, c.orange],
        home: (1, 1),
        align: [["D2", "D'"], ["D", ""]],
        insert: "R D R'",
    },
];

pub(crate) fn solve(s: &mut Solver<'_>) {
    for corner in &TOP_CORNERS {
        s.scan(
            |c, piece| has_colors(piece, &(corner.colors)(c)),
            |s, Pos { x, y, z }| {
                if y == 1 {
                    if (x, z) == corner.home {
                        return ControlFlow::Break(());
                    }
                    drop_corner(s, x, z);
                }
                s.run(corner.align[x][z]);
                s.run(corner.insert);
                ControlFlow::Continue(())
            },
        );
    }
    log::debug!("top corners placed");

    let top_twists = [
        ((0, 0), "L D L' D' L D L'", "L D' L' D L D' L'"),
        ((1, 0), "F D F' D' F D F'", "F D' F' D F D' F'"),
        ((0, 1), "B D B' D' B D B'", "B D' B' D B D' B'"),
        ((1, 1), "R D R' D' R D R'", "R D' R' D R D' R'"),
    ];
    for ((x, z), once, twice) in top_twists {
        match s.orient(x, 1, z) {
            Some(1) => s.run(once),
            Some(2) => s.run(twice),
            _ => (),
        }
    }
    log::debug!("top corners twisted");

    s.scan(
        |c, piece| has_colors(piece, &[c.yellow, c.red, c.green]),
        |s, Pos { x, z, .. }| {
            if z == 1 {
                s.run(if x == 0 { "D" } else { "D2" });
            } else if x == 1 {
                s.run("D'");
            }
            ControlFlow::Continue(())
        },
    );

    const SWAP_RIGHT: &str = "R' D L D' R D L' D'";
    s.scan(
        |c, piece| has_colors(piece, &[c.yellow, c.blue, c.red]),
        |s, Pos { x, z, .. }| {
            if z == 1 {
                s.run(SWAP_RIGHT);
                if x == 1 {
                    s.run(SWAP_RIGHT);
                }
            }
            ControlFlow::Continue(())
        },
    );

    let c = s.colors;
    let back_left_home = [Some(c.yellow), Some(c.green), Some(c.orange)];
    if (0..3).map(|i| s.color(0, 0, 1, i)).ne(back_left_home) {
        s.run("L' D R D' L D R' D' L' D R D' L D R'");
    }

    s.twist_bottom_corners();
}

/// Moves a top corner down to the bottom layer without disturbing the other
/// top corners.
fn drop_corner(s: &mut Solver<'_>, x: usize, z: usize) {
    s.run(match (x, z) {
        (0, 0) => "L D' L'",
        (0, _) => "L' D L",
        (_, 0) => "R' D R",
        _ => "R D' R'",
    });
}
