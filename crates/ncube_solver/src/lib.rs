//! Rule-based solvers for 2- and 3-layer cubes.
//!
//! The solvers only drive the cube through [`Cube::evaluate()`], so every
//! move they make is recorded in the history and animated like any other
//! move.

mod cube2;
mod cube3;
mod solver;

#[cfg(test)]
mod tests;

use ncube_core::{Cube, Move};

pub use solver::Palette;

/// Solves a 2- or 3-layer cube. Returns the moves applied.
///
/// Other layer counts are not supported; the cube is left untouched and no
/// moves are returned.
pub fn solve(cube: &mut Cube) -> Vec<Move> {
    let layers = cube.layers();
    let mut solver = solver::Solver::new(cube);
    match layers {
        2 => cube2::solve(&mut solver),
        3 => cube3::solve(&mut solver),
        _ => {
            log::info!("no solver for {layers}-layer cubes");
            return vec![];
        }
    }
    let moves = solver.into_moves();
    log::info!("solved {layers}-layer cube in {} moves", moves.len());
    moves
}
