use ncube_core::{ColorScheme, CubeParams, ScrambleParams};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn new_cube(layers: usize) -> Cube {
    Cube::new(CubeParams::new(12.0, layers, 0.0), ColorScheme::default())
}

fn scrambled(layers: usize, seed: &str) -> Cube {
    let mut cube = new_cube(layers);
    cube.scramble_with(&ScrambleParams::from_seed(seed));
    cube
}

#[test]
fn test_solve_three_layers() {
    let mut cube = scrambled(3, "ncube");
    assert!(!cube.is_solved());
    let before = cube.history().len();

    let moves = solve(&mut cube);
    assert!(cube.is_solved());
    assert!(!moves.is_empty());
    assert!(cube.history().len() >= before + moves.len());
}

#[test]
fn test_solve_two_layers() {
    let mut cube = scrambled(2, "ncube");
    assert!(!cube.is_solved());
    solve(&mut cube);
    assert!(cube.is_solved());
}

#[test]
fn test_solve_solved_cube() {
    for layers in [2, 3] {
        let mut cube = new_cube(layers);
        solve(&mut cube);
        assert!(cube.is_solved(), "{layers} layers");
    }
}

#[test]
fn test_solve_unsupported() {
    let mut cube = scrambled(4, "ncube");
    let history = cube.history().clone();
    assert_eq!(Vec::<Move>::new(), solve(&mut cube));
    assert_eq!(&history, cube.history());
}

#[test]
fn test_solve_after_slice_moves() {
    let mut cube = new_cube(3);
    cube.evaluate("R.1 U'.1 F2.1 R U F' D2 B L'");
    solve(&mut cube);
    assert!(cube.is_solved());
}

#[test]
fn test_palette() {
    let palette = Palette::from(&ColorScheme::default());
    assert_eq!(ncube_core::Rgb::WHITE, palette.white);
    assert_eq!(ncube_core::Rgb::ORANGE, palette.orange);
    assert_eq!(ncube_core::Rgb::GREEN, palette.green);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn proptest_solve_scrambles(layers in 2..=3_usize, seed in "[a-z0-9]{1,12}") {
        let mut cube = scrambled(layers, &seed);
        solve(&mut cube);
        prop_assert!(cube.is_solved());
    }
}
