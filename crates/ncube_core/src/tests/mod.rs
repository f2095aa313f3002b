use cgmath::InnerSpace;
use proptest::prelude::*;

use crate::*;

mod history;
mod state;
mod turns;

fn new_cube(layers: usize) -> Cube {
    Cube::new(CubeParams::new(12.0, layers, 0.0), ColorScheme::default())
}

/// Returns the logical state of a cube: which piece is in each slot and the
/// orientation of every piece.
fn logical_state(cube: &Cube) -> (Grid, Vec<Option<u8>>) {
    let orients = cube.pieces().iter().map(|p| p.orient()).collect();
    (cube.grid().clone(), orients)
}

fn id_at(cube: &Cube, x: usize, y: usize, z: usize) -> PieceId {
    cube.grid()
        .get(Pos::new(x, y, z))
        .expect("expected piece in slot")
}

fn assert_poses_match_slots(cube: &Cube) {
    for (pos, id) in cube.grid().pieces() {
        let piece = cube.piece(id).expect("bad piece ID");
        let expected = slot_center(pos, cube.params());
        let error = (piece.position() - expected).magnitude();
        assert!(
            error < 1e-3,
            "piece {id} in slot {pos} is drawn at {:?}, expected {expected:?}",
            piece.position(),
        );
    }
}

fn arb_face() -> impl Strategy<Value = Face> {
    prop_oneof![
        Just(Face::F),
        Just(Face::B),
        Just(Face::U),
        Just(Face::D),
        Just(Face::R),
        Just(Face::L),
    ]
}

fn arb_move(layers: usize) -> impl Strategy<Value = Move> {
    (arb_face(), 1..=3_i32, 0..layers).prop_map(|(face, turns, depth)| Move::new(face, turns, depth))
}

fn arb_moves(layers: usize, max_len: usize) -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(arb_move(layers), 0..max_len)
}

fn arb_cube_moves(max_len: usize) -> impl Strategy<Value = (usize, Vec<Move>)> {
    (2..=6_usize).prop_flat_map(move |layers| (Just(layers), arb_moves(layers, max_len)))
}
