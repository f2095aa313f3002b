use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_initial_pieces() {
    for (layers, expected) in [(2, 8), (3, 26), (4, 56), (5, 98)] {
        let cube = new_cube(layers);
        assert_eq!(expected, cube.pieces().len());
        assert!(cube.is_solved());
        assert!(cube.history().is_empty());
        assert_poses_match_slots(&cube);
    }

    let cube = new_cube(3);
    assert_eq!(None, cube.grid().get(Pos::new(1, 1, 1)));

    let corner = cube.piece_at(Pos::new(0, 0, 0)).unwrap();
    assert!(corner.is_corner());
    assert_eq!(&[Rgb::YELLOW, Rgb::RED, Rgb::GREEN], &corner.colors()[..]);
    assert_eq!(Some(0), corner.orient());

    let corner = cube.piece_at(Pos::new(0, 2, 0)).unwrap();
    assert_eq!(&[Rgb::WHITE, Rgb::GREEN, Rgb::RED], &corner.colors()[..]);

    let edge = cube.piece_at(Pos::new(0, 1, 0)).unwrap();
    assert!(edge.is_edge());
    assert_eq!(&[Rgb::GREEN, Rgb::RED], &edge.colors()[..]);
    assert_eq!(Some(2), edge.orient());

    let edge = cube.piece_at(Pos::new(1, 2, 0)).unwrap();
    assert_eq!(&[Rgb::WHITE, Rgb::RED], &edge.colors()[..]);
    assert_eq!(Some(0), edge.orient());

    let center = cube.piece_at(Pos::new(1, 1, 0)).unwrap();
    assert!(center.is_center());
    assert_eq!(None, center.orient());
    assert_eq!(face_normal(Face::F), center.facelets()[0].normal);
}

#[test]
fn test_front_quarter_turn() {
    let mut cube = new_cube(3);
    let top_left = id_at(&cube, 0, 2, 0);
    let top_right = id_at(&cube, 2, 2, 0);
    let bottom_right = id_at(&cube, 2, 0, 0);
    let bottom_left = id_at(&cube, 0, 0, 0);
    let top_edge = id_at(&cube, 1, 2, 0);
    let left_edge = id_at(&cube, 0, 1, 0);
    let back_corner = id_at(&cube, 0, 0, 2);

    cube.evaluate("F");

    assert_eq!(top_left, id_at(&cube, 2, 2, 0));
    assert_eq!(top_right, id_at(&cube, 2, 0, 0));
    assert_eq!(bottom_right, id_at(&cube, 0, 0, 0));
    assert_eq!(bottom_left, id_at(&cube, 0, 2, 0));
    assert_eq!(top_edge, id_at(&cube, 2, 1, 0));
    assert_eq!(left_edge, id_at(&cube, 1, 2, 0));
    assert_eq!(back_corner, id_at(&cube, 0, 0, 2));

    let orient = |id: PieceId| cube.piece(id).unwrap().orient();
    assert_eq!(Some(2), orient(top_left));
    assert_eq!(Some(1), orient(top_right));
    assert_eq!(Some(2), orient(bottom_right));
    assert_eq!(Some(1), orient(bottom_left));
    assert_eq!(Some(2), orient(top_edge));
    assert_eq!(Some(0), orient(left_edge));
    assert_eq!(Some(0), orient(back_corner));

    assert!(!cube.is_solved());
    assert_poses_match_slots(&cube);

    cube.evaluate("F'");
    assert!(cube.is_solved());
}

#[test]
fn test_move_decomposition() {
    let q = |face, slice| QuarterTurn { face, slice };

    assert_eq!(&[q(Face::R, 3)], &turn::quarter_turns("R".parse().unwrap(), 4)[..]);
    assert_eq!(&[q(Face::L, 3)], &turn::quarter_turns("R'".parse().unwrap(), 4)[..]);
    assert_eq!(&[q(Face::F, 1)], &turn::quarter_turns("F.1".parse().unwrap(), 4)[..]);
    assert_eq!(&[q(Face::B, 1)], &turn::quarter_turns("F'.1".parse().unwrap(), 4)[..]);
    assert_eq!(
        &[q(Face::U, 2), q(Face::U, 2)],
        &turn::quarter_turns("U2".parse().unwrap(), 3)[..],
    );
    // Out-of-range depth means the outer layer.
    assert_eq!(&[q(Face::D, 0)], &turn::quarter_turns("D.7".parse().unwrap(), 3)[..]);
}

#[test]
fn test_out_of_range_depth() {
    let mut a = new_cube(3);
    let mut b = new_cube(3);
    a.evaluate("F.5 R'.3");
    b.evaluate("F R'");
    assert_eq!(logical_state(&a), logical_state(&b));
}

#[test]
fn test_invalid_tokens_are_skipped() {
    let mut a = new_cube(3);
    let mut b = new_cube(3);
    let applied = a.evaluate("r X u2 F3 d'");
    b.evaluate("R U2 D'");
    assert_eq!(3, applied.len());
    assert_eq!(logical_state(&a), logical_state(&b));
}

#[test]
fn test_sexy_move_order() {
    let mut cube = new_cube(3);
    for i in 1..=6 {
        cube.evaluate("R U R' U'");
        assert_eq!(i == 6, cube.is_solved(), "{i} repetitions");
    }
    assert_poses_match_slots(&cube);

    let mut cube = new_cube(2);
    cube.evaluate("R U R' U'");
    assert!(!cube.is_solved());
    for _ in 1..6 {
        cube.evaluate("R U R' U'");
    }
    assert!(cube.is_solved());
}

#[test]
fn test_interior_slices_leave_corners() {
    let mut cube = new_cube(5);
    let corners: Vec<_> = cube
        .grid()
        .pieces()
        .filter(|(_, id)| cube.piece(*id).unwrap().is_corner())
        .collect();
    cube.evaluate("F.1 R2.2 U'.3 B.1 L.2 D2.3");
    for (pos, id) in corners {
        assert_eq!(Some(id), cube.grid().get(pos));
        assert_eq!(Some(0), cube.piece(id).unwrap().orient());
    }
}

#[test]
fn test_color_fallback() {
    let scheme = ColorScheme::from_hex(["#ffffff", "nope", "#ff0000", "#12345", "#00ff00", "#0000ff"]);
    assert_eq!(Rgb::WHITE, scheme.down);
    assert_eq!(Rgb::WHITE, scheme.back);
    assert_eq!(Rgb::RED, scheme.front);

    let cube = Cube::new(CubeParams::new(12.0, 2, 0.0), scheme);
    let corner = cube.piece_at(Pos::new(0, 0, 0)).unwrap();
    assert_eq!(&[Rgb::WHITE, Rgb::RED, Rgb::GREEN], &corner.colors()[..]);
}

#[test]
fn test_invalid_params() {
    let cube = Cube::new(CubeParams::new(12.0, 1, 100.0), ColorScheme::default());
    assert_eq!(FALLBACK_LAYERS, cube.layers());
    assert_eq!(8, cube.pieces().len());

    let cube = Cube::new(CubeParams::new(-3.0, 4, 100.0), ColorScheme::default());
    assert_eq!(FALLBACK_LAYERS, cube.layers());
    assert_eq!(FALLBACK_WIDTH, cube.params().width);

    let params = CubeParams::new(6.0, 3, -5.0).sanitized();
    assert_eq!(CubeParams::new(6.0, 3, 0.0), params);
    assert_eq!(1, params.turn_steps());
}

#[test]
fn test_seeded_scramble() {
    let params = ScrambleParams::from_seed("seed");
    let mut a = new_cube(3);
    let mut b = new_cube(3);
    let moves = a.scramble_with(&params);
    b.scramble_with(&params);

    assert_eq!(SCRAMBLE_MOVES_PER_LAYER * 3, moves.len());
    assert!(a.history().len() >= moves.len());
    assert_eq!(a.history(), b.history());
    assert_eq!(logical_state(&a), logical_state(&b));
    assert_ne!(moves, ScrambleParams::from_seed("other seed").moves(3));
    assert!(moves.iter().all(|m| m.depth() < 3));
}

proptest! {
    #[test]
    fn proptest_move_then_inverse((layers, moves) in arb_cube_moves(20), m in arb_move(6)) {
        let mut cube = new_cube(layers);
        for &m in &moves {
            cube.apply(m, false, false);
        }
        let before = logical_state(&cube);
        cube.apply(m, false, false);
        cube.apply(m.inv(), false, false);
        prop_assert_eq!(before, logical_state(&cube));
    }

    #[test]
    fn proptest_quarter_turn_order((layers, moves) in arb_cube_moves(20), m in arb_move(6)) {
        let mut cube = new_cube(layers);
        for &m in &moves {
            cube.apply(m, false, false);
        }
        let before = logical_state(&cube);
        let q = Move::new(m.face(), 1, m.depth());
        for i in 1..=4 {
            cube.apply(q, false, false);
            prop_assert_eq!(i == 4, before == logical_state(&cube));
        }
    }

    #[test]
    fn proptest_three_layer_parity(moves in arb_moves(3, 40)) {
        let mut cube = new_cube(3);
        for &m in &moves {
            cube.apply(m, false, false);
        }
        let mut twist = 0;
        let mut flipped = 0;
        for piece in cube.pieces() {
            match piece.kind() {
                PieceKind::Corner { orient, .. } => twist += *orient as u32,
                PieceKind::Edge { orient, .. } => flipped += (*orient & 1) as u32,
                PieceKind::Center(_) => (),
            }
        }
        prop_assert_eq!(0, twist % 3);
        prop_assert_eq!(0, flipped % 2);
    }

    #[test]
    fn proptest_poses_follow_slots((layers, moves) in arb_cube_moves(30), animate: bool) {
        let mut cube = new_cube(layers);
        for &m in &moves {
            cube.apply(m, true, animate);
        }
        cube.flush_pending();
        assert_poses_match_slots(&cube);
        for piece in cube.pieces() {
            prop_assert_eq!(cgmath::Matrix3::from_scale(1.0), piece.pending());
        }
    }
}
