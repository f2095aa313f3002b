use pretty_assertions::assert_eq;

use super::*;

fn seq(s: &str) -> Vec<Move> {
    notation::parse_moves(s).map(Result::unwrap).collect()
}

#[test]
fn test_canonical_entries() {
    let mut cube = new_cube(4);
    cube.evaluate("R'");
    cube.evaluate("B.1");
    cube.evaluate("U2");
    cube.evaluate("D'");
    cube.evaluate("L.3");
    assert_eq!(
        seq("R' F'.2 U U D' R'"),
        cube.history().moves(),
    );
    assert_eq!(6, cube.history().index());

    // Replaying the recorded entries reproduces the same state.
    let mut replay = new_cube(4);
    for &m in cube.history().moves() {
        replay.apply(m, false, false);
    }
    assert_eq!(logical_state(&cube), logical_state(&replay));
}

#[test]
fn test_undo_redo_bounds() {
    let mut cube = new_cube(3);
    assert!(!cube.undo());
    assert!(!cube.redo());

    cube.evaluate("F");
    assert!(!cube.redo());
    assert!(cube.undo());
    assert!(cube.is_solved());
    assert!(!cube.undo());
    assert!(cube.history().can_redo());
    assert!(cube.redo());
    assert!(!cube.is_solved());
    assert!(cube.history().is_at_tip());
}

#[test]
fn test_record_after_undo_replays_to_tip() {
    let mut cube = new_cube(3);
    cube.evaluate("R U F");
    cube.undo();
    cube.undo();
    assert_eq!(1, cube.history().index());

    cube.evaluate("L");
    assert_eq!(seq("R U F L"), cube.history().moves());
    assert_eq!(4, cube.history().index());

    let mut expected = new_cube(3);
    expected.evaluate("R U F L");
    assert_eq!(logical_state(&expected), logical_state(&cube));
}

#[test]
fn test_unrecorded_moves() {
    let mut cube = new_cube(3);
    cube.apply("F".parse().unwrap(), false, true);
    assert!(cube.history().is_empty());
    assert!(!cube.is_solved());
    assert_poses_match_slots(&cube);
}

proptest! {
    #[test]
    fn proptest_undo_redo((layers, moves) in arb_cube_moves(25)) {
        let mut cube = new_cube(layers);
        // Half moves record two entries, so only some indices have a known
        // state.
        let mut known = vec![(0, logical_state(&cube))];
        for &m in &moves {
            cube.apply(m, true, false);
            known.push((cube.history().index(), logical_state(&cube)));
        }
        let final_state = logical_state(&cube);

        while let Some((index, state)) = known.pop() {
            while cube.history().index() > index {
                prop_assert!(cube.undo());
            }
            prop_assert_eq!(state, logical_state(&cube));
        }
        prop_assert!(!cube.undo());
        prop_assert!(cube.is_solved());

        while cube.redo() {}
        prop_assert_eq!(final_state, logical_state(&cube));
        cube.flush_pending();
        assert_poses_match_slots(&cube);
    }
}
