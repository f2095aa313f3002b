use cgmath::{Deg, Matrix3, SquareMatrix};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_save_load_round_trip() {
    let mut cube = Cube::new(CubeParams::new(9.0, 4, 80.0), ColorScheme::default());
    cube.evaluate("R U2 F'.1 L D.2 B");
    cube.undo();
    cube.undo();
    let rotation = Matrix3::from_angle_y(Deg(30.0_f32));

    let saved = cube.save(&rotation);
    let (loaded, loaded_rotation) = Cube::load(&saved).unwrap();

    assert_eq!(saved, loaded.save(&loaded_rotation));
    assert_eq!(cube.params(), loaded.params());
    assert_eq!(cube.history(), loaded.history());
    assert_eq!(logical_state(&cube), logical_state(&loaded));
    for piece in loaded.pieces() {
        assert_eq!(Matrix3::identity(), piece.pending());
    }
    assert_poses_match_slots(&loaded);
}

#[test]
fn test_load_then_redo() {
    let mut cube = new_cube(3);
    cube.evaluate("R U R' U'");
    let identity = Matrix3::identity();
    let saved = cube.save(&identity);

    let (mut loaded, _) = Cube::load(&saved.replace(":4", ":1")).unwrap();
    assert_eq!(1, loaded.history().index());
    assert!(loaded.history().can_redo());
    while loaded.redo() {}
    assert_eq!(logical_state(&cube), logical_state(&loaded));
}

#[test]
fn test_saved_format() {
    let mut cube = new_cube(3);
    cube.evaluate("F R'");
    let saved = cube.save(&Matrix3::identity());
    assert_eq!("12:3:0:1,0,0,0,1,0,0,0,1:F,R':2", saved);

    let rotation = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    let state: SavedState = "1:2:3:1,4,7,2,5,8,3,6,9::0".parse().unwrap();
    assert_eq!(rotation, state.rotation);
    assert_eq!(Vec::<Move>::new(), state.moves);
    assert_eq!(0, state.history_index);
}

#[test]
fn test_empty_move_entries_are_ignored() {
    let state: SavedState = "12:3:0:1,0,0,0,1,0,0,0,1:F,,R, :2".parse().unwrap();
    assert_eq!(2, state.moves.len());
}

#[test]
fn test_load_invalid_params() {
    let (cube, _) = Cube::load("12:1:0:1,0,0,0,1,0,0,0,1::0").unwrap();
    assert_eq!(FALLBACK_LAYERS, cube.layers());
    assert_eq!(FALLBACK_WIDTH, cube.params().width);
}

#[test]
fn test_load_errors() {
    let err = |s: &str| Cube::load(s).err().unwrap();

    assert_eq!(StateError::FieldCount(3), err("12:3:0"));
    assert!(matches!(
        err("wide:3:0:1,0,0,0,1,0,0,0,1::0"),
        StateError::BadFloat { field: "width", .. },
    ));
    assert!(matches!(
        err("12:three:0:1,0,0,0,1,0,0,0,1::0"),
        StateError::BadInt { field: "layers", .. },
    ));
    assert!(matches!(
        err("12:3:0:1,0,0,0,1,0,0,0,x::0"),
        StateError::BadFloat { field: "rotation", .. },
    ));
    assert_eq!(StateError::RotationSize(4), err("12:3:0:1,0,0,1::0"));
    assert!(matches!(
        err("12:3:0:1,0,0,0,1,0,0,0,1:F,Q:1"),
        StateError::BadMove { ref text, .. } if text == "Q",
    ));
    assert!(matches!(
        err("12:3:0:1,0,0,0,1,0,0,0,1:F:-1"),
        StateError::BadInt { field: "history index", .. },
    ));
    assert_eq!(
        StateError::HistoryIndex { index: 3, len: 2 },
        err("12:3:0:1,0,0,0,1,0,0,0,1:F,R:3"),
    );
}
