use std::io::Write;

use ncube_core::Rgb;
use pretty_assertions::assert_eq;

use super::*;

fn user_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_prefs_match_embedded_file() {
    let embedded: Preferences = serde_norway::from_str(DEFAULT_PREFS_STR).unwrap();
    assert_eq!(Preferences::default(), embedded);
    assert_eq!(Preferences::default(), Preferences::load(None));
    assert_eq!(ColorScheme::default(), Preferences::default().scheme());
    assert_eq!(CubeParams::default(), Preferences::default().cube_params());
}

#[test]
fn test_user_file_overrides_defaults() {
    let file = user_file("cube:\n  layers: 5\ncolors:\n  front: \"#123456\"\n");
    let prefs = Preferences::try_load(Some(file.path())).unwrap();

    assert_eq!(5, prefs.cube.layers);
    assert_eq!(12.0, prefs.cube.width);
    assert_eq!(150.0, prefs.cube.turn_duration);
    assert_eq!(Rgb::new(0x12, 0x34, 0x56), prefs.scheme().front);
    assert_eq!(Rgb::WHITE, prefs.scheme().up);
}

#[test]
fn test_invalid_color_becomes_white() {
    let file = user_file("colors:\n  down: \"yellow\"\n");
    let prefs = Preferences::load(Some(file.path()));
    assert_eq!("yellow", prefs.colors.down);
    assert_eq!(Rgb::WHITE, prefs.scheme().down);
    assert_eq!(Rgb::RED, prefs.scheme().front);
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let file = user_file("cube:\n  layers: lots\n");
    assert!(Preferences::try_load(Some(file.path())).is_err());
    assert_eq!(Preferences::default(), Preferences::load(Some(file.path())));

    let missing = Path::new("/nonexistent/ncube/prefs.yaml");
    assert_eq!(Preferences::default(), Preferences::load(Some(missing)));
}

#[test]
fn test_invalid_params_are_sanitized() {
    let file = user_file("cube:\n  layers: 1\n  turn_duration: -4\n");
    let prefs = Preferences::load(Some(file.path()));
    assert_eq!(1, prefs.cube.layers);
    assert_eq!(CubeParams::new(12.0, 2, 0.0), prefs.cube_params());
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.yaml");

    let mut prefs = Preferences::default();
    prefs.cube.layers = 4;
    prefs.cube.turn_duration = 0.0;
    prefs.colors.back = "#abcdef".to_owned();
    prefs.save(&path).unwrap();

    assert_eq!(prefs, Preferences::try_load(Some(&path)).unwrap());
}
