use clap::Parser;
use pretty_assertions::assert_eq;

use crate::cli::{Args, Subcommand};

#[test]
fn test_parse_args() {
    let args = Args::try_parse_from(["ncube", "scramble", "--seed", "abc", "-l", "4"]).unwrap();
    assert_eq!(None, args.config);
    assert_eq!(
        Subcommand::Scramble {
            seed: Some("abc".to_owned()),
            layers: Some(4),
        },
        args.subcommand,
    );

    let state = "12:3:0:1,0,0,0,1,0,0,0,1::0";
    let args =
        Args::try_parse_from(["ncube", "apply", state, "R U", "--config", "p.yaml"]).unwrap();
    assert_eq!(Some("p.yaml".into()), args.config);
    assert_eq!(
        Subcommand::Apply {
            state: state.to_owned(),
            sequence: "R U".to_owned(),
        },
        args.subcommand,
    );

    assert!(Args::try_parse_from(["ncube"]).is_err());
    assert!(Args::try_parse_from(["ncube", "write-config"]).is_err());
}
