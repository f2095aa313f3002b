use std::path::PathBuf;

use cgmath::{Matrix3, SquareMatrix};
use eyre::{Context, Result};
use ncube_core::{Cube, ScrambleParams, notation};
use ncube_prefs::Preferences;

/// ncube command-line interface
///
/// Cubes are passed between commands as serialized states.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to overlay onto the defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug, PartialEq)]
pub(crate) enum Subcommand {
    /// Print the state of a solved cube.
    New,
    /// Scramble a solved cube and print the scramble and the state.
    Scramble {
        /// Seed for a reproducible scramble.
        #[arg(short, long)]
        seed: Option<String>,
        /// Number of layers, overriding preferences.
        #[arg(short, long)]
        layers: Option<usize>,
    },
    /// Apply a sequence of moves and print the new state.
    Apply {
        /// Serialized cube.
        state: String,
        /// Whitespace-separated moves, such as "R U R' U'".
        sequence: String,
    },
    /// Solve a 2- or 3-layer cube and print the solution and the state.
    Solve {
        /// Serialized cube.
        state: String,
    },
    /// Undo one move and print the state.
    Undo {
        /// Serialized cube.
        state: String,
    },
    /// Redo one move and print the state.
    Redo {
        /// Serialized cube.
        state: String,
    },
    /// Write the effective preferences to a YAML file.
    WriteConfig {
        /// Output file.
        file: PathBuf,
    },
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs = Preferences::load(args.config.as_deref());

    match args.subcommand {
        Subcommand::New => {
            let cube = Cube::new(prefs.cube_params(), prefs.scheme());
            println!("{}", cube.save(&Matrix3::identity()));
            Ok(())
        }

        Subcommand::Scramble { seed, layers } => {
            let mut params = prefs.cube_params();
            if let Some(layers) = layers {
                params.layers = layers;
            }
            let scramble = seed.map_or_else(ScrambleParams::new, ScrambleParams::from_seed);

            let mut cube = Cube::new(params, prefs.scheme());
            let moves = cube.scramble_with(&scramble);
            println!("{}", notation::format_moves(moves));
            println!("{}", cube.save(&Matrix3::identity()));
            Ok(())
        }

        Subcommand::Apply { state, sequence } => {
            let (mut cube, rotation) = load(&state, &prefs)?;
            let applied = cube.evaluate(&sequence);
            log::info!("applied {} moves", applied.len());
            println!("{}", cube.save(&rotation));
            Ok(())
        }

        Subcommand::Solve { state } => {
            let (mut cube, rotation) = load(&state, &prefs)?;
            let solution = ncube_solver::solve(&mut cube);
            println!("{}", notation::format_moves(solution));
            println!("solved: {}", cube.is_solved());
            println!("{}", cube.save(&rotation));
            Ok(())
        }

        Subcommand::Undo { state } => {
            let (mut cube, rotation) = load(&state, &prefs)?;
            if !cube.undo() {
                log::warn!("nothing to undo");
            }
            println!("{}", cube.save(&rotation));
            Ok(())
        }

        Subcommand::Redo { state } => {
            let (mut cube, rotation) = load(&state, &prefs)?;
            if !cube.redo() {
                log::warn!("nothing to redo");
            }
            println!("{}", cube.save(&rotation));
            Ok(())
        }

        Subcommand::WriteConfig { file } => prefs
            .save(&file)
            .wrap_err_with(|| format!("error writing {}", file.display())),
    }
}

fn load(state: &str, prefs: &Preferences) -> Result<(Cube, Matrix3<f32>)> {
    Cube::load_with_scheme(state, prefs.scheme()).wrap_err("error loading cube state")
}
