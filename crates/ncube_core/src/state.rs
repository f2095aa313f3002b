//! Serialization of a cube to a single line of text.
//!
//! ```text
//! <width>:<layers>:<turn_duration>:<r00,r01,...,r22>:<move,move,...>:<history_index>
//! ```
//!
//! The nine floats are a row-major 3x3 rotation matrix owned by the caller
//! (typically the camera). The move list is the full history, oldest first,
//! and the cube is replayed up to `history_index`.

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use cgmath::{Matrix3, SquareMatrix};
use itertools::Itertools;
use ncube_notation::{Move, MoveParseError};
use thiserror::Error;

use crate::{ColorScheme, Cube, CubeParams, History};

const FIELD_COUNT: usize = 6;

/// Error produced when parsing a serialized cube.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Wrong number of `:`-separated fields
    #[error("expected {FIELD_COUNT} fields, got {0}")]
    FieldCount(usize),
    /// Field that should be a float is not
    #[error("bad {field}: {source}")]
    BadFloat {
        /// Name of the field.
        field: &'static str,
        /// Parse error.
        source: ParseFloatError,
    },
    /// Field that should be a nonnegative integer is not
    #[error("bad {field}: {source}")]
    BadInt {
        /// Name of the field.
        field: &'static str,
        /// Parse error.
        source: ParseIntError,
    },
    /// Rotation does not have exactly nine entries
    #[error("rotation matrix must have 9 entries, got {0}")]
    RotationSize(usize),
    /// Move in the history cannot be parsed
    #[error("bad move {text:?} in history: {source}")]
    BadMove {
        /// Text of the move.
        text: String,
        /// Parse error.
        source: MoveParseError,
    },
    /// History index is past the end of the history
    #[error("history index {index} is out of range for {len} moves")]
    HistoryIndex {
        /// History index.
        index: usize,
        /// Number of moves.
        len: usize,
    },
}

/// Parsed contents of a serialized cube.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedState {
    /// Parameters of the cube, before sanitization.
    pub params: CubeParams,
    /// Rotation matrix owned by the caller.
    pub rotation: Matrix3<f32>,
    /// Full move history, oldest first.
    pub moves: Vec<Move>,
    /// Number of moves from the history that are applied.
    pub history_index: usize,
}

impl fmt::Display for SavedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let CubeParams {
            width,
            layers,
            turn_duration,
        } = self.params;
        let rotation = (0..3)
            .flat_map(|row| (0..3).map(move |col| self.rotation[col][row]))
            .join(",");
        let moves = self.moves.iter().join(",");
        let index = self.history_index;
        write!(f, "{width}:{layers}:{turn_duration}:{rotation}:{moves}:{index}")
    }
}

impl FromStr for SavedState {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s.trim().split(':').collect_vec();
        let [width, layers, turn_duration, rotation, moves, index] = fields[..] else {
            return Err(StateError::FieldCount(fields.len()));
        };

        let params = CubeParams {
            width: parse_float("width", width)?,
            layers: parse_int("layers", layers)?,
            turn_duration: parse_float("turn duration", turn_duration)?,
        };

        let entries: [f32; 9] = rotation
            .split(',')
            .map(|x| parse_float("rotation", x).map(|x| x as f32))
            .collect::<Result<Vec<f32>, _>>()?
            .try_into()
            .map_err(|v: Vec<f32>| StateError::RotationSize(v.len()))?;
        let mut rotation = Matrix3::identity();
        for (i, x) in entries.into_iter().enumerate() {
            rotation[i % 3][i / 3] = x;
        }

        let moves = moves
            .split(',')
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(|text| {
                text.parse().map_err(|source| StateError::BadMove {
                    text: text.to_owned(),
                    source,
                })
            })
            .collect::<Result<Vec<Move>, _>>()?;

        let history_index = parse_int("history index", index)?;

        Ok(Self {
            params,
            rotation,
            moves,
            history_index,
        })
    }
}

fn parse_float(field: &'static str, s: &str) -> Result<f64, StateError> {
    s.trim()
        .parse()
        .map_err(|source| StateError::BadFloat { field, source })
}

fn parse_int(field: &'static str, s: &str) -> Result<usize, StateError> {
    s.trim()
        .parse()
        .map_err(|source| StateError::BadInt { field, source })
}

impl Cube {
    /// Serializes the cube along with a caller-owned rotation matrix.
    pub fn save(&self, rotation: &Matrix3<f32>) -> String {
        SavedState {
            params: *self.params(),
            rotation: *rotation,
            moves: self.history().moves().to_vec(),
            history_index: self.history().index(),
        }
        .to_string()
    }

    /// Deserializes a cube with the default color scheme. Returns the cube
    /// and the caller-owned rotation matrix.
    pub fn load(s: &str) -> Result<(Cube, Matrix3<f32>), StateError> {
        Self::load_with_scheme(s, ColorScheme::default())
    }

    /// Deserializes a cube with a custom color scheme.
    pub fn load_with_scheme(
        s: &str,
        scheme: ColorScheme,
    ) -> Result<(Cube, Matrix3<f32>), StateError> {
        let saved: SavedState = s.parse()?;
        let cube = Self::from_saved(&saved, scheme)?;
        Ok((cube, saved.rotation))
    }

    /// Reconstructs a cube from its saved history.
    ///
    /// Moves up to the history index are replayed without animation, and
    /// their rotations are flushed at once at the end.
    pub fn from_saved(saved: &SavedState, scheme: ColorScheme) -> Result<Cube, StateError> {
        let len = saved.moves.len();
        if saved.history_index > len {
            return Err(StateError::HistoryIndex {
                index: saved.history_index,
                len,
            });
        }

        let mut cube = Cube::new(saved.params, scheme);
        *cube.history_mut() = History::unapplied(saved.moves.clone());
        for _ in 0..saved.history_index {
            if let Some(m) = cube.history_mut().step_forward() {
                cube.apply(m, false, false);
            }
        }
        cube.flush_pending();

        log::info!(
            "loaded {}-layer cube at move {} of {len}",
            cube.layers(),
            saved.history_index,
        );
        Ok(cube)
    }
}
