use std::fmt;
use std::str::FromStr;

use crate::{Face, MoveParseError};

/// Turn of a single slice of the cube.
///
/// Moves are immutable and always normalized: `turns` is in `1..=3`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    face: Face,
    turns: u8,
    depth: usize,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        match self.turns {
            2 => write!(f, "2")?,
            3 => write!(f, "'")?,
            _ => (),
        }
        if self.depth != 0 {
            write!(f, ".{}", self.depth)?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (body, depth) = match s.split_once('.') {
            Some((body, depth)) => (body, depth.parse()?),
            None => (s, 0),
        };

        let mut chars = body.chars();
        let face_char = chars.next().ok_or(MoveParseError::Empty)?;
        let face = Face::from_letter(face_char)
            .ok_or_else(|| MoveParseError::BadFace(face_char.to_string()))?;
        let turns = match chars.as_str() {
            "" => 1,
            "2" => 2,
            "'" => 3,
            other => return Err(MoveParseError::BadSuffix(other.to_owned())),
        };

        Ok(Self::new(face, turns, depth))
    }
}

impl Move {
    /// Constructs a move, normalizing `turns` modulo 4.
    ///
    /// Zero turns is treated as one turn.
    pub fn new(face: Face, turns: i32, depth: usize) -> Self {
        let turns = match turns.rem_euclid(4) {
            0 => 1,
            t => t as u8,
        };
        Self { face, turns, depth }
    }

    /// Constructs a clockwise quarter turn.
    pub fn quarter(face: Face, depth: usize) -> Self {
        Self::new(face, 1, depth)
    }

    /// Returns the face that the move is named after.
    pub fn face(self) -> Face {
        self.face
    }
    /// Returns the number of clockwise quarter turns, in `1..=3`.
    pub fn turns(self) -> u8 {
        self.turns
    }
    /// Returns the slice offset from the face.
    pub fn depth(self) -> usize {
        self.depth
    }

    /// Returns the inverse move: same face and depth, `4 - turns`.
    #[must_use]
    pub fn inv(self) -> Self {
        Self {
            turns: 4 - self.turns,
            ..self
        }
    }

    /// Returns the same move with its depth reset to 0 if it does not exist on
    /// a cube with `layers` layers.
    #[must_use]
    pub fn clamp_depth(self, layers: usize) -> Self {
        if self.depth >= layers {
            Self { depth: 0, ..self }
        } else {
            self
        }
    }
}
