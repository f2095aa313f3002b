use std::fmt;
use std::str::FromStr;

use strum::{EnumIter, IntoEnumIterator};

use crate::MoveParseError;

/// Axis of the cube.
///
/// Grid coordinates increase from left to right along X, from bottom to top
/// along Y, and from front to back along Z.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum Axis {
    /// Left-right axis, turned by `R` and `L`.
    X,
    /// Down-up axis, turned by `U` and `D`.
    Y,
    /// Front-back axis, turned by `F` and `B`.
    Z,
}

impl Axis {
    /// Returns the face touching layer 0 along the axis.
    pub fn low_face(self) -> Face {
        match self {
            Axis::X => Face::L,
            Axis::Y => Face::D,
            Axis::Z => Face::F,
        }
    }

    /// Returns the face touching the last layer along the axis.
    pub fn high_face(self) -> Face {
        self.low_face().opposite()
    }
}

/// Face of the cube, also used to name a turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Face {
    /// Front
    F,
    /// Back
    B,
    /// Up
    U,
    /// Down
    D,
    /// Right
    R,
    /// Left
    L,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Face {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_letter(c).ok_or_else(|| MoveParseError::BadFace(s.to_owned())),
            (None, _) => Err(MoveParseError::Empty),
            (Some(_), Some(_)) => Err(MoveParseError::BadFace(s.to_owned())),
        }
    }
}

impl Face {
    /// Returns the letter for the face.
    pub fn letter(self) -> char {
        match self {
            Face::F => 'F',
            Face::B => 'B',
            Face::U => 'U',
            Face::D => 'D',
            Face::R => 'R',
            Face::L => 'L',
        }
    }

    /// Returns the face with a letter, case-insensitive.
    pub fn from_letter(c: char) -> Option<Self> {
        Self::iter().find(|face| face.letter() == c.to_ascii_uppercase())
    }

    /// Returns the axis that the face turns around.
    pub fn axis(self) -> Axis {
        match self {
            Face::F | Face::B => Axis::Z,
            Face::U | Face::D => Axis::Y,
            Face::R | Face::L => Axis::X,
        }
    }

    /// Returns the face on the other side of the cube.
    pub fn opposite(self) -> Self {
        match self {
            Face::F => Face::B,
            Face::B => Face::F,
            Face::U => Face::D,
            Face::D => Face::U,
            Face::R => Face::L,
            Face::L => Face::R,
        }
    }

    /// Returns whether the face touches layer 0 along its axis.
    pub fn is_low(self) -> bool {
        self == self.axis().low_face()
    }
}
