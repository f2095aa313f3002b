use ncube_notation::Face;
use serde::{Deserialize, Serialize};

use crate::Rgb;

/// Color of each face of a solved cube.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ColorScheme {
    /// Color of the `U` face.
    pub up: Rgb,
    /// Color of the `D` face.
    pub down: Rgb,
    /// Color of the `F` face.
    pub front: Rgb,
    /// Color of the `B` face.
    pub back: Rgb,
    /// Color of the `L` face.
    pub left: Rgb,
    /// Color of the `R` face.
    pub right: Rgb,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            up: Rgb::WHITE,
            down: Rgb::YELLOW,
            front: Rgb::RED,
            back: Rgb::ORANGE,
            left: Rgb::GREEN,
            right: Rgb::BLUE,
        }
    }
}

impl ColorScheme {
    /// Constructs a color scheme from hex strings in the order up, down,
    /// front, back, left, right.
    ///
    /// Any string that is not a valid `#rrggbb` code becomes white.
    pub fn from_hex(colors: [&str; 6]) -> Self {
        let [up, down, front, back, left, right] = colors.map(Rgb::parse_or_white);
        Self {
            up,
            down,
            front,
            back,
            left,
            right,
        }
    }

    /// Returns the color of a face.
    pub fn get(&self, face: Face) -> Rgb {
        match face {
            Face::F => self.front,
            Face::B => self.back,
            Face::U => self.up,
            Face::D => self.down,
            Face::R => self.right,
            Face::L => self.left,
        }
    }
}
