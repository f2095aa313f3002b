use std::fmt;
use std::str::FromStr;

use serde::de::Error;
use thiserror::Error;

/// 8-bit sRGB color that serializes to a string like `"#ff00ff"`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// sRGB component values.
    pub rgb: [u8; 3],
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.rgb))
    }
}
impl FromStr for Rgb {
    type Err = RgbParseError;

    /// Parses a color from exactly `#` followed by six hex digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(RgbParseError::MissingHash)?;
        if digits.len() != 6 {
            return Err(RgbParseError::BadLength(digits.len()));
        }
        let mut rgb = [0_u8; 3];
        hex::decode_to_slice(digits, &mut rgb)?;
        Ok(Rgb { rgb })
    }
}
impl serde::Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Self>().map_err(D::Error::custom)
    }
}
impl Rgb {
    /// Pure white
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    /// Yellow
    pub const YELLOW: Rgb = Rgb::new(0xff, 0xff, 0x00);
    /// Red
    pub const RED: Rgb = Rgb::new(0xff, 0x00, 0x00);
    /// Orange
    pub const ORANGE: Rgb = Rgb::new(0xff, 0x6f, 0x00);
    /// Green
    pub const GREEN: Rgb = Rgb::new(0x00, 0xff, 0x00);
    /// Blue
    pub const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xff);

    /// Constructs a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }

    /// Parses a color, falling back to white if `s` is not a valid
    /// `#rrggbb` code.
    pub fn parse_or_white(s: &str) -> Self {
        s.parse().unwrap_or_else(|e| {
            log::warn!("invalid color {s:?} ({e}); using white");
            Self::WHITE
        })
    }
}

/// Error produced when parsing a color.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RgbParseError {
    /// Color does not start with `#`
    #[error("color must start with '#'")]
    MissingHash,
    /// Wrong number of hex digits
    #[error("expected 6 hex digits, got {0}")]
    BadLength(usize),
    /// Invalid hex digit
    #[error("{0}")]
    Hex(#[from] hex::FromHexError),
}

// `hex::FromHexError` only implements `PartialEq`, but its comparison is total.
impl Eq for RgbParseError {}
