//! Color values and the contrast-color utility.
//!
//! ## Representation
//!
//! A `HexColor` is a 24-bit RGB value. Its canonical text form is `#`
//! followed by six uppercase hex digits (`#A1B2C3`). Parsing is lenient:
//! the leading `#` is optional, digits may be lowercase, and the 3-digit
//! shorthand `#ABC` expands to `#AABBCC`.
//!
//! ```
//! use truecolor::core::HexColor;
//!
//! let color: HexColor = "#a1b2c3".parse().unwrap();
//! assert_eq!(color.to_string(), "#A1B2C3");
//! assert_eq!(color.rgb(), (0xA1, 0xB2, 0xC3));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::FormatError;

/// Candidate identifier, unique within a round.
///
/// Ids are assigned `0..k` in generation order, so an id doubles as the
/// candidate's index in its round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColorId(pub u8);

impl ColorId {
    /// Create a new color ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Index into the round's candidate list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

/// A 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HexColor(u32);

impl HexColor {
    pub const BLACK: HexColor = HexColor(0x000000);
    pub const WHITE: HexColor = HexColor(0xFFFFFF);

    /// Build from a packed `0xRRGGBB` value. Bits above 24 are dropped.
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Self(value & 0xFF_FFFF)
    }

    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Packed `0xRRGGBB` value.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }

    /// Perceived brightness on a 0-255 scale (ITU-R BT.601 weights).
    #[must_use]
    pub fn brightness(self) -> f64 {
        let (r, g, b) = self.rgb();
        f64::from(r) * 0.299 + f64::from(g) * 0.587 + f64::from(b) * 0.114
    }

    /// Per-channel complement (`255 - c`).
    #[must_use]
    pub const fn inverted(self) -> Self {
        Self(!self.0 & 0xFF_FFFF)
    }

    /// Black or white, whichever reads better on top of this color.
    #[must_use]
    pub fn contrast(self) -> Self {
        if self.brightness() > 150.0 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }

    /// Parse `#RGB`, `#RRGGBB`, `RGB` or `RRGGBB`, any case.
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        let digits = input.strip_prefix('#').unwrap_or(input);

        let mut nibbles = [0u8; 6];
        let count = digits.chars().count();
        match count {
            3 | 6 => {}
            n => return Err(FormatError::Length(n)),
        }

        for (i, ch) in digits.chars().enumerate() {
            let value = ch.to_digit(16).ok_or_else(|| FormatError::Digit {
                input: input.to_string(),
                digit: ch,
            })? as u8;
            if count == 3 {
                nibbles[i * 2] = value;
                nibbles[i * 2 + 1] = value;
            } else {
                nibbles[i] = value;
            }
        }

        let packed = nibbles
            .iter()
            .fold(0u32, |acc, &n| (acc << 4) | u32::from(n));
        Ok(Self(packed))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl FromStr for HexColor {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for HexColor {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// One candidate swatch in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub id: ColorId,
    pub hex: HexColor,
}

impl Color {
    #[must_use]
    pub const fn new(id: ColorId, hex: HexColor) -> Self {
        Self { id, hex }
    }
}

/// Color to draw on top of `input`.
///
/// With `bw` set, returns black or white depending on the input's
/// brightness. Otherwise returns the channel-wise inverse.
///
/// ```
/// use truecolor::core::inverse_hex_color;
///
/// assert_eq!(inverse_hex_color("#FFFFFF", true).unwrap().to_string(), "#000000");
/// assert_eq!(inverse_hex_color("#808080", false).unwrap().to_string(), "#7F7F7F");
/// ```
pub fn inverse_hex_color(input: &str, bw: bool) -> Result<HexColor, FormatError> {
    let color = HexColor::parse(input)?;
    Ok(if bw { color.contrast() } else { color.inverted() })
}
