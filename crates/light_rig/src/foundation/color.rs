//! RGB colors with in-place mutation
//!
//! Light and material colors are mutable holders: edits go through
//! [`Color::set`] so the holder embedded in a light keeps its identity and
//! anything observing the light sees the new value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::math::Vec3;

/// Linear RGB color with components in `0.0..=1.0`
///
/// Serialized as a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

/// Errors produced when parsing a color string
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Not six hex digits
    #[error("expected #rrggbb, got {0:?}")]
    BadLength(String),

    /// Contains non-hex characters
    #[error("invalid hex digits in {0:?}")]
    BadDigits(String),
}

impl Color {
    /// Pure white
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    /// Pure black
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };

    /// Create a color from components
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xrrggbb` value
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| f32::from(((hex >> shift) & 0xff) as u8) / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn parse(text: &str) -> Result<Self, ColorParseError> {
        let digits = text.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(ColorParseError::BadLength(text.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_hex)
            .map_err(|_| ColorParseError::BadDigits(text.to_string()))
    }

    /// Overwrite this color's value in place
    pub fn set(&mut self, other: Self) {
        self.r = other.r;
        self.g = other.g;
        self.b = other.b;
    }

    /// Overwrite this color from a packed `0xrrggbb` value
    pub fn set_hex(&mut self, hex: u32) {
        self.set(Self::from_hex(hex));
    }

    /// Packed `0xrrggbb` value
    pub fn hex(&self) -> u32 {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// `#rrggbb` representation
    pub fn hex_string(&self) -> String {
        format!("#{:06x}", self.hex())
    }

    /// Components as a vector, as shaders consume them
    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_string())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex_string()
    }
}
