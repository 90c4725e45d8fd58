//! Packed `0xRRGGBB` colors as stored in the planet catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 24-bit RGB color packed into a `u32` as `0xRRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackedColor(pub u32);

impl PackedColor {
    /// Pure black. Used as the "no emission" color.
    pub const BLACK: Self = Self(0x000000);

    /// Red channel in `0..=255`.
    pub fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green channel in `0..=255`.
    pub fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue channel in `0..=255`.
    pub fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Channels normalized to `[0.0, 1.0]`.
    pub fn to_rgb(self) -> [f32; 3] {
        [
            self.r() as f32 / 255.0,
            self.g() as f32 / 255.0,
            self.b() as f32 / 255.0,
        ]
    }
}

impl From<u32> for PackedColor {
    fn from(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
    }
}
