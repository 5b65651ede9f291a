//! Background colors and the rotation that hands them out.

use std::str::FromStr;

use crate::app::error::AvatarError;

/// Background colors, in the order the rotation visits them.
pub const PALETTE: [&str; 11] = [
    "#F44336", "#E91E63", "#9C27B0", "#673AB7", "#3F51B5", "#2196F3", "#009688", "#4CAF50",
    "#F57F17", "#795548", "#424242",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 0xFF,
        g: 0xFF,
        b: 0xFF,
    };
}

impl FromStr for Rgb {
    type Err = AvatarError;

    /// Parses `#RRGGBB`, the leading `#` being optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        let mut bytes = [0u8; 3];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| AvatarError::InvalidColor(s.to_string()))?;

        Ok(Rgb {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
        })
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", hex::encode_upper([self.r, self.g, self.b]))
    }
}

/// Cursor over [`PALETTE`] that wraps after the last color.
#[derive(Debug, Clone)]
pub struct ColorRotation {
    colors: Vec<Rgb>,
    cursor: usize,
}

impl ColorRotation {
    pub fn new() -> Result<Self, AvatarError> {
        let colors = PALETTE
            .iter()
            .map(|hex| hex.parse())
            .collect::<Result<Vec<Rgb>, _>>()?;

        Ok(Self { colors, cursor: 0 })
    }

    /// Returns the color under the cursor with its palette index, then moves on.
    pub fn advance(&mut self) -> (usize, Rgb) {
        let index = self.cursor;
        self.cursor = (self.cursor + 1) % self.colors.len();

        (index, self.colors[index])
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
