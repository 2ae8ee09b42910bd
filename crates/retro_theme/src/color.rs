//! RGBA color values and hex conversions
//!
//! Theme palettes are authored as hex literals, and screens frequently need
//! a translucent variant of a palette color (text shadows, overlays). Both
//! directions are covered here: [`Color::parse_hex`] / [`Color::to_hex`] and
//! [`change_hex_alpha`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// RGBA color with components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Error returned when a hex color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("hex color must start with `#`, got `{0}`")]
    MissingHash(String),

    #[error("hex color `{0}` must have 3, 6 or 8 digits")]
    InvalidLength(String),

    #[error("hex color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Build a color from `0xRRGGBBAA`
    pub fn from_hex_rgba(hex: u32) -> Self {
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::from_hex(hex >> 8).with_alpha(a)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let Some(digits) = input.trim().strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(input.to_string()));
        };
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_string(),
            _ => return Err(ColorParseError::InvalidLength(input.to_string())),
        };
        let value = u32::from_str_radix(&expanded, 16)
            .map_err(|_| ColorParseError::InvalidDigit(input.to_string()))?;

        Ok(if expanded.len() == 8 {
            Self::from_hex_rgba(value)
        } else {
            Self::from_hex(value)
        })
    }

    /// Hex form: `#rrggbb` when opaque, `#rrggbbaa` otherwise
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_u8_array();
        if a == 0xFF {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn to_u8_array(&self) -> [u8; 4] {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }

    /// Same color at `percent` opacity (clamped to `0..=100`)
    pub fn change_hex_alpha(self, percent: f32) -> Self {
        self.with_alpha(percent.clamp(0.0, 100.0) / 100.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

/// Free-function form of [`Color::change_hex_alpha`], kept for call sites
/// that work on palette values directly.
pub fn change_hex_alpha(color: Color, percent: f32) -> Color {
    color.change_hex_alpha(percent)
}
