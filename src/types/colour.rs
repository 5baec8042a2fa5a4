//! Colour type, parsing and blending.
//!
//! Colours carry straight (non-premultiplied) 8-bit alpha: `0` is fully
//! transparent and `255` fully opaque, the same convention PNG uses.
//!
//! Surface feature ranges are often easier to express as *transparency
//! steps* on a 7-bit scale (`0` opaque, `127` clear). Those values are
//! converted once through [`Colour::translucent`] and never stored.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StarError};

/// Highest value on the 7-bit transparency scale.
pub const MAX_TRANSPARENCY: u8 = 127;

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a colour from RGB components and a 7-bit transparency step.
    ///
    /// `transparency` 0 is opaque and 127 is clear; larger values are clamped.
    pub fn translucent(r: i32, g: i32, b: i32, transparency: i32) -> Self {
        let t = transparency.clamp(0, MAX_TRANSPARENCY as i32) as f32;
        let alpha = 255.0 - (t * 255.0 / MAX_TRANSPARENCY as f32).round();
        Self::new(channel(r), channel(g), channel(b), alpha as u8)
    }

    /// This colour's alpha expressed as a 7-bit transparency step.
    pub fn transparency(self) -> i32 {
        ((255 - self.a as i32) as f32 * MAX_TRANSPARENCY as f32 / 255.0).round() as i32
    }

    /// Same colour with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 => {
                let mut digits = [0u8; 3];
                for (slot, c) in digits.iter_mut().zip(hex.chars()) {
                    *slot = parse_hex_digit(c)?;
                }
                let [r, g, b] = digits;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = parse_hex_byte(&hex[6..8])?;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Composite `self` on top of `dst` using source-over blending.
    ///
    /// `outA = sA + dA(1 - sA)` and `outC = (sC·sA + dC·dA(1 - sA)) / outA`
    /// with alpha normalised to `[0, 1]`.
    pub fn over(self, dst: Colour) -> Colour {
        if self.a == 0 {
            return dst;
        }
        if self.a == 255 || dst.a == 0 {
            return self;
        }

        let sa = self.a as f32 / 255.0;
        let da = dst.a as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);

        let mix = |s: u8, d: u8| -> u8 {
            let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };

        Colour::new(
            mix(self.r, dst.r),
            mix(self.g, dst.g),
            mix(self.b, dst.b),
            (out_a * 255.0).round() as u8,
        )
    }
}

impl FromStr for Colour {
    type Err = StarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Clamp an integer channel value into `0..=255`.
pub fn channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

fn invalid_hex(s: &str) -> StarError {
    StarError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| StarError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| StarError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
