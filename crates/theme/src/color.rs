//! Color space conversions.
//!
//! Hex strings are the exchange format of the whole engine. This module turns
//! them into RGB channels and HSL coordinates and back:
//! - `hex_to_rgb` / `rgb_to_hex` - 6-digit hex <-> 8-bit channels
//! - `rgb_to_hsl` / `hsl_to_rgb` - the usual bidirectional HSL transform
//! - `normalize_hex` / `is_valid_hex` - the stored `#RRGGBB` form
//! - `HexColor` - a hex string already known to parse, with its channels

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

/// RGB color representation.
///
/// Each component is a value from 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from unbounded channel values, clamping each to 0-255 and
    /// rounding to the nearest integer.
    pub fn clamped(r: f64, g: f64, b: f64) -> Self {
        fn channel(value: f64) -> u8 {
            value.clamp(0.0, 255.0).round() as u8
        }
        Self::new(channel(r), channel(g), channel(b))
    }
}

/// HSL coordinates: hue in degrees [0, 360), saturation and lightness in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Same hue and saturation, different lightness.
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }
}

/// A 6-digit hex color that is known to parse, kept together with its channels.
///
/// The text is kept exactly as given; use [`HexColor::normalized`] for the
/// stored `#RRGGBB` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    hex: String,
    rgb: Rgb,
}

impl HexColor {
    pub fn parse(hex: &str) -> Result<Self> {
        let rgb = hex_to_rgb(hex)?;
        Ok(Self {
            hex: hex.to_string(),
            rgb,
        })
    }

    /// Accept user input: `#RGB` or `#RRGGBB`, normalized to `#RRGGBB`.
    pub fn from_input(hex: &str) -> Option<Self> {
        if !is_valid_hex(hex) {
            return None;
        }
        Self::parse(&normalize_hex(hex)).ok()
    }

    /// Lowercase `#rrggbb`.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
        }
    }

    pub fn normalized(&self) -> Self {
        Self {
            hex: normalize_hex(&self.hex),
            rgb: self.rgb,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        rgb_to_hsl(self.rgb)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(hex: String) -> Result<Self> {
        let rgb = hex_to_rgb(&hex)?;
        Ok(Self { hex, rgb })
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.hex
    }
}

/// Parse a 6-digit hex color. The leading `#` is optional.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidColorFormat(hex.to_string()));
    }

    let channel = |start: usize| {
        u8::from_str_radix(&digits[start..start + 2], 16)
            .map_err(|_| ColorError::InvalidColorFormat(hex.to_string()))
    };

    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Format a color as lowercase `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;
    let sum = max + min;
    let l = sum / 2.0;

    // Achromatic: hue is undefined, report 0.
    if diff == 0.0 {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let s = if l > 0.5 {
        diff / (2.0 - sum)
    } else {
        diff / sum
    };

    let h = if max == r {
        (g - b) / diff + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / diff + 2.0
    } else {
        (r - g) / diff + 4.0
    };

    Hsl::new(h / 6.0 * 360.0, s * 100.0, l * 100.0)
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    if s == 0.0 {
        let v = l * 255.0;
        return Rgb::clamped(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::clamped(
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

/// Normalize to the stored `#RRGGBB` form: adds the missing `#`, expands
/// `#RGB` shorthand by digit duplication and uppercases the digits.
///
/// The input is not validated; pair with [`is_valid_hex`].
pub fn normalize_hex(hex: &str) -> String {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let expanded: String = if digits.chars().count() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    format!("#{}", expanded.to_uppercase())
}

/// Strict check: `#` followed by exactly 3 or 6 hex digits.
pub fn is_valid_hex(hex: &str) -> bool {
    hex.strip_prefix('#').is_some_and(|digits| {
        (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}
