//! sRGB color type
//!
//! sRGB is the encoding every external color arrives in: hex strings from
//! clients, 8-bit triples from vendor files. It is also the display form we
//! hand back.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// A color in sRGB color space.
///
/// Values are in the range 0.0..=1.0 (mapping to 0..255 for 8-bit). Colors
/// produced by converting back from Lab may fall slightly outside that range;
/// [`Srgb::to_bytes`] and [`Srgb::to_hex`] clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-corrected, 0.0..=1.0)
    pub r: f64,
    /// Green channel (gamma-corrected, 0.0..=1.0)
    pub g: f64,
    /// Blue channel (gamma-corrected, 0.0..=1.0)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use color_core::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Create an Srgb color from integer channels, rejecting values outside 0..=255.
    ///
    /// Vendor files and `rgb()` strings carry plain integers; this is the
    /// checked entry point for them.
    ///
    /// ```
    /// use color_core::{ParseColorError, Srgb};
    /// assert!(Srgb::from_channels(12, 34, 56).is_ok());
    /// assert_eq!(
    ///     Srgb::from_channels(256, 0, 0),
    ///     Err(ParseColorError::ChannelOutOfRange(256))
    /// );
    /// ```
    pub fn from_channels(r: i64, g: i64, b: i64) -> Result<Self, ParseColorError> {
        let channel = |v: i64| u8::try_from(v).map_err(|_| ParseColorError::ChannelOutOfRange(v));
        Ok(Self::from_u8(channel(r)?, channel(g)?, channel(b)?))
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds half up and clamps values to the 0..=255 range.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        let byte = |v: f64| (v * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8;
        [byte(self.r), byte(self.g), byte(self.b)]
    }

    /// Lowercase `#rrggbb` display form.
    ///
    /// ```
    /// use color_core::Srgb;
    /// assert_eq!(Srgb::from_u8(0x8A, 0x45, 0x78).to_hex(), "#8a4578");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB` - standard 6-digit hex, hash optional
    /// - `#RGB` / `RGB` - shorthand 3-digit hex (expands to RRGGBB)
    /// - `rgb(r, g, b)` - integer channels 0..=255
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_core::Srgb;
    ///
    /// let white: Srgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.r, 1.0);
    ///
    /// let red: Srgb = "rgb(255, 0, 0)".parse().unwrap();
    /// assert_eq!(red.g, 0.0);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(args) = strip_rgb_function(s) {
            return parse_rgb_args(args, s);
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.is_empty() {
            return Err(ParseColorError::Empty);
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            // Length is only meaningful once we know we are looking at digits
            return Err(if hex.is_ascii() && !matches!(hex.len(), 3 | 6) {
                ParseColorError::InvalidLength(hex.len())
            } else {
                ParseColorError::InvalidHex(s.to_string())
            });
        }

        // All bytes are ASCII hex digits from here on, so slicing is safe
        let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16);
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let invalid = |_| ParseColorError::InvalidHex(s.to_string());

        match hex.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = digit(0).map_err(invalid)? * 17;
                let g = digit(1).map_err(invalid)? * 17;
                let b = digit(2).map_err(invalid)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = pair(0).map_err(invalid)?;
                let g = pair(2).map_err(invalid)?;
                let b = pair(4).map_err(invalid)?;
                Ok(Self::from_u8(r, g, b))
            }
            n => Err(ParseColorError::InvalidLength(n)),
        }
    }
}

fn strip_rgb_function(s: &str) -> Option<&str> {
    let head = s.get(..4)?;
    if !head.eq_ignore_ascii_case("rgb(") {
        return None;
    }
    s[4..].strip_suffix(')')
}

fn parse_rgb_args(args: &str, original: &str) -> Result<Srgb, ParseColorError> {
    let channels: Vec<i64> = args
        .split(',')
        .map(|part| part.trim().parse::<i64>())
        .collect::<Result<_, _>>()
        .map_err(|_| ParseColorError::Unrecognized(original.to_string()))?;

    match channels.as_slice() {
        [r, g, b] => Srgb::from_channels(*r, *g, *b),
        _ => Err(ParseColorError::Unrecognized(original.to_string())),
    }
}
