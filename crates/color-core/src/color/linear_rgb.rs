//! Linear RGB and CIE XYZ
//!
//! Linear RGB is the stepping stone between gamma-encoded sRGB and the CIE
//! spaces. The transfer functions here are the exact IEC 61966-2-1 curves;
//! catalog coordinates are compared to 1e-9, which rules out lookup tables.

use super::srgb::Srgb;

/// D65 reference white in XYZ.
pub const D65: [f64; 3] = [0.95047, 1.0, 1.08883];

/// A color in linear RGB color space.
///
/// Values are typically in the range 0.0..=1.0, but may exceed it for colors
/// converted back from out-of-gamut Lab coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Project onto CIE XYZ (D65).
    pub fn to_xyz(self) -> [f64; 3] {
        let LinearRgb { r, g, b } = self;
        [
            0.41239079926595948 * r + 0.35758433938387796 * g + 0.18048078840183429 * b,
            0.21263900587151036 * r + 0.71516867876775593 * g + 0.072192315360733715 * b,
            0.019330818715591851 * r + 0.11919477979462599 * g + 0.95053215224966058 * b,
        ]
    }

    /// Inverse of [`LinearRgb::to_xyz`].
    pub fn from_xyz([x, y, z]: [f64; 3]) -> Self {
        Self {
            r: 3.2409699419045214 * x - 1.5373831775700935 * y - 0.49861076029300328 * z,
            g: -0.96924363628087983 * x + 1.8759675015077207 * y + 0.041555057407175613 * z,
            b: 0.055630079696993609 * x - 0.20397695888897657 * y + 1.0569715142428786 * z,
        }
    }
}

/// sRGB decode for one channel.
#[inline]
pub fn linearize(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB encode for one channel.
#[inline]
pub fn delinearize(v: f64) -> f64 {
    if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

impl From<Srgb> for LinearRgb {
    fn from(c: Srgb) -> Self {
        Self {
            r: linearize(c.r),
            g: linearize(c.g),
            b: linearize(c.b),
        }
    }
}

impl From<LinearRgb> for Srgb {
    fn from(c: LinearRgb) -> Self {
        Srgb::new(delinearize(c.r), delinearize(c.g), delinearize(c.b))
    }
}
