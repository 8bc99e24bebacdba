//! CIE L\*u\*v\* in cylindrical form (LCh(uv))
//!
//! Only used to order the name catalog, so there is no inverse.

use super::linear_rgb::{LinearRgb, D65};
use super::srgb::Srgb;

/// Lightness, chroma, hue (degrees) in CIE LCh(uv), D65, unit scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuvLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

fn xyz_to_uv([x, y, z]: [f64; 3]) -> (f64, f64) {
    let denom = x + 15.0 * y + 3.0 * z;
    if denom == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * x / denom, 9.0 * y / denom)
    }
}

impl From<Srgb> for LuvLch {
    fn from(c: Srgb) -> Self {
        let xyz = LinearRgb::from(c).to_xyz();
        let yr = xyz[1] / D65[1];
        let l = if yr <= (6.0f64 / 29.0).powi(3) {
            yr * (29.0f64 / 3.0).powi(3) / 100.0
        } else {
            1.16 * yr.cbrt() - 0.16
        };

        let (ubis, vbis) = xyz_to_uv(xyz);
        let (un, vn) = xyz_to_uv(D65);
        let u = 13.0 * l * (ubis - un);
        let v = 13.0 * l * (vbis - vn);

        // Near-neutral colors get hue 0 rather than atan2 noise
        let h = if (v - u).abs() > 1e-4 && u.abs() > 1e-4 {
            (v.atan2(u).to_degrees() + 360.0) % 360.0
        } else {
            0.0
        };

        Self {
            l,
            c: u.hypot(v),
            h,
        }
    }
}
