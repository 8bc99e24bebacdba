//! CIE L\*a\*b\* color space
//!
//! Every catalog coordinate lives here. The scale is the unit scale the
//! catalogs are stored in: lightness runs 0.0..=1.0 and the chroma axes
//! roughly -1.0..=1.0 (conventional L\*a\*b\* divided by 100).
//!
//! Two metrics are defined over it. [`Lab::distance_squared`] is cheap and
//! drives every index traversal. [`Lab::ciede2000`] is the one reported to
//! users. They can disagree about which of two near-equidistant candidates is
//! closer; lookups rank by the former and never rerank by the latter.
//!
//! # References
//!
//! G. Sharma, W. Wu, E. Dalal, "The CIEDE2000 Color-Difference Formula:
//! Implementation Notes, Supplementary Test Data, and Mathematical Observations"

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::linear_rgb::{LinearRgb, D65};
use super::srgb::Srgb;

const EPSILON: f64 = 6.0 / 29.0;

/// 25^7, the chroma pivot of the CIEDE2000 G and R_C terms.
const POW25_7: f64 = 6_103_515_625.0;

/// A color in CIE L\*a\*b\* (D65), unit scale.
///
/// Serializes as `{"L": .., "a": .., "b": ..}`, the record format the
/// catalogs are stored in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 1.0 (white)
    #[serde(rename = "L")]
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Coordinate along one axis: 0 = L, 1 = a, 2 = b.
    ///
    /// # Panics
    ///
    /// Panics if `axis > 2`.
    #[inline]
    pub fn axis(&self, axis: usize) -> f64 {
        match axis {
            0 => self.l,
            1 => self.a,
            2 => self.b,
            _ => panic!("Lab has 3 axes, got axis {axis}"),
        }
    }

    /// Squared Euclidean distance, the ranking metric.
    ///
    /// ```
    /// use color_core::Lab;
    ///
    /// let white = Lab::new(1.0, 0.0, 0.0);
    /// let gray = Lab::new(0.5, 0.0, 0.0);
    /// assert_eq!(white.distance_squared(&gray), 0.25);
    /// ```
    #[inline]
    pub fn distance_squared(&self, other: &Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }

    /// Euclidean distance, the ranking metric.
    #[inline]
    pub fn distance(&self, other: &Lab) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// CIEDE2000 difference (kL = kC = kH = 1), reported on the unit scale.
    ///
    /// The formula is evaluated on conventional ×100 coordinates; the result
    /// is divided by 100 again so it is commensurate with the coordinates.
    /// Symmetric in its arguments.
    pub fn ciede2000(&self, other: &Lab) -> f64 {
        let (l1, a1, b1) = (self.l * 100.0, self.a * 100.0, self.b * 100.0);
        let (l2, a2, b2) = (other.l * 100.0, other.a * 100.0, other.b * 100.0);

        let c_mean = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
        let c_mean7 = c_mean.powi(7);
        let g = 0.5 * (1.0 - (c_mean7 / (c_mean7 + POW25_7)).sqrt());

        let a1p = a1 * (1.0 + g);
        let a2p = a2 * (1.0 + g);
        let c1p = a1p.hypot(b1);
        let c2p = a2p.hypot(b2);
        let h1p = hue_degrees(a1p, b1);
        let h2p = hue_degrees(a2p, b2);

        let dl = l2 - l1;
        let dc = c2p - c1p;
        let chroma_product = c1p * c2p;

        let dh = if chroma_product == 0.0 {
            0.0
        } else {
            let d = h2p - h1p;
            if d > 180.0 {
                d - 360.0
            } else if d < -180.0 {
                d + 360.0
            } else {
                d
            }
        };
        let big_dh = 2.0 * chroma_product.sqrt() * (dh.to_radians() / 2.0).sin();

        let l_mean = (l1 + l2) / 2.0;
        let cp_mean = (c1p + c2p) / 2.0;
        let hp_mean = if chroma_product == 0.0 {
            h1p + h2p
        } else if (h1p - h2p).abs() <= 180.0 {
            (h1p + h2p) / 2.0
        } else if h1p + h2p < 360.0 {
            (h1p + h2p + 360.0) / 2.0
        } else {
            (h1p + h2p - 360.0) / 2.0
        };

        let t = 1.0 - 0.17 * (hp_mean - 30.0).to_radians().cos()
            + 0.24 * (2.0 * hp_mean).to_radians().cos()
            + 0.32 * (3.0 * hp_mean + 6.0).to_radians().cos()
            - 0.20 * (4.0 * hp_mean - 63.0).to_radians().cos();

        let l50 = (l_mean - 50.0).powi(2);
        let sl = 1.0 + 0.015 * l50 / (20.0 + l50).sqrt();
        let sc = 1.0 + 0.045 * cp_mean;
        let sh = 1.0 + 0.015 * cp_mean * t;

        let delta_theta = 30.0 * (-((hp_mean - 275.0) / 25.0).powi(2)).exp();
        let cp_mean7 = cp_mean.powi(7);
        let rc = 2.0 * (cp_mean7 / (cp_mean7 + POW25_7)).sqrt();
        let rt = -(2.0 * delta_theta).to_radians().sin() * rc;

        let tl = dl / sl;
        let tc = dc / sc;
        let th = big_dh / sh;

        (tl * tl + tc * tc + th * th + rt * tc * th).sqrt() * 0.01
    }

    /// Convert back to sRGB. Out-of-gamut coordinates yield channels outside
    /// 0.0..=1.0; display conversions clamp.
    pub fn to_srgb(&self) -> Srgb {
        let fy = (self.l + 0.16) / 1.16;
        let fx = fy + self.a / 5.0;
        let fz = fy - self.b / 2.0;
        let xyz = [
            D65[0] * lab_finv(fx),
            D65[1] * lab_finv(fy),
            D65[2] * lab_finv(fz),
        ];
        Srgb::from(LinearRgb::from_xyz(xyz))
    }
}

/// Hue angle in degrees, in [0, 360). Zero for the achromatic axis.
fn hue_degrees(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a) * 180.0 / PI;
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON * EPSILON * EPSILON {
        t.cbrt()
    } else {
        t / 3.0 * (29.0 / 6.0) * (29.0 / 6.0) + 4.0 / 29.0
    }
}

fn lab_finv(t: f64) -> f64 {
    if t > EPSILON {
        t * t * t
    } else {
        3.0 * EPSILON * EPSILON * (t - 4.0 / 29.0)
    }
}

impl From<LinearRgb> for Lab {
    fn from(rgb: LinearRgb) -> Self {
        let [x, y, z] = rgb.to_xyz();
        let fy = lab_f(y / D65[1]);
        Self {
            l: 1.16 * fy - 0.16,
            a: 5.0 * (lab_f(x / D65[0]) - fy),
            b: 2.0 * (fy - lab_f(z / D65[2])),
        }
    }
}

impl From<Srgb> for Lab {
    /// ```
    /// use color_core::{Lab, Srgb};
    ///
    /// let lab = Lab::from(Srgb::from_u8(128, 128, 128));
    /// assert!(lab.a.abs() < 1e-3 && lab.b.abs() < 1e-3);
    /// ```
    fn from(c: Srgb) -> Self {
        Lab::from(LinearRgb::from(c))
    }
}
