//! Cylindrical sRGB models: HSL and HSV
//!
//! Hue is in degrees, 0.0..360.0. Saturation, lightness and value are
//! 0.0..=1.0. Achromatic colors get hue 0.

use super::srgb::Srgb;

/// Hue, saturation, lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Hue, saturation, value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Hue in degrees from the max channel, shared by HSL and HSV.
fn hue(c: &Srgb, max: f64, chroma: f64) -> f64 {
    let sector = if max == c.r {
        ((c.g - c.b) / chroma) % 6.0
    } else if max == c.g {
        (c.b - c.r) / chroma + 2.0
    } else {
        (c.r - c.g) / chroma + 4.0
    };
    let h = sector * 60.0;
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

impl Hsl {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert back to sRGB.
    ///
    /// ```
    /// use color_core::Hsl;
    ///
    /// let red = Hsl::new(0.0, 1.0, 0.5).to_srgb();
    /// assert_eq!(red.to_hex(), "#ff0000");
    /// ```
    pub fn to_srgb(&self) -> Srgb {
        if self.s == 0.0 {
            return Srgb::new(self.l, self.l, self.l);
        }

        let t1 = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let t2 = 2.0 * self.l - t1;
        let h = self.h / 360.0;

        let channel = |t: f64| {
            let t = if t < 0.0 {
                t + 1.0
            } else if t > 1.0 {
                t - 1.0
            } else {
                t
            };
            if 6.0 * t < 1.0 {
                t2 + (t1 - t2) * 6.0 * t
            } else if 2.0 * t < 1.0 {
                t1
            } else if 3.0 * t < 2.0 {
                t2 + (t1 - t2) * (2.0 / 3.0 - t) * 6.0
            } else {
                t2
            }
        };

        Srgb::new(
            channel(h + 1.0 / 3.0),
            channel(h),
            channel(h - 1.0 / 3.0),
        )
    }
}

impl From<Srgb> for Hsl {
    fn from(c: Srgb) -> Self {
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self { h: 0.0, s: 0.0, l };
        }

        let chroma = max - min;
        let s = if l < 0.5 {
            chroma / (max + min)
        } else {
            chroma / (2.0 - max - min)
        };
        Self {
            h: hue(&c, max, chroma),
            s,
            l,
        }
    }
}

impl From<Srgb> for Hsv {
    fn from(c: Srgb) -> Self {
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let chroma = max - min;

        let s = if max == 0.0 { 0.0 } else { chroma / max };
        let h = if chroma == 0.0 {
            0.0
        } else {
            hue(&c, max, chroma)
        };
        Self { h, s, v: max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl(hex: &str) -> Hsl {
        Hsl::from(hex.parse::<Srgb>().unwrap())
    }

    #[test]
    fn test_hsl_primaries() {
        let red = hsl("#ff0000");
        assert_eq!((red.h, red.s, red.l), (0.0, 1.0, 0.5));

        let green = hsl("#00ff00");
        assert_eq!(green.h, 120.0);

        let blue = hsl("#0000ff");
        assert_eq!(blue.h, 240.0);

        let magenta = hsl("#ff00ff");
        assert_eq!(magenta.h, 300.0);
    }

    #[test]
    fn test_hsl_gray_has_no_hue() {
        let gray = hsl("#808080");
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert!((gray.l - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_hsl_round_trip() {
        for hex in ["#8a4578", "#20b2aa", "#fafad2", "#0a0b0c", "#ff7f50", "#ffffff"] {
            let back = hsl(hex).to_srgb();
            assert_eq!(back.to_hex(), hex);
        }
    }

    #[test]
    fn test_hsl_to_srgb_rounds_half_channel_down() {
        // green lands a hair under 0.5, which rounds to 0x7f
        assert_eq!(Hsl::new(180.0, 1.0, 0.25).to_srgb().to_hex(), "#007f80");
        assert_eq!(Hsl::new(0.0, 1.0, 0.5).to_srgb().to_hex(), "#ff0000");
    }

    #[test]
    fn test_hsl_hue_wraps_below_zero() {
        // red dominant with blue above green gives a negative raw hue
        let c = hsl("#ff0080");
        assert!((c.h - 329.88).abs() < 0.01, "{}", c.h);
    }

    #[test]
    fn test_hsv() {
        let c = Hsv::from("#8a4578".parse::<Srgb>().unwrap());
        assert!((c.h - 315.65).abs() < 0.01, "{}", c.h);
        assert!((c.s - 0.5).abs() < 1e-12);
        assert!((c.v - 138.0 / 255.0).abs() < 1e-12);

        let black = Hsv::from(Srgb::from_u8(0, 0, 0));
        assert_eq!((black.h, black.s, black.v), (0.0, 0.0, 0.0));
    }
}
