//! Natural gradient synthesis
//!
//! Derives five related colors from one input. Natural gradients drift in
//! hue and saturation as lightness changes, so each step moves all three
//! HSL components by amounts taken from per-position tables.
//!
//! The input's lightness decides where it sits in the gradient. A mid-tone
//! is the center of five steps; a very light or very dark input becomes the
//! last or first step so the others stay inside the valid lightness range.
//! See [`position_state`].

use crate::color::{Hsl, Lab, Srgb};

/// Spacing between gradient steps on the lightness axis.
pub const STEP: f64 = 0.2;

/// Number of colors in every gradient.
pub const GRADIENT_LEN: usize = 5;

const LIGHTNESS_BOUNDS: (f64, f64) = (0.0, 1.0);

const LOW_SATURATION: f64 = 0.08;
const HIGH_SATURATION: f64 = 0.5;
const HIGH_LIGHTNESS: f64 = 0.79;

/// One synthesized color.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedColor {
    /// The adjusted HSL triple after wrapping and clamping
    pub hsl: Hsl,
    /// Lowercase `#rrggbb`
    pub hex: String,
    pub lab: Lab,
}

/// Five derived colors in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub colors: [DerivedColor; GRADIENT_LEN],
}

/// Classify where a five-point span centered on `value` falls against
/// `bounds`.
///
/// The span has points at `value ± spacing` and `value ± 2·spacing`.
///
/// | state | meaning                                 |
/// |-------|-----------------------------------------|
/// | `-2`  | both low points fall below the bounds   |
/// | `-1`  | only the outermost low point does       |
/// | `0`   | the span fits                           |
/// | `1`   | only the outermost high point overruns  |
/// | `2`   | both high points overrun                |
///
/// ```
/// use color_core::gradient::position_state;
///
/// assert_eq!(position_state(0.5, 0.2, (0.0, 1.0)), 0);
/// assert_eq!(position_state(0.05, 0.2, (0.0, 1.0)), -2);
/// assert_eq!(position_state(0.3, 0.2, (0.0, 1.0)), -1);
/// ```
pub fn position_state(value: f64, spacing: f64, bounds: (f64, f64)) -> i8 {
    let (low, high) = bounds;
    let outer_low = value - 2.0 * spacing;
    let inner_low = value - spacing;
    let inner_high = value + spacing;
    let outer_high = value + 2.0 * spacing;

    if outer_low < low && inner_low < low {
        -2
    } else if outer_low < low {
        -1
    } else if outer_high > high && inner_high > high {
        2
    } else if outer_high > high {
        1
    } else {
        0
    }
}

/// Correction terms applied on top of the per-state tables.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Corrections {
    saturation: f64,
    lightness: f64,
}

impl Corrections {
    fn for_input(s: f64, l: f64) -> Self {
        let (mut lightness, saturation) = if s < LOW_SATURATION {
            (0.03, 0.05)
        } else if s > HIGH_SATURATION {
            (0.0, -0.05)
        } else {
            (0.0, 0.0)
        };
        // High lightness overrides the low-saturation boost
        if l > HIGH_LIGHTNESS {
            lightness = -0.03;
        }
        Self {
            saturation,
            lightness,
        }
    }
}

/// Raw (hue, saturation, lightness) tables for a state, before wrapping and
/// clamping.
fn tables(state: i8, h: f64, s: f64, l: f64, c: Corrections) -> [[f64; GRADIENT_LEN]; 3] {
    let sc = c.saturation;
    let lc = c.lightness;

    match state {
        0 => {
            let v = 0.09;
            [
                [h - 2.0, h - 1.0, h, h + 1.0, h + 2.0],
                [s * 0.83, s * 0.91, s, s * (1.1 + sc), s * (1.2 + sc * 2.0)],
                [
                    (l - v * 1.75) + 2.0 * lc,
                    (l - v) + lc,
                    l,
                    (l + v) + lc,
                    (l + 2.0 * v) + 2.0 * lc,
                ],
            ]
        }
        1 => {
            let v = 0.07;
            [
                [h - 3.0, h - 2.0, h - 1.0, h, h + 1.0],
                [s * 0.77, s * 0.83, s * 0.91, s, s * (1.1 + sc)],
                [
                    (l - 3.0 * v) + 3.0 * lc,
                    (l - 2.0 * v) + 2.0 * lc,
                    (l - v) + lc,
                    l,
                    (l + v) + lc,
                ],
            ]
        }
        -1 => {
            let v = 0.07;
            [
                [h - 1.0, h, h + 1.0, h + 2.0, h + 3.0],
                [
                    s * 0.9,
                    s,
                    s * (1.1 + sc),
                    s * (1.2 + sc * 2.0),
                    s * (1.3 + sc * 2.0),
                ],
                [
                    l - v,
                    l,
                    l + v,
                    (l + v * 2.0) + 2.0 * lc,
                    (l + v * 3.0) + 3.0 * lc,
                ],
            ]
        }
        2 => {
            let v = 0.06;
            [
                [h - 4.0, h - 3.0, h - 2.0, h - 1.0, h],
                [s * 0.5, s * 0.6, s * 0.7, s * 0.8, s],
                [l - 4.0 * v, l - 3.0 * v, l - 2.0 * v, l - v, l],
            ]
        }
        _ => {
            let v = 0.06;
            [
                [h, h + 1.0, h + 2.0, h + 3.0, h + 4.0],
                [s, s, s, s * (1.1 + sc), s * (1.2 + sc * 2.0)],
                [
                    l,
                    l + v + lc,
                    l + 2.0 * v + 2.0 * lc,
                    (l + 3.0 * v) + 3.0 * lc,
                    (l + 4.0 * v) + 4.0 * lc,
                ],
            ]
        }
    }
}

/// Wrap into [0, 360). `rem_euclid` alone can round a tiny negative up to 360.
fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Synthesize the five-color gradient for `color`.
///
/// Never fails: every derived component is wrapped or clamped into range.
///
/// ```
/// use color_core::{gradient, Srgb};
///
/// let g = gradient::synthesize(&"#8a4578".parse::<Srgb>().unwrap());
/// assert_eq!(g.colors.len(), 5);
/// // mid-tone input sits in the middle of its gradient
/// assert_eq!(g.colors[2].hex, "#8a4578");
/// ```
pub fn synthesize(color: &Srgb) -> Gradient {
    let Hsl { h, s, l } = Hsl::from(*color);
    let state = position_state(l, STEP, LIGHTNESS_BOUNDS);
    let [hues, sats, lits] = tables(state, h, s, l, Corrections::for_input(s, l));

    let colors = std::array::from_fn(|i| {
        let hsl = Hsl::new(
            wrap_hue(hues[i]),
            sats[i].clamp(0.0, 1.0),
            lits[i].clamp(0.01, 0.99),
        );
        let srgb = hsl.to_srgb();
        DerivedColor {
            hsl,
            hex: srgb.to_hex(),
            lab: Lab::from(srgb),
        }
    });

    Gradient { colors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(hex: &str) -> Gradient {
        synthesize(&hex.parse::<Srgb>().unwrap())
    }

    #[test]
    fn test_position_state_all_branches() {
        let b = (0.0, 1.0);
        assert_eq!(position_state(0.1, STEP, b), -2);
        assert_eq!(position_state(0.3, STEP, b), -1);
        assert_eq!(position_state(0.4, STEP, b), 0);
        assert_eq!(position_state(0.55, STEP, b), 0);
        assert_eq!(position_state(0.7, STEP, b), 1);
        assert_eq!(position_state(0.9, STEP, b), 2);
        assert_eq!(position_state(0.0, STEP, b), -2);
        assert_eq!(position_state(1.0, STEP, b), 2);
    }

    #[test]
    fn test_position_state_respects_bounds() {
        assert_eq!(position_state(50.0, 20.0, (0.0, 100.0)), 0);
        assert_eq!(position_state(5.0, 20.0, (0.0, 100.0)), -2);
        assert_eq!(position_state(0.5, STEP, (0.4, 0.6)), -2);
    }

    #[test]
    fn test_corrections() {
        assert_eq!(
            Corrections::for_input(0.05, 0.5),
            Corrections {
                saturation: 0.05,
                lightness: 0.03
            }
        );
        assert_eq!(
            Corrections::for_input(0.7, 0.5),
            Corrections {
                saturation: -0.05,
                lightness: 0.0
            }
        );
        assert_eq!(
            Corrections::for_input(0.3, 0.5),
            Corrections {
                saturation: 0.0,
                lightness: 0.0
            }
        );
        // high lightness wins over the low-saturation boost
        assert_eq!(
            Corrections::for_input(0.05, 0.9),
            Corrections {
                saturation: 0.05,
                lightness: -0.03
            }
        );
    }

    fn assert_hsl_steps(actual: [[f64; GRADIENT_LEN]; 3], expected: [(f64, f64, f64); GRADIENT_LEN]) {
        let [hues, sats, lits] = actual;
        for (i, (h, s, l)) in expected.into_iter().enumerate() {
            assert!((hues[i] - h).abs() < 1e-12, "step {i} hue {} != {h}", hues[i]);
            assert!((sats[i] - s).abs() < 1e-12, "step {i} sat {} != {s}", sats[i]);
            assert!((lits[i] - l).abs() < 1e-12, "step {i} light {} != {l}", lits[i]);
        }
    }

    fn synthesized_steps(hex: &str) -> [[f64; GRADIENT_LEN]; 3] {
        let g = gradient(hex);
        [
            std::array::from_fn(|i| g.colors[i].hsl.h),
            std::array::from_fn(|i| g.colors[i].hsl.s),
            std::array::from_fn(|i| g.colors[i].hsl.l),
        ]
    }

    #[test]
    fn test_upper_shifted_table() {
        // low saturation: sc = 0.05, lc = 0.03
        let c = Corrections::for_input(0.05, 0.7);
        assert_hsl_steps(
            tables(1, 100.0, 0.05, 0.7, c),
            [
                (97.0, 0.0385, 0.58),
                (98.0, 0.0415, 0.62),
                (99.0, 0.0455, 0.66),
                (100.0, 0.05, 0.7),
                (101.0, 0.0575, 0.80),
            ],
        );

        let base = Hsl::from("#a3c2c2".parse::<Srgb>().unwrap());
        assert_eq!(position_state(base.l, STEP, LIGHTNESS_BOUNDS), 1);
        let Hsl { h, s, l } = base;
        assert_hsl_steps(
            synthesized_steps("#a3c2c2"),
            [
                (h - 3.0, s * 0.77, l - 0.21),
                (h - 2.0, s * 0.83, l - 0.14),
                (h - 1.0, s * 0.91, l - 0.07),
                (h, s, l),
                (h + 1.0, s * 1.1, l + 0.07),
            ],
        );
    }

    #[test]
    fn test_lower_shifted_table() {
        let c = Corrections::for_input(0.05, 0.3);
        assert_hsl_steps(
            tables(-1, 200.0, 0.05, 0.3, c),
            [
                (199.0, 0.045, 0.23),
                (200.0, 0.05, 0.3),
                (201.0, 0.0575, 0.37),
                (202.0, 0.065, 0.50),
                (203.0, 0.07, 0.60),
            ],
        );

        let base = Hsl::from("#33334d".parse::<Srgb>().unwrap());
        assert_eq!(position_state(base.l, STEP, LIGHTNESS_BOUNDS), -1);
        let Hsl { h, s, l } = base;
        assert_hsl_steps(
            synthesized_steps("#33334d"),
            [
                (h - 1.0, s * 0.9, l - 0.07),
                (h, s, l),
                (h + 1.0, s * 1.1, l + 0.07),
                (h + 2.0, s * 1.2, l + 0.14),
                (h + 3.0, s * 1.3, l + 0.21),
            ],
        );
    }

    #[test]
    fn test_mid_tone_is_centered() {
        let input: Srgb = "#8a4578".parse().unwrap();
        let base = Hsl::from(input);
        let g = gradient("#8a4578");

        let hues: Vec<f64> = g.colors.iter().map(|c| c.hsl.h).collect();
        for (i, h) in hues.iter().enumerate() {
            let expected = (base.h + i as f64 - 2.0).rem_euclid(360.0);
            assert!((h - expected).abs() < 1e-9);
        }
        // lightness rises monotonically in the centered table
        for pair in g.colors.windows(2) {
            assert!(pair[0].hsl.l < pair[1].hsl.l);
        }
    }

    #[test]
    fn test_dark_input_becomes_first_step() {
        let g = gradient("#1a0a0a");
        let base = Hsl::from("#1a0a0a".parse::<Srgb>().unwrap());
        assert_eq!(position_state(base.l, STEP, LIGHTNESS_BOUNDS), -2);
        assert!((g.colors[0].hsl.l - base.l).abs() < 1e-12);
        assert!((g.colors[0].hsl.h - base.h).abs() < 1e-12);
    }

    #[test]
    fn test_light_input_becomes_last_step() {
        let g = gradient("#f5f5dc");
        let base = Hsl::from("#f5f5dc".parse::<Srgb>().unwrap());
        assert_eq!(position_state(base.l, STEP, LIGHTNESS_BOUNDS), 2);
        assert!((g.colors[4].hsl.l - base.l).abs() < 1e-12);
        assert!((g.colors[4].hsl.s - base.s).abs() < 1e-12);
    }

    #[test]
    fn test_hue_wraps_around_zero() {
        // pure red has hue 0, so the centered table reaches below zero
        let g = gradient("#e60000");
        assert!((g.colors[0].hsl.h - 358.0).abs() < 1e-9);
        assert!((g.colors[1].hsl.h - 359.0).abs() < 1e-9);
        assert_eq!(g.colors[2].hsl.h, 0.0);
    }

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(-1.0), 359.0);
        assert_eq!(wrap_hue(361.0), 1.0);
        assert_eq!(wrap_hue(360.0), 0.0);
        assert!(wrap_hue(-1e-300) < 360.0);
    }

    #[test]
    fn test_black_and_white_stay_in_range() {
        for hex in ["#000000", "#ffffff"] {
            for c in gradient(hex).colors {
                assert!((0.01..=0.99).contains(&c.hsl.l), "{hex}: {}", c.hsl.l);
                assert!((0.0..=1.0).contains(&c.hsl.s));
                assert!((0.0..360.0).contains(&c.hsl.h));
            }
        }
    }

    #[test]
    fn test_lab_matches_hex() {
        for c in gradient("#20b2aa").colors {
            let from_hex = Lab::from(c.hex.parse::<Srgb>().unwrap());
            // hex is rounded to 8 bits, lab is not
            assert!(c.lab.distance(&from_hex) < 0.01);
        }
    }
}
