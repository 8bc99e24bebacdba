//! Assembly of the color report served by `GET /colors/{hex}`.

use std::sync::Arc;

use color_core::{
    gradient, CatalogKind, CatalogRegistry, Hsl, Hsv, Lab, ParseColorError, Srgb,
};

use crate::models::{CatalogMatch, ColorReport, Conversions, NamedColor};

/// Parse the `{hex}` path segment: exactly six hex digits, no `#`.
///
/// The general color parser is more lenient (`#rgb`, `rgb(...)`); the route
/// only takes the one canonical form.
pub fn parse_path_hex(segment: &str) -> Result<Srgb, ParseColorError> {
    if !segment.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidHex(segment.to_string()));
    }
    if segment.len() != 6 {
        return Err(ParseColorError::InvalidLength(segment.len()));
    }
    segment.parse()
}

/// Builds [`ColorReport`]s against a shared registry
#[derive(Clone)]
pub struct ColorReporter {
    registry: Arc<CatalogRegistry>,
    names_per_report: usize,
}

impl ColorReporter {
    pub fn new(registry: Arc<CatalogRegistry>, names_per_report: usize) -> Self {
        Self {
            registry,
            names_per_report,
        }
    }

    pub fn report(&self, color: &Srgb) -> ColorReport {
        let lab = Lab::from(*color);

        let mono = gradient::synthesize(color)
            .colors
            .iter()
            .map(|derived| NamedColor {
                color: derived.hex.clone(),
                name: self.name_of(&derived.lab),
            })
            .collect();

        let names = self
            .registry
            .query(CatalogKind::Names, &lab, self.names_per_report)
            .into_iter()
            .map(|point| point.name.clone())
            .collect();

        ColorReport {
            base: NamedColor {
                color: color.to_hex(),
                name: self.name_of(&lab),
            },
            mono,
            names,
            conversions: Conversions {
                rgb: format_rgb(color),
                hsl: format_hsl(&Hsl::from(*color)),
                hsv: format_hsv(&Hsv::from(*color)),
                lab: format_lab(&lab),
                cmyk: format_cmyk(color),
                ral: self.nearest(CatalogKind::Ral, &lab),
                pan: self.nearest(CatalogKind::Pantone, &lab),
                ncs: self.nearest(CatalogKind::Ncs, &lab),
            },
        }
    }

    fn name_of(&self, lab: &Lab) -> Option<String> {
        self.registry.nearest_name(lab).map(str::to_string)
    }

    fn nearest(&self, kind: CatalogKind, lab: &Lab) -> Option<CatalogMatch> {
        self.registry.nearest(kind, lab).map(|m| CatalogMatch {
            name: m.point.name.clone(),
            lab: m.point.lab.into(),
            distance: m.distance,
        })
    }
}

pub fn format_rgb(color: &Srgb) -> String {
    let [r, g, b] = color.to_bytes();
    format!("rgb({r}, {g}, {b})")
}

pub fn format_hsl(hsl: &Hsl) -> String {
    format!("hsl({:.1}, {:.1}%, {:.1}%)", hsl.h, hsl.s * 100.0, hsl.l * 100.0)
}

pub fn format_hsv(hsv: &Hsv) -> String {
    format!("hsv({:.1}, {:.1}%, {:.1}%)", hsv.h, hsv.s * 100.0, hsv.v * 100.0)
}

pub fn format_lab(lab: &Lab) -> String {
    format!("lab({:.2}, {:.2}, {:.2})", lab.l, lab.a, lab.b)
}

/// Naive CMYK from the 8-bit channels. Pure black keeps C = M = Y = 100%.
pub fn format_cmyk(color: &Srgb) -> String {
    let [r, g, b] = color.to_bytes().map(|v| f64::from(v) / 255.0);
    let (mut c, mut m, mut y) = (1.0 - r, 1.0 - g, 1.0 - b);

    let min_cmy = c.min(m).min(y);
    let mut k = 1.0;
    if min_cmy < 1.0 {
        k = min_cmy;
        c = (c - k) / (1.0 - k);
        m = (m - k) / (1.0 - k);
        y = (y - k) / (1.0 - k);
    }

    format!(
        "cmyk({:.1}%, {:.1}%, {:.1}%, {:.1}%)",
        c * 100.0,
        m * 100.0,
        y * 100.0,
        k * 100.0
    )
}
